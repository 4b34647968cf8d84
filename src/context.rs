use indexmap::IndexMap;

use crate::prelude::{CowStr, StringOrEnv};

#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct Config {
    #[serde(default)]
    properties: IndexMap<String, StringOrEnv>,
    #[serde(default)]
    profiles: Vec<String>,
}

impl Config {
    pub fn build(self) -> EvaluationContext {
        EvaluationContext {
            properties: self
                .properties
                .into_iter()
                .filter_map(|(name, value)| {
                    value
                        .into_string()
                        .map(|value| (CowStr::Owned(name), CowStr::Owned(value)))
                })
                .collect(),
            profiles: self.profiles.into_iter().map(CowStr::Owned).collect(),
        }
    }
}

/// Snapshot the conditions are evaluated against, built once and read-only
/// afterwards.
#[derive(Clone, Debug, Default)]
pub struct EvaluationContext {
    properties: IndexMap<CowStr, CowStr>,
    profiles: Vec<CowStr>,
}

impl EvaluationContext {
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(|value| value.as_ref())
    }

    pub fn has_profile(&self, name: &str) -> bool {
        self.profiles.iter().any(|profile| profile == name)
    }
}

#[cfg(test)]
impl EvaluationContext {
    pub fn with_property<N: Into<CowStr>, V: Into<CowStr>>(mut self, name: N, value: V) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    pub fn with_profile<N: Into<CowStr>>(mut self, name: N) -> Self {
        self.profiles.push(name.into());
        self
    }
}
