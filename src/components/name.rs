use std::str::FromStr;

use super::validate_name;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComponentName(String);

impl FromStr for ComponentName {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if validate_name(value) {
            Ok(Self(value.to_owned()))
        } else {
            Err("invalid component name format")
        }
    }
}

#[cfg(test)]
impl ComponentName {
    pub fn new<T: Into<String>>(value: T) -> Self {
        Self(value.into())
    }
}

impl AsRef<str> for ComponentName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Display for ComponentName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl<'de> serde::de::Deserialize<'de> for ComponentName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::from_str(&value).map_err(serde::de::Error::custom)
    }
}
