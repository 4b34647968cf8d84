use std::io::{Error, ErrorKind, Result as IOResult};
use std::path::Path;

use indexmap::{IndexMap, IndexSet};

use self::report::{ActivationReport, ComponentOutcome, ConditionOutcome};
use crate::components::name::ComponentName;
use crate::conditions::prelude::{Annotated, Evaluate};
use crate::metadata::DeclarationMetadata;

pub mod report;

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("unknown condition annotation {annotation:?} on component {component}")]
    UnknownAnnotation {
        component: ComponentName,
        annotation: String,
    },
}

#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct ComponentConfig {
    /// Conditions guarding the component, keyed by annotation name.
    #[serde(default)]
    conditions: DeclarationMetadata,
}

#[derive(Debug, Default, serde::Deserialize)]
pub struct Config {
    #[serde(default)]
    context: crate::context::Config,
    #[serde(default)]
    components: IndexMap<ComponentName, ComponentConfig>,
}

impl Config {
    pub fn from_path<P: AsRef<Path>>(path: P) -> IOResult<Self> {
        let file = std::fs::read_to_string(path)?;
        toml::de::from_str(&file).map_err(|error| Error::new(ErrorKind::InvalidData, error))
    }

    pub fn build(self) -> Result<(Registry, ActivationReport), BuildError> {
        let context = self.context.build();
        let conditions = crate::conditions::built_in();
        let mut components = IndexSet::with_capacity(self.components.len());
        let mut report = ActivationReport::default();

        for (name, component) in self.components.into_iter() {
            if component.conditions.is_empty() {
                tracing::debug!(component = name.as_ref(), "component has no condition");
            }
            let mut outcomes = Vec::with_capacity(component.conditions.len());
            for (annotation, _) in component.conditions.annotations() {
                let condition = conditions
                    .iter()
                    .find(|condition| condition.annotation() == annotation);
                let condition = match condition {
                    Some(condition) => condition,
                    None => {
                        return Err(BuildError::UnknownAnnotation {
                            component: name,
                            annotation: annotation.to_owned(),
                        })
                    }
                };
                outcomes.push(ConditionOutcome {
                    annotation: condition.annotation(),
                    matched: condition.evaluate(&context, &component.conditions),
                });
            }
            let activated = outcomes.iter().all(|outcome| outcome.matched);
            if activated {
                tracing::info!(component = name.as_ref(), "component activated");
                components.insert(name.clone());
            } else {
                tracing::info!(component = name.as_ref(), "component skipped");
            }
            report.push(ComponentOutcome {
                component: name,
                activated,
                conditions: outcomes,
            });
        }

        Ok((Registry { components }, report))
    }
}

/// Components that survived the filtering pass, in declaration order.
#[derive(Debug)]
pub struct Registry {
    components: IndexSet<ComponentName>,
}

impl Registry {
    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn components(&self) -> impl Iterator<Item = &ComponentName> {
        self.components.iter()
    }
}

#[cfg(test)]
impl Registry {
    pub fn is_active(&self, name: &str) -> bool {
        self.components.iter().any(|component| component.as_ref() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::{ActivationReport, BuildError, Config, Registry};

    fn build(config: &str) -> (Registry, ActivationReport) {
        toml::from_str::<Config>(config).unwrap().build().unwrap()
    }

    #[test]
    fn should_activate_component_without_conditions() {
        let (registry, report) = build("[components.cache]");
        assert!(registry.is_active("cache"));
        assert_eq!(1, report.entries().len());
        assert!(report.entries()[0].conditions.is_empty());
    }

    #[test]
    fn should_activate_component_with_always_condition() {
        let (registry, _) = build("[components.cache.conditions.always]");
        assert!(registry.is_active("cache"));
    }

    #[test]
    fn should_skip_component_with_negated_always_condition() {
        let (registry, report) = build(
            r#"
[components.cache.conditions.always]
negating = true
"#,
        );
        assert!(!registry.is_active("cache"));
        assert_eq!(0, registry.len());
        assert!(!report.entries()[0].activated);
    }

    #[test]
    fn should_activate_component_with_negated_missing_property() {
        let (registry, _) = build(
            r#"
[components.cache.conditions.on-property]
name = "cache.disabled"
negating = true
"#,
        );
        assert!(registry.is_active("cache"));
    }

    #[test]
    fn should_evaluate_conditions_against_the_context() {
        let (registry, _) = build(
            r#"
[context]
profiles = ["demo"]

[context.properties]
cache = "enabled"

[components.cache.conditions.on-property]
name = "cache"
value = "enabled"

[components.server.conditions.on-profile]
name = "production"

[components.debug-endpoint.conditions.on-profile]
name = "demo"
"#,
        );
        assert!(registry.is_active("cache"));
        assert!(!registry.is_active("server"));
        assert!(registry.is_active("debug-endpoint"));
    }

    #[test]
    fn should_combine_conditions_on_a_single_component() {
        let (registry, report) = build(
            r#"
[context]
profiles = ["demo"]

[components.cache.conditions.always]
[components.cache.conditions.on-profile]
name = "production"
"#,
        );
        assert!(!registry.is_active("cache"));
        assert_eq!(2, report.entries()[0].conditions.len());
    }

    #[test]
    fn should_break_the_build_on_unknown_annotation() {
        let error = toml::from_str::<Config>(
            r#"
[components.cache.conditions.on-mystery]
name = "cache"
"#,
        )
        .unwrap()
        .build()
        .unwrap_err();
        assert!(matches!(
            error,
            BuildError::UnknownAnnotation {
                component: _,
                annotation: _
            }
        ));
        assert_eq!(
            "unknown condition annotation \"on-mystery\" on component cache",
            error.to_string()
        );
    }
}
