pub type CowStr = std::borrow::Cow<'static, str>;

#[derive(Clone, Debug, serde::Deserialize)]
#[serde(untagged)]
pub enum StringOrEnv {
    String(String),
    EnvironmentVariable {
        key: String,
        default_value: Option<String>,
    },
}

impl StringOrEnv {
    pub fn into_string(self) -> Option<String> {
        match self {
            Self::String(inner) => Some(inner),
            Self::EnvironmentVariable { key, default_value } => {
                std::env::var(key).ok().or(default_value)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::StringOrEnv;

    #[derive(Debug, serde::Deserialize)]
    struct Example {
        value: StringOrEnv,
    }

    #[test]
    fn should_deserialize_plain_string() {
        let example: Example = toml::from_str(r#"value = "hello""#).unwrap();
        assert_eq!(Some("hello".to_owned()), example.value.into_string());
    }

    #[test]
    fn should_fallback_to_default_value() {
        let example: Example = toml::from_str(
            r#"value = { key = "TINY_ACTIVATOR_UNSET_VARIABLE", default_value = "fallback" }"#,
        )
        .unwrap();
        assert_eq!(Some("fallback".to_owned()), example.value.into_string());
    }

    #[test]
    fn should_resolve_nothing_without_default_value() {
        let example: Example =
            toml::from_str(r#"value = { key = "TINY_ACTIVATOR_UNSET_VARIABLE" }"#).unwrap();
        assert_eq!(None, example.value.into_string());
    }
}
