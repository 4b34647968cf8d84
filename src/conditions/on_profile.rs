use super::prelude::{Annotated, Evaluate};
use crate::context::EvaluationContext;
use crate::metadata::{AttributeValue, DeclarationMetadata};

/// Matches when the profile named by the `name` attribute is active.
#[derive(Clone, Copy, Debug, Default)]
pub struct Condition;

impl Evaluate for Condition {
    fn evaluate(&self, context: &EvaluationContext, metadata: &DeclarationMetadata) -> bool {
        let attributes = match metadata.annotation_attributes(self.annotation()) {
            Some(attributes) => attributes,
            None => return false,
        };
        match attributes.get("name").and_then(AttributeValue::as_text) {
            Some(name) => context.has_profile(name),
            None => {
                tracing::warn!("attribute \"name\" is missing or not a string");
                false
            }
        }
    }
}

impl Annotated for Condition {
    fn annotation(&self) -> &'static str {
        "on-profile"
    }
}

#[cfg(test)]
mod tests {
    use super::Condition;
    use crate::conditions::prelude::Evaluate;
    use crate::context::EvaluationContext;
    use crate::metadata::DeclarationMetadata;

    #[test]
    fn should_not_match_without_name_attribute() {
        let context = EvaluationContext::default().with_profile("demo");
        let metadata: DeclarationMetadata = toml::from_str("[on-profile]").unwrap();
        assert!(!Condition.evaluate(&context, &metadata));
    }
}
