use super::prelude::{Annotated, Evaluate};
use crate::context::EvaluationContext;
use crate::metadata::{AttributeBag, AttributeValue, DeclarationMetadata};

/// Matches when the context property named by the `name` attribute is set,
/// and equals the `value` attribute when one is provided.
#[derive(Clone, Copy, Debug, Default)]
pub struct Condition;

impl Condition {
    fn matches(&self, context: &EvaluationContext, attributes: &AttributeBag) -> bool {
        let name = match attributes.get("name").and_then(AttributeValue::as_text) {
            Some(name) => name,
            None => {
                tracing::warn!("attribute \"name\" is missing or not a string");
                return false;
            }
        };
        match (
            context.property(name),
            attributes.get("value").and_then(AttributeValue::as_text),
        ) {
            (Some(found), Some(expected)) => found == expected,
            (Some(_), None) => true,
            (None, _) => false,
        }
    }
}

impl Evaluate for Condition {
    fn evaluate(&self, context: &EvaluationContext, metadata: &DeclarationMetadata) -> bool {
        metadata
            .annotation_attributes(self.annotation())
            .map_or(false, |attributes| self.matches(context, attributes))
    }
}

impl Annotated for Condition {
    fn annotation(&self) -> &'static str {
        "on-property"
    }
}
