use super::prelude::{Annotated, Evaluate};
use crate::context::EvaluationContext;
use crate::metadata::{AttributeValue, DeclarationMetadata};

/// Attribute any annotation can carry to invert the outcome of its condition.
pub const NEGATING_ATTRIBUTE: &str = "negating";

/// Wraps a condition and inverts its outcome when the triggering annotation
/// carries `negating = true`.
#[derive(Clone, Debug)]
pub struct Negatable<C>(C);

impl<C> Negatable<C> {
    pub fn new(inner: C) -> Self {
        Self(inner)
    }
}

impl<C: Annotated> Annotated for Negatable<C> {
    fn annotation(&self) -> &'static str {
        self.0.annotation()
    }
}

impl<C: Evaluate + Annotated> Evaluate for Negatable<C> {
    fn evaluate(&self, context: &EvaluationContext, metadata: &DeclarationMetadata) -> bool {
        let result = self.0.evaluate(context, metadata);
        let name = self.0.annotation();
        assert!(
            !name.is_empty(),
            "annotation identifier of the wrapped condition should be present"
        );
        match metadata
            .annotation_attributes(name)
            .and_then(|attributes| attributes.get(NEGATING_ATTRIBUTE))
            .and_then(AttributeValue::as_boolean)
        {
            Some(true) => !result,
            _ => result,
        }
    }
}
