use super::prelude::{Annotated, Evaluate};
use crate::context::EvaluationContext;
use crate::metadata::DeclarationMetadata;

/// Matches every declaration. Combined with `negating = true` it becomes the
/// explicit way of switching a component off.
#[derive(Clone, Copy, Debug, Default)]
pub struct Condition;

impl Evaluate for Condition {
    fn evaluate(&self, _: &EvaluationContext, _: &DeclarationMetadata) -> bool {
        true
    }
}

impl Annotated for Condition {
    fn annotation(&self) -> &'static str {
        "always"
    }
}
