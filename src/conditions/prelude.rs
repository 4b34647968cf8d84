use crate::context::EvaluationContext;
use crate::metadata::DeclarationMetadata;

/// Produces the base outcome of a condition for a single declaration.
#[enum_dispatch::enum_dispatch]
pub trait Evaluate {
    fn evaluate(&self, context: &EvaluationContext, metadata: &DeclarationMetadata) -> bool;
}

/// Statically declares the name of the annotation that triggers a condition
/// and carries its attributes.
#[enum_dispatch::enum_dispatch]
pub trait Annotated {
    fn annotation(&self) -> &'static str;
}
