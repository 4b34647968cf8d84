use self::negatable::Negatable;
use self::prelude::{Annotated, Evaluate};
use crate::context::EvaluationContext;
use crate::metadata::DeclarationMetadata;

pub mod negatable;
pub mod prelude;

mod always;
mod on_profile;
mod on_property;

#[derive(Clone, Debug)]
#[enum_dispatch::enum_dispatch(Evaluate, Annotated)]
pub enum Condition {
    Always(self::always::Condition),
    OnProfile(self::on_profile::Condition),
    OnProperty(self::on_property::Condition),
}

/// Every known condition, wrapped so that any triggering annotation can carry
/// a `negating` attribute.
pub fn built_in() -> Vec<Negatable<Condition>> {
    vec![
        Negatable::new(Condition::Always(self::always::Condition)),
        Negatable::new(Condition::OnProfile(self::on_profile::Condition)),
        Negatable::new(Condition::OnProperty(self::on_property::Condition)),
    ]
}
