use indexmap::IndexMap;

use crate::prelude::CowStr;

mod attribute;

pub use self::attribute::{AttributeBag, AttributeValue};

/// Annotations attached to a component declaration, keyed by annotation name.
#[derive(Clone, Debug, Default, serde::Deserialize)]
#[serde(transparent)]
pub struct DeclarationMetadata(IndexMap<CowStr, AttributeBag>);

impl DeclarationMetadata {
    pub fn annotation_attributes(&self, name: &str) -> Option<&AttributeBag> {
        self.0.get(name)
    }

    pub fn annotations(&self) -> impl Iterator<Item = (&str, &AttributeBag)> + '_ {
        self.0.iter().map(|(name, attributes)| (name.as_ref(), attributes))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
impl DeclarationMetadata {
    pub fn with_annotation<N: Into<CowStr>>(mut self, name: N, attributes: AttributeBag) -> Self {
        self.0.insert(name.into(), attributes);
        self
    }
}
