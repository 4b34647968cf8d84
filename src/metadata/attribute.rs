use indexmap::IndexMap;

use crate::prelude::CowStr;

pub type AttributeBag = IndexMap<CowStr, AttributeValue>;

#[derive(Clone, Debug, serde::Deserialize, derive_more::From)]
#[serde(untagged)]
pub enum AttributeValue {
    Text(CowStr),
    UInteger(u64),
    Integer(i64),
    Float(f64),
    Boolean(bool),
}

impl AttributeValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(inner) => Some(inner.as_ref()),
            _ => None,
        }
    }

    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(inner) => Some(*inner),
            _ => None,
        }
    }
}

#[cfg(test)]
impl AttributeValue {
    pub fn as_uint(&self) -> Option<u64> {
        match self {
            Self::UInteger(inner) => Some(*inner),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Integer(inner) => Some(*inner),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(inner) => Some(*inner),
            _ => None,
        }
    }
}

impl From<&'static str> for AttributeValue {
    fn from(value: &'static str) -> Self {
        Self::Text(CowStr::Borrowed(value))
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::Text(CowStr::Owned(value))
    }
}
