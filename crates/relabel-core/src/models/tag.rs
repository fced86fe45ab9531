use std::fmt;
use std::str::FromStr;

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One BIO label, positionally aligned with the token list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BioTag {
    /// Token touched by no entity.
    Outside,
    /// First token of an entity of the given category.
    Begin(String),
    /// Subsequent token of the same entity.
    Inside(String),
}

impl BioTag {
    /// The category this tag carries, if any.
    pub fn category(&self) -> Option<&str> {
        match self {
            BioTag::Outside => None,
            BioTag::Begin(c) | BioTag::Inside(c) => Some(c),
        }
    }

    pub fn is_outside(&self) -> bool {
        matches!(self, BioTag::Outside)
    }
}

impl fmt::Display for BioTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BioTag::Outside => f.write_str("O"),
            BioTag::Begin(c) => write!(f, "B-{c}"),
            BioTag::Inside(c) => write!(f, "I-{c}"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("invalid BIO tag: {0:?}")]
pub struct ParseTagError(pub String);

impl FromStr for BioTag {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "O" {
            return Ok(BioTag::Outside);
        }
        match s.split_once('-') {
            Some(("B", category)) if !category.is_empty() => {
                Ok(BioTag::Begin(category.to_string()))
            }
            Some(("I", category)) if !category.is_empty() => {
                Ok(BioTag::Inside(category.to_string()))
            }
            _ => Err(ParseTagError(s.to_string())),
        }
    }
}

// Serialized as the plain string form ("O", "B-name", "I-name") so the
// emitted record matches the standard BIO file layout.
impl Serialize for BioTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BioTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(D::Error::custom)
    }
}
