//! Field path parsing and display
//!
//! A `FieldPath` is the ordered location of a value inside a nested tree,
//! written as dot-separated segments (`SecurityConfig.VpcConfig.Subnets`).
//! Segments are stable identifiers, not display strings.

use crate::error::SchemaError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordered location of a value inside a nested tree.
///
/// Always non-empty; every segment is non-empty. Paths order and hash by
/// their segment sequence so they can key maps and sort deterministically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FieldPath {
    segments: Vec<String>,
}

impl FieldPath {
    /// Parse a dotted path string into a `FieldPath`.
    pub fn parse(input: &str) -> Result<Self, SchemaError> {
        if input.is_empty() {
            return Err(SchemaError::EmptyPath);
        }
        let segments: Vec<String> = input.split('.').map(str::to_string).collect();
        if segments.iter().any(String::is_empty) {
            return Err(SchemaError::EmptySegment {
                path: input.to_string(),
            });
        }
        Ok(Self { segments })
    }

    /// Build a path from pre-split segments.
    pub fn from_segments<I, S>(segments: I) -> Result<Self, SchemaError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        if segments.is_empty() {
            return Err(SchemaError::EmptyPath);
        }
        if segments.iter().any(String::is_empty) {
            return Err(SchemaError::EmptySegment {
                path: segments.join("."),
            });
        }
        Ok(Self { segments })
    }

    /// The path's segments, in root-to-leaf order.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of segments.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// The final segment (the leaf name).
    pub fn leaf(&self) -> &str {
        // Invariant: segments is non-empty.
        &self.segments[self.segments.len() - 1]
    }

    /// Whether `self` is a strict prefix of `other`.
    pub fn is_prefix_of(&self, other: &FieldPath) -> bool {
        self.segments.len() < other.segments.len()
            && other.segments[..self.segments.len()] == self.segments[..]
    }

    /// The canonical dotted rendering, also used as the output name when
    /// flattening.
    pub fn dotted(&self) -> String {
        self.segments.join(".")
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dotted())
    }
}

impl FromStr for FieldPath {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldPath::parse(s)
    }
}

impl TryFrom<String> for FieldPath {
    type Error = SchemaError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        FieldPath::parse(&value)
    }
}

impl From<FieldPath> for String {
    fn from(path: FieldPath) -> Self {
        path.dotted()
    }
}
