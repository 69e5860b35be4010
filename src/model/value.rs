use std::fmt;

use crate::foundation::format::write_number;

/// A keyframe or filter-attribute value: either a number or a raw string.
///
/// Strings (colors, keywords) are never interpolated; they switch discretely
/// at keyframe boundaries.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum AnimValue {
    /// Numeric value.
    Number(f64),
    /// Any non-numeric value, kept verbatim.
    Text(String),
}

impl AnimValue {
    /// Numeric payload, if this is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            Self::Text(_) => None,
        }
    }
}

impl Default for AnimValue {
    fn default() -> Self {
        Self::Number(0.0)
    }
}

impl From<f64> for AnimValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for AnimValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

impl From<String> for AnimValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl fmt::Display for AnimValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(v) => {
                let mut s = String::new();
                write_number(&mut s, *v);
                f.write_str(&s)
            }
            Self::Text(s) => f.write_str(s),
        }
    }
}
