// SPDX-License-Identifier: MIT OR Apache-2.0
//! Property values pre-formatted as configuration-text literals.

use indexmap::IndexMap;
use std::fmt;

/// An ordered key -> literal map for one exported node
pub type Properties = IndexMap<String, PropertyValue>;

/// A value as it appears in the emitted configuration text.
///
/// `Display` is the contract: the external engine parses these literals
/// byte-for-byte, so formatting is fixed here and nowhere else. Booleans
/// are exported as `0`/`1` integers; floats always carry a decimal point
/// so the consumer sees a stable numeric type.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    /// Integer literal
    Int(i64),
    /// Float literal
    Float(f64),
    /// Quoted string literal
    Str(String),
    /// Bracketed integer list
    IntVec(Vec<i64>),
    /// Bracketed float list
    FloatVec(Vec<f64>),
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        Self::Int(i64::from(value))
    }
}

fn write_float(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value.is_finite() && value.fract() == 0.0 {
        write!(f, "{value:.1}")
    } else {
        write!(f, "{value}")
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    write!(f, "\"")?;
    for c in value.chars() {
        match c {
            '"' => write!(f, "\\\"")?,
            '\\' => write!(f, "\\\\")?,
            _ => write!(f, "{c}")?,
        }
    }
    write!(f, "\"")
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write_float(f, *value),
            Self::Str(value) => write_quoted(f, value),
            Self::IntVec(values) => {
                write!(f, "[")?;
                for (index, value) in values.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{value}")?;
                }
                write!(f, "]")
            }
            Self::FloatVec(values) => {
                write!(f, "[")?;
                for (index, value) in values.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write_float(f, *value)?;
                }
                write!(f, "]")
            }
        }
    }
}
