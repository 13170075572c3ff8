//! Response definitions
//!
//! Represents decoded response payloads handed back to the caller.

use super::Command;

/// A single decoded payload value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Raw integer field (any width, sign-extended)
    Int(i64),

    /// Integer field after a declared unit conversion
    Float(f64),

    /// One name from a `;`-separated ASCII payload
    Str(String),
}

impl Value {
    /// The integer content, if this is an unscaled field
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// The float content, if this field had a unit conversion applied
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// The string content, if this is a decoded name
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(v) => Some(v),
            _ => None,
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

/// A fully decoded response frame
///
/// Read-only result; the codec does not retain it.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedResponse {
    /// The command the frame answered
    pub command: Command,

    /// Decoded payload values, in layout order
    pub values: Vec<Value>,

    /// The size byte the frame declared (group count for variable-size
    /// commands, byte length otherwise)
    pub declared_size: u8,
}
