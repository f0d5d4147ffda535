//! Value formatting for generated tool names.
//!
//! Names are built from raw JSON geometry values. Integers print as integers,
//! floats print in shortest round-trip form but always keep a fractional digit
//! (`6.0`, never `6` or `6.00`).

use std::fmt;

use serde_json::{Number, Value};

/// A numeric geometry or holder value, keeping its integer/float identity
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Measure {
    Int(i64),
    Float(f64),
}

impl Measure {
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => Some(Self::from_number(n)),
            _ => None,
        }
    }

    pub fn from_number(n: &Number) -> Self {
        match n.as_i64() {
            Some(i) => Self::Int(i),
            None => Self::Float(n.as_f64().unwrap_or(f64::NAN)),
        }
    }

    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(i) => i as f64,
            Self::Float(f) => f,
        }
    }

    /// Round to `digits` decimal places; integers are already exact
    pub fn round(self, digits: usize) -> Self {
        match self {
            Self::Int(_) => self,
            Self::Float(f) => Self::Float(round_to(f, digits)),
        }
    }

    /// `self + other / 2`, always real-valued
    pub fn plus_half(self, other: Measure) -> Self {
        Self::Float(self.as_f64() + other.as_f64() / 2.0)
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{}", i),
            Self::Float(x) => write!(f, "{}", format_float(*x)),
        }
    }
}

/// Round through the decimal expansion so that e.g. 5.996 becomes exactly 6.0
fn round_to(value: f64, digits: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{:.*}", digits, value).parse().unwrap_or(value)
}

/// Shortest round-trip form with a mandatory fractional part
pub fn format_float(value: f64) -> String {
    format!("{:?}", value)
}

/// Stringify a scalar JSON value for insertion into a name or table lookup
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => Measure::from_number(n).to_string(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Null => "None".to_string(),
        other => other.to_string(),
    }
}
