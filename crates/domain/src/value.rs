//! Named device values and their metadata.
//!
//! A device in the host directory exposes any number of named values. Each
//! value comes with a [`ValueMeta`] describing its inclusive numeric range
//! and its units (a physical unit such as `C`, or a channel layout such as
//! `#RRGGBB` for colors).

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single value read from or written to a device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    /// A reading carrying its own units, e.g. `{"value": 21.5, "units": "C"}`.
    Measured { value: Box<Value>, units: String },
}

impl Value {
    /// Build a measurement.
    #[must_use]
    pub fn measured(value: impl Into<Value>, units: impl Into<String>) -> Self {
        Self::Measured {
            value: Box::new(value.into()),
            units: units.into(),
        }
    }

    /// Build a numeric value, preferring [`Int`](Self::Int) for whole numbers.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn number(value: f64) -> Self {
        if value.fract() == 0.0 && value.abs() < 9.0e15 {
            Self::Int(value as i64)
        } else {
            Self::Float(value)
        }
    }

    /// Numeric view of the value.
    ///
    /// Numeric strings are parsed, booleans count as `1`/`0` and a
    /// measurement yields its inner value.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Self::Int(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            Self::String(s) => s.trim().parse().ok(),
            Self::Measured { value, .. } => value.as_f64(),
        }
    }

    /// Whether the value counts as "set": `false`, zero and `""` do not.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Int(i) => *i != 0,
            Self::Float(f) => *f != 0.0 && !f.is_nan(),
            Self::String(s) => !s.is_empty(),
            Self::Measured { .. } => true,
        }
    }

    /// String view, only for [`String`](Self::String) values.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => b.fmt(f),
            Self::Int(i) => i.fmt(f),
            Self::Float(v) => v.fmt(f),
            Self::String(s) => f.write_str(s),
            Self::Measured { value, units } => write!(f, "{value} {units}"),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

/// Inclusive numeric range `[min, max]`.
///
/// Only constructible with finite bounds and `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 2]", into = "[f64; 2]")]
pub struct ValueRange {
    min: f64,
    max: f64,
}

impl ValueRange {
    /// Create a range, returning `None` for unusable bounds.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Option<Self> {
        (min.is_finite() && max.is_finite() && min <= max).then_some(Self { min, max })
    }

    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Clamp `value` into the range.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

impl TryFrom<[f64; 2]> for ValueRange {
    type Error = String;

    fn try_from([min, max]: [f64; 2]) -> Result<Self, Self::Error> {
        Self::new(min, max).ok_or_else(|| format!("invalid range [{min}, {max}]"))
    }
}

impl From<ValueRange> for [f64; 2] {
    fn from(range: ValueRange) -> Self {
        [range.min, range.max]
    }
}

/// Metadata attached to a named value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValueMeta {
    pub range: Option<ValueRange>,
    pub units: Option<String>,
}

impl ValueMeta {
    /// Metadata with only a range.
    #[must_use]
    pub fn ranged(min: f64, max: f64) -> Self {
        Self {
            range: ValueRange::new(min, max),
            units: None,
        }
    }

    /// Metadata with only units.
    #[must_use]
    pub fn with_units(units: impl Into<String>) -> Self {
        Self {
            range: None,
            units: Some(units.into()),
        }
    }
}
