//! Tool record and field accessors
//!
//! A ToolRecord wraps the raw JSON object exported by the CAM package. Only the
//! fields the naming rules read are given accessors; everything else is carried
//! through untouched, in its original key order.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{CamError, Result};
use crate::naming::format::{Measure, display_value};

/// One cutting-tool definition from a tool library
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToolRecord(Map<String, Value>);

impl ToolRecord {
    /// Build a record from an arbitrary JSON value, which must be an object
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Raw access to the underlying fields
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Label used in narration and error messages
    pub fn label(&self) -> String {
        self.0
            .get("description")
            .map(display_value)
            .unwrap_or_else(|| "<unnamed>".to_string())
    }

    /// The free-text description, stringified
    pub fn description(&self) -> Result<String> {
        self.field("description").map(display_value)
    }

    /// The `type` tag that selects a naming rule; `None` when not a string
    pub fn tool_type(&self) -> Result<Option<&str>> {
        self.tag_field("type")
    }

    /// The `tapered-type` discriminator of a tapered mill; `None` when not a string
    pub fn tapered_type(&self) -> Result<Option<&str>> {
        self.tag_field("tapered-type")
    }

    /// Body material code (`BMC`)
    pub fn material(&self) -> Result<String> {
        let value = self.field("BMC")?;
        self.scalar(value, "BMC")
    }

    /// Numeric geometry attribute, e.g. `DC` or `RE`
    pub fn geometry_measure(&self, key: &str) -> Result<Measure> {
        let path = format!("geometry.{}", key);
        let value = self.nested("geometry", key)?;
        Measure::from_value(value).ok_or_else(|| self.invalid(&path, "number"))
    }

    /// Code-like geometry attribute, e.g. `SC` or `TC`, stringified
    pub fn geometry_code(&self, key: &str) -> Result<String> {
        let path = format!("geometry.{}", key);
        let value = self.nested("geometry", key)?;
        self.scalar(value, &path)
    }

    /// Numeric holder attribute, e.g. `W` or `CW`
    pub fn holder_measure(&self, key: &str) -> Result<Measure> {
        let path = format!("holder.{}", key);
        let value = self.nested("holder", key)?;
        Measure::from_value(value).ok_or_else(|| self.invalid(&path, "number"))
    }

    /// Code-like holder attribute, e.g. `THSC`, stringified
    pub fn holder_code(&self, key: &str) -> Result<String> {
        let path = format!("holder.{}", key);
        let value = self.nested("holder", key)?;
        self.scalar(value, &path)
    }

    /// Deep equality where numbers compare by value, so `6` and `6.0` are equal
    pub fn same_as(&self, other: &ToolRecord) -> bool {
        objects_equal(&self.0, &other.0)
    }

    /// Copy of this record with only `description` replaced
    pub fn with_description(&self, description: impl Into<String>) -> Self {
        let mut fields = self.0.clone();
        fields.insert("description".to_string(), Value::String(description.into()));
        Self(fields)
    }

    fn field(&self, key: &str) -> Result<&Value> {
        self.0.get(key).ok_or_else(|| self.missing(key))
    }

    fn tag_field(&self, key: &str) -> Result<Option<&str>> {
        Ok(self.field(key)?.as_str())
    }

    fn nested(&self, section: &str, key: &str) -> Result<&Value> {
        let table = self
            .field(section)?
            .as_object()
            .ok_or_else(|| self.invalid(section, "object"))?;
        table
            .get(key)
            .ok_or_else(|| self.missing(&format!("{}.{}", section, key)))
    }

    fn scalar(&self, value: &Value, path: &str) -> Result<String> {
        match value {
            Value::Array(_) | Value::Object(_) => Err(self.invalid(path, "string or number")),
            other => Ok(display_value(other)),
        }
    }

    fn missing(&self, field: &str) -> CamError {
        CamError::MissingField {
            record: self.label(),
            field: field.to_string(),
        }
    }

    fn invalid(&self, field: &str, expected: &'static str) -> CamError {
        CamError::InvalidField {
            record: self.label(),
            field: field.to_string(),
            expected,
        }
    }
}

fn objects_equal(a: &Map<String, Value>, b: &Map<String, Value>) -> bool {
    a.len() == b.len()
        && a
            .iter()
            .all(|(key, value)| b.get(key).is_some_and(|other| values_equal(value, other)))
}

fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => match (x.as_i64(), y.as_i64()) {
            (Some(i), Some(j)) => i == j,
            _ => x.as_f64() == y.as_f64(),
        },
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(l, r)| values_equal(l, r))
        }
        (Value::Object(x), Value::Object(y)) => objects_equal(x, y),
        _ => a == b,
    }
}
