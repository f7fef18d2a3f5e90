//! Typed access to tool call arguments.

use crate::error::RazorbackError;

/// Wrapper around tool call arguments providing typed extraction.
#[derive(Debug, Clone)]
pub struct ToolArguments {
    value: serde_json::Value,
}

impl ToolArguments {
    pub fn new(value: serde_json::Value) -> Self {
        Self { value }
    }

    /// Get the raw JSON value.
    pub fn raw(&self) -> &serde_json::Value {
        &self.value
    }

    /// Get a string argument by key.
    pub fn get_str(&self, key: &str) -> Result<&str, RazorbackError> {
        self.value
            .get(key)
            .and_then(|v| v.as_str())
            .ok_or_else(|| RazorbackError::InvalidArgument(format!("Missing string argument: {key}")))
    }

    /// Get a numeric argument by key.
    pub fn get_f64(&self, key: &str) -> Result<f64, RazorbackError> {
        self.value
            .get(key)
            .and_then(|v| v.as_f64())
            .ok_or_else(|| RazorbackError::InvalidArgument(format!("Missing numeric argument: {key}")))
    }

    /// Deserialize the entire arguments into a typed struct.
    pub fn deserialize<T: serde::de::DeserializeOwned>(&self) -> Result<T, RazorbackError> {
        serde_json::from_value(self.value.clone()).map_err(|e| {
            RazorbackError::InvalidArgument(format!("Failed to deserialize arguments: {e}"))
        })
    }
}
