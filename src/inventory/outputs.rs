//! Parsing of `terraform output -json` documents.

use super::error::InventoryError;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// One entry of `terraform output -json`. `type` and `sensitive` are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputEntry {
    #[serde(default)]
    pub value: Option<Value>,
}

/// The full outputs document, keyed by output name.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct TerraformOutputs(BTreeMap<String, OutputEntry>);

impl TerraformOutputs {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Address held by output `key`, if any.
    ///
    /// Lists yield their first element, strings themselves, and any other
    /// value its JSON text. Missing keys, nulls, empty lists and blank
    /// strings yield `None`.
    pub fn extract_ip(&self, key: &str) -> Option<String> {
        let value = self.0.get(key)?.value.as_ref()?;

        let ip = match value {
            Value::Null => return None,
            Value::Array(items) => scalar_text(items.first()?)?,
            other => scalar_text(other)?,
        };

        let ip = ip.trim();
        (!ip.is_empty()).then(|| ip.to_string())
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Parse the JSON printed by `terraform output -json`.
pub fn parse_outputs(body: &str) -> Result<TerraformOutputs, InventoryError> {
    serde_json::from_str(body).map_err(|e| InventoryError::Parse(e.to_string()))
}
