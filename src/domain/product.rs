use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::UploadedImageUrl;

/// A product as the server returns it. The admin panel never interprets its
/// fields beyond the identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductRecord(Value);

impl ProductRecord {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Server-assigned identifier, read from `_id` or `id`.
    pub fn id(&self) -> Option<&str> {
        self.0
            .get("_id")
            .or_else(|| self.0.get("id"))
            .and_then(Value::as_str)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

/// Field values of the add/edit product form, sent as a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductForm(Map<String, Value>);

impl ProductForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Stores the URL returned by the image upload under `image`.
    pub fn with_image(self, url: &UploadedImageUrl) -> Self {
        self.field("image", url.as_str())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
}

impl From<Map<String, Value>> for ProductForm {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}
