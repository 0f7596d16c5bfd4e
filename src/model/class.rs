use serde::{Deserialize, Serialize};

/// A named grouping of business objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Class {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub objects: Vec<BusinessObject>,
}

/// A field-like concept within a class, optionally backed by a SQL expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessObject {
    pub name: String,
    /// Free-form tag, e.g. "dimension" or "measure".
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sql: Option<String>,
}
