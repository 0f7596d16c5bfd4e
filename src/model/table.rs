use serde::{Deserialize, Serialize};

/// A physical data-source table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A named relationship between two tables.
///
/// `from` and `to` are table names, not validated against the universe's
/// table list: a join referencing unknown tables is kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Join {
    pub name: String,
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub to: String,
    /// Join predicate text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
}
