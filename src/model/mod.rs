//! Universe model types.

pub mod class;
pub mod table;

pub use class::{BusinessObject, Class};
pub use table::{Join, Table};

use serde::{Deserialize, Serialize};

/// A sanitized Business Objects universe.
///
/// All four fields are always present after sanitization, even when the
/// source document omitted them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Universe {
    pub metadata: Metadata,
    pub classes: Vec<Class>,
    pub tables: Vec<Table>,
    pub joins: Vec<Join>,
}

/// Universe-level metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Entity counts for the summary view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub classes: usize,
    pub objects: usize,
    pub tables: usize,
    pub joins: usize,
}

impl Universe {
    /// Count classes, objects across all classes, tables, and joins.
    pub fn summary(&self) -> Summary {
        Summary {
            classes: self.classes.len(),
            objects: self.classes.iter().map(|class| class.objects.len()).sum(),
            tables: self.tables.len(),
            joins: self.joins.len(),
        }
    }
}
