use serde::{Deserialize, Serialize};

use crate::schema::types::ColumnType;

/// One column of a layout: name, declared type, nullability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDesc {
    pub name: String,
    pub ty: ColumnType,
    pub nullable: bool,
}

impl ColumnDesc {
    pub fn new(name: impl Into<String>, ty: ColumnType, nullable: bool) -> Self {
        Self {
            name: name.into(),
            ty,
            nullable,
        }
    }
}

/// Ordered, immutable description of a row's columns for one schema
/// revision. Within a table the column count doubles as the layout key.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ColumnLayout {
    columns: Vec<ColumnDesc>,
}

impl ColumnLayout {
    pub fn new(columns: Vec<ColumnDesc>) -> Self {
        Self { columns }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// The identity under which this layout is registered in a table's
    /// layout map. Column count, per the catalog's convention.
    pub fn layout_key(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[ColumnDesc] {
        &self.columns
    }

    pub fn get(&self, idx: usize) -> Option<&ColumnDesc> {
        self.columns.get(idx)
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }
}
