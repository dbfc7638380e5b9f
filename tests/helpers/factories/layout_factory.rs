use crate::schema::layout::{ColumnDesc, ColumnLayout};
use crate::schema::types::ColumnType;

pub struct LayoutFactory {
    columns: Vec<ColumnDesc>,
}

impl LayoutFactory {
    /// The two-column base layout most tests start from.
    pub fn new() -> Self {
        Self {
            columns: vec![
                ColumnDesc::new("id", ColumnType::Int32, false),
                ColumnDesc::new("name", ColumnType::String, true),
            ],
        }
    }

    pub fn empty() -> Self {
        Self {
            columns: Vec::new(),
        }
    }

    pub fn with(mut self, name: &str, ty: ColumnType, nullable: bool) -> Self {
        self.columns.push(ColumnDesc::new(name, ty, nullable));
        self
    }

    pub fn without(mut self, name: &str) -> Self {
        self.columns.retain(|c| c.name != name);
        self
    }

    pub fn create(self) -> ColumnLayout {
        ColumnLayout::new(self.columns)
    }
}
