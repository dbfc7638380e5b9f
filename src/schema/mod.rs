pub mod layout;
pub mod projection;
pub mod table;
pub mod types;

pub use layout::{ColumnDesc, ColumnLayout};
pub use projection::Projection;
pub use table::{BASE_SCHEMA_VERSION, Compression, TableMeta, WireFormat};
pub use types::{CellValue, ColumnType};

#[cfg(test)]
mod types_test;
