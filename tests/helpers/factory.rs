pub use super::factories::{FakeCall, LayoutFactory, RowPayloadFactory, TableMetaFactory};

pub struct Factory;

impl Factory {
    pub fn layout() -> LayoutFactory {
        LayoutFactory::new()
    }

    pub fn table() -> TableMetaFactory {
        TableMetaFactory::new()
    }

    pub fn payload() -> RowPayloadFactory {
        RowPayloadFactory::new()
    }
}
