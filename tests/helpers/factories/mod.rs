pub mod layout_factory;
pub mod remote_call_factory;
pub mod row_payload_factory;
pub mod table_meta_factory;

pub use layout_factory::LayoutFactory;
pub use remote_call_factory::FakeCall;
pub use row_payload_factory::RowPayloadFactory;
pub use table_meta_factory::TableMetaFactory;

#[cfg(test)]
mod row_payload_factory_test;
