use crate::schema::layout::ColumnLayout;
use crate::schema::table::{Compression, TableMeta, WireFormat};
use crate::test_helpers::factories::LayoutFactory;

pub struct TableMetaFactory {
    name: String,
    format: WireFormat,
    schema: ColumnLayout,
    compression: Compression,
    current_version: u16,
    revisions: Vec<(u16, ColumnLayout)>,
    aliases: Vec<(u16, usize)>,
}

impl TableMetaFactory {
    pub fn new() -> Self {
        Self {
            name: "users".to_string(),
            format: WireFormat::FixedLayout,
            schema: LayoutFactory::new().create(),
            compression: Compression::None,
            current_version: 1,
            revisions: Vec::new(),
            aliases: Vec::new(),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn format(mut self, format: WireFormat) -> Self {
        self.format = format;
        self
    }

    pub fn schema(mut self, schema: ColumnLayout) -> Self {
        self.schema = schema;
        self
    }

    pub fn compression(mut self, compression: Compression) -> Self {
        self.compression = compression;
        self
    }

    pub fn current_version(mut self, version: u16) -> Self {
        self.current_version = version;
        self
    }

    pub fn revision(mut self, version: u16, layout: ColumnLayout) -> Self {
        self.revisions.push((version, layout));
        self
    }

    /// A version-map entry pointing at a layout key with nothing (or
    /// something else) registered under it: version aliasing, or a
    /// desynchronized catalog.
    pub fn version_alias(mut self, version: u16, key: usize) -> Self {
        self.aliases.push((version, key));
        self
    }

    pub fn create(self) -> TableMeta {
        let mut table = TableMeta::new(self.name, self.format, self.schema)
            .with_compression(self.compression)
            .with_current_version(self.current_version);
        for (version, layout) in self.revisions {
            table = table.with_revision(version, layout);
        }
        for (version, key) in self.aliases {
            table = table.with_version_alias(version, key);
        }
        table
    }
}
