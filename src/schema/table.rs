use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::schema::layout::ColumnLayout;

/// Schema version every table starts at; always maps to the base layout.
pub const BASE_SCHEMA_VERSION: u16 = 1;

/// On-wire row format of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WireFormat {
    /// No embedded version tag; rows decode against current metadata.
    Legacy,
    /// Rows carry their own schema-version tag and null bitmap.
    FixedLayout,
}

/// Block compression applied to row payloads before transmission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Compression {
    None,
    /// Size-prepended LZ4 block.
    Lz4,
}

/// Read-only table metadata, published by the schema catalog as an
/// immutable snapshot and shared across concurrent fetches via `Arc`.
/// A decode never mutates this; catalog owners replace the snapshot
/// wholesale when the schema evolves.
#[derive(Debug, Clone)]
pub struct TableMeta {
    name: String,
    format: WireFormat,
    schema: Arc<ColumnLayout>,
    current_version: u16,
    versions: HashMap<u16, usize>,
    layouts: HashMap<usize, Arc<ColumnLayout>>,
    compression: Compression,
}

impl TableMeta {
    pub fn new(name: impl Into<String>, format: WireFormat, schema: ColumnLayout) -> Self {
        Self {
            name: name.into(),
            format,
            schema: Arc::new(schema),
            current_version: BASE_SCHEMA_VERSION,
            versions: HashMap::new(),
            layouts: HashMap::new(),
            compression: Compression::None,
        }
    }

    pub fn with_compression(mut self, compression: Compression) -> Self {
        self.compression = compression;
        self
    }

    /// Register a later schema revision. The layout is keyed by its
    /// column count, matching the catalog's version map convention.
    pub fn with_revision(mut self, version: u16, layout: ColumnLayout) -> Self {
        let key = layout.layout_key();
        self.versions.insert(version, key);
        self.layouts.insert(key, Arc::new(layout));
        self
    }

    /// Map a version to an existing layout key without registering a new
    /// layout, for revisions that reuse another revision's column set.
    pub fn with_version_alias(mut self, version: u16, key: usize) -> Self {
        self.versions.insert(version, key);
        self
    }

    pub fn with_current_version(mut self, version: u16) -> Self {
        self.current_version = version;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn format(&self) -> WireFormat {
        self.format
    }

    pub fn schema(&self) -> &Arc<ColumnLayout> {
        &self.schema
    }

    pub fn current_version(&self) -> u16 {
        self.current_version
    }

    pub fn versions(&self) -> &HashMap<u16, usize> {
        &self.versions
    }

    pub fn layouts(&self) -> &HashMap<usize, Arc<ColumnLayout>> {
        &self.layouts
    }

    pub fn compression(&self) -> Compression {
        self.compression
    }

    pub fn has_revisions(&self) -> bool {
        !self.versions.is_empty()
    }

    /// Layout for a schema version, if the catalog knows it. Version 1 is
    /// always the base schema.
    pub fn layout_for_version(&self, version: u16) -> Option<&Arc<ColumnLayout>> {
        if version == BASE_SCHEMA_VERSION {
            return Some(&self.schema);
        }
        let key = self.versions.get(&version)?;
        self.layouts.get(key)
    }
}
