use std::sync::Arc;

use tracing::{debug, warn};

use crate::codec::errors::DecodeError;
use crate::codec::header::RowHeader;
use crate::errors::FetchError;
use crate::schema::layout::ColumnLayout;
use crate::schema::projection::Projection;
use crate::schema::table::{BASE_SCHEMA_VERSION, TableMeta, WireFormat};

/// Per-request decode state: the currently active layout and schema
/// version, and the row length decodes will produce.
///
/// Invariant: `row_len` equals the active layout's column count, except
/// when a legacy index projection is in force, where it equals the
/// projection's cardinality. The session is private to one adapter and
/// mutated at most once per payload, on an actual version transition;
/// the shared `TableMeta` is never touched.
#[derive(Debug, Clone)]
pub struct DecodeSession {
    layout: Arc<ColumnLayout>,
    version: u16,
    row_len: usize,
}

impl DecodeSession {
    /// Seed a session from table metadata and an optional projection.
    ///
    /// Fixed-layout tables with a reduced-layout projection start on that
    /// layout; otherwise a table carrying revisions starts on the layout
    /// mapped from its current version, and everything else starts on the
    /// base schema. Legacy index projections only shrink `row_len`.
    pub fn for_table(
        table: &TableMeta,
        projection: Option<&Projection>,
    ) -> Result<Self, FetchError> {
        if table.format() == WireFormat::FixedLayout {
            if let Some(Projection::Layout(reduced)) = projection {
                return Ok(Self {
                    layout: reduced.clone(),
                    version: BASE_SCHEMA_VERSION,
                    row_len: reduced.len(),
                });
            }
            let version = table.current_version();
            if table.has_revisions() && version != BASE_SCHEMA_VERSION {
                let key = version_key(table, version)?;
                let layout = layout_for_key(table, version, key)?;
                return Ok(Self {
                    layout: layout.clone(),
                    version,
                    row_len: key,
                });
            }
        }

        // index projections only apply to the legacy format; a reduced
        // layout never applies to it
        let row_len = match (table.format(), projection) {
            (WireFormat::Legacy, Some(Projection::Columns(cols))) if !cols.is_empty() => {
                cols.len()
            }
            _ => table.schema().len(),
        };
        Ok(Self {
            layout: table.schema().clone(),
            version: BASE_SCHEMA_VERSION,
            row_len,
        })
    }

    pub fn layout(&self) -> &Arc<ColumnLayout> {
        &self.layout
    }

    pub fn version(&self) -> u16 {
        self.version
    }

    pub fn row_len(&self) -> usize {
        self.row_len
    }

    /// Adapt the session to the schema version embedded in a
    /// fixed-layout payload. Legacy payloads carry no tag and never get
    /// here.
    ///
    /// The tag is peeked, not consumed; decoding re-reads the header.
    /// On the common fast path (tag equals the active version) nothing
    /// happens and no catalog map is consulted. A failed lookup leaves
    /// the session exactly as it was.
    pub fn resolve(&mut self, table: &TableMeta, payload: &[u8]) -> Result<(), FetchError> {
        let tag = RowHeader::peek_version(payload)
            .ok_or(FetchError::Decode(DecodeError::HeaderTooSmall))?;

        if tag == self.version {
            return Ok(());
        }
        if tag == BASE_SCHEMA_VERSION {
            self.layout = table.schema().clone();
            self.row_len = self.layout.len();
            self.version = BASE_SCHEMA_VERSION;
            debug!(
                target: "session::resolve",
                table = table.name(),
                "payload reverted to base schema version"
            );
            return Ok(());
        }

        let key = version_key(table, tag)?;
        // Same column count as the active layout: the mapped layout would
        // be rebuilt identical, so keep what we have.
        if key == self.layout.len() {
            return Ok(());
        }
        let layout = layout_for_key(table, tag, key)?;

        debug!(
            target: "session::resolve",
            table = table.name(),
            from = self.version,
            to = tag,
            columns = key,
            "switching active layout"
        );
        self.layout = layout.clone();
        self.row_len = key;
        self.version = tag;
        Ok(())
    }
}

fn version_key(table: &TableMeta, version: u16) -> Result<usize, FetchError> {
    table.versions().get(&version).copied().ok_or_else(|| {
        warn!(
            target: "session::resolve",
            table = table.name(),
            version,
            "version tag missing from table version map"
        );
        FetchError::UnknownSchemaVersion(version)
    })
}

fn layout_for_key<'a>(
    table: &'a TableMeta,
    version: u16,
    key: usize,
) -> Result<&'a Arc<ColumnLayout>, FetchError> {
    table.layouts().get(&key).ok_or_else(|| {
        warn!(
            target: "session::resolve",
            table = table.name(),
            version,
            key,
            "no layout registered for mapped column count"
        );
        FetchError::UnknownLayoutMapping(key)
    })
}
