use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use tracing::{debug, warn};

use crate::client::remote::{CODE_KEY_NOT_FOUND, CODE_OK, RemoteCall, RemoteResponse};
use crate::client::session::DecodeSession;
use crate::codec::compression::decompress_payload;
use crate::codec::{fixed, legacy};
use crate::errors::FetchError;
use crate::schema::projection::Projection;
use crate::schema::table::{Compression, TableMeta, WireFormat};
use crate::schema::types::CellValue;
use crate::shared::config::CONFIG;

/// Everything one row fetch needs besides the call itself. One struct,
/// one constructor — the with/without-projection and compression-override
/// permutations are fields, not overloads.
#[derive(Clone)]
pub struct FetchOptions {
    pub table: Arc<TableMeta>,
    pub projection: Option<Projection>,
    /// Overrides the table's compression indicator when set.
    pub compression: Option<Compression>,
}

impl FetchOptions {
    pub fn new(table: Arc<TableMeta>) -> Self {
        Self {
            table,
            projection: None,
            compression: None,
        }
    }

    pub fn with_projection(mut self, projection: Projection) -> Self {
        self.projection = Some(projection);
        self
    }

    pub fn with_compression(mut self, compression: Compression) -> Self {
        self.compression = Some(compression);
        self
    }
}

/// One pending single-row read: wraps the remote call and pipes its
/// eventual payload through decompression, version resolution and the
/// format-appropriate decoder.
///
/// Requests are issued and awaited sequentially per adapter; the decode
/// session inside is private state and needs no locking.
pub struct PendingRow {
    call: Box<dyn RemoteCall>,
    table: Arc<TableMeta>,
    projection: Option<Projection>,
    compression: Compression,
    session: DecodeSession,
    response: Option<RemoteResponse>,
}

impl PendingRow {
    pub fn new(
        call: impl RemoteCall + 'static,
        options: FetchOptions,
    ) -> Result<Self, FetchError> {
        let session = DecodeSession::for_table(&options.table, options.projection.as_ref())?;
        let compression = options.compression.unwrap_or(options.table.compression());
        Ok(Self {
            call: Box::new(call),
            table: options.table,
            projection: options.projection,
            compression,
            session,
            response: None,
        })
    }

    /// Forwarded to the underlying call. Once this returns true, waits
    /// surface [`FetchError::Cancelled`] instead of a payload.
    pub fn cancel(&mut self) -> bool {
        self.call.cancel()
    }

    pub fn is_done(&self) -> bool {
        self.call.is_done()
    }

    pub fn is_cancelled(&self) -> bool {
        self.call.is_cancelled()
    }

    /// Wait for the raw response without interpreting status or payload.
    /// The response is also cached for [`Self::row_from_response`].
    pub async fn await_response(&mut self) -> Result<RemoteResponse, FetchError> {
        self.wait_call(None).await
    }

    /// Wait for completion and surface the (decompressed) payload.
    /// `Ok(None)` means the row does not exist.
    pub async fn await_raw(&mut self) -> Result<Option<Bytes>, FetchError> {
        let response = self.wait_call(None).await?;
        self.raw_from(&response)
    }

    pub async fn await_raw_timeout(
        &mut self,
        timeout: Duration,
    ) -> Result<Option<Bytes>, FetchError> {
        let response = self.wait_call(Some(timeout)).await?;
        self.raw_from(&response)
    }

    /// Wait for completion and decode the typed row. `Ok(None)` means the
    /// row does not exist.
    pub async fn await_row(&mut self) -> Result<Option<Vec<CellValue>>, FetchError> {
        self.ensure_schema()?;
        match self.await_raw().await? {
            Some(raw) => self.decode_row(&raw).map(Some),
            None => Ok(None),
        }
    }

    pub async fn await_row_timeout(
        &mut self,
        timeout: Duration,
    ) -> Result<Option<Vec<CellValue>>, FetchError> {
        self.ensure_schema()?;
        match self.await_raw_timeout(timeout).await? {
            Some(raw) => self.decode_row(&raw).map(Some),
            None => Ok(None),
        }
    }

    /// Decode into a caller-supplied buffer window instead of allocating.
    /// Kept for bulk-fetch call sites. Precondition, checked before any
    /// wait: `start + len <= buf.len()`. Returns whether a row existed.
    pub async fn await_row_into(
        &mut self,
        buf: &mut [CellValue],
        start: usize,
        len: usize,
    ) -> Result<bool, FetchError> {
        self.ensure_schema()?;
        if start + len > buf.len() {
            return Err(FetchError::WindowOutOfBounds {
                start,
                len,
                buf_len: buf.len(),
            });
        }
        match self.await_raw().await? {
            Some(raw) => {
                self.resolve_version(&raw)?;
                self.decode_window(&raw, buf, start, len)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Re-decode from the response cached by a previous wait, without
    /// touching the call again. [`FetchError::NoResponse`] if nothing has
    /// been awaited yet.
    pub fn row_from_response(&mut self) -> Result<Option<Vec<CellValue>>, FetchError> {
        self.ensure_schema()?;
        let response = self.response.clone().ok_or(FetchError::NoResponse)?;
        match self.raw_from(&response)? {
            Some(raw) => self.decode_row(&raw).map(Some),
            None => Ok(None),
        }
    }

    async fn wait_call(
        &mut self,
        timeout: Option<Duration>,
    ) -> Result<RemoteResponse, FetchError> {
        if self.call.is_cancelled() {
            return Err(FetchError::Cancelled);
        }
        let limit = timeout.or_else(default_timeout);
        let completion = match limit {
            Some(duration) => tokio::time::timeout(duration, self.call.wait())
                .await
                .map_err(|_| FetchError::Timeout(duration))?,
            None => self.call.wait().await,
        };
        if self.call.is_cancelled() {
            return Err(FetchError::Cancelled);
        }
        let response = completion.ok_or(FetchError::NoResponse)?;
        debug!(
            target: "pending::await",
            table = self.table.name(),
            code = response.code,
            bytes = response.payload.len(),
            "remote call completed"
        );
        self.response = Some(response.clone());
        Ok(response)
    }

    /// Status interpretation: 0 is success, the reserved not-found code is
    /// an absent row, everything else fails verbatim. An empty success
    /// payload also means "no row".
    fn raw_from(&self, response: &RemoteResponse) -> Result<Option<Bytes>, FetchError> {
        match response.code {
            CODE_OK => {
                if response.payload.is_empty() {
                    return Ok(None);
                }
                decompress_payload(response.payload.clone(), self.compression).map(Some)
            }
            CODE_KEY_NOT_FOUND => Ok(None),
            code => {
                warn!(
                    target: "pending::await",
                    table = self.table.name(),
                    code,
                    message = %response.message,
                    "remote call failed"
                );
                Err(FetchError::RequestFailed {
                    code,
                    message: response.message.clone(),
                })
            }
        }
    }

    fn decode_row(&mut self, raw: &Bytes) -> Result<Vec<CellValue>, FetchError> {
        // Resolution first: a version switch changes the row length.
        self.resolve_version(raw)?;
        let mut row = vec![CellValue::Null; self.session.row_len()];
        let len = row.len();
        self.decode_window(raw, &mut row, 0, len)?;
        Ok(row)
    }

    fn resolve_version(&mut self, raw: &Bytes) -> Result<(), FetchError> {
        if self.table.format() == WireFormat::FixedLayout {
            self.session.resolve(&self.table, raw)?;
        }
        Ok(())
    }

    fn decode_window(
        &self,
        raw: &Bytes,
        row: &mut [CellValue],
        start: usize,
        len: usize,
    ) -> Result<(), FetchError> {
        match self.table.format() {
            WireFormat::FixedLayout => {
                fixed::decode(raw, self.session.layout(), row, start, len)?;
            }
            WireFormat::Legacy => match &self.projection {
                Some(Projection::Columns(cols)) if !cols.is_empty() => {
                    legacy::decode_projected(raw, self.table.schema(), cols, row, start, len)?;
                }
                _ => {
                    legacy::decode(raw, self.table.schema(), row, start, len)?;
                }
            },
        }
        Ok(())
    }

    fn ensure_schema(&self) -> Result<(), FetchError> {
        if self.table.schema().is_empty() {
            return Err(FetchError::SchemaMissing(self.table.name().to_string()));
        }
        Ok(())
    }
}

fn default_timeout() -> Option<Duration> {
    CONFIG
        .fetch
        .default_timeout_ms
        .filter(|ms| *ms > 0)
        .map(Duration::from_millis)
}
