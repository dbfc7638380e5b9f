use std::sync::Arc;

use crate::schema::layout::ColumnLayout;

/// Caller-supplied restriction to a subset of a row's columns, fixed for
/// the lifetime of one request.
///
/// The two shapes mirror the two wire formats: fixed-layout rows are
/// projected server-side and arrive encoded with the reduced layout, so
/// the selector carries that layout; legacy rows arrive whole and are
/// projected client-side by schema index.
#[derive(Debug, Clone)]
pub enum Projection {
    /// Reduced layout the fixed-layout decoder consumes directly.
    Layout(Arc<ColumnLayout>),
    /// Schema column indices, in output order, for the legacy decoder.
    Columns(Vec<usize>),
}

impl Projection {
    /// Number of columns the projected row will have.
    pub fn cardinality(&self) -> usize {
        match self {
            Projection::Layout(layout) => layout.len(),
            Projection::Columns(cols) => cols.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cardinality() == 0
    }

    /// Build an index projection from column names. `None` if any name is
    /// not part of the schema.
    pub fn columns_by_name(schema: &ColumnLayout, names: &[&str]) -> Option<Self> {
        let mut cols = Vec::with_capacity(names.len());
        for name in names {
            cols.push(schema.index_of(name)?);
        }
        Some(Projection::Columns(cols))
    }
}
