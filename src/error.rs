//! Crate error types.
//!
//! Failures are split along the two subsystems: `SyncError` for the
//! polling cache (refresh and mutation legs) and `ExportError` for the
//! export encoder. Gateway failures are carried as sources so callers
//! can still see the transport-level cause.

use thiserror::Error;

use crate::gateway::GatewayError;

/// Failures surfaced by the record cache.
///
/// A `Fetch` failure never discards the previous snapshot and a
/// `Mutation` failure on an update restores the pre-mutation field
/// values; callers only need these for reporting (log line, toast).
#[derive(Debug, Error)]
pub enum SyncError {
    /// The gateway's `list()` call failed; the last known snapshot is
    /// still in place.
    #[error("refresh of {collection} failed: {source}")]
    Fetch {
        collection: &'static str,
        #[source]
        source: GatewayError,
    },

    /// An update or delete failed after the optimistic local apply.
    #[error("mutation against {collection} failed: {source}")]
    Mutation {
        collection: &'static str,
        #[source]
        source: GatewayError,
    },
}

/// Failures surfaced by the export encoder.
#[derive(Debug, Error)]
pub enum ExportError {
    /// A record did not serialize to a flat field map.
    #[error("record did not serialize to a field map")]
    NotARecord,

    /// Flattening a record to JSON failed.
    #[error("failed to flatten record: {0}")]
    Flatten(#[from] serde_json::Error),

    /// The delimited-text writer failed.
    #[error("failed to encode delimited text: {0}")]
    Delimited(#[from] csv::Error),

    /// The spreadsheet writer failed.
    #[error("failed to encode spreadsheet: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),
}
