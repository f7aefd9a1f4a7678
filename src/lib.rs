//! Live collection sync and export core for a disease-scan admin
//! console.
//!
//! The console keeps two remote collections — inbound inquiries and
//! disease-scan results — mirrored into local state while the admin
//! works on them:
//!
//! - [`RecordCache`] holds one collection's last-known snapshot, the
//!   detail-view selection and the in-flight optimistic edits
//!   (status changes, deletions are visible immediately and rolled
//!   back or re-listed if the server refuses them);
//! - [`PollScheduler`] drives periodic full refreshes per collection,
//!   never overlapping, immediate first call;
//! - [`AdminConsole`] wires both collections behind one start/stop
//!   polling lifecycle;
//! - [`export`] turns any snapshot into a downloadable CSV or xlsx
//!   blob.
//!
//! Network access happens only through the [`CollectionGateway`]
//! contract supplied by the embedding application; this crate owns no
//! transport, persistence or rendering.

pub mod console;
pub mod error;
pub mod export;
pub mod gateway;
pub mod model;
pub mod sync;

pub use console::AdminConsole;
pub use error::{ExportError, SyncError};
pub use export::{delimited, spreadsheet, ExportFile};
pub use gateway::{CollectionGateway, GatewayError};
pub use model::{ClassScore, Inquiry, InquiryPatch, InquiryStatus, Record, ScanPatch, ScanResult};
pub use sync::{MutationOutcome, PollScheduler, RecordCache, SelectionTracker};
