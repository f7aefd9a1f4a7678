//! Data model shared by the sync core and the export encoder.
//!
//! The cache is generic over [`Record`]; the two concrete collections
//! the console manages live in the submodules:
//! - `inquiry` — inbound contact/inquiry messages
//! - `scan` — disease-scan classification results

use std::fmt::Debug;
use std::hash::Hash;

pub mod inquiry;
pub mod scan;

pub use inquiry::{Inquiry, InquiryPatch, InquiryStatus};
pub use scan::{ClassScore, ScanPatch, ScanResult};

/// A value object held by a record cache.
///
/// Records are never mutated field-by-field outside the optimistic
/// mutation protocol; the cache applies and reverts edits exclusively
/// through [`apply_patch`](Record::apply_patch) and the undo patch
/// produced by [`inverse`](Record::inverse).
pub trait Record: Clone + Send + Sync + 'static {
    /// Opaque identifier, unique within the collection and stable
    /// across refreshes.
    type Id: Clone + Eq + Hash + Debug + Send + Sync;

    /// Partial edit: every field is optional, untouched fields stay
    /// untouched.
    type Patch: Clone + Send + Sync;

    fn id(&self) -> &Self::Id;

    /// Apply a partial edit in place.
    fn apply_patch(&mut self, patch: &Self::Patch);

    /// Undo patch: this record's current values for exactly the fields
    /// `patch` touches. Applying `inverse(patch)` after `apply_patch(patch)`
    /// restores the record.
    fn inverse(&self, patch: &Self::Patch) -> Self::Patch;
}
