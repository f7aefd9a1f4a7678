//! Record cache with optimistic mutation reconciliation.
//!
//! One cache instance owns the in-memory view of one remote collection:
//! the last-known snapshot, the detail-view selection and the set of
//! in-flight optimistic edits. All gateway traffic goes through here.
//!
//! The internal `std::sync::Mutex` is held only for synchronous state
//! edits and never across an await point: every network call happens
//! outside the lock, so local mutation blocks can never interleave with
//! each other. The only races left are "which async completion lands
//! last", and those are resolved at settlement time against whatever
//! snapshot is current by then.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::error::SyncError;
use crate::gateway::CollectionGateway;
use crate::model::Record;
use crate::sync::selection::SelectionTracker;

/// What became of a requested mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    /// Applied locally and confirmed by the gateway.
    Applied,
    /// Nothing was done: the record is unknown to the current snapshot
    /// or already has an edit in flight. Expected during selection /
    /// refresh races, so this is not an error.
    Skipped,
}

/// Bookkeeping for one in-flight optimistic edit, keyed by record id.
/// At most one entry per id exists at any instant.
enum PendingMutation<R: Record> {
    Update {
        /// The optimistic edit, re-overlaid onto refreshed rows so a
        /// periodic refresh never visibly undoes a just-issued edit.
        patch: R::Patch,
        /// Pre-mutation values of the touched fields, for rollback.
        undo: R::Patch,
    },
    Delete,
}

struct CacheState<R: Record> {
    snapshot: Vec<R>,
    selection: SelectionTracker<R::Id>,
    pending: HashMap<R::Id, PendingMutation<R>>,
}

/// In-memory view of one remote collection.
pub struct RecordCache<R: Record, G: CollectionGateway<R>> {
    collection: &'static str,
    gateway: G,
    state: Mutex<CacheState<R>>,
}

impl<R: Record, G: CollectionGateway<R>> RecordCache<R, G> {
    /// Create an empty cache for the named collection. The snapshot
    /// stays empty until the first successful [`refresh`](Self::refresh).
    pub fn new(collection: &'static str, gateway: G) -> Self {
        Self {
            collection,
            gateway,
            state: Mutex::new(CacheState {
                snapshot: Vec::new(),
                selection: SelectionTracker::new(),
                pending: HashMap::new(),
            }),
        }
    }

    pub fn collection(&self) -> &'static str {
        self.collection
    }

    fn lock_state(&self) -> MutexGuard<'_, CacheState<R>> {
        self.state.lock().expect("cache state lock poisoned")
    }

    // ========== Read side ==========

    /// Clone of the current snapshot, in server order.
    pub fn records(&self) -> Vec<R> {
        self.lock_state().snapshot.clone()
    }

    pub fn len(&self) -> usize {
        self.lock_state().snapshot.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Select a record for detail viewing. Silent no-op when the id is
    /// not in the current snapshot.
    pub fn select(&self, id: &R::Id) {
        let mut state = self.lock_state();
        if state.snapshot.iter().any(|record| record.id() == id) {
            state.selection.select(id.clone());
        }
    }

    pub fn clear_selection(&self) {
        self.lock_state().selection.clear();
    }

    /// The currently selected record, dereferenced live against the
    /// snapshot. `None` when nothing is selected.
    pub fn selected(&self) -> Option<R> {
        let state = self.lock_state();
        state.selection.current(&state.snapshot).cloned()
    }

    // ========== Refresh ==========

    /// Fetch the collection and replace the snapshot wholesale.
    ///
    /// On failure the previous snapshot is retained untouched and the
    /// error is returned for reporting; nothing is torn down.
    pub async fn refresh(&self) -> Result<(), SyncError> {
        let records = self.list_remote().await?;
        self.install_snapshot(records);
        Ok(())
    }

    /// The fetch leg of a refresh, without installing the result. Split
    /// out so the poll scheduler can drop a fetch that completes after
    /// `stop()`.
    pub(crate) async fn list_remote(&self) -> Result<Vec<R>, SyncError> {
        self.gateway.list().await.map_err(|source| SyncError::Fetch {
            collection: self.collection,
            source,
        })
    }

    /// Replace the snapshot with a fetched record set and reconcile
    /// selection and in-flight edits.
    ///
    /// - rows with an in-flight delete stay deleted;
    /// - rows with an in-flight update take the server's values except
    ///   for the patched fields, which keep their optimistic values
    ///   until the mutation settles;
    /// - a selection whose id is absent from the new snapshot is cleared.
    pub(crate) fn install_snapshot(&self, mut records: Vec<R>) {
        let mut state = self.lock_state();

        records.retain(|record| {
            !matches!(state.pending.get(record.id()), Some(PendingMutation::Delete))
        });
        for record in &mut records {
            if let Some(PendingMutation::Update { patch, .. }) = state.pending.get(record.id()) {
                record.apply_patch(patch);
            }
        }
        state.snapshot = records;

        let selection_alive = match state.selection.id() {
            Some(id) => state.snapshot.iter().any(|record| record.id() == id),
            None => true,
        };
        if !selection_alive {
            state.selection.clear();
        }

        tracing::debug!(
            collection = self.collection,
            records = state.snapshot.len(),
            "snapshot installed"
        );
    }

    // ========== Optimistic mutations ==========

    /// Apply a partial edit optimistically, then confirm it with the
    /// gateway.
    ///
    /// The snapshot row (and with it the selected view) reflects the
    /// patch before this call first suspends. On gateway failure the
    /// pre-mutation values of the touched fields are restored to the row
    /// as it exists at settlement time and the error is returned.
    pub async fn update(&self, id: &R::Id, patch: R::Patch) -> Result<MutationOutcome, SyncError> {
        {
            let mut state = self.lock_state();
            if state.pending.contains_key(id) {
                return Ok(MutationOutcome::Skipped);
            }
            let Some(record) = state.snapshot.iter_mut().find(|record| record.id() == id)
            else {
                return Ok(MutationOutcome::Skipped);
            };
            let undo = record.inverse(&patch);
            record.apply_patch(&patch);
            state.pending.insert(
                id.clone(),
                PendingMutation::Update {
                    patch: patch.clone(),
                    undo,
                },
            );
        }

        let result = self.gateway.update(id, patch).await;

        let mut state = self.lock_state();
        let pending = state.pending.remove(id);
        match result {
            Ok(()) => {
                tracing::debug!(collection = self.collection, id = ?id, "update committed");
                Ok(MutationOutcome::Applied)
            }
            Err(source) => {
                if let Some(PendingMutation::Update { undo, .. }) = pending {
                    if let Some(record) =
                        state.snapshot.iter_mut().find(|record| record.id() == id)
                    {
                        record.apply_patch(&undo);
                    }
                }
                Err(SyncError::Mutation {
                    collection: self.collection,
                    source,
                })
            }
        }
    }

    /// Remove a record optimistically, then confirm with the gateway.
    ///
    /// The row leaves the snapshot (and the selection, if it pointed at
    /// it) before this call first suspends. A failed delete is reported
    /// but the row is *not* reinserted: the detail view has already
    /// navigated away, and the next successful refresh re-lists the row
    /// if the server still has it.
    pub async fn remove(&self, id: &R::Id) -> Result<MutationOutcome, SyncError> {
        {
            let mut state = self.lock_state();
            if state.pending.contains_key(id) {
                return Ok(MutationOutcome::Skipped);
            }
            let Some(position) = state.snapshot.iter().position(|record| record.id() == id)
            else {
                return Ok(MutationOutcome::Skipped);
            };
            state.snapshot.remove(position);
            if state.selection.id() == Some(id) {
                state.selection.clear();
            }
            state.pending.insert(id.clone(), PendingMutation::Delete);
        }

        let result = self.gateway.delete(id).await;

        self.lock_state().pending.remove(id);
        match result {
            Ok(()) => {
                tracing::debug!(collection = self.collection, id = ?id, "delete committed");
                Ok(MutationOutcome::Applied)
            }
            Err(source) => Err(SyncError::Mutation {
                collection: self.collection,
                source,
            }),
        }
    }
}
