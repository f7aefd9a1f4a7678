//! Selection tracking for the detail view.

use crate::model::Record;

/// Zero-or-one selected record identifier.
///
/// The tracker stores only the identifier, never a record copy: the
/// current record is dereferenced against whatever snapshot the caller
/// holds, so the detail view can never show field values older than the
/// snapshot itself.
#[derive(Debug, Clone)]
pub struct SelectionTracker<Id> {
    id: Option<Id>,
}

impl<Id> Default for SelectionTracker<Id> {
    fn default() -> Self {
        Self { id: None }
    }
}

impl<Id: Clone + Eq> SelectionTracker<Id> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, id: Id) {
        self.id = Some(id);
    }

    pub fn clear(&mut self) {
        self.id = None;
    }

    pub fn id(&self) -> Option<&Id> {
        self.id.as_ref()
    }

    /// Dereference the selection against a snapshot.
    ///
    /// Returns `None` when nothing is selected or when the snapshot no
    /// longer carries the selected identifier.
    pub fn current<'a, R>(&self, snapshot: &'a [R]) -> Option<&'a R>
    where
        R: Record<Id = Id>,
    {
        let id = self.id.as_ref()?;
        snapshot.iter().find(|record| record.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Inquiry, InquiryStatus};
    use chrono::Utc;

    fn inquiry(id: &str) -> Inquiry {
        let at = Utc::now();
        Inquiry {
            id: id.to_string(),
            name: "A".to_string(),
            email: "a@example.com".to_string(),
            message: "hello".to_string(),
            status: InquiryStatus::New,
            created_at: at,
            updated_at: at,
        }
    }

    #[test]
    fn test_current_dereferences_against_snapshot() {
        let snapshot = vec![inquiry("a"), inquiry("b")];
        let mut selection = SelectionTracker::new();

        assert!(selection.current(&snapshot).is_none());

        selection.select("b".to_string());
        assert_eq!(selection.current(&snapshot).unwrap().id, "b");
    }

    #[test]
    fn test_current_is_none_when_id_left_the_snapshot() {
        let mut selection = SelectionTracker::new();
        selection.select("a".to_string());

        let snapshot = vec![inquiry("b")];
        assert!(selection.current(&snapshot).is_none());
        // The id itself is still held; reconciliation is the cache's job.
        assert_eq!(selection.id(), Some(&"a".to_string()));
    }

    #[test]
    fn test_clear() {
        let mut selection = SelectionTracker::new();
        selection.select("a".to_string());
        selection.clear();
        assert!(selection.id().is_none());
    }
}
