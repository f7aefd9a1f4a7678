//! Composition root for the admin console's live collections.

use std::sync::Arc;
use std::time::Duration;

use crate::gateway::CollectionGateway;
use crate::model::{Inquiry, ScanResult};
use crate::sync::{PollScheduler, RecordCache};

/// The two live collections of the admin console, with one polling
/// lifecycle for both.
///
/// Each collection gets its own cache and its own scheduler; the caches
/// are shared (`Arc`) so views and export code can read them while
/// polling runs.
pub struct AdminConsole<GI, GS>
where
    GI: CollectionGateway<Inquiry>,
    GS: CollectionGateway<ScanResult>,
{
    inquiries: Arc<RecordCache<Inquiry, GI>>,
    scans: Arc<RecordCache<ScanResult, GS>>,
    pollers: Vec<PollScheduler>,
}

impl<GI, GS> AdminConsole<GI, GS>
where
    GI: CollectionGateway<Inquiry>,
    GS: CollectionGateway<ScanResult>,
{
    pub fn new(inquiry_gateway: GI, scan_gateway: GS) -> Self {
        Self {
            inquiries: Arc::new(RecordCache::new("inquiries", inquiry_gateway)),
            scans: Arc::new(RecordCache::new("scan_results", scan_gateway)),
            pollers: Vec::new(),
        }
    }

    pub fn inquiries(&self) -> &Arc<RecordCache<Inquiry, GI>> {
        &self.inquiries
    }

    pub fn scans(&self) -> &Arc<RecordCache<ScanResult, GS>> {
        &self.scans
    }

    /// Start polling both collections on the given period. Any previous
    /// pollers are stopped and replaced.
    pub fn start_polling(&mut self, period: Duration) {
        self.stop_polling();
        self.pollers = vec![
            PollScheduler::start(Arc::clone(&self.inquiries), period),
            PollScheduler::start(Arc::clone(&self.scans), period),
        ];
    }

    /// Stop polling both collections. Idempotent.
    pub fn stop_polling(&mut self) {
        for poller in &self.pollers {
            poller.stop();
        }
        self.pollers.clear();
    }
}
