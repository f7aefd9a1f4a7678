//! Remote collection gateway contract.
//!
//! The cache never talks to the network itself. The embedding
//! application provides one gateway per collection (inquiries, scan
//! results) that knows how to list, patch and delete records against
//! the remote store. Every call must eventually settle; the cache
//! never imposes its own timeout.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::model::Record;

/// Failure modes of a gateway call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GatewayError {
    /// The request never produced a usable response (connectivity,
    /// timeout at the transport layer, 5xx).
    #[error("transport error: {0}")]
    Transport(String),

    /// The response arrived but could not be decoded into records.
    #[error("malformed response: {0}")]
    Decode(String),

    /// The remote store refused the operation (validation, permissions,
    /// row gone on the server side).
    #[error("request rejected: {0}")]
    Rejected(String),
}

/// Remote access to one named collection.
///
/// Implementations live with the application (HTTP client, test
/// doubles); the cache only depends on this contract.
#[async_trait]
pub trait CollectionGateway<R: Record>: Send + Sync + 'static {
    /// Fetch the full current contents of the collection, in server
    /// order.
    async fn list(&self) -> Result<Vec<R>, GatewayError>;

    /// Apply a partial edit to one record.
    async fn update(&self, id: &R::Id, patch: R::Patch) -> Result<(), GatewayError>;

    /// Delete one record.
    async fn delete(&self, id: &R::Id) -> Result<(), GatewayError>;
}

#[async_trait]
impl<R: Record, G: CollectionGateway<R>> CollectionGateway<R> for Arc<G> {
    async fn list(&self) -> Result<Vec<R>, GatewayError> {
        self.as_ref().list().await
    }

    async fn update(&self, id: &R::Id, patch: R::Patch) -> Result<(), GatewayError> {
        self.as_ref().update(id, patch).await
    }

    async fn delete(&self, id: &R::Id) -> Result<(), GatewayError> {
        self.as_ref().delete(id).await
    }
}
