//! Read interface over the document store.
//!
//! The store is an external collaborator: the pipeline issues empty-filter
//! listings with an identifier sort and never writes cluster collections.
//! Implementations live in the storage crate; tests use in-memory fakes.

use async_trait::async_trait;

use crate::clusters::{ArticleDoc, ClusterRecord};
use crate::errors::Result;

/// Sort direction over the record identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    IdAscending,
    /// Most recent first - the order every rendered partition uses.
    IdDescending,
}

/// Read access to cluster partitions and the bulk article listing.
#[async_trait]
pub trait ClusterStore: Send + Sync {
    /// Lists one named partition, sorted by identifier.
    ///
    /// A collection that does not exist yet is an empty sequence, not an
    /// error.
    async fn list_clusters(
        &self,
        collection: &str,
        order: SortOrder,
    ) -> Result<Vec<ClusterRecord>>;

    /// Lists the ingested article documents in one bulk read.
    async fn list_articles(&self) -> Result<Vec<ArticleDoc>>;
}
