//! Newsbrief Core Crate
//!
//! The aggregation-and-snapshot pipeline behind the newsbrief dashboard:
//! cluster records are read from a document store, enriched with link
//! preview cards, grouped and recency-filtered, joined with a market quote
//! board, and assembled into an immutable [`Snapshot`] that renders to a
//! static HTML artifact.
//!
//! # Data flow
//!
//! ```text
//! store -> enrichment -> grouping/filtering -> Snapshot -> artifact -> HTTP
//! ```
//!
//! The flow is one-directional; nothing feeds back into an earlier stage
//! within a pass. Serving reads the persisted artifact and never runs the
//! pipeline inline.

pub mod clusters;
pub mod enrich;
pub mod errors;
pub mod grouping;
pub mod preview;
pub mod snapshot;
pub mod users;

pub use clusters::{ArticleDoc, ClusterRecord, ClusterStore, SortOrder};
pub use enrich::{enrich, CardPolicy, EnrichedCluster};
pub use errors::{DatabaseError, Error, Result};
pub use grouping::{chunk, filter_recent, DEFAULT_CHUNK_SIZE};
pub use preview::{HttpPreviewFetcher, MetadataIndex, PreviewCard, PreviewFetcher};
pub use snapshot::{
    default_board, render, PartitionSpec, PartitionView, PipelineConfig, QuoteMode, Snapshot,
    SnapshotPipeline,
};
pub use users::{UserRecord, UserStore};
