//! Link preview metadata: per-URL fetching and the per-pass index.

mod fetcher;
mod index;

pub use fetcher::{HttpPreviewFetcher, PreviewCard, PreviewError, PreviewFetcher};
pub use index::MetadataIndex;
