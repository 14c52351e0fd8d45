//! Cluster records and the document-store read seam.

mod model;
mod store;

pub use model::{ArticleDoc, ClusterRecord};
pub use store::{ClusterStore, SortOrder};
