//! The aggregation pass.

use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use futures::future::join_all;
use log::{info, warn};
use newsbrief_market_data::QuoteService;

use crate::clusters::{ClusterStore, SortOrder};
use crate::enrich::enrich;
use crate::errors::{Error, Result};
use crate::grouping::{chunk, filter_recent};
use crate::preview::{MetadataIndex, PreviewFetcher};
use crate::snapshot::model::{PartitionSpec, PartitionView, PipelineConfig, QuoteMode, Snapshot};
use crate::snapshot::render::render;

/// Runs one aggregation pass end to end.
///
/// Dependencies are constructed by the caller and passed in - the store
/// handle and the HTTP-backed fetchers live for the pipeline, not the
/// process. Step order within a pass is fixed: load, index, enrich,
/// filter, chunk, assemble. The quote board is independent of the cluster
/// work and fetched in parallel with it.
///
/// Failure semantics: a partition that fails to load degrades to an empty
/// view and the rest of the snapshot still assembles; quote failures
/// degrade per symbol inside the market-data crate. A pass never fails as
/// a whole - the worst outcome is a sparser snapshot.
pub struct SnapshotPipeline {
    store: Arc<dyn ClusterStore>,
    previews: Arc<dyn PreviewFetcher>,
    quotes: QuoteService,
    config: PipelineConfig,
}

impl SnapshotPipeline {
    pub fn new(
        store: Arc<dyn ClusterStore>,
        previews: Arc<dyn PreviewFetcher>,
        quotes: QuoteService,
        config: PipelineConfig,
    ) -> Self {
        Self {
            store,
            previews,
            quotes,
            config,
        }
    }

    /// Runs a pass stamped with the current time.
    pub async fn run(&self) -> Snapshot {
        self.run_at(Utc::now()).await
    }

    /// Runs a pass against an explicit "now" (recency windows and the
    /// snapshot stamp derive from it).
    pub async fn run_at(&self, now: DateTime<Utc>) -> Snapshot {
        let quotes_task = async {
            match self.config.quote_mode {
                QuoteMode::Concurrent => self.quotes.fetch_all(&self.config.board).await,
                QuoteMode::Sequential => self.quotes.fetch_all_sequential(&self.config.board).await,
            }
        };

        let clusters_task = async {
            let articles = match self.store.list_articles().await {
                Ok(articles) => articles,
                Err(err) => {
                    warn!("article listing unavailable: {}", err);
                    Vec::new()
                }
            };

            // One fetch per distinct article URL for the whole pass.
            let urls = articles
                .iter()
                .filter_map(|article| article.url())
                .map(String::from);
            let index = MetadataIndex::build(urls, self.previews.as_ref()).await;

            let issues = self.load_partition(&self.config.issues, &index, now).await;
            let countries = join_all(
                self.config
                    .countries
                    .iter()
                    .map(|spec| self.load_partition(spec, &index, now)),
            )
            .await;

            (articles, issues, countries)
        };

        let ((articles, issues, countries), quotes) = tokio::join!(clusters_task, quotes_task);

        info!(
            "aggregation pass complete: {} articles, {} issue clusters, {} country partitions, {}/{} quotes resolved",
            articles.len(),
            issues.clusters.len(),
            countries.len(),
            quotes.iter().filter(|q| q.value.is_resolved()).count(),
            quotes.len(),
        );

        Snapshot {
            generated_at: now,
            articles,
            issues,
            countries,
            quotes,
        }
    }

    async fn load_partition(
        &self,
        spec: &PartitionSpec,
        index: &MetadataIndex,
        now: DateTime<Utc>,
    ) -> PartitionView {
        let clusters = match self
            .store
            .list_clusters(&spec.collection, SortOrder::IdDescending)
            .await
        {
            Ok(clusters) => clusters,
            Err(err) => {
                warn!("partition {} unavailable: {}", spec.name, err);
                return PartitionView::empty(spec.name.clone());
            }
        };

        let card_source = match spec.card_limit {
            Some(limit) => &clusters[..limit.min(clusters.len())],
            None => &clusters[..],
        };
        let cards = enrich(card_source, index, spec.card_policy);
        let recent = filter_recent(&clusters, self.config.recency_cutoff_days, now);
        let groups = chunk(&recent, self.config.chunk_size);

        PartitionView {
            name: spec.name.clone(),
            clusters,
            cards,
            recent,
            groups,
        }
    }

    /// Runs a pass and writes the rendered artifact to `path`.
    ///
    /// Single-writer by assumption; concurrent regenerations are not
    /// coordinated and the last writer wins.
    pub async fn run_and_persist(&self, path: &Path) -> Result<Snapshot> {
        let snapshot = self.run().await;
        let html = render(&snapshot)?;
        tokio::fs::write(path, html).await.map_err(|err| {
            Error::Artifact(format!("failed to write {}: {}", path.display(), err))
        })?;
        info!("snapshot artifact written to {}", path.display());
        Ok(snapshot)
    }
}
