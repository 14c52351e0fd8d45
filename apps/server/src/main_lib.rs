use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use newsbrief_core::{
    ClusterStore, HttpPreviewFetcher, PipelineConfig, SnapshotPipeline, UserStore,
};
use newsbrief_market_data::{QuoteService, YahooQuotePage};
use newsbrief_storage_sqlite::SqliteDocumentStore;

use crate::config::Config;

pub struct AppState {
    pub pipeline: Arc<SnapshotPipeline>,
    pub user_store: Arc<dyn UserStore>,
    pub snapshot_path: PathBuf,
}

pub fn init_tracing() {
    let fmt_layer = fmt::layer().json().with_current_span(false);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let store = Arc::new(SqliteDocumentStore::open(&config.db_path)?);

    // One HTTP client for the whole pass: previews and quotes share its
    // connection pool.
    let client = reqwest::Client::builder().build()?;
    let previews = Arc::new(HttpPreviewFetcher::new(client.clone()));
    let quotes = QuoteService::new(Arc::new(YahooQuotePage::new(client)));

    let pipeline_config = PipelineConfig {
        recency_cutoff_days: config.recency_cutoff_days,
        board: config.board.clone(),
        ..PipelineConfig::default()
    };

    let cluster_store: Arc<dyn ClusterStore> = store.clone();
    let pipeline = Arc::new(SnapshotPipeline::new(
        cluster_store,
        previews,
        quotes,
        pipeline_config,
    ));

    Ok(Arc::new(AppState {
        pipeline,
        user_store: store,
        snapshot_path: PathBuf::from(&config.snapshot_path),
    }))
}
