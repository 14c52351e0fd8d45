use chrono::{DateTime, Utc};
use newsbrief_market_data::{TickerQuote, TickerSymbol};
use serde::Serialize;

use crate::clusters::{ArticleDoc, ClusterRecord};
use crate::enrich::{CardPolicy, EnrichedCluster};
use crate::grouping::DEFAULT_CHUNK_SIZE;

/// One named partition to load: which collection, and how its card view
/// treats link-less clusters.
#[derive(Clone, Debug)]
pub struct PartitionSpec {
    /// Display name, also the partition's anchor in the rendered page.
    pub name: String,
    /// Store collection backing this partition.
    pub collection: String,
    pub card_policy: CardPolicy,
    /// Cap on how many leading clusters get cards. `None` = all.
    pub card_limit: Option<usize>,
}

impl PartitionSpec {
    pub fn new(
        name: impl Into<String>,
        collection: impl Into<String>,
        card_policy: CardPolicy,
    ) -> Self {
        Self {
            name: name.into(),
            collection: collection.into(),
            card_policy,
            card_limit: None,
        }
    }

    pub fn with_card_limit(mut self, limit: usize) -> Self {
        self.card_limit = Some(limit);
        self
    }
}

/// Whether a pass fetches the quote board concurrently or one at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuoteMode {
    /// Fan-out over all symbols; the production default.
    Concurrent,
    /// Serial fallback for non-concurrent callers.
    Sequential,
}

/// Everything one aggregation pass needs to know.
///
/// The single pipeline replaces what used to be three near-identical call
/// sites; callers vary the partitions and the quote mode instead of
/// duplicating the pass.
#[derive(Clone, Debug)]
pub struct PipelineConfig {
    pub issues: PartitionSpec,
    pub countries: Vec<PartitionSpec>,
    /// Recency window for filtered views, in days.
    pub recency_cutoff_days: i64,
    pub chunk_size: usize,
    /// Ticker board fetched alongside the cluster work.
    pub board: Vec<TickerSymbol>,
    pub quote_mode: QuoteMode,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            issues: PartitionSpec::new("issues", "cluster_reports", CardPolicy::KeepEmpty)
                .with_card_limit(7),
            countries: vec![
                PartitionSpec::new("country1", "valid_cluster_country1", CardPolicy::SkipLinkless),
                PartitionSpec::new("country2", "valid_cluster_country2", CardPolicy::SkipLinkless),
                PartitionSpec::new("country3", "valid_cluster_country3", CardPolicy::SkipLinkless),
            ],
            recency_cutoff_days: 1,
            chunk_size: DEFAULT_CHUNK_SIZE,
            board: default_board(),
            quote_mode: QuoteMode::Concurrent,
        }
    }
}

/// The dashboard's standard market board.
pub fn default_board() -> Vec<TickerSymbol> {
    vec![
        TickerSymbol::new("^KS11", "KOSPI"),
        TickerSymbol::new("KRW=X", "KRW/USD"),
        TickerSymbol::new("^KQ11", "KOSDAQ"),
        TickerSymbol::new("^GSPC", "S&P500"),
        TickerSymbol::new("^IXIC", "NASDAQ"),
        TickerSymbol::new("^DJI", "Dow Jones"),
        TickerSymbol::new("^N225", "Nikkei"),
        TickerSymbol::new("000001.SS", "SSE"),
    ]
}

/// All views of one partition inside a snapshot.
#[derive(Clone, Debug, Serialize)]
pub struct PartitionView {
    pub name: String,
    /// Raw listing, most recent first.
    pub clusters: Vec<ClusterRecord>,
    /// Card view per the partition's policy and limit.
    pub cards: Vec<EnrichedCluster>,
    /// Clusters inside the recency window.
    pub recent: Vec<ClusterRecord>,
    /// Recent clusters chunked for paged display.
    pub groups: Vec<Vec<ClusterRecord>>,
}

impl PartitionView {
    /// The view a failed partition degrades to.
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            clusters: Vec::new(),
            cards: Vec::new(),
            recent: Vec::new(),
            groups: Vec::new(),
        }
    }
}

/// One complete, immutable output of the aggregation pipeline.
///
/// Produced at a point in time and never mutated by serving; a fresher
/// view requires a new pass.
#[derive(Clone, Debug, Serialize)]
pub struct Snapshot {
    /// When the pass ran.
    pub generated_at: DateTime<Utc>,
    /// Raw article feed from the bulk listing.
    pub articles: Vec<ArticleDoc>,
    pub issues: PartitionView,
    pub countries: Vec<PartitionView>,
    /// One entry per board symbol, each possibly unavailable.
    pub quotes: Vec<TickerQuote>,
}
