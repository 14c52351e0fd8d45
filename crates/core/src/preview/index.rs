//! Per-pass preview index.

use std::collections::{HashMap, HashSet};

use futures::future::join_all;

use crate::preview::{PreviewCard, PreviewFetcher};

/// URL to preview-card mapping built once per aggregation pass.
///
/// Built from the bulk article listing, with one concurrent fetch per
/// distinct URL - never one fetch per cluster-link occurrence. Lookups are
/// total: an unknown URL yields a well-formed empty card carrying that URL.
#[derive(Clone, Debug, Default)]
pub struct MetadataIndex {
    cards: HashMap<String, PreviewCard>,
}

impl MetadataIndex {
    /// Builds the index by fan-out fetching every distinct URL once.
    pub async fn build<I>(urls: I, fetcher: &dyn PreviewFetcher) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let distinct: HashSet<String> = urls.into_iter().collect();
        let fetched = join_all(
            distinct
                .into_iter()
                .map(|url| async move { (url.clone(), fetcher.fetch(&url).await) }),
        )
        .await;
        Self {
            cards: fetched.into_iter().collect(),
        }
    }

    /// Index over already-materialized cards, keyed by their URL.
    pub fn from_cards<I>(cards: I) -> Self
    where
        I: IntoIterator<Item = PreviewCard>,
    {
        Self {
            cards: cards
                .into_iter()
                .map(|card| (card.url.clone(), card))
                .collect(),
        }
    }

    /// Looks up the card for a URL, synthesizing an empty one on miss.
    pub fn get(&self, url: &str) -> PreviewCard {
        self.cards
            .get(url)
            .cloned()
            .unwrap_or_else(|| PreviewCard::empty(url))
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
