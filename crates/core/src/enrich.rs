//! Cluster enrichment: joining records against the preview index.

use serde::Serialize;

use crate::clusters::ClusterRecord;
use crate::preview::{MetadataIndex, PreviewCard};

/// How a partition treats clusters that carry no `links` field.
///
/// Both behaviors exist in the dashboard: the issues feed shows link-less
/// clusters with an empty card row, the country feeds omit them from the
/// card view entirely (they still appear in the raw listing).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardPolicy {
    /// Keep the cluster with an empty preview sequence.
    KeepEmpty,
    /// Drop the cluster from the cards collection.
    SkipLinkless,
}

/// A cluster record paired with one preview card per link, in link order.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct EnrichedCluster {
    pub cluster: ClusterRecord,
    pub cards: Vec<PreviewCard>,
}

/// Joins clusters against a prebuilt index.
///
/// Card order mirrors link order - display pairs them positionally. Index
/// misses synthesize an empty card carrying the original URL, so every
/// link always has a structurally valid card.
pub fn enrich(
    clusters: &[ClusterRecord],
    index: &MetadataIndex,
    policy: CardPolicy,
) -> Vec<EnrichedCluster> {
    clusters
        .iter()
        .filter(|cluster| policy == CardPolicy::KeepEmpty || cluster.has_links())
        .map(|cluster| EnrichedCluster {
            cluster: cluster.clone(),
            cards: cluster.links().iter().map(|url| index.get(url)).collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Map;

    fn cluster(id: &str, links: Option<Vec<&str>>) -> ClusterRecord {
        ClusterRecord {
            id: id.to_string(),
            links: links.map(|ls| ls.into_iter().map(String::from).collect()),
            fields: Map::new(),
        }
    }

    fn index() -> MetadataIndex {
        MetadataIndex::from_cards([PreviewCard {
            url: "https://shared.example".to_string(),
            title: "Shared story".to_string(),
            desc: String::new(),
            image: String::new(),
        }])
    }

    #[test]
    fn shared_url_gets_identical_cards() {
        let clusters = vec![
            cluster("a", Some(vec!["https://shared.example"])),
            cluster("b", Some(vec!["https://shared.example"])),
        ];
        let enriched = enrich(&clusters, &index(), CardPolicy::KeepEmpty);
        assert_eq!(enriched.len(), 2);
        assert_eq!(enriched[0].cards, enriched[1].cards);
        assert_eq!(enriched[0].cards[0].title, "Shared story");
    }

    #[test]
    fn index_miss_synthesizes_card_with_url() {
        let clusters = vec![cluster("a", Some(vec!["https://unknown.example"]))];
        let enriched = enrich(&clusters, &index(), CardPolicy::KeepEmpty);
        let card = &enriched[0].cards[0];
        assert_eq!(card.url, "https://unknown.example");
        assert!(card.is_blank());
    }

    #[test]
    fn cards_preserve_link_order() {
        let clusters = vec![cluster(
            "a",
            Some(vec!["https://unknown.example", "https://shared.example"]),
        )];
        let enriched = enrich(&clusters, &index(), CardPolicy::KeepEmpty);
        assert_eq!(enriched[0].cards[0].url, "https://unknown.example");
        assert_eq!(enriched[0].cards[1].url, "https://shared.example");
    }

    #[test]
    fn keep_empty_policy_keeps_linkless_clusters() {
        let clusters = vec![cluster("a", None), cluster("b", Some(vec![]))];
        let enriched = enrich(&clusters, &index(), CardPolicy::KeepEmpty);
        assert_eq!(enriched.len(), 2);
        assert!(enriched[0].cards.is_empty());
    }

    #[test]
    fn skip_linkless_policy_drops_clusters_without_links_field() {
        let clusters = vec![
            cluster("a", None),
            cluster("b", Some(vec!["https://shared.example"])),
            cluster("c", Some(vec![])),
        ];
        let enriched = enrich(&clusters, &index(), CardPolicy::SkipLinkless);
        let ids: Vec<_> = enriched.iter().map(|e| e.cluster.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c"]);
    }
}
