//! Snapshot rendering.
//!
//! Rendering is a pure function of the snapshot value: identical snapshots
//! render to identical bytes. The generation timestamp appears in exactly
//! one element (`#generated-at`) so comparisons can isolate it.

use askama::Template;

use crate::errors::{Error, Result};
use crate::snapshot::model::Snapshot;

#[derive(Template)]
#[template(path = "briefing.html")]
struct BriefingPage<'a> {
    snapshot: &'a Snapshot,
}

/// Renders a snapshot to the static dashboard document.
pub fn render(snapshot: &Snapshot) -> Result<String> {
    BriefingPage { snapshot }
        .render()
        .map_err(|err| Error::Render(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clusters::ClusterRecord;
    use crate::enrich::EnrichedCluster;
    use crate::preview::PreviewCard;
    use crate::snapshot::model::PartitionView;
    use chrono::{DateTime, TimeZone, Utc};
    use newsbrief_market_data::{QuoteValue, ResolvedQuote, TickerQuote};
    use rust_decimal_macros::dec;
    use serde_json::{Map, Value};

    fn snapshot_at(generated_at: DateTime<Utc>) -> Snapshot {
        let mut fields = Map::new();
        fields.insert(
            "title".to_string(),
            Value::String("Chip exports rebound".to_string()),
        );
        let cluster = ClusterRecord {
            id: "2024-05-01 09:30:00_c1".to_string(),
            links: Some(vec!["https://a.example".to_string()]),
            fields,
        };
        let card = PreviewCard {
            url: "https://a.example".to_string(),
            title: "Exports up 12%".to_string(),
            desc: "First rebound in six months".to_string(),
            image: String::new(),
        };

        Snapshot {
            generated_at,
            articles: Vec::new(),
            issues: PartitionView {
                name: "issues".to_string(),
                clusters: vec![cluster.clone()],
                cards: vec![EnrichedCluster {
                    cluster,
                    cards: vec![card],
                }],
                recent: Vec::new(),
                groups: Vec::new(),
            },
            countries: vec![PartitionView::empty("country1")],
            quotes: vec![
                TickerQuote {
                    name: "S&P500".to_string(),
                    value: QuoteValue::Resolved(ResolvedQuote {
                        price: dec!(5021.84),
                        change: dec!(-0.48),
                    }),
                },
                TickerQuote::unavailable("KOSPI"),
            ],
        }
    }

    fn without_timestamp_line(html: &str) -> String {
        html.lines()
            .filter(|line| !line.contains("generated-at"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn renders_quotes_clusters_and_cards() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
        let html = render(&snapshot_at(now)).unwrap();

        assert!(html.contains("5021.84"));
        assert!(html.contains("-0.48%"));
        assert!(html.contains("N/A"));
        assert!(html.contains("Chip exports rebound"));
        assert!(html.contains("Exports up 12%"));
        assert!(html.contains(r#"href="https://a.example""#));
    }

    #[test]
    fn rendering_is_deterministic() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
        let first = render(&snapshot_at(now)).unwrap();
        let second = render(&snapshot_at(now)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn timestamp_is_isolated_to_one_element() {
        let first = render(&snapshot_at(
            Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap(),
        ))
        .unwrap();
        let second = render(&snapshot_at(
            Utc.with_ymd_and_hms(2024, 5, 2, 10, 0, 0).unwrap(),
        ))
        .unwrap();

        assert_ne!(first, second);
        assert_eq!(without_timestamp_line(&first), without_timestamp_line(&second));
    }
}
