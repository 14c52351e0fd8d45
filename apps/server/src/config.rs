use std::{net::SocketAddr, time::Duration};

use newsbrief_core::default_board;
use newsbrief_market_data::TickerSymbol;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    /// Where the rendered snapshot artifact lives.
    pub snapshot_path: String,
    pub static_dir: String,
    pub request_timeout: Duration,
    /// How often the background scheduler regenerates the snapshot.
    pub regen_interval: Duration,
    pub recency_cutoff_days: i64,
    /// Market board, as `SYMBOL:Name` pairs in `NB_TICKERS`.
    pub board: Vec<TickerSymbol>,
}

fn parse_board(raw: &str) -> Vec<TickerSymbol> {
    raw.split(',')
        .filter_map(|entry| {
            entry
                .trim()
                .split_once(':')
                .map(|(symbol, name)| TickerSymbol::new(symbol.trim(), name.trim()))
        })
        .collect()
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("NB_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .expect("Invalid NB_LISTEN_ADDR");
        let db_path = std::env::var("NB_DB_PATH").unwrap_or_else(|_| "./db/newsbrief.db".into());
        let snapshot_path =
            std::env::var("NB_SNAPSHOT_PATH").unwrap_or_else(|_| "./cached_index.html".into());
        let static_dir = std::env::var("NB_STATIC_DIR").unwrap_or_else(|_| "static".into());
        let timeout_ms: u64 = std::env::var("NB_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        let regen_secs: u64 = std::env::var("NB_REGEN_INTERVAL_SECS")
            .unwrap_or_else(|_| "3600".into())
            .parse()
            .unwrap_or(3600);
        let recency_cutoff_days: i64 = std::env::var("NB_RECENCY_CUTOFF_DAYS")
            .unwrap_or_else(|_| "1".into())
            .parse()
            .unwrap_or(1);
        let board = std::env::var("NB_TICKERS")
            .ok()
            .map(|raw| parse_board(&raw))
            .filter(|board| !board.is_empty())
            .unwrap_or_else(default_board);
        Self {
            listen_addr,
            db_path,
            snapshot_path,
            static_dir,
            request_timeout: Duration::from_millis(timeout_ms),
            regen_interval: Duration::from_secs(regen_secs),
            recency_cutoff_days,
            board,
        }
    }
}
