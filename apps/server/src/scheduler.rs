//! Background scheduler for periodic snapshot regeneration.
//!
//! Regeneration is out-of-band by design: requests only ever read the
//! persisted artifact, and this task (or the `generate` binary) refreshes
//! it.

use std::sync::Arc;

use tokio::time::{interval, Duration};
use tracing::{info, warn};

use crate::main_lib::AppState;

/// Initial delay before the first pass (let the server fully start).
const INITIAL_DELAY_SECS: u64 = 60;

/// Starts the background regeneration loop.
pub fn start_snapshot_scheduler(state: Arc<AppState>, regen_interval: Duration) {
    tokio::spawn(async move {
        info!(
            "snapshot scheduler started ({}s interval)",
            regen_interval.as_secs()
        );

        tokio::time::sleep(Duration::from_secs(INITIAL_DELAY_SECS)).await;
        run_scheduled_pass(&state).await;

        let mut tick = interval(regen_interval);
        loop {
            tick.tick().await;
            run_scheduled_pass(&state).await;
        }
    });
}

async fn run_scheduled_pass(state: &Arc<AppState>) {
    info!("running scheduled snapshot regeneration");
    match state.pipeline.run_and_persist(&state.snapshot_path).await {
        Ok(snapshot) => info!("snapshot regenerated, stamped {}", snapshot.generated_at),
        Err(err) => warn!("snapshot regeneration failed: {}", err),
    }
}
