//! One-shot snapshot generator.
//!
//! Runs a single aggregation pass and persists the artifact, then exits.
//! Meant for cron and for bootstrapping the artifact before first serve.

use newsbrief_server::{build_state, config::Config, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    init_tracing();
    let state = build_state(&config).await?;
    let snapshot = state.pipeline.run_and_persist(&state.snapshot_path).await?;
    tracing::info!(
        "snapshot stamped {} written to {}",
        snapshot.generated_at,
        state.snapshot_path.display()
    );
    Ok(())
}
