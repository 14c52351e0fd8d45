use newsbrief_server::{api::app_router, build_state, config::Config, init_tracing, scheduler};
use tower_http::services::ServeDir;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    init_tracing();
    let state = build_state(&config).await?;
    if !state.snapshot_path.exists() {
        anyhow::bail!(
            "no snapshot artifact at {}; run the generate binary once before serving",
            state.snapshot_path.display()
        );
    }
    scheduler::start_snapshot_scheduler(state.clone(), config.regen_interval);
    let router = app_router(state, &config).fallback_service(ServeDir::new(&config.static_dir));
    tracing::info!("Listening on {}", config.listen_addr);
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
