use anyhow::Result;
use careerboard::{
    config::Settings,
    dashboard::{self, AppState},
};
use reqwest::Client;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) settings ─────────────────────────────────────────────────
    let settings = Settings::from_env()?;

    // ─── 2) init logging ─────────────────────────────────────────────
    fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(settings.log_level.parse().unwrap_or(Level::INFO.into())),
        )
        .init();
    info!("Starting portfolio dashboard");

    // ─── 3) profile & shared state ───────────────────────────────────
    let profile = settings.load_profile()?;
    info!(
        owner = %profile.owner,
        report_date = %profile.report_date,
        "loaded portfolio profile"
    );
    let client = Client::new();
    let port = settings.port;
    let state = Arc::new(AppState::new(settings, profile, client));

    // ─── 4) serve ────────────────────────────────────────────────────
    info!("Server starting on port {}", port);
    info!("Dashboard: http://localhost:{}/", port);
    info!("Health check: http://localhost:{}/health", port);

    warp::serve(dashboard::routes(state)).run(([0, 0, 0, 0], port)).await;

    Ok(())
}
