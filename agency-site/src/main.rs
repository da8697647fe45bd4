use agency_site::config::SiteConfig;
use agency_site::services::init_metrics;
use agency_site::startup::Application;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = SiteConfig::load().map_err(|e| {
        eprintln!("Failed to read configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing(
        "agency-site",
        &config.common.log_level,
        config.common.otlp_endpoint.as_deref(),
    )?;

    init_metrics()?;

    let app = Application::build(config)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to build application: {}", e))?;

    app.run_until_stopped().await.map_err(|e| {
        tracing::error!("Server error: {}", e);
        anyhow::anyhow!("Server error: {}", e)
    })?;

    Ok(())
}
