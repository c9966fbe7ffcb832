//! Concept Design server entry point.

use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use concept_design::adapters::http::{app_router, AppState};
use concept_design::adapters::{
    ChromiumRasterizer, HttpMailRelay, InMemoryDesignStore, LopdfAssembler, SmtpMailRelay,
};
use concept_design::config::{AppConfig, ExportConfig, LogFormat, ServerConfig};
use concept_design::domain::curriculum::Catalog;
use concept_design::ports::MailRelay;

fn init_tracing(config: &ServerConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level));

    match config.log_format {
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

fn build_rasterizer(config: &ExportConfig) -> ChromiumRasterizer {
    let rasterizer = ChromiumRasterizer::new()
        .with_jpeg_quality(config.jpeg_quality)
        .with_viewport_width(config.viewport_width)
        .with_capture_timeout(config.capture_timeout_secs);
    match &config.chrome_executable {
        Some(path) => rasterizer.with_chrome_executable(path.clone()),
        None => rasterizer,
    }
}

fn build_mail_relay(config: &AppConfig) -> Result<Arc<dyn MailRelay>, Box<dyn std::error::Error>> {
    if let Some(url) = &config.email.relay_url {
        info!(endpoint = %url, "Forwarding mail to remote relay");
        return Ok(Arc::new(HttpMailRelay::new(url.clone())));
    }

    let relay = SmtpMailRelay::from_config(&config.email)?;
    if !relay.is_configured() {
        warn!("Mail delivery disabled until SMTP credentials are set");
    }
    Ok(Arc::new(relay))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    let catalog = Arc::new(Catalog::embedded()?.clone());
    info!(
        subjects = catalog.subject_count(),
        "Curriculum catalog loaded"
    );

    let sessions = InMemoryDesignStore::with_max_sessions(config.session.max_sessions);
    sessions.spawn_sweeper(config.session.idle_ttl(), config.session.sweep_interval());
    info!(
        max_sessions = config.session.max_sessions,
        idle_ttl_secs = config.session.idle_ttl_secs,
        "Design session store ready"
    );

    let state = AppState::new(
        catalog,
        Arc::new(sessions),
        Arc::new(build_rasterizer(&config.export)),
        Arc::new(LopdfAssembler::new()),
        build_mail_relay(&config)?,
    );

    let app = app_router(state, &config.server);
    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, environment = ?config.server.environment, "Concept Design server listening");

    axum::serve(listener, app).await?;
    Ok(())
}
