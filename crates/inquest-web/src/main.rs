use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use inquest_pdf::PdfExtractBackend;
use inquest_web::config::Settings;
use inquest_web::{AppState, router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "inquest=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::load();
    std::fs::create_dir_all(&settings.upload_dir)?;

    let state = Arc::new(AppState::new(
        Arc::new(PdfExtractBackend::new()),
        settings.upload_dir.clone(),
    ));
    let app = router(state, settings.max_upload_bytes());

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.port));
    tracing::info!(%addr, upload_dir = %settings.upload_dir.display(), "listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
