#![allow(clippy::doc_markdown)]
//! DataShelf Server - REST API over CSV datasets.

use axum::Router;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use datashelf_core::{ShelfConfig, DEFAULT_CONFIG_FILE};
use datashelf_server::{router, ApiDoc, AppState};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// DataShelf Server - filtered JSON views of CSV datasets
#[derive(Parser, Debug)]
#[command(name = "datashelf-server")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE, env = "DATASHELF_CONFIG")]
    config: PathBuf,

    /// Directory holding the dataset files
    #[arg(short, long)]
    data_dir: Option<String>,

    /// Host address to bind to
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = ShelfConfig::load_from_path(&args.config)?;
    if let Some(data_dir) = args.data_dir {
        config.dataset.data_dir = data_dir;
    }
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    config.validate()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| format!("{},tower_http=debug", config.logging.level)),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting DataShelf server...");
    tracing::info!("Data directory: {}", config.dataset.data_dir);

    let state = Arc::new(AppState::from_config(&config)?);

    // Swagger UI (stateless router)
    let swagger_ui = SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi());

    let mut app = router(state).merge(Router::<()>::new().merge(swagger_ui));
    if config.server.cors_enabled {
        app = app.layer(CorsLayer::permissive());
    }
    let app = app.layer(TraceLayer::new_for_http());

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("DataShelf server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
