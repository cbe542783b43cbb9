use clap::Parser;
use recommender::{
    api::{create_router, AppState},
    build_index,
    cli::{commands, Cli, Commands},
    config::{corpus::load_corpus, Settings},
    Error, Index, Result,
};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,recommender=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut settings = Settings::from_env()?;
    if cli.corpus.is_some() {
        settings.recommender.corpus_path = cli.corpus.clone();
    }
    settings.validate()?;

    // The index is built exactly once and is read-only from here on
    let index = load_index(&settings)?;

    match cli.command {
        Commands::Serve { port, host } => {
            serve(settings, index, port, host).await?;
        }
        Commands::Recommend {
            query,
            top_k,
            json,
        } => {
            let top_k = top_k.unwrap_or(settings.recommender.top_k);
            commands::recommend(&index, &query, top_k, json)?;
        }
        Commands::Corpus => {
            commands::list_corpus(&index);
        }
    }

    Ok(())
}

fn load_index(settings: &Settings) -> Result<Index> {
    let corpus = load_corpus(settings.recommender.corpus_path.as_deref())?;
    build_index(corpus)
}

async fn serve(
    mut settings: Settings,
    index: Index,
    port: Option<u16>,
    host: Option<String>,
) -> Result<()> {
    // Override settings with CLI arguments
    if let Some(port) = port {
        settings.server.port = port;
    }
    if let Some(host) = host {
        settings.server.host = host;
    }
    settings.validate()?;

    info!("Starting recipe recommender");
    info!("Server: {}:{}", settings.server.host, settings.server.port);
    info!(
        "Serving top {} recommendations over {} recipes",
        settings.recommender.top_k,
        index.len()
    );

    let state = AppState {
        index: Arc::new(index),
        settings: settings.clone(),
    };

    let app = create_router(state, &settings);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| Error::Internal(format!("Failed to bind to {addr}: {e}")))?;

    println!("\n========================================");
    println!("Recipe Recommender");
    println!("========================================");
    println!("Address: http://{addr}");
    println!("\nEndpoints:");
    println!("  GET  /                 recommendation form");
    println!("  POST /                 submit ingredients");
    println!("  GET  /api/recommend    JSON recommendations (?q=...&k=...)");
    println!("  GET  /health");
    println!("\nPress Ctrl+C to stop");
    println!("========================================\n");

    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| Error::Internal(format!("Server error: {e}")))?;

    info!("Shutting down...");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl+C: {}", e);
    }
}
