// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Immo Labs

//! immo-server: REST backend for immo operations.

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use immo_server::{router, AppState, Repository};

/// immo-server: operations API
#[derive(Parser, Debug)]
#[command(name = "immo-server")]
#[command(about = "REST backend for immo operations")]
struct Args {
    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1:3000")]
    bind: SocketAddr,

    /// Directory for database storage
    #[arg(short, long, default_value = ".")]
    data: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Starting immo-server");
    info!("  Bind address: {}", args.bind);
    info!("  Data directory: {}", args.data.display());

    let repo = Repository::open(&args.data.join("immo.db"))?;
    let state = Arc::new(AppState::new(repo));

    let listener = tokio::net::TcpListener::bind(args.bind).await?;
    info!("Listening on http://{}", args.bind);
    axum::serve(listener, router(state)).await?;

    Ok(())
}
