//! Standalone mock Graylog API server.
//!
//! Runs the in-memory mock server as its own process, for test
//! harnesses that talk to it over the network rather than in-process.

use clap::Parser;
use graylogapi::mock_server::{MockServer, ObjectStore};

#[derive(Debug, Parser)]
#[command(name = "graylog-mock-server", version, about)]
struct Args {
    /// Address to listen on.
    #[arg(long, default_value = "127.0.0.1", env = "GRAYLOG_MOCK_HOST")]
    host: String,

    /// Port to listen on (0 picks a free port).
    #[arg(long, default_value_t = 9000, env = "GRAYLOG_MOCK_PORT")]
    port: u16,

    /// Start with an empty store instead of the default fixtures.
    #[arg(long)]
    empty: bool,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();

    let args = Args::parse();
    let addr = format!("{}:{}", args.host, args.port);

    let server = if args.empty {
        MockServer::bind(&addr, ObjectStore::new()).await
    } else {
        MockServer::start_on(&addr).await
    };

    tracing::info!(url = server.url(), "mock Graylog API server listening");

    tokio::signal::ctrl_c()
        .await
        .expect("Failed to listen for ctrl-c");
    tracing::info!("shutting down");
    server.shutdown().await;
}
