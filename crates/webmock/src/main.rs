use anyhow::Context;
use clap::Parser;
use std::net::IpAddr;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use webmock::{cassette, MockServer, ServerConfig};

/// Serve cassette files as HTTP stubs until Ctrl-C
#[derive(Parser, Debug)]
#[command(name = "webmock", version, about)]
struct Args {
    /// Address to bind
    #[arg(long, env = "WEBMOCK_HOST", default_value = "127.0.0.1")]
    host: IpAddr,

    /// Port to bind (0 picks a free port)
    #[arg(short, long, env = "WEBMOCK_PORT", default_value = "0")]
    port: u16,

    /// Cassette file or directory; repeat to load several, in order
    #[arg(short, long = "cassette", value_name = "PATH")]
    cassettes: Vec<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    // Cassettes are read before binding so a bad file never serves traffic.
    let mut routes = Vec::new();
    for path in &args.cassettes {
        let loaded = cassette::load(path)
            .with_context(|| format!("Failed to load cassette {}", path.display()))?;
        routes.extend(loaded);
    }

    let config = ServerConfig {
        host: args.host,
        port: args.port,
    };
    let server = MockServer::start_with(config)
        .await
        .context("Failed to start stub server")?;
    let count = server.registry().extend(routes);
    info!("Serving {} route(s) at {}", count, server.url());
    println!("{}", server.url());

    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for Ctrl-C")?;
    server.stop().await;
    Ok(())
}
