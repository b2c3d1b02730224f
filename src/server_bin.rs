use std::net::{IpAddr, SocketAddr};

use clap::Parser;
use gebeta_hint::hint_server::routes;

#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};

/// Move-hint backend for Gebeta and Gabata boards.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Config {
    /// Address to listen on
    #[arg(long, env = "GEBETA_HINT_HOST", default_value = "0.0.0.0")]
    host: IpAddr,
    /// Port to listen on
    #[arg(long, env = "GEBETA_HINT_PORT", default_value_t = 8000)]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let config = Config::parse();
    let address = SocketAddr::new(config.host, config.port);

    let (bound, server) = warp::serve(routes()).try_bind_ephemeral(address)?;
    info!("Starting Gebeta hint backend on http://{}", bound);
    info!("Health check: http://{}/health", bound);
    info!("Hint endpoint: http://{}/suggest-move", bound);
    server.await;
    Ok(())
}
