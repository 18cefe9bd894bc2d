use crate::config::Config;
use crate::router::respond;
use astra::{ConnectionInfo, Request, Server};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod config;
mod domain;
mod errors;
mod responses;
mod router;

#[cfg(test)]
mod tests;

fn main() -> anyhow::Result<()> {
    // 1️⃣ Load configuration from the environment
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Configuration failed: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Install logging; RUST_LOG takes precedence over LOG_LEVEL
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // 3️⃣ Start the server
    let addr = config.socket_addr();
    info!("API webservice listening at http://{addr}");

    let server = Server::bind(&addr).max_workers(config.max_workers);

    // 4️⃣ Serve requests
    let result = server.serve(|req: Request, _info: ConnectionInfo| respond(req));

    if let Err(e) = result {
        error!("Server ended with error: {e}");
        return Err(e.into());
    }

    info!("Server shut down cleanly.");
    Ok(())
}
