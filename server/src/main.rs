mod api;
mod server_config;
mod web_server;

use clap::Parser;
use common::{log, logger};
use server_config::{DEFAULT_CONFIG_PATH, ServerConfig, Validate};
use web_server::{WebServerState, run_web_server};

#[derive(Parser)]
#[command(name = "tictactoe_ai_server")]
struct Args {
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Overrides the port from the config file.
    #[arg(long)]
    port: Option<u16>,

    #[arg(long)]
    use_log_prefix: bool,

    /// Log every computed move.
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = ServerConfig::load(&args.config)?;
    if let Some(port) = args.port {
        config.port = port;
    }
    config.validate()?;

    let prefix = if args.use_log_prefix {
        Some("Server".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose || config.verbose_logging);

    let addr = config.socket_addr()?;
    if let Some(seed) = config.rng_seed {
        log!("Random moves are seeded with {}", seed);
    }

    let shutdown_signal = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
        log!("Shutdown signal received");
    };

    run_web_server(WebServerState::from_config(&config), addr, shutdown_signal).await?;

    log!("Server shut down gracefully");

    Ok(())
}
