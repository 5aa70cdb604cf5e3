mod api_error;
mod server_config;
mod session_service;
mod session_store;
mod stats;
mod web_server;

use std::path::PathBuf;

use clap::Parser;
use common::games::letter_catch::ConfigGenerator;
use common::{log, log_error, logger};
use server_config::get_config_manager;
use session_service::SessionService;
use session_store::InMemorySessionStore;

#[derive(Parser)]
#[command(name = "letter_catch_server")]
struct Args {
    /// Path to the YAML config file. Defaults apply when the file is missing.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Overrides `bind_address` from the config file.
    #[arg(long)]
    bind: Option<String>,

    #[arg(long)]
    use_log_prefix: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Server".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_path = args
        .config
        .unwrap_or_else(|| PathBuf::from(server_config::DEFAULT_CONFIG_FILE));
    let config_manager = get_config_manager(Some(config_path.clone()));
    let mut config = match config_manager.get_config() {
        Ok(config) => {
            log!("Loaded config from {}", config_path.display());
            config
        }
        Err(e) => {
            log_error!("Failed to load server config: {}", e);
            return Err(e.into());
        }
    };
    if let Some(bind) = args.bind {
        config.bind_address = bind;
    }

    log!(
        "Sessions use {} rounds with {} attempts; debug endpoint {}",
        config.game.round_count,
        config.game.max_attempts,
        if config.enable_debug_endpoint { "enabled" } else { "disabled" }
    );

    let generator = ConfigGenerator::with_max_attempts(config.game.max_attempts);
    let service = SessionService::new(
        InMemorySessionStore::new(),
        generator,
        config.game.round_count,
    );

    let app = web_server::build_router(service, &config);
    web_server::run_web_server(
        app,
        &config.bind_address,
        config.static_files_path.as_deref(),
    )
    .await?;

    log!("Server shut down gracefully");
    Ok(())
}
