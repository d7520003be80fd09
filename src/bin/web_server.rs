use stepwise_sssp::web::server::{start_server_with_config, ServerConfig};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let config = ServerConfig::from_env_and_args(env::args());

    log::info!("Starting stepwise SSSP web server");
    log::info!("   Port: {}", config.port);
    log::info!("   Static files: {}", config.static_dir);
    log::info!("   CORS enabled: {}", config.enable_cors);
    log::info!("   Max sessions: {}", config.max_sessions);

    start_server_with_config(config).await?;

    Ok(())
}
