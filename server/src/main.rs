use mesa_server::{Config, Server, ServerState, print_banner};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    config.ensure_work_dir_structure()?;

    let log_level = if config.is_production() { "info" } else { "debug" };
    let log_dir = config.log_dir();
    mesa_server::init_logger_with_file(Some(log_level), log_dir.to_str());

    print_banner();
    tracing::info!("Mesa server starting...");

    let state = ServerState::initialize(&config).await?;
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
