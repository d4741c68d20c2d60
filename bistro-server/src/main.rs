use bistro_server::{Server, ServerState, print_banner, setup_environment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Environment (dotenv, config, logging)
    let config = setup_environment()?;

    print_banner();
    tracing::info!(environment = %config.environment, "Bistro server starting...");

    // 2. Seeded state
    let state = ServerState::initialize(&config);

    // 3. HTTP server
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
