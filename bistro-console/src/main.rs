//! Bistro console entry point

use std::io;

use bistro_console::{App, ConsoleConfig, event, run_app};
use bistro_server::{Server, ServerState};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let config = ConsoleConfig::from_env();

    // Logs go to the in-app panel, never to the terminal
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));
    tracing_subscriber::registry()
        .with(tui_logger::tracing_subscriber_layer())
        .with(env_filter)
        .init();
    tui_logger::init_logger(config.log_filter()).ok();
    tui_logger::set_default_level(config.log_filter());

    let server_config = config.server_config();
    let state = ServerState::initialize(&server_config);

    if config.api_port.is_some() {
        let server = Server::with_state(server_config, state.clone());
        tokio::spawn(async move {
            if let Err(e) = server.run().await {
                tracing::error!("REST API stopped: {}", e);
            }
        });
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (tx, mut rx) = event::channel();
    let mut app = App::new(&state, tx);
    tracing::info!("Sign in with any username and password");

    let res = run_app(&mut terminal, &mut app, &mut rx, config.tick()).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{:?}", err);
    }
    Ok(())
}
