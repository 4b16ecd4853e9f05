mod config;
mod controller;
mod logging;
mod model;
mod view;

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use anyhow::{Context, Result};
use std::time::Duration;
use clap::Parser;
use tokio::sync::Mutex;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use config::AppConfig;
use controller::AppController;
use model::{AppModel, KinologueClient};
use view::AppView;

/// Ask Kinologue about showtimes at London's independent cinemas
#[derive(Debug, Parser)]
#[command(name = "kinologue", version)]
struct Cli {
    /// Path to a config file (defaults to the platform config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the inference endpoint URL
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Start with this question already in the query field
    #[arg(long, short, value_name = "TEXT")]
    query: Option<String>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = AppConfig::load(cli.config.as_deref())?;
    config.apply_env();
    config.override_endpoint(cli.endpoint.clone());
    config.validate()?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", load_config(&cli)?.to_toml()?);
        return Ok(());
    }

    if let Err(e) = logging::init_logging() {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::info!("=== Kinologue Client Starting ===");

    let config = load_config(&cli).context("Failed to load configuration")?;
    tracing::info!(
        endpoint = %config.endpoint_url,
        raw_listings_path = %config.raw_listings_path,
        policy = ?config.compose_policy,
        "Configuration ready"
    );

    let kinologue_client = KinologueClient::from_config(&config)?;

    let today = chrono::Local::now().date_naive();
    let mut app_model = AppModel::new(&config, today);
    app_model.set_kinologue_client(kinologue_client);
    if let Some(query) = cli.query.clone() {
        app_model.set_query(query).await;
    }

    tracing::info!("Starting TUI...");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let model = Arc::new(Mutex::new(app_model));
    let controller = AppController::new(model.clone());

    let res = run_app(&mut terminal, model, controller).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "Application error");
    }

    tracing::info!("Kinologue Client shutting down");
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    model: Arc<Mutex<AppModel>>,
    controller: AppController,
) -> io::Result<()> {
    loop {
        // Get current state
        let (ui_state, catalog, filters, date_picker, request, should_quit) = {
            let model_guard = model.lock().await;
            (
                model_guard.get_ui_state().await,
                model_guard.catalog().clone(),
                model_guard.get_filter_state().await,
                model_guard.get_date_picker().await,
                model_guard.get_request_state().await,
                model_guard.should_quit().await,
            )
        };

        if should_quit {
            break;
        }

        // Draw UI
        terminal.draw(|f| {
            AppView::render(f, &ui_state, &catalog, &filters, &date_picker, &request);
        })?;

        // Short poll keeps the loading indicator and responses snappy
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Err(e) = controller.handle_key_event(key).await {
                    tracing::warn!(error = %e, "Key handling failed");
                }
            }
        }
    }

    Ok(())
}
