mod config;
mod controller;
mod error;
mod logging;
mod model;
mod providers;
mod view;

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::Mutex;

use config::Config;
use controller::AppController;
use model::{AppModel, Category};
use providers::{HttpSource, Providers};
use view::AppView;

/// Pick a category and subgenre, get shows, songs, jokes, books or trivia
#[derive(Parser, Debug)]
#[command(name = "entertain-rs", version, about)]
struct Args {
    /// Config file (defaults to ~/.config/entertain-rs/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Category to open with: jokes, show, books, music or trivia
    #[arg(long)]
    category: Option<String>,

    /// Subgenre to open with, e.g. "Jazz" (requires --category)
    #[arg(long, requires = "category")]
    subgenre: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::load(args.config.as_deref())?;

    if let Err(e) = logging::init_logging(config.logging.filter.as_deref()) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::info!("=== entertain-rs starting ===");

    let initial_category = args
        .category
        .as_deref()
        .map(|label| {
            Category::from_label(label).with_context(|| format!("Unknown category \"{}\"", label))
        })
        .transpose()?;

    let source = HttpSource::new().context("Failed to build HTTP client")?;
    let providers = Providers::new(Arc::new(source), Arc::new(config));

    let model = Arc::new(Mutex::new(AppModel::new()));
    let controller = AppController::new(model.clone(), providers);

    if let Some(category) = initial_category {
        if controller
            .apply_initial_selection(category, args.subgenre.as_deref())
            .await
            .is_none()
            && args.subgenre.is_some()
        {
            tracing::warn!(category = %category, subgenre = ?args.subgenre, "Initial subgenre not in catalog");
        }
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, model, controller).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "Application error");
    }

    tracing::info!("entertain-rs shutting down");
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    model: Arc<Mutex<AppModel>>,
    controller: AppController,
) -> io::Result<()> {
    loop {
        let (selection, ui_state, content_state, should_quit) = {
            let model_guard = model.lock().await;
            (
                model_guard.get_selection().await,
                model_guard.get_ui_state().await,
                model_guard.get_content_state().await,
                model_guard.should_quit().await,
            )
        };

        if should_quit {
            break;
        }

        terminal.draw(|f| {
            AppView::render(f, &selection, &ui_state, &content_state);
        })?;

        // Short poll so finished fetches show up promptly
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
