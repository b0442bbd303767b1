use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use chipper::app::{config::AppConfig, r#loop::run_loop, state::AppState};
use chipper::infrastructure::catalog::{BuiltinCatalog, CatalogSource, FileCatalog};

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_panic_hook();

    let config = AppConfig::load();

    // A path on the command line beats the configured one; no path at all
    // means the built-in demo catalog.
    let catalog_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| config.catalog.clone());
    let source: Arc<dyn CatalogSource> = match catalog_path {
        Some(path) => Arc::new(FileCatalog::new(path)),
        None => Arc::new(BuiltinCatalog),
    };

    let mut app_state = AppState::new(&config);
    app_state.catalog_origin = source.describe();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_loop(&mut terminal, app_state, source).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}
