mod actions;
mod app;
mod compose;
mod config;
mod editor;
mod error;
mod form;
mod logging;
mod request;
mod response;
mod state;
mod types;
mod ui;
mod utils;

use app::App;
use color_eyre::Result;
use config::Config;
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use std::io;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let config = Config::load()?;
    let log_path = logging::init_tracing_subscriber(&config.log)?;
    tracing::info!(
        log_file = %log_path.display(),
        timeout_secs = ?config.http.timeout_secs,
        default_method = %config.request.default_method,
        "configuration loaded"
    );

    let app = App::new(config)?;

    let terminal = ratatui::init();
    // Pastes arrive as one event instead of replayed key presses
    if let Err(e) = execute!(io::stdout(), EnableBracketedPaste) {
        tracing::warn!(error = %e, "bracketed paste unavailable");
    }
    let result = app.run(terminal);
    if let Err(e) = execute!(io::stdout(), DisableBracketedPaste) {
        tracing::warn!(error = %e, "failed to disable bracketed paste");
    }
    ratatui::restore();

    if let Err(e) = &result {
        tracing::error!(error = %e, "application exited with error");
    }
    result
}
