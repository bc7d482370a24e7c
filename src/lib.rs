//! Something Something Generator: a terminal widget that shows a random word
//! from a public word API and falls back to a local list when it can't.

pub mod app;
pub mod config;
pub mod error;
pub mod logging;
pub mod ui;
pub mod words;

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use crate::app::App;
use crate::config::Config;
use crate::ui::TuiManager;
use crate::words::HttpWordSource;

pub use error::AppError;

/// Run the word generator until the user quits.
pub fn run(config: Config) -> Result<(), AppError> {
    if let Some(path) = &config.log_file {
        logging::init(path)?;
    }
    info!(endpoint = %config.endpoint, timeout = ?config.timeout, "starting");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()?;

    let source = HttpWordSource::new(config.endpoint.clone(), config.timeout)?;
    let mut app = App::new(
        Arc::new(source),
        config.fallback,
        config.animation,
        runtime.handle().clone(),
    );

    let result = TuiManager::new().and_then(|mut tui| tui.run_event_loop(&mut app));

    // In-flight fetches are abandoned on exit.
    runtime.shutdown_timeout(Duration::from_millis(100));
    info!("exiting");
    result.map_err(AppError::from)
}
