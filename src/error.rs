use std::io;

use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("could not build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("could not initialise logging: {0}")]
    Logging(String),
}
