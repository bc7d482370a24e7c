//! Runtime configuration: command-line flags with environment fallbacks.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use thiserror::Error;

use crate::app::app::DEFAULT_ANIMATION;
use crate::words::http::DEFAULT_ENDPOINT;
use crate::words::FallbackWords;

/// Request timeout applied to the word source.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const DEFAULT_LOG_FILE_NAME: &str = "wordgen.log";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid endpoint {endpoint:?}: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("endpoint must use http or https, got {0:?}")]
    UnsupportedScheme(String),

    #[error("timeout must be at least one second")]
    ZeroTimeout,

    #[error("fallback word list must contain at least one word")]
    EmptyFallback,
}

#[derive(Debug, Parser)]
#[command(
    name = "wordgen",
    version,
    about = "Something Something Generator: a random word for your gift exchange"
)]
pub struct Cli {
    /// Word source URL; must answer with a JSON array of strings
    #[arg(long, env = "WORDGEN_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Give up on the word source after this many seconds
    #[arg(long, env = "WORDGEN_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Length of the word transition animation in milliseconds
    #[arg(long, env = "WORDGEN_ANIMATION_MS", default_value_t = DEFAULT_ANIMATION.as_millis() as u64)]
    pub animation_ms: u64,

    /// Comma separated words used when the word source is unavailable
    #[arg(long, env = "WORDGEN_FALLBACK", value_delimiter = ',')]
    pub fallback_words: Vec<String>,

    /// Where to write the log (defaults to the system temp directory)
    #[arg(long, env = "WORDGEN_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Disable logging entirely; wins over --log-file
    #[arg(long)]
    pub no_log: bool,
}

impl Cli {
    pub fn into_config(self) -> Result<Config, ConfigError> {
        let url = reqwest::Url::parse(&self.endpoint).map_err(|e| ConfigError::InvalidEndpoint {
            endpoint: self.endpoint.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(url.scheme().to_string()));
        }

        if self.timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }

        let fallback = if self.fallback_words.is_empty() {
            FallbackWords::default()
        } else {
            FallbackWords::new(&self.fallback_words).ok_or(ConfigError::EmptyFallback)?
        };

        let log_file = if self.no_log {
            None
        } else {
            Some(self.log_file.unwrap_or_else(default_log_file))
        };

        Ok(Config {
            endpoint: self.endpoint,
            timeout: Duration::from_secs(self.timeout_secs),
            animation: Duration::from_millis(self.animation_ms),
            fallback,
            log_file,
        })
    }
}

fn default_log_file() -> PathBuf {
    std::env::temp_dir().join(DEFAULT_LOG_FILE_NAME)
}

/// Validated settings the application runs with.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub endpoint: String,
    pub timeout: Duration,
    pub animation: Duration,
    pub fallback: FallbackWords,
    /// `None` disables logging.
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            animation: DEFAULT_ANIMATION,
            fallback: FallbackWords::default(),
            log_file: Some(default_log_file()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Serializes tests that touch `WORDGEN_*` variables.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn parse(args: &[&str]) -> Result<Config, ConfigError> {
        let mut argv = vec!["wordgen"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap().into_config()
    }

    #[test]
    fn test_defaults_match_config_default() {
        let _env = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        for (key, _) in std::env::vars() {
            if key.starts_with("WORDGEN_") {
                std::env::remove_var(key);
            }
        }
        assert_eq!(parse(&[]).unwrap(), Config::default());
    }

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.endpoint, "https://random-word-api.vercel.app/api?words=1");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.animation, Duration::from_millis(500));
        assert_eq!(config.fallback, FallbackWords::default());
    }

    #[test]
    fn test_custom_fallback_words() {
        let config = parse(&["--fallback-words", "shiny,quirky"]).unwrap();
        assert_eq!(
            config.fallback.words(),
            &["shiny".to_string(), "quirky".to_string()]
        );
    }

    #[test]
    fn test_blank_fallback_rejected() {
        assert_eq!(
            parse(&["--fallback-words", " , "]),
            Err(ConfigError::EmptyFallback)
        );
    }

    #[test]
    fn test_invalid_endpoint_rejected() {
        assert!(matches!(
            parse(&["--endpoint", "not a url"]),
            Err(ConfigError::InvalidEndpoint { .. })
        ));
        assert_eq!(
            parse(&["--endpoint", "ftp://example.com/words"]),
            Err(ConfigError::UnsupportedScheme("ftp".to_string()))
        );
    }

    #[test]
    fn test_zero_timeout_rejected() {
        assert_eq!(
            parse(&["--timeout-secs", "0"]),
            Err(ConfigError::ZeroTimeout)
        );
    }

    #[test]
    fn test_no_log_disables_log_file() {
        let config = parse(&["--no-log"]).unwrap();
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn test_no_log_wins_over_log_file() {
        let config = parse(&["--log-file", "/tmp/custom.log", "--no-log"]).unwrap();
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn test_no_log_wins_over_log_file_from_env() {
        let _env = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        std::env::set_var("WORDGEN_LOG_FILE", "/tmp/from-env.log");
        let parsed = Cli::try_parse_from(["wordgen", "--no-log"]);
        std::env::remove_var("WORDGEN_LOG_FILE");

        let config = parsed.unwrap().into_config().unwrap();
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn test_explicit_log_file() {
        let config = parse(&["--log-file", "/tmp/custom.log", "--animation-ms", "250"]).unwrap();
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/custom.log")));
        assert_eq!(config.animation, Duration::from_millis(250));
    }
}
