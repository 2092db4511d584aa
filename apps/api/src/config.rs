use anyhow::{bail, Context, Result};

use crate::puzzle::grid::DEFAULT_GRID_SIZE;

/// Smallest grid a request may ask for. Anything smaller cannot hold a
/// single letter plus its trailing boundary.
pub const MIN_GRID_SIZE: usize = 3;

/// Application configuration loaded from environment variables.
/// Every variable has a default; startup fails only on unparsable values.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// The one origin allowed to call the API from a browser.
    pub allowed_origin: String,
    pub default_grid_size: usize,
    pub max_grid_size: usize,
    pub max_words: usize,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 5001,
            allowed_origin: "http://localhost:3000".to_string(),
            default_grid_size: DEFAULT_GRID_SIZE,
            max_grid_size: 64,
            max_words: 500,
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        let config = Config {
            port: parse_env("PORT", defaults.port)?,
            allowed_origin: std::env::var("ALLOWED_ORIGIN").unwrap_or(defaults.allowed_origin),
            default_grid_size: parse_env("GRID_SIZE", defaults.default_grid_size)?,
            max_grid_size: parse_env("MAX_GRID_SIZE", defaults.max_grid_size)?,
            max_words: parse_env("MAX_WORDS", defaults.max_words)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.max_grid_size < MIN_GRID_SIZE {
            bail!("MAX_GRID_SIZE must be at least {MIN_GRID_SIZE}");
        }
        if !(MIN_GRID_SIZE..=self.max_grid_size).contains(&self.default_grid_size) {
            bail!(
                "GRID_SIZE must be between {MIN_GRID_SIZE} and {}",
                self.max_grid_size
            );
        }
        Ok(())
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}
