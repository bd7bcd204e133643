// config.rs
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_WORKERS: usize = 8;
const DEFAULT_PUBLIC_DIR: &str = "public";
// Unsplash demo keys allow 50 requests/hour.
const DEFAULT_IMAGE_DELAY_MS: u64 = 1200;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} environment variable not set")]
    Missing(&'static str),
    #[error("invalid value for {var}: {value}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub max_workers: usize,
    pub public_dir: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            addr: parse_or("NOMAD_ADDR", &lookup, DEFAULT_ADDR.parse().ok())?,
            max_workers: parse_or("NOMAD_WORKERS", &lookup, Some(DEFAULT_WORKERS))?,
            public_dir: public_dir(&lookup),
        })
    }
}

#[derive(Debug, Clone)]
pub struct ImageConfig {
    pub access_key: String,
    pub public_dir: PathBuf,
    pub delay: Duration,
}

impl ImageConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let access_key = lookup("UNSPLASH_ACCESS_KEY")
            .filter(|k| !k.trim().is_empty())
            .ok_or(ConfigError::Missing("UNSPLASH_ACCESS_KEY"))?;

        let delay_ms = parse_or("NOMAD_IMAGE_DELAY_MS", &lookup, Some(DEFAULT_IMAGE_DELAY_MS))?;

        Ok(Self {
            access_key,
            public_dir: public_dir(&lookup),
            delay: Duration::from_millis(delay_ms),
        })
    }

    /// Where city card photos are written.
    pub fn cities_dir(&self) -> PathBuf {
        self.public_dir.join("cities")
    }
}

fn public_dir(lookup: &impl Fn(&str) -> Option<String>) -> PathBuf {
    lookup("NOMAD_PUBLIC_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_PUBLIC_DIR))
}

fn parse_or<T: std::str::FromStr>(
    var: &'static str,
    lookup: &impl Fn(&str) -> Option<String>,
    default: Option<T>,
) -> Result<T, ConfigError> {
    match lookup(var) {
        Some(value) => {
            let parsed = value.trim().parse();
            parsed.map_err(|_| ConfigError::Invalid { var, value })
        }
        None => default.ok_or(ConfigError::Missing(var)),
    }
}
