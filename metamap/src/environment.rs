//! Environment configuration for different deployment stages

use std::env;

use strum::{Display, EnumString};
use tracing::Level;
use tracing_subscriber::{filter::LevelFilter, fmt, EnvFilter};

use crate::error::{ClientError, ClientResult};

/// Application environment configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Environment {
    /// Production environment
    Production,
    /// Staging environment
    Staging,
    /// Development environment
    Development,
}

impl Environment {
    /// Creates an Environment from the `APP_ENV` environment variable
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Config` if `APP_ENV` contains an invalid value
    pub fn from_env() -> ClientResult<Self> {
        let env = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        env.trim()
            .parse()
            .map_err(|_| ClientError::Config(format!("Invalid environment: {}", env.trim())))
    }

    /// Log level used when `RUST_LOG` is not set
    #[must_use]
    pub fn tracing_level(self) -> Level {
        env::var("TRACING_LEVEL")
            .ok()
            .and_then(|val| val.parse::<Level>().ok())
            .unwrap_or(match self {
                Self::Production | Self::Staging => Level::INFO,
                Self::Development => Level::DEBUG,
            })
    }

    /// Installs the global tracing subscriber.
    ///
    /// JSON lines in staging and production, human-readable output in
    /// development. A subscriber that is already installed is left alone.
    pub fn init_tracing(self) {
        let filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::from_level(self.tracing_level()).into())
            .from_env_lossy();

        let result = match self {
            Self::Production | Self::Staging => fmt().json().with_env_filter(filter).try_init(),
            Self::Development => fmt().with_env_filter(filter).try_init(),
        };

        if result.is_err() {
            tracing::debug!("Tracing subscriber already installed");
        }
    }
}
