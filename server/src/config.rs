//! Host configuration parsed from the environment.
//!
//! `.env` is loaded by `main` before this runs; the Leptos options (site root,
//! asset directory) come from `[package.metadata.leptos]` instead.

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_LOG_FILTER: &str = "server=info,tower_http=info";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT {0:?}: expected a number from 1 to 65535")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_filter: String,
}

impl ServerConfig {
    /// Read `HOST`, `PORT` and `RUST_LOG` from the process environment.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidPort`] when `PORT` is set but not a valid port.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with an injected variable source.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidPort`] when `PORT` is set but not a valid port.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT").filter(|p| !p.trim().is_empty()) {
            Some(raw) => match raw.trim().parse::<u16>() {
                Ok(p) if p > 0 => p,
                _ => return Err(ConfigError::InvalidPort(raw)),
            },
            None => DEFAULT_PORT,
        };
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_owned());
        let log_filter = lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_owned());
        Ok(Self { host, port, log_filter })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
