//! Process configuration, read once from the environment at startup.

use std::net::SocketAddr;

/// Environment variable holding the store url.
pub const DATABASE_URL_ENV: &str = "DB_URI";
/// Local database file used when `DB_URI` is unset.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://app.db";
/// The listener port is fixed; there is no flag or variable for it.
pub const LISTEN_ADDR: ([u8; 4], u16) = ([127, 0, 0, 1], 5555);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let database_url = lookup(DATABASE_URL_ENV)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
        Config {
            database_url,
            listen_addr: SocketAddr::from(LISTEN_ADDR),
        }
    }
}
