use anyhow::{Context, Result};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub database_max_connections: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: match lookup("PORT") {
                Some(port) => port.parse().context("PORT must be a number")?,
                None => DEFAULT_PORT,
            },
            database_url: lookup("DATABASE_URL")
                .context("Cannot load DATABASE_URL env variable")?,
            database_max_connections: match lookup("DATABASE_MAX_CONNECTIONS") {
                Some(max) => max
                    .parse()
                    .context("DATABASE_MAX_CONNECTIONS must be a number")?,
                None => DEFAULT_MAX_CONNECTIONS,
            },
        })
    }
}
