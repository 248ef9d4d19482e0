//! Server configuration from the environment.

/// Used when `DATABASE_URL` is unset.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://movies.db";
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
/// Upper bound on request bodies, enforced by `RequestBodyLimitLayer`.
pub const BODY_LIMIT_BYTES: usize = 64 * 1024;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub database_url: String,
    pub listen_addr: String,
    pub max_connections: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl ServerConfig {
    /// Read `DATABASE_URL` (after loading `.env`, if any); everything else is fixed.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::with_database_url(std::env::var("DATABASE_URL").ok())
    }

    fn with_database_url(database_url: Option<String>) -> Self {
        let mut config = ServerConfig::default();
        if let Some(url) = database_url.filter(|s| !s.trim().is_empty()) {
            config.database_url = url;
        }
        config
    }
}
