use anyhow::Context as _;

const DEFAULT_PORT: u16 = 3114;

/// Directory service configuration loaded from environment variables.
#[derive(Debug)]
pub struct DirectoryConfig {
    /// Database connection URL (PostgreSQL in production). Env var: `DATABASE_URL`.
    pub database_url: String,
    /// TCP port for the HTTP server (default 3114). Env var: `DIRECTORY_PORT`.
    pub port: u16,
    /// Apply pending migrations at startup. Env var: `DIRECTORY_AUTO_MIGRATE`.
    pub auto_migrate: bool,
}

impl DirectoryConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL must be set")?;
        let port = match lookup("DIRECTORY_PORT") {
            Some(v) => v
                .parse()
                .with_context(|| format!("invalid DIRECTORY_PORT {v:?}"))?,
            None => DEFAULT_PORT,
        };
        let auto_migrate = lookup("DIRECTORY_AUTO_MIGRATE")
            .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);
        Ok(Self {
            database_url,
            port,
            auto_migrate,
        })
    }
}
