//! Configuration management for the library server and seeder

use config::{Config, ConfigError, Environment, File, Map};
use serde::Deserialize;
use std::{env, path::Path};

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

impl DatabaseConfig {
    /// Private in-memory store, one per pool
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
        }
    }

    /// Whether the URL points at a SQLite in-memory database
    pub fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// `pretty` or `json`
    pub format: String,
}

/// Settings for the one-shot seeder
#[derive(Debug, Deserialize, Clone, Default)]
pub struct SeedConfig {
    /// Fixed RNG seed for reproducible borrowing records; random when unset
    pub rng_seed: Option<u64>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub seed: SeedConfig,
}

impl AppConfig {
    /// Load configuration from `config/` and the process environment
    pub fn load() -> Result<Self, ConfigError> {
        let vars: Map<String, String> = env::vars().collect();
        Self::load_from(Path::new("config"), &vars)
    }

    /// Load configuration from `dir` with `vars` standing in for the environment.
    ///
    /// Sources, lowest priority first: `dir/default`, `dir/{RUN_MODE}`,
    /// `LIBRARY_`-prefixed variables, then `DATABASE_URL`. Files are optional
    /// and any key they leave out takes its default.
    pub fn load_from(dir: &Path, vars: &Map<String, String>) -> Result<Self, ConfigError> {
        let run_mode = vars
            .get("RUN_MODE")
            .map(String::as_str)
            .unwrap_or("development");

        let config = Config::builder()
            .add_source(File::with_name(&dir.join("default").to_string_lossy()).required(false))
            .add_source(File::with_name(&dir.join(run_mode).to_string_lossy()).required(false))
            // LIBRARY_DATABASE__URL, LIBRARY_SEED__RNG_SEED, ...
            .add_source(
                Environment::with_prefix("LIBRARY")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(Some(vars.clone())),
            )
            .set_override_option("database.url", vars.get("DATABASE_URL").cloned())?
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://library.db".to_string(),
            max_connections: 5,
            min_connections: 1,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
