use serde::Deserialize;

/// Runtime configuration, resolved once at startup and passed down
/// explicitly instead of living in process globals.
#[derive(Clone, Deserialize)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub server: ServerSettings,
    pub page_size: i64,
}

#[derive(Clone, Deserialize)]
pub struct DatabaseSettings {
    pub path: String,
}

#[derive(Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Settings {
    /// Defaults, overridden by an optional `config.toml` and then by
    /// `TRIVIA_`-prefixed environment variables (e.g. `TRIVIA_SERVER__PORT`).
    pub fn load() -> Result<Settings, config::ConfigError> {
        config::Config::builder()
            .set_default("database.path", "trivia.db")?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080_i64)?
            .set_default("page_size", 10_i64)?
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("TRIVIA").separator("__"))
            .build()?
            .try_deserialize()
    }
}
