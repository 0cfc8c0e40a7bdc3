use crate::error::ConfigError;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::Settings;

/// Loads the application settings from the process environment.
///
/// Every recognized option has a fixed default, so this only fails when an
/// environment variable is present but cannot be parsed (e.g. a non-numeric
/// `DB_PORT`).
pub fn load_settings() -> Result<Settings, ConfigError> {
    let builder = config::Config::builder()
        .set_default("db_user", "postgres")?
        .set_default("db_password", "postgres")?
        .set_default("db_host", "localhost")?
        .set_default("db_port", 5432)?
        .set_default("db_name", "recordsdb")?
        .set_default("server_port", 5000)?
        .set_default("records_api_url", "http://localhost:5000/api")?
        // Environment variables override the defaults: DB_USER, DB_PASSWORD,
        // DB_HOST, DB_PORT, DB_NAME, SERVER_PORT, RECORDS_API_URL.
        .add_source(config::Environment::default().try_parsing(true))
        .build()?;

    let settings = builder.try_deserialize::<Settings>()?;

    Ok(settings)
}
