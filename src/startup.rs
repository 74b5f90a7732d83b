use sea_orm::DatabaseConnection;
use tracing_subscriber::EnvFilter;

use crate::{
    config::Config,
    error::{config::ConfigError, Error},
};

/// Install the global tracing subscriber
///
/// `RUST_LOG` takes precedence over the configured `LOG_LEVEL`.
pub fn init_tracing(config: &Config) -> Result<(), Error> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_level).map_err(|e| {
            ConfigError::InvalidLogFilter {
                value: config.log_level.clone(),
                reason: e.to_string(),
            }
        })?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| Error::InternalError(format!("Failed to install tracing subscriber: {}", e)))
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);
    if let Some(max_connections) = config.database_max_connections {
        opt.max_connections(max_connections);
    }

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}
