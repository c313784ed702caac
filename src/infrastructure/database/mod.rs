//! Database infrastructure

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tracing::info;

pub mod entities;
pub mod migrator;
pub mod repositories;

pub use migrator::Migrator;
pub use repositories::SeaOrmRepositoryProvider;

/// Database connection configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Connection URL, e.g. `sqlite://boarding.db?mode=rwc`
    pub url: String,
}

/// Open the database connection.
pub async fn init_database(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(config.url.as_str());
    options.sqlx_logging(false);
    let db = Database::connect(options).await?;
    info!("database connected");
    Ok(db)
}
