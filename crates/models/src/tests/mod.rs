use anyhow::Result;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;

use crate::db::{connect_with_config, DatabaseConfig};

/// CRUD operations tests for both entities
pub mod crud_tests;


/// Fresh in-memory database with the schema applied.
pub(crate) async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = connect_with_config(&DatabaseConfig::sqlite_memory()).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

pub(crate) fn acme() -> crate::company::CompanyData {
    crate::company::CompanyData {
        name: "Acme".into(),
        address: "1 Main St".into(),
        phone: 5551234,
        email: "a@acme.com".into(),
        notes: Some(String::new()),
        primary_contact: "Jane".into(),
    }
}
