//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20241001_000001_create_company;
mod m20241001_000002_create_user;
mod m20241001_000003_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241001_000001_create_company::Migration),
            Box::new(m20241001_000002_create_user::Migration),
            // Indexes should always be applied last
            Box::new(m20241001_000003_add_indexes::Migration),
        ]
    }
}
