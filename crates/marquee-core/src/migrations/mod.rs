pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_ticketing_tables;

/// Schema migrations for local and test databases.
///
/// Production stores are provisioned outside this application; the
/// migrator only runs when asked (`--migrate` or `AUTO_MIGRATE`).
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20240101_000001_create_ticketing_tables::Migration)]
    }
}
