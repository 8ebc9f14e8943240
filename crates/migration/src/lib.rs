//! Database migrations for the Warren score backend.

pub use sea_orm_migration::prelude::*;

mod m20250412_000001_create_users_table;
mod m20250412_000002_create_game_results_table;

/// The migrator that coordinates all schema changes, in order.
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250412_000001_create_users_table::Migration),
            Box::new(m20250412_000002_create_game_results_table::Migration),
        ]
    }
}
