pub use sea_orm_migration::prelude::*;

mod m20250801_000001_create_profiles_table;
mod m20250801_000002_create_creator_profiles_table;
mod m20250801_000003_create_startup_profiles_table;
mod m20250801_000004_create_orders_table;
mod m20250805_000001_add_order_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250801_000001_create_profiles_table::Migration),
            Box::new(m20250801_000002_create_creator_profiles_table::Migration),
            Box::new(m20250801_000003_create_startup_profiles_table::Migration),
            Box::new(m20250801_000004_create_orders_table::Migration),
            Box::new(m20250805_000001_add_order_indexes::Migration),
        ]
    }
}
