pub use sea_orm_migration::prelude::*;

mod m20260815_000001_create_assets;
mod m20260815_000002_create_exchanges;
mod m20260815_000003_create_users;
mod m20260815_000004_create_trading_pairs;
mod m20260815_000005_create_telegrams;
mod m20260815_000006_create_robots;
mod m20260815_000007_create_asset_metrics;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260815_000001_create_assets::Migration),
            Box::new(m20260815_000002_create_exchanges::Migration),
            Box::new(m20260815_000003_create_users::Migration),
            Box::new(m20260815_000004_create_trading_pairs::Migration),
            Box::new(m20260815_000005_create_telegrams::Migration),
            Box::new(m20260815_000006_create_robots::Migration),
            Box::new(m20260815_000007_create_asset_metrics::Migration),
        ]
    }
}
