pub use sea_orm_migration::prelude::*;

mod m20251019_000001_cricket_match;
mod m20251019_000002_cricket_team;
mod m20251019_000003_cricket_player;
mod m20251019_000004_cricket_delivery;
mod m20251019_000005_cricket_official;
mod m20251019_000006_cricket_powerplay;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251019_000001_cricket_match::Migration),
            Box::new(m20251019_000002_cricket_team::Migration),
            Box::new(m20251019_000003_cricket_player::Migration),
            Box::new(m20251019_000004_cricket_delivery::Migration),
            Box::new(m20251019_000005_cricket_official::Migration),
            Box::new(m20251019_000006_cricket_powerplay::Migration),
        ]
    }
}
