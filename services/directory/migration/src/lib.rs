use sea_orm_migration::prelude::*;

mod m20250601_000001_create_type_users;
mod m20250601_000002_create_users;
mod m20250601_000003_create_restaurants;
mod m20250601_000004_create_tags;
mod m20250601_000005_create_tag_restos;
mod m20250601_000006_create_flagship_dishes;
mod m20250601_000007_create_avis;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_type_users::Migration),
            Box::new(m20250601_000002_create_users::Migration),
            Box::new(m20250601_000003_create_restaurants::Migration),
            Box::new(m20250601_000004_create_tags::Migration),
            Box::new(m20250601_000005_create_tag_restos::Migration),
            Box::new(m20250601_000006_create_flagship_dishes::Migration),
            Box::new(m20250601_000007_create_avis::Migration),
        ]
    }
}
