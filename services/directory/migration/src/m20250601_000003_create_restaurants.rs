use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Restaurants::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Restaurants::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Restaurants::Name).string().not_null())
                    .col(ColumnDef::new(Restaurants::City).string().not_null())
                    .col(ColumnDef::new(Restaurants::PostalCode).string().not_null())
                    .col(ColumnDef::new(Restaurants::Address).string().not_null())
                    .col(ColumnDef::new(Restaurants::Phone).string().not_null())
                    .col(ColumnDef::new(Restaurants::Latitude).double().not_null())
                    .col(ColumnDef::new(Restaurants::Longitude).double().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Restaurants::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Restaurants {
    Table,
    Id,
    Name,
    City,
    PostalCode,
    Address,
    Phone,
    Latitude,
    Longitude,
}
