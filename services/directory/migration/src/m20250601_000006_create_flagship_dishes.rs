use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FlagshipDishes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FlagshipDishes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(FlagshipDishes::Label).string().not_null())
                    .col(ColumnDef::new(FlagshipDishes::Description).string().not_null())
                    .col(ColumnDef::new(FlagshipDishes::Photo).string().not_null())
                    .col(
                        ColumnDef::new(FlagshipDishes::RestaurantId)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(FlagshipDishes::Table, FlagshipDishes::RestaurantId)
                            .to(Restaurants::Table, Restaurants::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FlagshipDishes::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum FlagshipDishes {
    Table,
    Id,
    Label,
    Description,
    Photo,
    RestaurantId,
}

#[derive(Iden)]
enum Restaurants {
    Table,
    Id,
}
