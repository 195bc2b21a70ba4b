use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TagRestos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TagRestos::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TagRestos::TagId).integer().not_null())
                    .col(ColumnDef::new(TagRestos::RestaurantId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(TagRestos::Table, TagRestos::TagId)
                            .to(Tags::Table, Tags::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(TagRestos::Table, TagRestos::RestaurantId)
                            .to(Restaurants::Table, Restaurants::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_tag_restos_restaurant_id")
                    .table(TagRestos::Table)
                    .col(TagRestos::RestaurantId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TagRestos::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum TagRestos {
    Table,
    Id,
    TagId,
    RestaurantId,
}

#[derive(Iden)]
enum Tags {
    Table,
    Id,
}

#[derive(Iden)]
enum Restaurants {
    Table,
    Id,
}
