use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Avis::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Avis::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Avis::Content).text().not_null())
                    .col(ColumnDef::new(Avis::StarNb).small_integer().not_null())
                    .col(ColumnDef::new(Avis::UserId).integer().not_null())
                    .col(ColumnDef::new(Avis::RestaurantId).integer().not_null())
                    .col(
                        ColumnDef::new(Avis::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Avis::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .check(Expr::col(Avis::StarNb).between(0, 5))
                    .foreign_key(
                        ForeignKey::create()
                            .from(Avis::Table, Avis::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Avis::Table, Avis::RestaurantId)
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
                    .name("idx_avis_restaurant_id")
                    .table(Avis::Table)
                    .col(Avis::RestaurantId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Avis::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Avis {
    Table,
    Id,
    Content,
    StarNb,
    UserId,
    RestaurantId,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}

#[derive(Iden)]
enum Restaurants {
    Table,
    Id,
}
