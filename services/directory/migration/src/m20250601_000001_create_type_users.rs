use sea_orm_migration::prelude::*;

use resto_domain::user_type::UserType;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TypeUsers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TypeUsers::Id)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TypeUsers::Label)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await?;

        // Reference rows; ids are fixed and mirrored by `UserType`.
        let mut insert = Query::insert();
        insert
            .into_table(TypeUsers::Table)
            .columns([TypeUsers::Id, TypeUsers::Label]);
        for kind in UserType::ALL {
            insert.values_panic([kind.id().into(), kind.label().into()]);
        }
        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TypeUsers::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum TypeUsers {
    Table,
    Id,
    Label,
}
