use sea_orm::entity::prelude::*;

/// User account. `password` holds a PHC-formatted hash, never plaintext.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub username: String,
    pub password: String,
    pub type_user_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::type_users::Entity",
        from = "Column::TypeUserId",
        to = "super::type_users::Column::Id"
    )]
    TypeUser,
    #[sea_orm(has_many = "super::avis::Entity")]
    Avis,
}

impl Related<super::type_users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TypeUser.def()
    }
}

impl Related<super::avis::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Avis.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
