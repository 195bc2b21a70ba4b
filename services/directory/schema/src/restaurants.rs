use sea_orm::entity::prelude::*;

/// A restaurant listed in the directory.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "restaurants")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub city: String,
    pub postal_code: String,
    pub address: String,
    pub phone: String,
    #[sea_orm(column_type = "Double")]
    pub latitude: f64,
    #[sea_orm(column_type = "Double")]
    pub longitude: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::flagship_dishes::Entity")]
    FlagshipDishes,
    #[sea_orm(has_many = "super::tag_restos::Entity")]
    TagRestos,
    #[sea_orm(has_many = "super::avis::Entity")]
    Avis,
}

impl Related<super::flagship_dishes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FlagshipDishes.def()
    }
}

impl Related<super::tag_restos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TagRestos.def()
    }
}

impl Related<super::avis::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Avis.def()
    }
}

impl Related<super::tags::Entity> for Entity {
    fn to() -> RelationDef {
        super::tag_restos::Relation::Tag.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::tag_restos::Relation::Restaurant.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
