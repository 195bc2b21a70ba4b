use sea_orm::entity::prelude::*;

/// Free-form label attached to restaurants through `tag_restos`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tags")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub label: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::tag_restos::Entity")]
    TagRestos,
}

impl Related<super::tag_restos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TagRestos.def()
    }
}

impl Related<super::restaurants::Entity> for Entity {
    fn to() -> RelationDef {
        super::tag_restos::Relation::Restaurant.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::tag_restos::Relation::Tag.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
