//! Course entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
    pub status: bool,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::post::Entity")]
    Post,
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for aula_core::domain::Course {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            status: model.status,
            created_at: model.created_at.into(),
        }
    }
}

impl From<aula_core::domain::Course> for ActiveModel {
    fn from(course: aula_core::domain::Course) -> Self {
        Self {
            id: Set(course.id),
            name: Set(course.name),
            status: Set(course.status),
            created_at: Set(course.created_at.into()),
        }
    }
}
