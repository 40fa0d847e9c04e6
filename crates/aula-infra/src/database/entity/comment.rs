//! Comment entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "comments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name_user: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub post_id: Uuid,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::post::Entity",
        from = "Column::PostId",
        to = "super::post::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Post,
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for aula_core::domain::Comment {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name_user: model.name_user,
            content: model.content,
            post_id: model.post_id,
            created_at: model.created_at.into(),
        }
    }
}

impl From<aula_core::domain::Comment> for ActiveModel {
    fn from(comment: aula_core::domain::Comment) -> Self {
        Self {
            id: Set(comment.id),
            name_user: Set(comment.name_user),
            content: Set(comment.content),
            post_id: Set(comment.post_id),
            created_at: Set(comment.created_at.into()),
        }
    }
}
