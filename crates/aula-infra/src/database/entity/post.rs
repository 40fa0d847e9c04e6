//! Post entity for SeaORM.
//!
//! Comment references are kept in creation order in a JSON array column.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub course_id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub status: bool,
    pub comment_ids: Json,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseId",
        to = "super::course::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Course,
    #[sea_orm(has_many = "super::comment::Entity")]
    Comment,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for aula_core::domain::Post {
    fn from(model: Model) -> Self {
        let comment_ids = decode_comment_ids(model.id, &model.comment_ids);

        Self {
            id: model.id,
            user_id: model.user_id,
            course_id: model.course_id,
            title: model.title,
            content: model.content,
            status: model.status,
            comment_ids,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

/// Read the `comment_ids` array, keeping every entry that is a UUID string.
///
/// Bad entries are skipped one by one and logged.
pub(crate) fn decode_comment_ids(post_id: Uuid, value: &Json) -> Vec<Uuid> {
    let Some(entries) = value.as_array() else {
        tracing::warn!(%post_id, "comment_ids is not a JSON array");
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(|entry| {
            let id = entry.as_str().and_then(|s| Uuid::parse_str(s).ok());
            if id.is_none() {
                tracing::warn!(%post_id, %entry, "Skipping malformed comment id");
            }
            id
        })
        .collect()
}

/// Conversion from Domain Post to SeaORM ActiveModel.
impl From<aula_core::domain::Post> for ActiveModel {
    fn from(post: aula_core::domain::Post) -> Self {
        let comment_ids = Json::Array(
            post.comment_ids
                .iter()
                .map(|id| Json::String(id.to_string()))
                .collect(),
        );

        Self {
            id: Set(post.id),
            user_id: Set(post.user_id),
            course_id: Set(post.course_id),
            title: Set(post.title),
            content: Set(post.content),
            status: Set(post.status),
            comment_ids: Set(comment_ids),
            created_at: Set(post.created_at.into()),
            updated_at: Set(post.updated_at.into()),
        }
    }
}
