use sea_orm_migration::prelude::*;

use super::m20250301_000003_create_posts_table::Posts;

pub struct Migration;

const INDEX_NAME: &str = "idx-posts-created_at";

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20250301_000005_index_posts_created_at"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name(INDEX_NAME)
                    .table(Posts::Table)
                    .col(Posts::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name(INDEX_NAME).table(Posts::Table).to_owned())
            .await
    }
}
