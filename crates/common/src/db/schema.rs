//! Schema bootstrap
//!
//! Creates the article table and its chronological index when missing.
//! Statements are derived from the entity so the same code serves
//! PostgreSQL in production and SQLite in tests.

use crate::db::models::{ArticleColumn, ArticleEntity};
use crate::errors::Result;
use sea_orm::sea_query::Index;
use sea_orm::{ConnectionTrait, DatabaseConnection, Schema};
use tracing::info;

/// Name of the index backing newest-first listing
pub const CREATED_AT_INDEX: &str = "article_created_idx";

/// Create the article table and index if they do not exist yet
pub async fn ensure_schema(conn: &DatabaseConnection) -> Result<()> {
    let backend = conn.get_database_backend();
    let schema = Schema::new(backend);

    let mut table = schema.create_table_from_entity(ArticleEntity);
    table.if_not_exists();
    conn.execute(backend.build(&table)).await?;

    let index = Index::create()
        .name(CREATED_AT_INDEX)
        .table(ArticleEntity)
        .col(ArticleColumn::CreatedAt)
        .if_not_exists()
        .to_owned();
    conn.execute(backend.build(&index)).await?;

    info!(index = CREATED_AT_INDEX, "Article schema ready");
    Ok(())
}
