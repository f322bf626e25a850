//! Repository pattern for database operations
//!
//! Every method maps to exactly one SQL statement against the
//! article table.

use crate::db::models::*;
use crate::db::DbPool;
use crate::errors::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

/// Values for a row about to be inserted
#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

/// Storage operations the article service depends on
///
/// Update and delete report affected rows; zero is not an error.
#[async_trait]
pub trait ArticleStore: Send + Sync {
    /// Insert an unread article and return the stored row
    async fn insert_article(&self, article: NewArticle) -> Result<Article>;

    /// All articles, newest first
    async fn list_articles(&self) -> Result<Vec<Article>>;

    /// Overwrite the read flag
    async fn set_read(&self, id: i32, is_read: bool) -> Result<u64>;

    /// Negate the read flag in place
    async fn flip_read(&self, id: i32) -> Result<u64>;

    /// Hard delete by id
    async fn delete_article(&self, id: i32) -> Result<u64>;
}

/// Repository for data access operations
#[derive(Clone)]
pub struct Repository {
    pool: DbPool,
}

impl Repository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> &DatabaseConnection {
        self.pool.conn()
    }
}

#[async_trait]
impl ArticleStore for Repository {
    async fn insert_article(&self, article: NewArticle) -> Result<Article> {
        let row = ArticleActiveModel {
            title: Set(article.title),
            url: Set(article.url),
            is_read: Set(false),
            created_at: Set(article.created_at.into()),
            ..Default::default()
        };

        row.insert(self.conn()).await.map_err(Into::into)
    }

    async fn list_articles(&self) -> Result<Vec<Article>> {
        ArticleEntity::find()
            .order_by_desc(ArticleColumn::CreatedAt)
            .order_by_desc(ArticleColumn::Id)
            .all(self.conn())
            .await
            .map_err(Into::into)
    }

    async fn set_read(&self, id: i32, is_read: bool) -> Result<u64> {
        let result = ArticleEntity::update_many()
            .col_expr(ArticleColumn::IsRead, Expr::value(is_read))
            .filter(ArticleColumn::Id.eq(id))
            .exec(self.conn())
            .await?;

        Ok(result.rows_affected)
    }

    async fn flip_read(&self, id: i32) -> Result<u64> {
        let result = ArticleEntity::update_many()
            .col_expr(ArticleColumn::IsRead, Expr::col(ArticleColumn::IsRead).not())
            .filter(ArticleColumn::Id.eq(id))
            .exec(self.conn())
            .await?;

        Ok(result.rows_affected)
    }

    async fn delete_article(&self, id: i32) -> Result<u64> {
        let result = ArticleEntity::delete_by_id(id)
            .exec(self.conn())
            .await?;

        Ok(result.rows_affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseConfig;
    use crate::db::schema::ensure_schema;
    use chrono::Duration;

    async fn repository() -> Repository {
        let config = DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
            ..DatabaseConfig::default()
        };
        let pool = DbPool::new(&config).await.unwrap();
        ensure_schema(pool.conn()).await.unwrap();
        Repository::new(pool)
    }

    fn new_article(title: &str, created_at: DateTime<Utc>) -> NewArticle {
        NewArticle {
            title: title.to_string(),
            url: format!("https://example.com/{}", title),
            created_at,
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_id_and_unread() {
        let repo = repository().await;
        let now = Utc::now();

        let first = repo.insert_article(new_article("first", now)).await.unwrap();
        let second = repo.insert_article(new_article("second", now)).await.unwrap();

        assert!(second.id > first.id);
        assert!(!first.is_read);
        assert_eq!(first.url, "https://example.com/first");
        assert_eq!(first.created_at.timestamp(), now.timestamp());
    }

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let repo = repository().await;
        let base = Utc::now();

        repo.insert_article(new_article("middle", base - Duration::seconds(60))).await.unwrap();
        repo.insert_article(new_article("oldest", base - Duration::seconds(120))).await.unwrap();
        repo.insert_article(new_article("newest", base)).await.unwrap();

        let titles: Vec<_> = repo
            .list_articles()
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.title)
            .collect();
        assert_eq!(titles, vec!["newest", "middle", "oldest"]);
    }

    #[tokio::test]
    async fn test_list_breaks_timestamp_ties_by_id() {
        let repo = repository().await;
        let now = Utc::now();

        let a = repo.insert_article(new_article("a", now)).await.unwrap();
        let b = repo.insert_article(new_article("b", now)).await.unwrap();

        let ids: Vec<_> = repo.list_articles().await.unwrap().into_iter().map(|x| x.id).collect();
        assert_eq!(ids, vec![b.id, a.id]);
    }

    #[tokio::test]
    async fn test_set_read_and_missing_row() {
        let repo = repository().await;
        let article = repo.insert_article(new_article("a", Utc::now())).await.unwrap();

        assert_eq!(repo.set_read(article.id, true).await.unwrap(), 1);
        assert!(repo.list_articles().await.unwrap()[0].is_read);

        assert_eq!(repo.set_read(article.id + 100, true).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_flip_read_negates_in_place() {
        let repo = repository().await;
        let article = repo.insert_article(new_article("a", Utc::now())).await.unwrap();

        repo.flip_read(article.id).await.unwrap();
        assert!(repo.list_articles().await.unwrap()[0].is_read);

        repo.flip_read(article.id).await.unwrap();
        assert!(!repo.list_articles().await.unwrap()[0].is_read);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let repo = repository().await;
        let keep = repo.insert_article(new_article("keep", Utc::now())).await.unwrap();
        let gone = repo.insert_article(new_article("gone", Utc::now())).await.unwrap();

        assert_eq!(repo.delete_article(gone.id).await.unwrap(), 1);
        assert_eq!(repo.delete_article(gone.id).await.unwrap(), 0);

        let remaining = repo.list_articles().await.unwrap();
        assert_eq!(remaining, vec![keep]);
    }

    #[tokio::test]
    async fn test_pool_ping() {
        let repo = repository().await;
        assert!(repo.pool.ping().await.is_ok());
    }
}
