//! Article service
//!
//! Validates and normalizes procedure inputs, then issues exactly one
//! store statement per call. Toggle and delete on a missing id succeed
//! silently.

mod url;

pub use url::{has_http_scheme, normalize_url, DEFAULT_SCHEME};

use crate::db::models::Article;
use crate::db::{ArticleStore, DbPool, NewArticle, Repository};
use crate::errors::Result;
use crate::metrics::{self, OperationMetrics};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, info};
use validator::Validate;

/// Input for `article.create`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateArticleInput {
    #[validate(length(min = 1, max = 512, message = "title must be between 1 and 512 characters"))]
    pub title: String,

    #[validate(length(min = 1, message = "url must not be empty"))]
    pub url: String,
}

impl CreateArticleInput {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}

/// Input for `article.toggleRead`
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleReadInput {
    pub id: i32,
    /// Read flag as the caller last saw it
    pub current_state: bool,
}

/// Input for procedures addressing one article by id
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ArticleIdInput {
    pub id: i32,
}

/// The four reading-list procedures plus the atomic flip
#[derive(Clone)]
pub struct ArticleService {
    store: Arc<dyn ArticleStore>,
}

impl ArticleService {
    pub fn new(store: Arc<dyn ArticleStore>) -> Self {
        Self { store }
    }

    /// Service backed by the SQL repository
    pub fn from_pool(pool: DbPool) -> Self {
        Self::new(Arc::new(Repository::new(pool)))
    }

    /// Validate, normalize the URL scheme and insert an unread article
    pub async fn create(&self, input: CreateArticleInput) -> Result<Article> {
        if let Err(errors) = input.validate() {
            metrics::record_rejected("create");
            return Err(errors.into());
        }

        let article = NewArticle {
            url: normalize_url(&input.url),
            title: input.title,
            created_at: Utc::now(),
        };

        let article = timed("create", self.store.insert_article(article)).await?;

        info!(
            article_id = article.id,
            url = %article.url,
            "Article created"
        );

        Ok(article)
    }

    /// Every article, most recently created first
    pub async fn get_all(&self) -> Result<Vec<Article>> {
        let articles = timed("get_all", self.store.list_articles()).await?;
        debug!(count = articles.len(), "Articles listed");
        Ok(articles)
    }

    /// Set the read flag to the negation of the caller's view of it.
    ///
    /// Two callers holding the same stale state both write the same
    /// value; `flip_read` avoids that.
    pub async fn toggle_read(&self, input: ToggleReadInput) -> Result<()> {
        let is_read = !input.current_state;
        let affected = timed("toggle_read", self.store.set_read(input.id, is_read)).await?;
        log_mutation("toggle_read", input.id, affected);
        Ok(())
    }

    /// Negate the stored read flag in a single statement
    pub async fn flip_read(&self, input: ArticleIdInput) -> Result<()> {
        let affected = timed("flip_read", self.store.flip_read(input.id)).await?;
        log_mutation("flip_read", input.id, affected);
        Ok(())
    }

    /// Remove the article if present
    pub async fn delete(&self, input: ArticleIdInput) -> Result<()> {
        let affected = timed("delete", self.store.delete_article(input.id)).await?;
        log_mutation("delete", input.id, affected);
        Ok(())
    }
}

async fn timed<T>(operation: &'static str, call: impl Future<Output = Result<T>>) -> Result<T> {
    let metrics = OperationMetrics::start(operation);
    let result = call.await;
    metrics.finish(result.is_ok());
    result
}

fn log_mutation(operation: &'static str, id: i32, affected: u64) {
    if affected == 0 {
        debug!(operation, article_id = id, "No article matched; nothing changed");
    } else {
        info!(operation, article_id = id, "Article updated");
    }
}
