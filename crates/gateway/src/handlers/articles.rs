//! Article procedure handlers
//!
//! Thin adapters between JSON bodies and `ArticleService`. Mutations
//! answer 204 so clients know to refetch `article.getAll`.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::AppState;
use readlist_common::{
    articles::{ArticleIdInput, CreateArticleInput, ToggleReadInput},
    db::models::Article,
    errors::Result,
};

/// Article as returned to clients
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleResponse {
    pub id: i32,
    pub title: String,
    pub url: String,
    pub is_read: bool,
    pub created_at: String,
}

impl From<Article> for ArticleResponse {
    fn from(article: Article) -> Self {
        Self {
            id: article.id,
            title: article.title,
            url: article.url,
            is_read: article.is_read,
            created_at: article.created_at.to_rfc3339(),
        }
    }
}

/// `article.create`
pub async fn create_article(
    State(state): State<AppState>,
    Json(input): Json<CreateArticleInput>,
) -> Result<(StatusCode, Json<ArticleResponse>)> {
    let article = state.articles.create(input).await?;
    Ok((StatusCode::CREATED, Json(article.into())))
}

/// `article.getAll`
pub async fn list_articles(
    State(state): State<AppState>,
) -> Result<Json<Vec<ArticleResponse>>> {
    let articles = state.articles.get_all().await?;
    Ok(Json(articles.into_iter().map(Into::into).collect()))
}

/// `article.toggleRead`
pub async fn toggle_read(
    State(state): State<AppState>,
    Json(input): Json<ToggleReadInput>,
) -> Result<StatusCode> {
    state.articles.toggle_read(input).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `article.flipRead`
pub async fn flip_read(
    State(state): State<AppState>,
    Json(input): Json<ArticleIdInput>,
) -> Result<StatusCode> {
    state.articles.flip_read(input).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `article.delete`
pub async fn delete_article(
    State(state): State<AppState>,
    Json(input): Json<ArticleIdInput>,
) -> Result<StatusCode> {
    state.articles.delete(input).await?;
    Ok(StatusCode::NO_CONTENT)
}
