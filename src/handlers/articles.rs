use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::db::ArticleFilter;
use crate::handlers::non_blank;
use crate::middleware::page_context::PageContext;
use crate::middleware::request_parts::{QueryParams, RecordId};
use crate::types::Page;
use crate::types::article::{ArticleDetail, ArticleLikes, ArticleSummary};
use crate::{MedicareError, router::MedicareState};

const FEATURED_ARTICLES: i64 = 3;
const RELATED_ARTICLES: i64 = 3;

#[derive(Debug, Default, Deserialize)]
pub struct ArticleQuery {
    pub category: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleIndexProps {
    pub articles: Vec<ArticleSummary>,
    pub featured_articles: Vec<ArticleSummary>,
    pub categories: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleShowProps {
    pub article: ArticleDetail,
    pub related_articles: Vec<ArticleSummary>,
}

/// GET /articles -> published articles, newest first, plus featured picks.
pub async fn article_index(
    State(state): State<MedicareState>,
    QueryParams(query): QueryParams<ArticleQuery>,
    page: PageContext,
) -> Result<Page<ArticleIndexProps>, MedicareError> {
    let filter = ArticleFilter {
        category: non_blank(query.category),
        search: non_blank(query.search),
    };

    let articles = state
        .storage
        .list_published_articles(&filter)
        .await?
        .into_iter()
        .map(ArticleSummary::from)
        .collect();
    let featured_articles = state
        .storage
        .featured_articles(FEATURED_ARTICLES)
        .await?
        .into_iter()
        .map(ArticleSummary::from)
        .collect();
    let categories = state.storage.article_categories().await?;

    Ok(page.render(
        "articles",
        ArticleIndexProps {
            articles,
            featured_articles,
            categories,
        },
    ))
}

/// GET /articles/{id} -> counts a view, then renders the article.
pub async fn article_show(
    State(state): State<MedicareState>,
    RecordId(id): RecordId,
    page: PageContext,
) -> Result<Page<ArticleShowProps>, MedicareError> {
    let article = state
        .storage
        .record_article_view(id)
        .await?
        .ok_or_else(|| MedicareError::not_found("article"))?;

    let related_articles = state
        .storage
        .related_articles(&article, RELATED_ARTICLES)
        .await?
        .into_iter()
        .map(ArticleSummary::from)
        .collect();

    Ok(page.render(
        "article-detail",
        ArticleShowProps {
            article: article.into(),
            related_articles,
        },
    ))
}

/// POST /articles/{id}/like
pub async fn article_like(
    State(state): State<MedicareState>,
    RecordId(id): RecordId,
) -> Result<Json<ArticleLikes>, MedicareError> {
    let likes = state
        .storage
        .like_article(id)
        .await?
        .ok_or_else(|| MedicareError::not_found("article"))?;
    Ok(Json(ArticleLikes { id, likes }))
}
