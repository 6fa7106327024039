use crate::db::models::Article;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Publication date as shown to readers, e.g. `06 Jul 2025`.
pub fn formatted_date(at: &DateTime<Utc>) -> String {
    at.format("%d %b %Y").to_string()
}

#[derive(Debug, Clone, Serialize)]
pub struct ArticleSummary {
    pub id: i64,
    pub title: String,
    pub excerpt: String,
    pub author: String,
    pub category: String,
    pub read_time: String,
    pub views: i64,
    pub likes: i64,
    pub image: Option<String>,
    pub featured: bool,
    pub formatted_date: String,
}

impl From<Article> for ArticleSummary {
    fn from(a: Article) -> Self {
        Self {
            formatted_date: formatted_date(&a.created_at),
            id: a.id,
            title: a.title,
            excerpt: a.excerpt,
            author: a.author,
            category: a.category,
            read_time: a.read_time,
            views: a.views,
            likes: a.likes,
            image: a.image,
            featured: a.featured,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ArticleDetail {
    #[serde(flatten)]
    pub summary: ArticleSummary,
    pub content: String,
}

impl From<Article> for ArticleDetail {
    fn from(mut a: Article) -> Self {
        let content = std::mem::take(&mut a.content);
        Self {
            summary: a.into(),
            content,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ArticleLikes {
    pub id: i64,
    pub likes: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formatted_date_uses_day_short_month_year() {
        let at = Utc.with_ymd_and_hms(2025, 7, 6, 11, 47, 44).unwrap();
        assert_eq!(formatted_date(&at), "06 Jul 2025");
    }
}
