use crate::db::models::Article;
use crate::db::sqlite::{Storage, like_pattern, now_rfc3339, timestamp_column};
use crate::error::MedicareError;
use sqlx::sqlite::SqliteRow;
use sqlx::{QueryBuilder, Row, Sqlite};

const ARTICLE_COLUMNS: &str = "id, title, excerpt, content, author, category, read_time, \
     views, likes, image, featured, published, created_at";

#[derive(Debug, Default, Clone)]
pub struct ArticleFilter {
    /// Exact category name.
    pub category: Option<String>,
    /// Substring of title, excerpt or author.
    pub search: Option<String>,
}

impl Storage {
    /// Published articles matching the filter, newest first.
    pub async fn list_published_articles(
        &self,
        filter: &ArticleFilter,
    ) -> Result<Vec<Article>, MedicareError> {
        let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new(format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE published = 1"
        ));
        if let Some(category) = filter.category.as_deref() {
            qb.push(" AND category = ").push_bind(category.to_string());
        }
        if let Some(search) = filter.search.as_deref() {
            let pattern = like_pattern(search);
            qb.push(" AND (title LIKE ")
                .push_bind(pattern.clone())
                .push(" ESCAPE '\\' OR excerpt LIKE ")
                .push_bind(pattern.clone())
                .push(" ESCAPE '\\' OR author LIKE ")
                .push_bind(pattern)
                .push(" ESCAPE '\\')");
        }
        qb.push(" ORDER BY created_at DESC, id DESC");

        let rows = qb.build().fetch_all(self.pool()).await?;
        rows.iter().map(Self::row_to_article).collect()
    }

    pub async fn featured_articles(&self, limit: i64) -> Result<Vec<Article>, MedicareError> {
        let rows = sqlx::query(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles
             WHERE published = 1 AND featured = 1
             ORDER BY id LIMIT ?"
        ))
        .bind(limit)
        .fetch_all(self.pool())
        .await?;
        rows.iter().map(Self::row_to_article).collect()
    }

    /// Distinct categories across all articles, published or not.
    pub async fn article_categories(&self) -> Result<Vec<String>, MedicareError> {
        let rows: Vec<(String,)> =
            sqlx::query_as("SELECT DISTINCT category FROM articles ORDER BY category")
                .fetch_all(self.pool())
                .await?;
        Ok(rows.into_iter().map(|r| r.0).collect())
    }

    pub async fn get_published_article(&self, id: i64) -> Result<Option<Article>, MedicareError> {
        let row = sqlx::query(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = ? AND published = 1"
        ))
        .bind(id)
        .fetch_optional(self.pool())
        .await?;
        row.as_ref().map(Self::row_to_article).transpose()
    }

    /// Bump the view counter of a published article and return the updated row.
    pub async fn record_article_view(&self, id: i64) -> Result<Option<Article>, MedicareError> {
        let mut tx = self.pool().begin().await?;
        let updated = sqlx::query(
            "UPDATE articles SET views = views + 1, updated_at = ? WHERE id = ? AND published = 1",
        )
        .bind(now_rfc3339())
        .bind(id)
        .execute(&mut *tx)
        .await?;
        if updated.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(None);
        }
        let row = sqlx::query(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = ?"
        ))
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;
        Self::row_to_article(&row).map(Some)
    }

    /// Bump the like counter of a published article. Returns the new count.
    pub async fn like_article(&self, id: i64) -> Result<Option<i64>, MedicareError> {
        let mut tx = self.pool().begin().await?;
        let updated = sqlx::query(
            "UPDATE articles SET likes = likes + 1, updated_at = ? WHERE id = ? AND published = 1",
        )
        .bind(now_rfc3339())
        .bind(id)
        .execute(&mut *tx)
        .await?;
        if updated.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(None);
        }
        let rec: (i64,) = sqlx::query_as("SELECT likes FROM articles WHERE id = ?")
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(Some(rec.0))
    }

    /// Other published articles in the same category.
    pub async fn related_articles(
        &self,
        article: &Article,
        limit: i64,
    ) -> Result<Vec<Article>, MedicareError> {
        let rows = sqlx::query(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles
             WHERE published = 1 AND category = ? AND id != ?
             ORDER BY id LIMIT ?"
        ))
        .bind(&article.category)
        .bind(article.id)
        .bind(limit)
        .fetch_all(self.pool())
        .await?;
        rows.iter().map(Self::row_to_article).collect()
    }

    /// Insert an article and return its id. `article.id` is ignored; the
    /// given `created_at` is kept so seeded content sorts deterministically.
    pub async fn insert_article<'e, E>(executor: E, article: &Article) -> Result<i64, MedicareError>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let created_at = article.created_at.to_rfc3339();
        let result = sqlx::query(
            r#"
            INSERT INTO articles (
                title, excerpt, content, author, category, read_time,
                views, likes, image, featured, published, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&article.title)
        .bind(&article.excerpt)
        .bind(&article.content)
        .bind(&article.author)
        .bind(&article.category)
        .bind(&article.read_time)
        .bind(article.views)
        .bind(article.likes)
        .bind(&article.image)
        .bind(article.featured)
        .bind(article.published)
        .bind(&created_at)
        .bind(&created_at)
        .execute(executor)
        .await?;
        Ok(result.last_insert_rowid())
    }

    fn row_to_article(row: &SqliteRow) -> Result<Article, MedicareError> {
        Ok(Article {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            excerpt: row.try_get("excerpt")?,
            content: row.try_get("content")?,
            author: row.try_get("author")?,
            category: row.try_get("category")?,
            read_time: row.try_get("read_time")?,
            views: row.try_get("views")?,
            likes: row.try_get("likes")?,
            image: row.try_get("image")?,
            featured: row.try_get("featured")?,
            published: row.try_get("published")?,
            created_at: timestamp_column(row, "created_at")?,
        })
    }
}
