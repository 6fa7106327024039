//! Read-mostly marketing content: facilities and patient testimonials.

use crate::db::models::{Facility, FacilityCategory, Testimonial};
use crate::db::sqlite::{Storage, date_column_opt, enum_column, json_column, json_column_opt, now_rfc3339};
use crate::error::MedicareError;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, Sqlite};

const FACILITY_COLUMNS: &str = r#"id, name, description, category, features, images, capacity,
     location, staff, certification, types, coverage, benefits, is_active, "order""#;

const TESTIMONIAL_COLUMNS: &str = "id, patient_name, treatment, testimonial, rating, \
     treatment_date, patient_image, is_featured, is_published";

impl Storage {
    /// Active facilities in display order, optionally restricted to one category.
    pub async fn list_active_facilities(
        &self,
        category: Option<FacilityCategory>,
    ) -> Result<Vec<Facility>, MedicareError> {
        let rows = match category {
            Some(category) => {
                sqlx::query(&format!(
                    r#"SELECT {FACILITY_COLUMNS} FROM facilities
                       WHERE is_active = 1 AND category = ?
                       ORDER BY "order" ASC, id ASC"#
                ))
                .bind(category.as_str())
                .fetch_all(self.pool())
                .await?
            }
            None => {
                sqlx::query(&format!(
                    r#"SELECT {FACILITY_COLUMNS} FROM facilities
                       WHERE is_active = 1
                       ORDER BY "order" ASC, id ASC"#
                ))
                .fetch_all(self.pool())
                .await?
            }
        };
        rows.iter().map(Self::row_to_facility).collect()
    }

    /// Published testimonials flagged for the landing page.
    pub async fn featured_testimonials(&self, limit: i64) -> Result<Vec<Testimonial>, MedicareError> {
        let rows = sqlx::query(&format!(
            "SELECT {TESTIMONIAL_COLUMNS} FROM testimonials
             WHERE is_published = 1 AND is_featured = 1
             ORDER BY id LIMIT ?"
        ))
        .bind(limit)
        .fetch_all(self.pool())
        .await?;
        rows.iter().map(Self::row_to_testimonial).collect()
    }

    pub async fn insert_facility<'e, E>(executor: E, facility: &Facility) -> Result<i64, MedicareError>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let now = now_rfc3339();
        let images = facility.images.as_ref().map(serde_json::to_string).transpose()?;
        let types = facility.types.as_ref().map(serde_json::to_string).transpose()?;
        let benefits = facility.benefits.as_ref().map(serde_json::to_string).transpose()?;
        let result = sqlx::query(
            r#"
            INSERT INTO facilities (
                name, description, category, features, images, capacity, location,
                staff, certification, types, coverage, benefits, is_active, "order",
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&facility.name)
        .bind(&facility.description)
        .bind(facility.category.as_str())
        .bind(serde_json::to_string(&facility.features)?)
        .bind(images)
        .bind(&facility.capacity)
        .bind(&facility.location)
        .bind(&facility.staff)
        .bind(&facility.certification)
        .bind(types)
        .bind(&facility.coverage)
        .bind(benefits)
        .bind(facility.is_active)
        .bind(facility.order)
        .bind(&now)
        .bind(&now)
        .execute(executor)
        .await?;
        Ok(result.last_insert_rowid())
    }

    pub async fn insert_testimonial<'e, E>(
        executor: E,
        testimonial: &Testimonial,
    ) -> Result<i64, MedicareError>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let now = now_rfc3339();
        let result = sqlx::query(
            r#"
            INSERT INTO testimonials (
                patient_name, treatment, testimonial, rating, treatment_date,
                patient_image, is_featured, is_published, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&testimonial.patient_name)
        .bind(&testimonial.treatment)
        .bind(&testimonial.testimonial)
        .bind(testimonial.rating)
        .bind(testimonial.treatment_date.map(|d| d.format("%Y-%m-%d").to_string()))
        .bind(&testimonial.patient_image)
        .bind(testimonial.is_featured)
        .bind(testimonial.is_published)
        .bind(&now)
        .bind(&now)
        .execute(executor)
        .await?;
        Ok(result.last_insert_rowid())
    }

    fn row_to_facility(row: &SqliteRow) -> Result<Facility, MedicareError> {
        Ok(Facility {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            category: enum_column(row, "category")?,
            features: json_column(row, "features")?,
            images: json_column_opt(row, "images")?,
            capacity: row.try_get("capacity")?,
            location: row.try_get("location")?,
            staff: row.try_get("staff")?,
            certification: row.try_get("certification")?,
            types: json_column_opt(row, "types")?,
            coverage: row.try_get("coverage")?,
            benefits: json_column_opt(row, "benefits")?,
            is_active: row.try_get("is_active")?,
            order: row.try_get("order")?,
        })
    }

    fn row_to_testimonial(row: &SqliteRow) -> Result<Testimonial, MedicareError> {
        Ok(Testimonial {
            id: row.try_get("id")?,
            patient_name: row.try_get("patient_name")?,
            treatment: row.try_get("treatment")?,
            testimonial: row.try_get("testimonial")?,
            rating: row.try_get("rating")?,
            treatment_date: date_column_opt(row, "treatment_date")?,
            patient_image: row.try_get("patient_image")?,
            is_featured: row.try_get("is_featured")?,
            is_published: row.try_get("is_published")?,
        })
    }
}
