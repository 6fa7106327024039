use crate::db::models::Doctor;
use crate::db::sqlite::{Storage, json_column, json_column_opt, like_pattern, now_rfc3339, timestamp_column};
use crate::error::MedicareError;
use sqlx::sqlite::SqliteRow;
use sqlx::{QueryBuilder, Row, Sqlite};

const DOCTOR_COLUMNS: &str = "id, name, specialty, experience, education, certifications, \
     languages, rating, review_count, price, bio, profile_image, schedule, \
     consultation_types, is_available, created_at";

/// Optional narrowing applied to the public doctor directory.
#[derive(Debug, Default, Clone)]
pub struct DoctorFilter {
    /// Substring of the specialty name.
    pub specialty: Option<String>,
    /// Substring of the doctor's name or specialty.
    pub search: Option<String>,
    /// Exact member of `consultation_types`.
    pub consultation_type: Option<String>,
}

impl Storage {
    /// Available doctors matching every filter that is set, in id order.
    pub async fn list_available_doctors(
        &self,
        filter: &DoctorFilter,
    ) -> Result<Vec<Doctor>, MedicareError> {
        let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new(format!(
            "SELECT {DOCTOR_COLUMNS} FROM doctors WHERE is_available = 1"
        ));

        if let Some(specialty) = filter.specialty.as_deref() {
            qb.push(" AND specialty LIKE ")
                .push_bind(like_pattern(specialty))
                .push(" ESCAPE '\\'");
        }
        if let Some(search) = filter.search.as_deref() {
            let pattern = like_pattern(search);
            qb.push(" AND (name LIKE ")
                .push_bind(pattern.clone())
                .push(" ESCAPE '\\' OR specialty LIKE ")
                .push_bind(pattern)
                .push(" ESCAPE '\\')");
        }
        if let Some(kind) = filter.consultation_type.as_deref() {
            qb.push(" AND EXISTS (SELECT 1 FROM json_each(doctors.consultation_types) WHERE value = ")
                .push_bind(kind.to_string())
                .push(")");
        }
        qb.push(" ORDER BY id");

        let rows = qb.build().fetch_all(self.pool()).await?;
        rows.iter().map(Self::row_to_doctor).collect()
    }

    /// First `limit` available doctors, for the landing page.
    pub async fn featured_doctors(&self, limit: i64) -> Result<Vec<Doctor>, MedicareError> {
        let rows = sqlx::query(&format!(
            "SELECT {DOCTOR_COLUMNS} FROM doctors WHERE is_available = 1 ORDER BY id LIMIT ?"
        ))
        .bind(limit)
        .fetch_all(self.pool())
        .await?;
        rows.iter().map(Self::row_to_doctor).collect()
    }

    pub async fn get_doctor(&self, id: i64) -> Result<Option<Doctor>, MedicareError> {
        let row = sqlx::query(&format!("SELECT {DOCTOR_COLUMNS} FROM doctors WHERE id = ?"))
            .bind(id)
            .fetch_optional(self.pool())
            .await?;
        row.as_ref().map(Self::row_to_doctor).transpose()
    }

    pub async fn doctor_exists(&self, id: i64) -> Result<bool, MedicareError> {
        let rec: (i64,) = sqlx::query_as("SELECT EXISTS (SELECT 1 FROM doctors WHERE id = ?)")
            .bind(id)
            .fetch_one(self.pool())
            .await?;
        Ok(rec.0 != 0)
    }

    /// Distinct specialties across all doctors, available or not.
    pub async fn doctor_specialties(&self) -> Result<Vec<String>, MedicareError> {
        let rows: Vec<(String,)> =
            sqlx::query_as("SELECT DISTINCT specialty FROM doctors ORDER BY specialty")
                .fetch_all(self.pool())
                .await?;
        Ok(rows.into_iter().map(|r| r.0).collect())
    }

    pub async fn count_doctors(&self) -> Result<i64, MedicareError> {
        let rec: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM doctors")
            .fetch_one(self.pool())
            .await?;
        Ok(rec.0)
    }

    /// Insert a doctor profile and return its id. `doctor.id` is ignored.
    pub async fn insert_doctor<'e, E>(executor: E, doctor: &Doctor) -> Result<i64, MedicareError>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let now = now_rfc3339();
        let schedule = doctor
            .schedule
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;
        let result = sqlx::query(
            r#"
            INSERT INTO doctors (
                name, specialty, experience, education, certifications, languages,
                rating, review_count, price, bio, profile_image, schedule,
                consultation_types, is_available, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&doctor.name)
        .bind(&doctor.specialty)
        .bind(&doctor.experience)
        .bind(serde_json::to_string(&doctor.education)?)
        .bind(serde_json::to_string(&doctor.certifications)?)
        .bind(serde_json::to_string(&doctor.languages)?)
        .bind(doctor.rating)
        .bind(doctor.review_count)
        .bind(&doctor.price)
        .bind(&doctor.bio)
        .bind(&doctor.profile_image)
        .bind(schedule)
        .bind(serde_json::to_string(&doctor.consultation_types)?)
        .bind(doctor.is_available)
        .bind(&now)
        .bind(&now)
        .execute(executor)
        .await?;
        Ok(result.last_insert_rowid())
    }

    fn row_to_doctor(row: &SqliteRow) -> Result<Doctor, MedicareError> {
        Ok(Doctor {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            specialty: row.try_get("specialty")?,
            experience: row.try_get("experience")?,
            education: json_column(row, "education")?,
            certifications: json_column(row, "certifications")?,
            languages: json_column(row, "languages")?,
            rating: row.try_get("rating")?,
            review_count: row.try_get("review_count")?,
            price: row.try_get("price")?,
            bio: row.try_get("bio")?,
            profile_image: row.try_get("profile_image")?,
            schedule: json_column_opt(row, "schedule")?,
            consultation_types: json_column(row, "consultation_types")?,
            is_available: row.try_get("is_available")?,
            created_at: timestamp_column(row, "created_at")?,
        })
    }
}
