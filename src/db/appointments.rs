use crate::db::models::{Appointment, AppointmentDoctor, AppointmentStatus, NewAppointment};
use crate::db::sqlite::{Storage, date_column, enum_column, json_column_opt, now_rfc3339, timestamp_column};
use crate::error::MedicareError;
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

impl Storage {
    /// Insert a validated booking with status `pending`. Returns the row id.
    pub async fn insert_appointment(&self, appt: &NewAppointment) -> Result<i64, MedicareError> {
        let now = now_rfc3339();
        let result = sqlx::query(
            r#"
            INSERT INTO appointments (
                user_id, doctor_id, appointment_date, appointment_time, status, type,
                patient_name, patient_phone, patient_email, patient_age, patient_gender,
                complaint, symptoms, emergency_contact, insurance, notes,
                created_at, updated_at
            ) VALUES (NULL, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, NULL, ?, ?)
            "#,
        )
        .bind(appt.doctor_id)
        .bind(appt.appointment_date.format("%Y-%m-%d").to_string())
        .bind(&appt.appointment_time)
        .bind(AppointmentStatus::Pending.as_str())
        .bind(appt.appointment_type.as_str())
        .bind(&appt.patient_name)
        .bind(&appt.patient_phone)
        .bind(&appt.patient_email)
        .bind(appt.patient_age)
        .bind(appt.patient_gender.as_str())
        .bind(&appt.complaint)
        .bind(serde_json::to_string(&appt.symptoms)?)
        .bind(&appt.emergency_contact)
        .bind(&appt.insurance)
        .bind(&now)
        .bind(&now)
        .execute(self.pool())
        .await?;
        Ok(result.last_insert_rowid())
    }

    /// Load an appointment together with its doctor.
    pub async fn get_appointment(&self, id: i64) -> Result<Option<Appointment>, MedicareError> {
        let row = sqlx::query(
            r#"SELECT a.id, a.user_id, a.appointment_date, a.appointment_time, a.status,
                      a.type, a.patient_name, a.patient_phone, a.patient_email,
                      a.patient_age, a.patient_gender, a.complaint, a.symptoms,
                      a.emergency_contact, a.insurance, a.notes, a.created_at,
                      d.id AS doctor_id, d.name AS doctor_name,
                      d.specialty AS doctor_specialty,
                      d.profile_image AS doctor_profile_image
               FROM appointments a
               JOIN doctors d ON d.id = a.doctor_id
               WHERE a.id = ?"#,
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await?;
        row.as_ref().map(Self::row_to_appointment).transpose()
    }

    pub async fn count_appointments(&self) -> Result<i64, MedicareError> {
        let rec: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM appointments")
            .fetch_one(self.pool())
            .await?;
        Ok(rec.0)
    }

    fn row_to_appointment(row: &SqliteRow) -> Result<Appointment, MedicareError> {
        let symptoms: Option<Vec<String>> = json_column_opt(row, "symptoms")?;
        Ok(Appointment {
            id: row.try_get("id")?,
            user_id: row.try_get("user_id")?,
            appointment_date: date_column(row, "appointment_date")?,
            appointment_time: row.try_get("appointment_time")?,
            status: enum_column(row, "status")?,
            appointment_type: enum_column(row, "type")?,
            patient_name: row.try_get("patient_name")?,
            patient_phone: row.try_get("patient_phone")?,
            patient_email: row.try_get("patient_email")?,
            patient_age: row.try_get("patient_age")?,
            patient_gender: enum_column(row, "patient_gender")?,
            complaint: row.try_get("complaint")?,
            symptoms: symptoms.unwrap_or_default(),
            emergency_contact: row.try_get("emergency_contact")?,
            insurance: row.try_get("insurance")?,
            notes: row.try_get("notes")?,
            created_at: timestamp_column(row, "created_at")?,
            doctor: AppointmentDoctor {
                id: row.try_get("doctor_id")?,
                name: row.try_get("doctor_name")?,
                specialty: row.try_get("doctor_specialty")?,
                profile_image: row.try_get("doctor_profile_image")?,
            },
        })
    }
}
