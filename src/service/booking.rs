use crate::db::Storage;
use crate::db::models::{AppointmentType, Gender, NewAppointment};
use crate::error::{FieldErrors, MedicareError};
use crate::types::lenient;
use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use tracing::info;

const MAX_TEXT: usize = 255;
const MAX_PHONE: usize = 20;
const MIN_AGE: i64 = 1;
const MAX_AGE: i64 = 150;

/// Raw booking form as submitted by the visitor. Every scalar arrives as
/// optional text so that missing and malformed values can be reported per
/// field instead of rejecting the whole body.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct AppointmentForm {
    #[serde(deserialize_with = "lenient::scalar")]
    pub doctor_id: Option<String>,
    #[serde(deserialize_with = "lenient::scalar")]
    pub appointment_date: Option<String>,
    #[serde(deserialize_with = "lenient::scalar")]
    pub appointment_time: Option<String>,
    #[serde(deserialize_with = "lenient::scalar")]
    pub patient_name: Option<String>,
    #[serde(deserialize_with = "lenient::scalar")]
    pub patient_phone: Option<String>,
    #[serde(deserialize_with = "lenient::scalar")]
    pub patient_email: Option<String>,
    #[serde(deserialize_with = "lenient::scalar")]
    pub patient_age: Option<String>,
    #[serde(deserialize_with = "lenient::scalar")]
    pub patient_gender: Option<String>,
    #[serde(deserialize_with = "lenient::scalar")]
    pub complaint: Option<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub symptoms: Vec<String>,
    #[serde(deserialize_with = "lenient::scalar")]
    pub emergency_contact: Option<String>,
    #[serde(rename = "type", deserialize_with = "lenient::scalar")]
    pub appointment_type: Option<String>,
    #[serde(deserialize_with = "lenient::scalar")]
    pub insurance: Option<String>,
}

fn label(field: &str) -> String {
    field.replace('_', " ")
}

/// Trimmed value, with blank treated as absent.
fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn required(errors: &mut FieldErrors, field: &str, value: Option<String>) -> Option<String> {
    let value = present(value);
    if value.is_none() {
        errors.add(field, format!("The {} field is required.", label(field)));
    }
    value
}

fn max_chars(errors: &mut FieldErrors, field: &str, value: Option<String>, max: usize) -> Option<String> {
    let value = value?;
    if value.chars().count() > max {
        errors.add(
            field,
            format!("The {} field must not be greater than {max} characters.", label(field)),
        );
        return None;
    }
    Some(value)
}

fn integer(errors: &mut FieldErrors, field: &str, value: Option<String>) -> Option<i64> {
    let value = value?;
    match value.parse::<i64>() {
        Ok(n) => Some(n),
        Err(_) => {
            errors.add(field, format!("The {} field must be an integer.", label(field)));
            None
        }
    }
}

fn one_of<T: std::str::FromStr>(errors: &mut FieldErrors, field: &str, value: Option<String>) -> Option<T> {
    let value = value?;
    match value.parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            errors.add(field, format!("The selected {} is invalid.", label(field)));
            None
        }
    }
}

/// Shape check only: one `@`, non-empty local part, dotted domain, no spaces.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.chars().any(char::is_whitespace)
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains("..")
}

/// Accepts `HH:MM` or `HH:MM:SS` and normalizes to `HH:MM`.
pub fn normalize_time(value: &str) -> Option<String> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .ok()
        .map(|t| t.format("%H:%M").to_string())
}

impl AppointmentForm {
    /// The submitted doctor id, if it parses as an integer.
    pub fn doctor_id_candidate(&self) -> Option<i64> {
        present(self.doctor_id.clone()).and_then(|v| v.parse().ok())
    }

    /// Check every field and collect all failures. `doctor_known` reports
    /// whether [`Self::doctor_id_candidate`] references an existing doctor.
    pub fn validate(self, today: NaiveDate, doctor_known: bool) -> Result<NewAppointment, FieldErrors> {
        let mut errors = FieldErrors::default();

        let doctor_id = required(&mut errors, "doctor_id", self.doctor_id);
        let doctor_id = integer(&mut errors, "doctor_id", doctor_id);
        let doctor_id = doctor_id.filter(|_| {
            if !doctor_known {
                errors.add("doctor_id", "The selected doctor id is invalid.");
            }
            doctor_known
        });

        let appointment_date = required(&mut errors, "appointment_date", self.appointment_date)
            .and_then(|raw| match NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
                Ok(date) if date > today => Some(date),
                Ok(_) => {
                    errors.add("appointment_date", "The appointment date field must be a date after today.");
                    None
                }
                Err(_) => {
                    errors.add("appointment_date", "The appointment date field must be a valid date.");
                    None
                }
            });

        let appointment_time = required(&mut errors, "appointment_time", self.appointment_time)
            .and_then(|raw| {
                let normalized = normalize_time(&raw);
                if normalized.is_none() {
                    errors.add("appointment_time", "The appointment time field must be a valid time.");
                }
                normalized
            });

        let patient_name = required(&mut errors, "patient_name", self.patient_name);
        let patient_name = max_chars(&mut errors, "patient_name", patient_name, MAX_TEXT);

        let patient_phone = required(&mut errors, "patient_phone", self.patient_phone);
        let patient_phone = max_chars(&mut errors, "patient_phone", patient_phone, MAX_PHONE);

        let patient_email = required(&mut errors, "patient_email", self.patient_email)
            .filter(|email| {
                let ok = is_valid_email(email);
                if !ok {
                    errors.add("patient_email", "The patient email field must be a valid email address.");
                }
                ok
            });
        let patient_email = max_chars(&mut errors, "patient_email", patient_email, MAX_TEXT);

        let patient_age = required(&mut errors, "patient_age", self.patient_age);
        let patient_age = integer(&mut errors, "patient_age", patient_age).filter(|age| {
            if *age < MIN_AGE {
                errors.add("patient_age", format!("The patient age field must be at least {MIN_AGE}."));
                false
            } else if *age > MAX_AGE {
                errors.add(
                    "patient_age",
                    format!("The patient age field must not be greater than {MAX_AGE}."),
                );
                false
            } else {
                true
            }
        });

        let patient_gender = required(&mut errors, "patient_gender", self.patient_gender);
        let patient_gender: Option<Gender> = one_of(&mut errors, "patient_gender", patient_gender);

        let complaint = required(&mut errors, "complaint", self.complaint);

        let symptoms: Vec<String> = self
            .symptoms
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let emergency_contact = max_chars(
            &mut errors,
            "emergency_contact",
            present(self.emergency_contact),
            MAX_PHONE,
        );

        let appointment_type = required(&mut errors, "type", self.appointment_type);
        let appointment_type: Option<AppointmentType> = one_of(&mut errors, "type", appointment_type);

        let insurance = max_chars(&mut errors, "insurance", present(self.insurance), MAX_TEXT);

        if !errors.is_empty() {
            return Err(errors);
        }
        let (
            Some(doctor_id),
            Some(appointment_date),
            Some(appointment_time),
            Some(patient_name),
            Some(patient_phone),
            Some(patient_email),
            Some(patient_age),
            Some(patient_gender),
            Some(complaint),
            Some(appointment_type),
        ) = (
            doctor_id,
            appointment_date,
            appointment_time,
            patient_name,
            patient_phone,
            patient_email,
            patient_age,
            patient_gender,
            complaint,
            appointment_type,
        )
        else {
            return Err(errors);
        };

        Ok(NewAppointment {
            doctor_id,
            appointment_date,
            appointment_time,
            appointment_type,
            patient_name,
            patient_phone,
            patient_email,
            patient_age,
            patient_gender,
            complaint,
            symptoms,
            emergency_contact,
            insurance,
        })
    }
}

/// Accepts booking requests: validates them and stores them as `pending`.
#[derive(Clone)]
pub struct BookingService {
    storage: Storage,
}

impl BookingService {
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    /// Validate `form` against `today` and insert it. Returns the new appointment id.
    pub async fn submit(&self, form: AppointmentForm, today: NaiveDate) -> Result<i64, MedicareError> {
        let doctor_known = match form.doctor_id_candidate() {
            Some(id) => self.storage.doctor_exists(id).await?,
            // missing or non-numeric ids are reported by `validate`
            None => true,
        };
        let appointment = form
            .validate(today, doctor_known)
            .map_err(MedicareError::Validation)?;

        let id = self.storage.insert_appointment(&appointment).await?;
        info!(
            appointment_id = id,
            doctor_id = appointment.doctor_id,
            date = %appointment.appointment_date,
            kind = %appointment.appointment_type,
            "appointment request stored"
        );
        Ok(id)
    }
}
