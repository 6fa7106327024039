use crate::db::models::{Appointment, AppointmentDoctor, AppointmentStatus, AppointmentType, Gender};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct DoctorRef {
    pub id: i64,
    pub name: String,
    pub specialty: String,
    pub profile_image: Option<String>,
}

impl From<AppointmentDoctor> for DoctorRef {
    fn from(d: AppointmentDoctor) -> Self {
        Self {
            id: d.id,
            name: d.name,
            specialty: d.specialty,
            profile_image: d.profile_image,
        }
    }
}

/// Confirmation shown right after a booking is submitted.
#[derive(Debug, Clone, Serialize)]
pub struct AppointmentSummary {
    pub id: i64,
    pub appointment_date: String,
    pub appointment_time: String,
    pub status: AppointmentStatus,
    pub patient_name: String,
    pub patient_phone: String,
    pub patient_email: String,
    pub notes: Option<String>,
    pub doctor: DoctorRef,
}

impl From<Appointment> for AppointmentSummary {
    fn from(a: Appointment) -> Self {
        Self {
            id: a.id,
            appointment_date: a.appointment_date.format("%Y-%m-%d").to_string(),
            appointment_time: a.appointment_time,
            status: a.status,
            patient_name: a.patient_name,
            patient_phone: a.patient_phone,
            patient_email: a.patient_email,
            notes: a.notes,
            doctor: a.doctor.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AppointmentDetail {
    pub id: i64,
    pub appointment_date: String,
    pub appointment_time: String,
    pub status: AppointmentStatus,
    #[serde(rename = "type")]
    pub appointment_type: AppointmentType,
    pub patient_name: String,
    pub patient_phone: String,
    pub patient_email: String,
    pub patient_age: i64,
    pub patient_gender: Gender,
    pub complaint: String,
    pub symptoms: Vec<String>,
    pub emergency_contact: Option<String>,
    pub insurance: Option<String>,
    pub notes: Option<String>,
    pub created_at: String,
    pub doctor: DoctorRef,
}

impl From<Appointment> for AppointmentDetail {
    fn from(a: Appointment) -> Self {
        Self {
            id: a.id,
            appointment_date: a.appointment_date.format("%Y-%m-%d").to_string(),
            appointment_time: a.appointment_time,
            status: a.status,
            appointment_type: a.appointment_type,
            patient_name: a.patient_name,
            patient_phone: a.patient_phone,
            patient_email: a.patient_email,
            patient_age: a.patient_age,
            patient_gender: a.patient_gender,
            complaint: a.complaint,
            symptoms: a.symptoms,
            emergency_contact: a.emergency_contact,
            insurance: a.insurance,
            notes: a.notes,
            created_at: a.created_at.to_rfc3339(),
            doctor: a.doctor.into(),
        }
    }
}
