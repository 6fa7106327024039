use crate::db::models::Doctor;
use serde::Serialize;
use serde_json::Value;

fn image_or(profile_image: Option<String>, placeholder: &str) -> String {
    profile_image.unwrap_or_else(|| placeholder.to_string())
}

/// Directory card shown on the doctor listing.
#[derive(Debug, Clone, Serialize)]
pub struct DoctorCard {
    pub id: i64,
    pub name: String,
    pub specialty: String,
    pub rating: f64,
    pub review_count: i64,
    pub experience: String,
    pub price: String,
    pub bio: String,
    pub education: Vec<String>,
    pub certifications: Vec<String>,
    pub languages: Vec<String>,
    pub consultation_types: Vec<String>,
    pub is_available: bool,
    pub profile_image: String,
}

impl DoctorCard {
    pub fn new(d: Doctor, placeholder: &str) -> Self {
        Self {
            id: d.id,
            name: d.name,
            specialty: d.specialty,
            rating: d.rating,
            review_count: d.review_count,
            experience: d.experience,
            price: d.price,
            bio: d.bio,
            education: d.education,
            certifications: d.certifications,
            languages: d.languages,
            consultation_types: d.consultation_types,
            is_available: d.is_available,
            profile_image: image_or(d.profile_image, placeholder),
        }
    }
}

/// Full profile: the directory card plus the weekly schedule.
#[derive(Debug, Clone, Serialize)]
pub struct DoctorDetail {
    #[serde(flatten)]
    pub card: DoctorCard,
    pub schedule: Value,
}

impl DoctorDetail {
    pub fn new(mut d: Doctor, placeholder: &str) -> Self {
        let schedule = d.schedule.take().unwrap_or_else(|| Value::Array(Vec::new()));
        Self {
            card: DoctorCard::new(d, placeholder),
            schedule,
        }
    }
}

/// Compact card used on the landing page.
#[derive(Debug, Clone, Serialize)]
pub struct HomeDoctor {
    pub id: i64,
    pub name: String,
    pub specialty: String,
    pub rating: f64,
    pub experience: String,
    pub image: String,
}

impl HomeDoctor {
    pub fn new(d: Doctor, placeholder: &str) -> Self {
        Self {
            id: d.id,
            name: d.name,
            specialty: d.specialty,
            rating: d.rating,
            experience: d.experience,
            image: image_or(d.profile_image, placeholder),
        }
    }
}

/// Option in the booking form's doctor picker.
#[derive(Debug, Clone, Serialize)]
pub struct BookingDoctor {
    pub id: i64,
    pub name: String,
    pub specialty: String,
    pub price: String,
    pub profile_image: String,
}

impl BookingDoctor {
    pub fn new(d: Doctor, placeholder: &str) -> Self {
        Self {
            id: d.id,
            name: d.name,
            specialty: d.specialty,
            price: d.price,
            profile_image: image_or(d.profile_image, placeholder),
        }
    }
}
