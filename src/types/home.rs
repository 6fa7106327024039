use crate::db::models::Testimonial;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct TestimonialCard {
    pub id: i64,
    pub patient_name: String,
    pub treatment: String,
    pub testimonial: String,
    pub rating: i64,
    pub patient_image: String,
}

impl TestimonialCard {
    pub fn new(t: Testimonial, placeholder: &str) -> Self {
        Self {
            id: t.id,
            patient_name: t.patient_name,
            treatment: t.treatment,
            testimonial: t.testimonial,
            rating: t.rating,
            patient_image: t.patient_image.unwrap_or_else(|| placeholder.to_string()),
        }
    }
}

/// Headline numbers on the landing page. Only `doctors` is counted; the
/// rest come from configuration.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SiteStats {
    pub doctors: i64,
    pub patients: u32,
    pub years: u32,
    pub awards: u32,
}
