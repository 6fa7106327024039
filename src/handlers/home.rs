use axum::extract::State;
use serde::Serialize;

use crate::middleware::page_context::PageContext;
use crate::types::Page;
use crate::types::doctor::HomeDoctor;
use crate::types::home::{SiteStats, TestimonialCard};
use crate::{MedicareError, router::MedicareState};

const HOME_DOCTORS: i64 = 6;
const HOME_TESTIMONIALS: i64 = 6;

#[derive(Debug, Serialize)]
pub struct HomeProps {
    pub doctors: Vec<HomeDoctor>,
    pub testimonials: Vec<TestimonialCard>,
    pub stats: SiteStats,
}

/// GET / -> landing page with featured doctors, testimonials and headline stats.
pub async fn home_page(
    State(state): State<MedicareState>,
    page: PageContext,
) -> Result<Page<HomeProps>, MedicareError> {
    let site = &state.config.site;

    let doctors = state
        .storage
        .featured_doctors(HOME_DOCTORS)
        .await?
        .into_iter()
        .map(|d| HomeDoctor::new(d, &site.doctor_placeholder))
        .collect();

    let testimonials = state
        .storage
        .featured_testimonials(HOME_TESTIMONIALS)
        .await?
        .into_iter()
        .map(|t| TestimonialCard::new(t, &site.patient_placeholder))
        .collect();

    let stats = SiteStats {
        doctors: state.storage.count_doctors().await?,
        patients: site.patients,
        years: site.years,
        awards: site.awards,
    };

    Ok(page.render(
        "home",
        HomeProps {
            doctors,
            testimonials,
            stats,
        },
    ))
}
