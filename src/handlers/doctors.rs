use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::db::DoctorFilter;
use crate::handlers::non_blank;
use crate::middleware::page_context::PageContext;
use crate::middleware::request_parts::{QueryParams, RecordId};
use crate::types::Page;
use crate::types::doctor::{DoctorCard, DoctorDetail};
use crate::{MedicareError, router::MedicareState};

#[derive(Debug, Default, Deserialize)]
pub struct DoctorQuery {
    pub specialty: Option<String>,
    pub search: Option<String>,
    pub consultation_type: Option<String>,
}

impl From<DoctorQuery> for DoctorFilter {
    fn from(q: DoctorQuery) -> Self {
        Self {
            specialty: non_blank(q.specialty),
            search: non_blank(q.search),
            consultation_type: non_blank(q.consultation_type),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DoctorIndexProps {
    pub doctors: Vec<DoctorCard>,
    pub specialties: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct DoctorShowProps {
    pub doctor: DoctorDetail,
}

/// GET /doctors -> available doctors, narrowed by the optional query filters.
pub async fn doctor_index(
    State(state): State<MedicareState>,
    QueryParams(query): QueryParams<DoctorQuery>,
    page: PageContext,
) -> Result<Page<DoctorIndexProps>, MedicareError> {
    let filter = DoctorFilter::from(query);
    let placeholder = &state.config.site.doctor_placeholder;

    let doctors = state
        .storage
        .list_available_doctors(&filter)
        .await?
        .into_iter()
        .map(|d| DoctorCard::new(d, placeholder))
        .collect();
    let specialties = state.storage.doctor_specialties().await?;

    Ok(page.render(
        "doctors",
        DoctorIndexProps {
            doctors,
            specialties,
        },
    ))
}

/// GET /doctors/{id}
pub async fn doctor_show(
    State(state): State<MedicareState>,
    RecordId(id): RecordId,
    page: PageContext,
) -> Result<Page<DoctorShowProps>, MedicareError> {
    let doctor = state
        .storage
        .get_doctor(id)
        .await?
        .ok_or_else(|| MedicareError::not_found("doctor"))?;

    Ok(page.render(
        "doctor-detail",
        DoctorShowProps {
            doctor: DoctorDetail::new(doctor, &state.config.site.doctor_placeholder),
        },
    ))
}
