use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::db::models::{Facility, FacilityCategory};
use crate::error::FieldErrors;
use crate::handlers::non_blank;
use crate::middleware::page_context::PageContext;
use crate::middleware::request_parts::QueryParams;
use crate::types::Page;
use crate::{MedicareError, router::MedicareState};

#[derive(Debug, Default, Deserialize)]
pub struct FacilityQuery {
    pub category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FacilityIndexProps {
    pub facilities: Vec<Facility>,
    pub categories: &'static [FacilityCategory],
}

/// GET /facilities -> active facilities in display order.
pub async fn facility_index(
    State(state): State<MedicareState>,
    QueryParams(query): QueryParams<FacilityQuery>,
    page: PageContext,
) -> Result<Page<FacilityIndexProps>, MedicareError> {
    let category = match non_blank(query.category) {
        Some(raw) => match raw.parse::<FacilityCategory>() {
            Ok(category) => Some(category),
            Err(_) => {
                let mut errors = FieldErrors::default();
                errors.add("category", "The selected category is invalid.");
                return Err(MedicareError::Validation(errors));
            }
        },
        None => None,
    };

    let facilities = state.storage.list_active_facilities(category).await?;

    Ok(page.render(
        "facilities",
        FacilityIndexProps {
            facilities,
            categories: FacilityCategory::ALL,
        },
    ))
}
