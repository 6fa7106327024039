use axum::{extract::State, response::Redirect};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::db::DoctorFilter;
use crate::middleware::booking_request::BookingRequest;
use crate::middleware::page_context::PageContext;
use crate::middleware::request_parts::{QueryParams, RecordId};
use crate::types::Page;
use crate::types::appointment::{AppointmentDetail, AppointmentSummary};
use crate::types::doctor::BookingDoctor;
use crate::{MedicareError, router::MedicareState};

#[derive(Debug, Default, Deserialize)]
pub struct BookingQuery {
    pub doctor: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingProps {
    pub doctors: Vec<BookingDoctor>,
    pub selected_doctor_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AppointmentProps<A> {
    pub appointment: A,
}

/// GET /booking -> booking form with the doctors that can be picked.
pub async fn booking_page(
    State(state): State<MedicareState>,
    QueryParams(query): QueryParams<BookingQuery>,
    page: PageContext,
) -> Result<Page<BookingProps>, MedicareError> {
    let placeholder = &state.config.site.doctor_placeholder;
    let doctors = state
        .storage
        .list_available_doctors(&DoctorFilter::default())
        .await?
        .into_iter()
        .map(|d| BookingDoctor::new(d, placeholder))
        .collect();

    Ok(page.render(
        "booking",
        BookingProps {
            doctors,
            selected_doctor_id: query.doctor,
        },
    ))
}

/// POST /appointments -> stores the request, then sends the visitor to the
/// confirmation page.
pub async fn appointment_store(
    State(state): State<MedicareState>,
    BookingRequest(form): BookingRequest,
) -> Result<Redirect, MedicareError> {
    let today = Utc::now().date_naive();
    let id = state.booking.submit(form, today).await?;
    Ok(Redirect::to(&format!("/appointments/{id}/success")))
}

/// GET /appointments/{id}/success
pub async fn appointment_success(
    State(state): State<MedicareState>,
    RecordId(id): RecordId,
    page: PageContext,
) -> Result<Page<AppointmentProps<AppointmentSummary>>, MedicareError> {
    let appointment = state
        .storage
        .get_appointment(id)
        .await?
        .ok_or_else(|| MedicareError::not_found("appointment"))?;

    Ok(page.render(
        "appointment-success",
        AppointmentProps {
            appointment: appointment.into(),
        },
    ))
}

/// GET /appointments/{id}
pub async fn appointment_show(
    State(state): State<MedicareState>,
    RecordId(id): RecordId,
    page: PageContext,
) -> Result<Page<AppointmentProps<AppointmentDetail>>, MedicareError> {
    let appointment = state
        .storage
        .get_appointment(id)
        .await?
        .ok_or_else(|| MedicareError::not_found("appointment"))?;

    Ok(page.render(
        "appointment-detail",
        AppointmentProps {
            appointment: appointment.into(),
        },
    ))
}
