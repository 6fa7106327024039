use axum::{
    Json,
    extract::{FromRequest, Request},
    http::{StatusCode, header::CONTENT_TYPE},
    response::IntoResponse,
};
use axum_extra::extract::Form;

use crate::error::MedicareError;
use crate::service::booking::AppointmentForm;

/// Booking form body, accepted as JSON (client-side form helpers) or as a
/// classic url-encoded form post where repeated `symptoms` keys build the list.
pub struct BookingRequest(pub AppointmentForm);

fn media_type(req: &Request) -> Option<String> {
    let raw = req.headers().get(CONTENT_TYPE)?.to_str().ok()?;
    let essence = raw.split(';').next().unwrap_or(raw).trim();
    Some(essence.to_ascii_lowercase())
}

/// Body rejections keep the size-limit status; anything else is a 400.
fn body_rejection(status: StatusCode, message: String) -> MedicareError {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        MedicareError::PayloadTooLarge
    } else {
        MedicareError::MalformedRequest(message)
    }
}

impl<S> FromRequest<S> for BookingRequest
where
    S: Send + Sync,
{
    type Rejection = MedicareError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match media_type(&req).as_deref() {
            Some("application/json") => {
                let Json(form) = Json::<AppointmentForm>::from_request(req, state)
                    .await
                    .map_err(|rejection| body_rejection(rejection.status(), rejection.body_text()))?;
                Ok(Self(form))
            }
            Some("application/x-www-form-urlencoded") => {
                let Form(form) = Form::<AppointmentForm>::from_request(req, state)
                    .await
                    .map_err(|rejection| {
                        let message = format!("invalid form body: {rejection}");
                        body_rejection(rejection.into_response().status(), message)
                    })?;
                Ok(Self(form))
            }
            _ => Err(MedicareError::MalformedRequest(
                "expected an application/json or application/x-www-form-urlencoded body"
                    .to_string(),
            )),
        }
    }
}
