use crate::config::Config;
use crate::db::Storage;
use crate::handlers::{appointments, articles, doctors, facilities, home, pages};
use crate::service::booking::BookingService;
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

/// Upper bound for request bodies; the booking form is the largest payload.
const BODY_LIMIT: usize = 64 * 1024;

#[derive(Clone)]
pub struct MedicareState {
    pub storage: Storage,
    pub booking: BookingService,
    pub config: Arc<Config>,
}

impl MedicareState {
    pub fn new(storage: Storage, config: Arc<Config>) -> Self {
        Self {
            booking: BookingService::new(storage.clone()),
            storage,
            config,
        }
    }
}

pub fn medicare_router(state: MedicareState) -> Router {
    Router::new()
        .route("/", get(home::home_page))
        .route("/doctors", get(doctors::doctor_index))
        .route("/doctors/{id}", get(doctors::doctor_show))
        .route("/articles", get(articles::article_index))
        .route("/articles/{id}", get(articles::article_show))
        .route("/articles/{id}/like", post(articles::article_like))
        .route("/facilities", get(facilities::facility_index))
        .route("/schedule", get(pages::schedule_page))
        .route("/contact", get(pages::contact_page))
        .route("/booking", get(appointments::booking_page))
        .route("/appointments", post(appointments::appointment_store))
        .route(
            "/appointments/{id}/success",
            get(appointments::appointment_success),
        )
        .route("/appointments/{id}", get(appointments::appointment_show))
        .route("/up", get(pages::health_check))
        .layer(axum::extract::DefaultBodyLimit::max(BODY_LIMIT))
        .with_state(state)
}
