mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use common::spawn_app;
use serde_json::{Value, json};

fn future_date(days: i64) -> String {
    (Utc::now().date_naive() + Duration::days(days))
        .format("%Y-%m-%d")
        .to_string()
}

fn booking_payload() -> Value {
    json!({
        "doctor_id": 2,
        "appointment_date": future_date(7),
        "appointment_time": "10:30",
        "patient_name": "Rina Putri",
        "patient_phone": "081234567890",
        "patient_email": "rina@example.com",
        "patient_age": "6",
        "patient_gender": "female",
        "complaint": "Demam tinggi sejak dua hari",
        "symptoms": ["demam", "batuk"],
        "emergency_contact": "081298765432",
        "type": "offline",
        "insurance": null
    })
}

#[tokio::test]
async fn booking_page_lists_available_doctors_and_echoes_selection() {
    let t = spawn_app("booking-page", true).await;
    t.exec("UPDATE doctors SET is_available = 0 WHERE id = 5").await;

    let page = t.get("/booking?doctor=2").await.json();
    assert_eq!(page["component"], "booking");
    let doctors = page["props"]["doctors"].as_array().unwrap();
    assert_eq!(doctors.len(), 4);
    assert_eq!(doctors[0]["price"], "Rp 750.000");
    assert_eq!(doctors[0]["profile_image"], "/images/doctor-placeholder.jpg");
    assert_eq!(page["props"]["selectedDoctorId"], "2");

    let without = t.get("/booking").await.json();
    assert_eq!(without["props"]["selectedDoctorId"], Value::Null);
}

#[tokio::test]
async fn json_booking_is_stored_as_pending_and_redirects_to_confirmation() {
    let t = spawn_app("booking-json", true).await;

    let resp = t.post_json("/appointments", &booking_payload()).await;
    assert_eq!(resp.status, StatusCode::SEE_OTHER);
    assert_eq!(resp.header("location"), Some("/appointments/1/success"));

    let success = t.get("/appointments/1/success").await;
    assert_eq!(success.status, StatusCode::OK);
    let page = success.json();
    assert_eq!(page["component"], "appointment-success");
    let appt = &page["props"]["appointment"];
    assert_eq!(appt["status"], "pending");
    assert_eq!(appt["appointment_date"], future_date(7));
    assert_eq!(appt["appointment_time"], "10:30");
    assert_eq!(appt["notes"], Value::Null);
    assert_eq!(appt["doctor"]["name"], "Dr. Siti Nurhaliza, Sp.A");
    assert!(appt.get("complaint").is_none());

    let detail = t.get("/appointments/1").await.json();
    assert_eq!(detail["component"], "appointment-detail");
    let appt = &detail["props"]["appointment"];
    assert_eq!(appt["type"], "offline");
    assert_eq!(appt["patient_age"], 6);
    assert_eq!(appt["patient_gender"], "female");
    assert_eq!(appt["symptoms"], json!(["demam", "batuk"]));
    assert_eq!(appt["insurance"], Value::Null);
    assert_eq!(appt["doctor"]["specialty"], "Anak");
    assert!(appt["created_at"].as_str().unwrap().contains('T'));

    assert_eq!(t.storage.count_appointments().await.unwrap(), 1);
}

#[tokio::test]
async fn urlencoded_booking_collects_repeated_symptoms() {
    let t = spawn_app("booking-form", true).await;

    let body = format!(
        "doctor_id=4&appointment_date={}&appointment_time=08%3A15%3A00\
         &patient_name=Fitri+Handayani&patient_phone=0811111111\
         &patient_email=fitri%40example.com&patient_age=29&patient_gender=female\
         &complaint=Kontrol+kehamilan&symptoms=mual&symptoms=pusing&type=emergency",
        future_date(1)
    );
    let resp = t
        .post("/appointments", "application/x-www-form-urlencoded", body)
        .await;
    assert_eq!(resp.status, StatusCode::SEE_OTHER);

    let detail = t.get("/appointments/1").await.json();
    let appt = &detail["props"]["appointment"];
    assert_eq!(appt["appointment_time"], "08:15");
    assert_eq!(appt["type"], "emergency");
    assert_eq!(appt["symptoms"], json!(["mual", "pusing"]));
    assert_eq!(appt["emergency_contact"], Value::Null);
}

#[tokio::test]
async fn invalid_booking_reports_fields_and_stores_nothing() {
    let t = spawn_app("booking-invalid", true).await;

    let mut payload = booking_payload();
    payload["appointment_date"] = json!(Utc::now().date_naive().format("%Y-%m-%d").to_string());
    payload["patient_email"] = json!("not-an-email");
    payload["patient_age"] = json!(200);
    payload["type"] = json!("home-visit");
    payload["complaint"] = json!("   ");

    let resp = t.post_json("/appointments", &payload).await;
    assert_eq!(resp.status, StatusCode::UNPROCESSABLE_ENTITY);
    let body = resp.json();
    assert_eq!(body["error"]["code"], "VALIDATION_FAILED");
    let fields = body["error"]["fields"].as_object().unwrap();
    let mut names: Vec<&str> = fields.keys().map(String::as_str).collect();
    names.sort_unstable();
    assert_eq!(
        names,
        ["appointment_date", "complaint", "patient_age", "patient_email", "type"]
    );

    assert_eq!(t.storage.count_appointments().await.unwrap(), 0);
}

#[tokio::test]
async fn booking_an_unknown_doctor_is_rejected() {
    let t = spawn_app("booking-unknown-doctor", true).await;

    let mut payload = booking_payload();
    payload["doctor_id"] = json!(999);
    let resp = t.post_json("/appointments", &payload).await;
    assert_eq!(resp.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        resp.json()["error"]["fields"]["doctor_id"][0],
        "The selected doctor id is invalid."
    );

    payload["doctor_id"] = json!("dua");
    let resp = t.post_json("/appointments", &payload).await;
    assert_eq!(
        resp.json()["error"]["fields"]["doctor_id"][0],
        "The doctor id field must be an integer."
    );
}

#[tokio::test]
async fn booking_unavailable_doctor_is_still_accepted() {
    let t = spawn_app("booking-unavailable", true).await;
    t.exec("UPDATE doctors SET is_available = 0 WHERE id = 2").await;

    let resp = t.post_json("/appointments", &booking_payload()).await;
    assert_eq!(resp.status, StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn malformed_bodies_are_bad_requests() {
    let t = spawn_app("booking-malformed", true).await;

    let resp = t
        .post("/appointments", "application/json", "{\"doctor_id\": ")
        .await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(resp.json()["error"]["code"], "BAD_REQUEST");

    let resp = t.post("/appointments", "text/plain", "hello").await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);

    assert_eq!(t.storage.count_appointments().await.unwrap(), 0);
}

#[tokio::test]
async fn unknown_appointment_is_not_found() {
    let t = spawn_app("booking-404", true).await;
    assert_eq!(t.get("/appointments/42").await.status, StatusCode::NOT_FOUND);
    assert_eq!(
        t.get("/appointments/42/success").await.status,
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn oversized_booking_body_is_rejected_with_413() {
    let t = spawn_app("booking-too-large", true).await;

    let mut payload = booking_payload();
    payload["complaint"] = json!("x".repeat(100 * 1024));
    let resp = t.post_json("/appointments", &payload).await;
    assert_eq!(resp.status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(resp.json()["error"]["code"], "PAYLOAD_TOO_LARGE");

    let form = format!("complaint={}", "x".repeat(100 * 1024));
    let resp = t
        .post("/appointments", "application/x-www-form-urlencoded", form)
        .await;
    assert_eq!(resp.status, StatusCode::PAYLOAD_TOO_LARGE);

    assert_eq!(t.storage.count_appointments().await.unwrap(), 0);
}

#[tokio::test]
async fn boolean_field_values_fail_field_validation() {
    let t = spawn_app("booking-bool", true).await;

    let mut payload = booking_payload();
    payload["patient_age"] = json!(true);
    let resp = t.post_json("/appointments", &payload).await;
    assert_eq!(resp.status, StatusCode::UNPROCESSABLE_ENTITY);
    let fields = resp.json()["error"]["fields"].clone();
    assert!(fields.get("patient_age").is_some());
    assert_eq!(fields.as_object().unwrap().len(), 1);
}
