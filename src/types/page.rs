use axum::Json;
use axum::http::HeaderValue;
use axum::http::header::VARY;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Header telling the client renderer the body is a page object.
pub const INERTIA_HEADER: &str = "x-inertia";

/// Server-driven page: which client component to render and with what props.
#[derive(Debug, Serialize)]
pub struct Page<P> {
    pub component: &'static str,
    pub props: P,
    pub url: String,
    pub version: String,
}

/// Props for pages that take none.
#[derive(Debug, Default, Serialize)]
pub struct NoProps {}

impl<P: Serialize> IntoResponse for Page<P> {
    fn into_response(self) -> Response {
        let mut resp = Json(self).into_response();
        let headers = resp.headers_mut();
        headers.insert(INERTIA_HEADER, HeaderValue::from_static("true"));
        headers.insert(VARY, HeaderValue::from_static("X-Inertia"));
        resp
    }
}
