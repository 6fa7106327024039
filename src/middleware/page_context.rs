use axum::extract::{FromRequestParts, OriginalUri};
use axum::http::request::Parts;
use serde::Serialize;
use std::convert::Infallible;

use crate::router::MedicareState;
use crate::types::Page;

/// Per-request data every page object carries: the visited URL and the
/// current asset version.
#[derive(Debug, Clone)]
pub struct PageContext {
    pub url: String,
    pub version: String,
}

impl PageContext {
    pub fn render<P: Serialize>(self, component: &'static str, props: P) -> Page<P> {
        Page {
            component,
            props,
            url: self.url,
            version: self.version,
        }
    }
}

impl FromRequestParts<MedicareState> for PageContext {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &MedicareState,
    ) -> Result<Self, Self::Rejection> {
        let uri = parts
            .extensions
            .get::<OriginalUri>()
            .map(|o| &o.0)
            .unwrap_or(&parts.uri);
        let url = uri
            .path_and_query()
            .map(|pq| pq.as_str().to_string())
            .unwrap_or_else(|| uri.path().to_string());

        Ok(Self {
            url,
            version: state.config.asset_version.clone(),
        })
    }
}
