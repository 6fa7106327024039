use crate::middleware::page_context::PageContext;
use crate::types::{NoProps, Page};

/// GET /schedule
pub async fn schedule_page(page: PageContext) -> Page<NoProps> {
    page.render("schedule", NoProps::default())
}

/// GET /contact
pub async fn contact_page(page: PageContext) -> Page<NoProps> {
    page.render("contact", NoProps::default())
}

/// GET /up -> liveness probe.
pub async fn health_check() -> &'static str {
    "OK"
}
