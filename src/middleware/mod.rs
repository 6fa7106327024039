pub mod booking_request;
pub mod page_context;
pub mod request_parts;
