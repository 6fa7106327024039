pub mod appointments;
pub mod articles;
pub mod doctors;
pub mod facilities;
pub mod home;
pub mod pages;

/// Query filters treat empty values as "not set".
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
