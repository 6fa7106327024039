//! Page objects and the props serialized into them.

pub mod appointment;
pub mod article;
pub mod doctor;
pub mod home;
pub mod lenient;
pub mod page;

pub use page::{NoProps, Page};
