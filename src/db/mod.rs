//! Database module: models, schema and queries for persistent storage.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows and the closed text enums
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `sqlite.rs`: pool setup and shared column decoders
//! - `doctors.rs`, `articles.rs`, `appointments.rs`, `showcase.rs`: per-table queries
//! - `seed.rs`: demo catalogue for empty databases

pub mod appointments;
pub mod articles;
pub mod doctors;
pub mod models;
pub mod schema;
pub mod seed;
pub mod showcase;
pub mod sqlite;

pub use articles::ArticleFilter;
pub use doctors::DoctorFilter;
pub use schema::SQLITE_INIT;
pub use sqlite::{SqlitePool, Storage};
