//! Records exchanged with the salon backend.
//!
//! Field names follow the backend's camelCase JSON; enum values follow its
//! SCREAMING_SNAKE_CASE names.

pub mod appointment;
pub mod attendance;
pub mod catalog;
pub mod dashboard;
pub mod employee;
pub mod pos;
pub mod user;
