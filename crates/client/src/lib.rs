//! # SalonBook Client
//!
//! Talks to the salon backend over its REST API and drives the booking
//! flows on top of the pure logic in `salonbook-core`.
//!
//! - **api**: the [`api::SalonApi`] seam every flow depends on
//! - **http**: the `reqwest` implementation of that seam
//! - **booking**: slot listing, booking, reschedule, cancel and tips
//! - **auth**: sign in / sign out against the shared session
//! - **config**: environment configuration
//! - **mock**: a mockall double of [`api::SalonApi`] for flow tests

pub mod api;
pub mod auth;
pub mod booking;
pub mod config;
pub mod error;
pub mod http;

pub mod mock;

use std::sync::Arc;

use salonbook_core::session::Session;
use tokio::sync::RwLock;

pub use error::{ClientError, ClientResult};

/// Session shared between the HTTP layer and the flows.
pub type SharedSession = Arc<RwLock<Session>>;

pub fn new_session() -> SharedSession {
    Arc::new(RwLock::new(Session::new()))
}
