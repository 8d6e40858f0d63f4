//! # SalonBook Core
//!
//! Domain types and pure logic shared by every SalonBook front end: the
//! records exchanged with the salon backend, the appointment slot
//! calculator, the booking-time codec, the session context and the
//! point-of-sale cart.
//!
//! Nothing in this crate performs I/O.

pub mod booking_time;
pub mod errors;
pub mod models;
pub mod pos;
pub mod salary;
pub mod session;
pub mod slots;
