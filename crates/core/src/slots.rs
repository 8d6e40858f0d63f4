//! # Appointment slot availability
//!
//! The salon books in one-hour slots between 9AM and 7PM. Two hours of the
//! day (13:00 and 16:00) are breaks and are never offered. For a chosen
//! stylist and date, the hours that already hold an appointment are removed,
//! and when the date is today only hours strictly after the current hour are
//! offered.
//!
//! The calculator is pure: the caller fetches the stylist's existing
//! appointments and passes their start hours in.

use std::collections::BTreeSet;
use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

use crate::booking_time::slot_label;

/// First bookable hour (inclusive).
pub const OPENING_HOUR: u32 = 9;
/// Closing hour (exclusive); the last slot is 18:00-19:00.
pub const CLOSING_HOUR: u32 = 19;
/// Hours never offered regardless of booking state.
pub const BLACKOUT_HOURS: [u32; 2] = [13, 16];

/// A one-hour bookable interval, `start_hour..start_hour + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start_hour: u32,
}

impl TimeSlot {
    pub fn new(start_hour: u32) -> Self {
        Self { start_hour }
    }

    pub fn end_hour(&self) -> u32 {
        self.start_hour + 1
    }

    /// Display label such as `"09:00 AM - 10:00 AM"`.
    pub fn label(&self) -> String {
        slot_label(self.start_hour)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Returns true when the salon takes no bookings on `date`.
pub fn is_closed(date: NaiveDate) -> bool {
    date.weekday() == Weekday::Sun
}

pub fn is_blackout(hour: u32) -> bool {
    BLACKOUT_HOURS.contains(&hour)
}

/// Hour-of-day of each existing appointment start.
pub fn booked_hours<'a, I>(starts: I) -> BTreeSet<u32>
where
    I: IntoIterator<Item = &'a NaiveDateTime>,
{
    starts.into_iter().map(|start| start.hour()).collect()
}

/// Bookable slots for `target_date`, in ascending order.
///
/// `current_hour` is only consulted when `is_today` is set. A Sunday yields
/// no slots.
pub fn available_slots(
    booked_hours: &BTreeSet<u32>,
    target_date: NaiveDate,
    is_today: bool,
    current_hour: u32,
) -> Vec<TimeSlot> {
    if is_closed(target_date) {
        return Vec::new();
    }

    (OPENING_HOUR..CLOSING_HOUR)
        .filter(|hour| !is_blackout(*hour))
        .filter(|hour| !booked_hours.contains(hour))
        .filter(|hour| !is_today || *hour > current_hour)
        .map(TimeSlot::new)
        .collect()
}

/// Same as [`available_slots`], rendered as display labels.
pub fn available_slot_labels(
    booked_hours: &BTreeSet<u32>,
    target_date: NaiveDate,
    is_today: bool,
    current_hour: u32,
) -> Vec<String> {
    available_slots(booked_hours, target_date, is_today, current_hour)
        .iter()
        .map(TimeSlot::label)
        .collect()
}

/// Computes slots relative to the wall-clock time `now`.
pub fn available_slots_at(
    booked_hours: &BTreeSet<u32>,
    target_date: NaiveDate,
    now: NaiveDateTime,
) -> Vec<TimeSlot> {
    available_slots(booked_hours, target_date, now.date() == target_date, now.hour())
}
