//! # Booking Flows
//!
//! The customer-facing steps around an appointment: listing a stylist's free
//! slots for a date, confirming a booking, rescheduling, cancelling and
//! tipping. Booking and rescheduling share the same slot listing.
//!
//! ## Slot listing
//!
//! Existing appointments are fetched from the backend and their start hours
//! fed to [`available_slots_at`]. A failed fetch does not block the listing:
//! every otherwise eligible slot is offered and the error is carried in
//! [`SlotListing::fetch_error`] so the caller can show it. The backend stays
//! the authority on whether a slot is still free at booking time.
//!
//! A new listing request supersedes older ones still in flight; see
//! [`BookingFlow::load_latest_slots`].

use std::collections::BTreeSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{Local, NaiveDate, NaiveDateTime};
use salonbook_core::{
    booking_time::{booking_datetime, booking_timestamp},
    errors::BookingError,
    models::{
        appointment::{Appointment, AppointmentStatus, CreateAppointmentRequest},
        catalog::Service,
    },
    slots::{TimeSlot, available_slots_at, booked_hours, is_closed},
};
use tracing::{debug, info, warn};

use crate::{ClientError, ClientResult, SharedSession, api::SalonApi};

/// Free slots for one stylist on one date.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotListing {
    pub stylist_id: i64,
    pub date: NaiveDate,
    pub slots: Vec<TimeSlot>,
    /// Set when existing bookings could not be fetched; the slots then
    /// ignore bookings entirely.
    pub fetch_error: Option<String>,
}

impl SlotListing {
    pub fn labels(&self) -> Vec<String> {
        self.slots.iter().map(TimeSlot::label).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Ticket identifying one slot listing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotTicket(u64);

/// Hands out increasing tickets so that only the newest listing is applied.
#[derive(Debug, Default)]
pub struct SlotRequests {
    latest: AtomicU64,
}

impl SlotRequests {
    pub fn begin(&self) -> SlotTicket {
        SlotTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: SlotTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }
}

/// Selections made on the booking page.
#[derive(Debug, Clone, Default)]
pub struct BookingDraft {
    pub service: Option<Service>,
    pub stylist_id: Option<i64>,
    pub date: Option<NaiveDate>,
    /// Slot label as offered by the listing, e.g. `"09:00 AM - 10:00 AM"`.
    pub slot: Option<String>,
    pub notes: String,
}

pub struct BookingFlow<A> {
    api: A,
    session: SharedSession,
    requests: Arc<SlotRequests>,
}

impl<A: SalonApi> BookingFlow<A> {
    pub fn new(api: A, session: SharedSession) -> Self {
        Self {
            api,
            session,
            requests: Arc::new(SlotRequests::default()),
        }
    }

    /// Builds a flow that shares `requests` with other listings, so a
    /// listing started elsewhere supersedes the ones started here.
    pub fn with_requests(api: A, session: SharedSession, requests: Arc<SlotRequests>) -> Self {
        Self {
            api,
            session,
            requests,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn slot_requests(&self) -> Arc<SlotRequests> {
        Arc::clone(&self.requests)
    }

    /// Lists free slots for `stylist_id` on `date`, relative to `now`.
    pub async fn load_slots(
        &self,
        stylist_id: i64,
        date: NaiveDate,
        now: NaiveDateTime,
    ) -> ClientResult<SlotListing> {
        if is_closed(date) {
            return Err(BookingError::ClosedOnSunday(date).into());
        }

        let (booked, fetch_error) = match self.api.booked_slots(stylist_id, date).await {
            Ok(existing) => (booked_hours(existing.iter().map(|slot| &slot.time_slot)), None),
            Err(e) => {
                warn!(stylist_id, %date, error = %e, "Could not fetch existing bookings, offering all slots");
                (BTreeSet::new(), Some(e.to_string()))
            }
        };

        let slots = available_slots_at(&booked, date, now);
        debug!(stylist_id, %date, booked = booked.len(), offered = slots.len(), "Computed slots");

        Ok(SlotListing {
            stylist_id,
            date,
            slots,
            fetch_error,
        })
    }

    /// Like [`Self::load_slots`], but returns `Ok(None)` when a newer listing
    /// request was started while this one was in flight.
    pub async fn load_latest_slots(
        &self,
        stylist_id: i64,
        date: NaiveDate,
        now: NaiveDateTime,
    ) -> ClientResult<Option<SlotListing>> {
        let ticket = self.requests.begin();
        let listing = self.load_slots(stylist_id, date, now).await?;

        if !self.requests.is_current(ticket) {
            debug!(stylist_id, %date, "Discarding superseded slot listing");
            return Ok(None);
        }
        Ok(Some(listing))
    }

    /// Lists free slots relative to the local wall clock.
    pub async fn load_slots_now(&self, stylist_id: i64, date: NaiveDate) -> ClientResult<SlotListing> {
        self.load_slots(stylist_id, date, Local::now().naive_local())
            .await
    }

    /// Books the drafted appointment for the signed-in user and returns its id.
    pub async fn confirm_booking(&self, draft: &BookingDraft) -> ClientResult<i64> {
        let user_id = self
            .session
            .read()
            .await
            .user_id()
            .ok_or(ClientError::NotAuthenticated)?;

        let service = draft
            .service
            .as_ref()
            .ok_or_else(|| BookingError::Validation("select a service".into()))?;
        let stylist_id = draft
            .stylist_id
            .ok_or_else(|| BookingError::Validation("select a stylist".into()))?;
        let date = draft
            .date
            .ok_or_else(|| BookingError::Validation("select a date".into()))?;
        let slot = draft
            .slot
            .as_deref()
            .ok_or_else(|| BookingError::Validation("select a time slot".into()))?;

        if is_closed(date) {
            return Err(BookingError::ClosedOnSunday(date).into());
        }

        let request = CreateAppointmentRequest {
            service_id: service.service_id,
            employee_id: stylist_id,
            time_slot: booking_timestamp(date, slot)?,
            user_id,
            notes: draft.notes.clone(),
        };

        let response = self.api.create_appointment(&request).await?;
        let appointment_id = response.appointment.trim().parse::<i64>().map_err(|_| {
            ClientError::InvalidResponse(format!(
                "appointment id {:?} is not a number",
                response.appointment
            ))
        })?;

        info!(appointment_id, stylist_id, time_slot = %request.time_slot, "Appointment booked");
        Ok(appointment_id)
    }

    /// Payment page for a freshly booked appointment.
    pub async fn checkout_url(&self, appointment_id: i64, service: &Service) -> ClientResult<String> {
        let amount = whole_amount(service.price)
            .ok_or_else(|| BookingError::Validation(format!("{} has no payable price", service.name)))?;
        let session = self
            .api
            .checkout_session(appointment_id, &service.name, amount)
            .await?;
        Ok(session.url)
    }

    /// Appointments of the signed-in user.
    pub async fn my_appointments(&self) -> ClientResult<Vec<Appointment>> {
        let user_id = self
            .session
            .read()
            .await
            .user_id()
            .ok_or(ClientError::NotAuthenticated)?;
        self.api.user_appointments(user_id).await
    }

    /// Moves an upcoming appointment to the slot `label` on `date`.
    pub async fn reschedule(
        &self,
        appointment: &Appointment,
        date: NaiveDate,
        label: &str,
    ) -> ClientResult<Appointment> {
        if !appointment.can_reschedule() {
            return Err(BookingError::Validation(format!(
                "only upcoming appointments can be rescheduled (status {})",
                appointment.status.as_str()
            ))
            .into());
        }
        if is_closed(date) {
            return Err(BookingError::ClosedOnSunday(date).into());
        }

        let updated = Appointment {
            time_slot: booking_datetime(date, label)?,
            ..appointment.clone()
        };

        let result = self
            .api
            .update_appointment(appointment.appointment_id, &updated)
            .await?;
        if result.status != AppointmentStatus::Upcoming {
            return Err(ClientError::Rejected(format!(
                "appointment {} came back as {}",
                result.appointment_id,
                result.status.as_str()
            )));
        }

        info!(appointment_id = result.appointment_id, time_slot = %result.time_slot, "Appointment rescheduled");
        Ok(result)
    }

    pub async fn cancel(&self, appointment: &Appointment) -> ClientResult<Appointment> {
        if !appointment.can_cancel() {
            return Err(BookingError::Validation(format!(
                "only upcoming appointments can be cancelled (status {})",
                appointment.status.as_str()
            ))
            .into());
        }

        let result = self
            .api
            .update_appointment_status(appointment.appointment_id, AppointmentStatus::Cancelled)
            .await?;
        info!(appointment_id = appointment.appointment_id, "Appointment cancelled");
        Ok(result)
    }

    /// Payment page for a tip on a completed appointment.
    pub async fn tip(&self, appointment: &Appointment, amount: f64) -> ClientResult<String> {
        let amount = whole_amount(amount)
            .ok_or_else(|| BookingError::Validation("enter a valid tip amount".into()))?;
        if !appointment.can_tip() {
            return Err(BookingError::Validation(format!(
                "only completed appointments can be tipped (status {})",
                appointment.status.as_str()
            ))
            .into());
        }

        let session = self
            .api
            .checkout_session(appointment.appointment_id, "Tip", amount)
            .await?;
        Ok(session.url)
    }
}

/// Payments are taken in whole currency units; anything rounding below one
/// unit is not payable.
fn whole_amount(amount: f64) -> Option<u64> {
    let amount = amount.round();
    (amount.is_finite() && amount >= 1.0).then_some(amount as u64)
}
