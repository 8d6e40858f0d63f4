use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{catalog::Service, employee::Employee, user::User};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppointmentStatus {
    Upcoming,
    Completed,
    Cancelled,
    Tipped,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Upcoming => "UPCOMING",
            AppointmentStatus::Completed => "COMPLETED",
            AppointmentStatus::Cancelled => "CANCELLED",
            AppointmentStatus::Tipped => "TIPPED",
        }
    }
}

/// A booked one-hour appointment as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub appointment_id: i64,
    pub service: Service,
    pub employee: Employee,
    #[serde(default)]
    pub user: Option<User>,
    /// Start of the slot; the slot always lasts one hour.
    pub time_slot: NaiveDateTime,
    #[serde(default)]
    pub notes: Option<String>,
    pub status: AppointmentStatus,
    #[serde(default)]
    pub tip_amount: Option<f64>,
}

impl Appointment {
    pub fn can_reschedule(&self) -> bool {
        self.status == AppointmentStatus::Upcoming
    }

    pub fn can_cancel(&self) -> bool {
        self.status == AppointmentStatus::Upcoming
    }

    pub fn can_tip(&self) -> bool {
        self.status == AppointmentStatus::Completed
    }
}

/// Existing booking as listed by the per-stylist slot lookup. Only the start
/// timestamp is consumed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookedSlot {
    pub time_slot: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointmentRequest {
    pub service_id: i64,
    pub employee_id: i64,
    /// `YYYY-MM-DDTHH:MM:SS`
    pub time_slot: String,
    pub user_id: i64,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateAppointmentResponse {
    pub appointment: String,
}
