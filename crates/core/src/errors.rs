use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BookingError {
    #[error("Malformed slot label: {0:?}")]
    MalformedSlotLabel(String),

    #[error("The salon is closed on Sundays ({0})")]
    ClosedOnSunday(NaiveDate),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Authentication error: {0}")]
    Authentication(String),
}

pub type BookingResult<T> = Result<T, BookingError>;
