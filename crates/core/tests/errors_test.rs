use chrono::NaiveDate;
use salonbook_core::errors::{BookingError, BookingResult};

#[test]
fn test_booking_error_display() {
    let malformed = BookingError::MalformedSlotLabel("09:00 - 10:00".to_string());
    let closed = BookingError::ClosedOnSunday(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
    let validation = BookingError::Validation("cart is empty".to_string());
    let not_found = BookingError::NotFound("Appointment 4".to_string());
    let authentication = BookingError::Authentication("Not logged in".to_string());

    assert_eq!(malformed.to_string(), "Malformed slot label: \"09:00 - 10:00\"");
    assert_eq!(closed.to_string(), "The salon is closed on Sundays (2025-06-01)");
    assert_eq!(validation.to_string(), "Validation error: cart is empty");
    assert_eq!(not_found.to_string(), "Resource not found: Appointment 4");
    assert_eq!(authentication.to_string(), "Authentication error: Not logged in");
}

#[test]
fn test_booking_result() {
    let result: BookingResult<u32> = Ok(9);
    assert_eq!(result.unwrap(), 9);

    let result: BookingResult<u32> = Err(BookingError::Validation("bad".to_string()));
    assert!(result.is_err());
}
