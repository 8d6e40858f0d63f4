use chrono::NaiveDate;
use fake::Fake;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{from_str, json, to_value};
use salonbook_core::models::{
    appointment::{Appointment, AppointmentStatus, BookedSlot, CreateAppointmentRequest},
    attendance::{Attendance, AttendanceStatus, SalaryRecord},
    catalog::{Product, ProductType, Service, ServiceType},
    user::{LoginResponse, UserType},
};

#[test]
fn test_appointment_from_backend_json() {
    let stylist: String = Name().fake();
    let body = json!({
        "appointmentId": 42,
        "service": {
            "serviceId": 3,
            "serviceType": "HAIRCUTS",
            "name": "Fade",
            "description": "Skin fade",
            "price": 2500.0
        },
        "employee": { "employeeId": 7, "name": stylist },
        "timeSlot": "2025-06-02T14:00:00",
        "notes": null,
        "status": "UPCOMING"
    });

    let appointment: Appointment = serde_json::from_value(body).expect("Failed to deserialize appointment");

    assert_eq!(appointment.appointment_id, 42);
    assert_eq!(appointment.service.service_type, ServiceType::Haircuts);
    assert_eq!(appointment.employee.name, stylist);
    assert_eq!(
        appointment.time_slot,
        NaiveDate::from_ymd_opt(2025, 6, 2).unwrap().and_hms_opt(14, 0, 0).unwrap()
    );
    assert_eq!(appointment.status, AppointmentStatus::Upcoming);
    assert!(appointment.can_reschedule());
    assert!(appointment.can_cancel());
    assert!(!appointment.can_tip());
    assert_eq!(appointment.tip_amount, None);
}

#[rstest]
#[case("\"UPCOMING\"", AppointmentStatus::Upcoming)]
#[case("\"COMPLETED\"", AppointmentStatus::Completed)]
#[case("\"CANCELLED\"", AppointmentStatus::Cancelled)]
#[case("\"TIPPED\"", AppointmentStatus::Tipped)]
fn test_appointment_status_names(#[case] raw: &str, #[case] expected: AppointmentStatus) {
    let status: AppointmentStatus = from_str(raw).expect("Failed to deserialize status");
    assert_eq!(status, expected);
    assert_eq!(format!("\"{}\"", status.as_str()), raw);
}

#[test]
fn test_create_appointment_request_shape() {
    let request = CreateAppointmentRequest {
        service_id: 3,
        employee_id: 7,
        time_slot: "2025-06-02T09:00:00".to_string(),
        user_id: 11,
        notes: "Window seat".to_string(),
    };

    assert_eq!(
        to_value(&request).unwrap(),
        json!({
            "serviceId": 3,
            "employeeId": 7,
            "timeSlot": "2025-06-02T09:00:00",
            "userId": 11,
            "notes": "Window seat"
        })
    );
}

#[test]
fn test_booked_slot_ignores_extra_fields() {
    let slot: BookedSlot = serde_json::from_value(json!({
        "appointmentId": 1,
        "timeSlot": "2025-06-02T10:00:00",
        "status": "UPCOMING"
    }))
    .expect("Failed to deserialize booked slot");
    assert_eq!(slot.time_slot.format("%H").to_string(), "10");
}

#[test]
fn test_unknown_service_type_is_other() {
    let service: Service = serde_json::from_value(json!({
        "serviceId": 9,
        "serviceType": "MASSAGE",
        "name": "Head massage",
        "price": 900.0,
        "duration_minutes": 30
    }))
    .expect("Failed to deserialize service");
    assert_eq!(service.service_type, ServiceType::Other);
    assert_eq!(service.duration_minutes, Some(30));
}

#[rstest]
#[case("haircuts", Some(ServiceType::Haircuts))]
#[case("COLORING", Some(ServiceType::Coloring))]
#[case(" Treatments ", Some(ServiceType::Treatments))]
#[case("nails", None)]
fn test_service_type_from_str(#[case] raw: &str, #[case] expected: Option<ServiceType>) {
    assert_eq!(raw.parse::<ServiceType>().ok(), expected);
}

#[test]
fn test_product_defaults() {
    let product: Product = serde_json::from_value(json!({
        "productType": "HAIR_WAX",
        "name": "Matte wax",
        "price": 1800.0
    }))
    .expect("Failed to deserialize product");
    assert_eq!(product.product_type, ProductType::HairWax);
    assert_eq!(product.stock_quantity, 0);
    assert!(product.active);
}

#[test]
fn test_login_response_user_type() {
    let email: String = SafeEmail().fake();
    let response: LoginResponse = serde_json::from_value(json!({
        "token": "abc",
        "user": { "userId": 1, "name": "Owner", "email": email, "userType": "SALON_OWNER" }
    }))
    .expect("Failed to deserialize login response");
    assert_eq!(response.user.user_type, UserType::SalonOwner);
    assert_eq!(response.user.email, email);
}

#[test]
fn test_attendance_and_salary_records() {
    let attendance: Attendance = serde_json::from_value(json!({
        "attendanceId": 5,
        "employee": { "employeeId": 2, "name": "Nimal" },
        "arrival": "2025-06-02T08:55:00",
        "departure": null,
        "attendanceStatus": "PRESENT"
    }))
    .expect("Failed to deserialize attendance");
    assert_eq!(attendance.attendance_status, AttendanceStatus::Present);
    assert!(attendance.departure.is_none());

    let salary: SalaryRecord = serde_json::from_value(json!({
        "month": "2025-06-01",
        "servicesProvided": 12,
        "baseSalary": 50000.0,
        "commision": 2400.0,
        "performance": 1000.0,
        "totalSalary": 53400.0
    }))
    .expect("Failed to deserialize salary record");
    assert_eq!(salary.services_provided, 12);
    assert!(salary.employee.is_none());
}
