use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use mockall::mock;
use salonbook_core::models::{
    appointment::{
        Appointment, AppointmentStatus, BookedSlot, CreateAppointmentRequest,
        CreateAppointmentResponse,
    },
    attendance::{Attendance, SalaryRecord},
    catalog::{Product, Service, ServiceType},
    dashboard::{CheckoutSession, DashboardStats},
    employee::Employee,
    pos::{PosTransaction, PosTransactionRequest},
    user::{LoginRequest, LoginResponse, RegisterRequest, User},
};

use crate::{ClientResult, api::SalonApi};

// Mock backend for testing flows without a server
mock! {
    pub SalonApi {}

    #[async_trait]
    impl SalonApi for SalonApi {
        async fn login(&self, request: &LoginRequest) -> ClientResult<LoginResponse>;
        async fn register(&self, request: &RegisterRequest) -> ClientResult<User>;
        async fn customers(&self) -> ClientResult<Vec<User>>;

        async fn services(&self) -> ClientResult<Vec<Service>>;
        async fn services_by_type(&self, service_type: ServiceType) -> ClientResult<Vec<Service>>;
        async fn create_service(&self, service: &Service) -> ClientResult<Service>;
        async fn update_service(&self, id: i64, service: &Service) -> ClientResult<Service>;
        async fn delete_service(&self, id: i64) -> ClientResult<()>;
        async fn products(&self) -> ClientResult<Vec<Product>>;
        async fn create_product(&self, product: &Product) -> ClientResult<Product>;
        async fn update_product(&self, id: i64, product: &Product) -> ClientResult<Product>;
        async fn delete_product(&self, id: i64) -> ClientResult<()>;

        async fn employees(&self) -> ClientResult<Vec<Employee>>;
        async fn create_employee(&self, employee: &Employee) -> ClientResult<Employee>;
        async fn update_employee(&self, id: i64, employee: &Employee) -> ClientResult<Employee>;
        async fn delete_employee(&self, id: i64) -> ClientResult<()>;
        async fn dashboard_stats(&self) -> ClientResult<DashboardStats>;
        async fn salary_report(&self, month: NaiveDate) -> ClientResult<Vec<SalaryRecord>>;
        async fn attendance(&self) -> ClientResult<Vec<Attendance>>;
        async fn mark_attendance(&self, attendance: &Attendance) -> ClientResult<()>;
        async fn attendance_between(
            &self,
            employee_id: i64,
            start: NaiveDate,
            end: NaiveDate,
        ) -> ClientResult<Vec<Attendance>>;

        async fn appointments(&self) -> ClientResult<Vec<Appointment>>;
        async fn recent_appointments(&self) -> ClientResult<Vec<Appointment>>;
        async fn user_appointments(&self, user_id: i64) -> ClientResult<Vec<Appointment>>;
        async fn appointments_between(
            &self,
            start: NaiveDateTime,
            end: NaiveDateTime,
        ) -> ClientResult<Vec<Appointment>>;
        async fn booked_slots(&self, employee_id: i64, date: NaiveDate) -> ClientResult<Vec<BookedSlot>>;
        async fn create_appointment(
            &self,
            request: &CreateAppointmentRequest,
        ) -> ClientResult<CreateAppointmentResponse>;
        async fn update_appointment(&self, id: i64, appointment: &Appointment) -> ClientResult<Appointment>;
        async fn update_appointment_status(
            &self,
            id: i64,
            status: AppointmentStatus,
        ) -> ClientResult<Appointment>;

        async fn create_transaction(&self, request: &PosTransactionRequest) -> ClientResult<PosTransaction>;
        async fn transactions(&self) -> ClientResult<Vec<PosTransaction>>;
        async fn checkout_session(
            &self,
            appointment_id: i64,
            label: &str,
            amount: u64,
        ) -> ClientResult<CheckoutSession>;
    }
}
