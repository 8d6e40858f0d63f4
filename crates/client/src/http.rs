//! `reqwest` implementation of [`SalonApi`].
//!
//! Every request carries the session's bearer token when one is present. A
//! 401 from the backend clears the session before the error is returned, so
//! the caller can send the user back to sign in.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use salonbook_core::booking_time::TIMESTAMP_FORMAT;
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
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::{debug, error, warn};

use crate::{ClientError, ClientResult, SharedSession, api::SalonApi, config::ClientConfig};

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone)]
pub struct HttpSalonApi {
    client: Client,
    base_url: String,
    session: SharedSession,
}

impl HttpSalonApi {
    pub fn new(config: &ClientConfig, session: SharedSession) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    pub fn session(&self) -> &SharedSession {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        let token = self.session.read().await.token().map(str::to_owned);
        match token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn execute(&self, request: RequestBuilder) -> ClientResult<Response> {
        let response = self.authorize(request).await.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::UNAUTHORIZED {
            warn!("Backend rejected the session token, signing out");
            self.session.write().await.logout();
            return Err(ClientError::Unauthorized);
        }

        let message = error_message(&response.text().await.unwrap_or_default());
        error!(%status, %message, "Request failed");

        Err(match status {
            StatusCode::FORBIDDEN => ClientError::Forbidden(message),
            StatusCode::NOT_FOUND => ClientError::NotFound(message),
            StatusCode::BAD_REQUEST => ClientError::Validation(message),
            _ => ClientError::Api { status, message },
        })
    }

    async fn fetch<T: DeserializeOwned>(&self, request: RequestBuilder) -> ClientResult<T> {
        let body = self.execute(request).await?.text().await?;
        serde_json::from_str(&body).map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        debug!(path, "GET");
        self.fetch(self.client.get(self.url(path))).await
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        debug!(path, "POST");
        self.fetch(self.client.post(self.url(path)).json(body)).await
    }

    async fn put<B, T>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        debug!(path, "PUT");
        self.fetch(self.client.put(self.url(path)).json(body)).await
    }

    async fn delete(&self, path: &str) -> ClientResult<()> {
        debug!(path, "DELETE");
        self.execute(self.client.delete(self.url(path))).await?;
        Ok(())
    }
}

/// Prefers the `message` field of a JSON error body.
fn error_message(body: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        message: Option<String>,
    }

    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody { message: Some(message) }) => message,
        _ if body.trim().is_empty() => "Something went wrong".to_string(),
        _ => body.trim().to_string(),
    }
}

#[async_trait]
impl SalonApi for HttpSalonApi {
    async fn login(&self, request: &LoginRequest) -> ClientResult<LoginResponse> {
        self.post("users/login", request).await
    }

    async fn register(&self, request: &RegisterRequest) -> ClientResult<User> {
        self.post("users/register", request).await
    }

    async fn customers(&self) -> ClientResult<Vec<User>> {
        self.get("users").await
    }

    async fn services(&self) -> ClientResult<Vec<Service>> {
        self.get("services").await
    }

    async fn services_by_type(&self, service_type: ServiceType) -> ClientResult<Vec<Service>> {
        self.get(&format!("services/type/{}", service_type.as_str())).await
    }

    async fn create_service(&self, service: &Service) -> ClientResult<Service> {
        self.post("services", service).await
    }

    async fn update_service(&self, id: i64, service: &Service) -> ClientResult<Service> {
        self.put(&format!("services/{}", id), service).await
    }

    async fn delete_service(&self, id: i64) -> ClientResult<()> {
        self.delete(&format!("services/{}", id)).await
    }

    async fn products(&self) -> ClientResult<Vec<Product>> {
        self.get("products").await
    }

    async fn create_product(&self, product: &Product) -> ClientResult<Product> {
        self.post("products", product).await
    }

    async fn update_product(&self, id: i64, product: &Product) -> ClientResult<Product> {
        self.put(&format!("products/{}", id), product).await
    }

    async fn delete_product(&self, id: i64) -> ClientResult<()> {
        self.delete(&format!("products/{}", id)).await
    }

    async fn employees(&self) -> ClientResult<Vec<Employee>> {
        self.get("employee").await
    }

    async fn create_employee(&self, employee: &Employee) -> ClientResult<Employee> {
        self.post("employee", employee).await
    }

    async fn update_employee(&self, id: i64, employee: &Employee) -> ClientResult<Employee> {
        self.put(&format!("employee/{}", id), employee).await
    }

    async fn delete_employee(&self, id: i64) -> ClientResult<()> {
        self.delete(&format!("employee/{}", id)).await
    }

    async fn dashboard_stats(&self) -> ClientResult<DashboardStats> {
        self.get("employee/stats").await
    }

    async fn salary_report(&self, month: NaiveDate) -> ClientResult<Vec<SalaryRecord>> {
        self.get(&format!("employee/salary?date={}", month.format(DATE_FORMAT)))
            .await
    }

    async fn attendance(&self) -> ClientResult<Vec<Attendance>> {
        self.get("attendance").await
    }

    async fn mark_attendance(&self, attendance: &Attendance) -> ClientResult<()> {
        self.post::<_, serde_json::Value>("attendance", attendance)
            .await
            .map(|_| ())
    }

    async fn attendance_between(
        &self,
        employee_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> ClientResult<Vec<Attendance>> {
        self.get(&format!(
            "attendance/filter/{}/{}/{}",
            employee_id,
            start.format(DATE_FORMAT),
            end.format(DATE_FORMAT)
        ))
        .await
    }

    async fn appointments(&self) -> ClientResult<Vec<Appointment>> {
        self.get("appointments").await
    }

    async fn recent_appointments(&self) -> ClientResult<Vec<Appointment>> {
        self.get("appointments/recent").await
    }

    async fn user_appointments(&self, user_id: i64) -> ClientResult<Vec<Appointment>> {
        self.get(&format!("appointments/user/{}", user_id)).await
    }

    async fn appointments_between(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> ClientResult<Vec<Appointment>> {
        self.get(&format!(
            "appointments/range/{}/{}",
            start.format(TIMESTAMP_FORMAT),
            end.format(TIMESTAMP_FORMAT)
        ))
        .await
    }

    async fn booked_slots(&self, employee_id: i64, date: NaiveDate) -> ClientResult<Vec<BookedSlot>> {
        self.get(&format!(
            "appointments/slots/{}/{}",
            employee_id,
            date.format(DATE_FORMAT)
        ))
        .await
    }

    async fn create_appointment(
        &self,
        request: &CreateAppointmentRequest,
    ) -> ClientResult<CreateAppointmentResponse> {
        self.post("appointments", request).await
    }

    async fn update_appointment(&self, id: i64, appointment: &Appointment) -> ClientResult<Appointment> {
        self.put(&format!("appointments/{}", id), appointment).await
    }

    async fn update_appointment_status(
        &self,
        id: i64,
        status: AppointmentStatus,
    ) -> ClientResult<Appointment> {
        self.put(&format!("appointments/status/{}", id), status.as_str())
            .await
    }

    async fn create_transaction(&self, request: &PosTransactionRequest) -> ClientResult<PosTransaction> {
        self.post("transactions", request).await
    }

    async fn transactions(&self) -> ClientResult<Vec<PosTransaction>> {
        self.get("transactions").await
    }

    async fn checkout_session(
        &self,
        appointment_id: i64,
        label: &str,
        amount: u64,
    ) -> ClientResult<CheckoutSession> {
        self.get(&format!(
            "payments/stripe/{}/{}/{}",
            appointment_id,
            urlencoding::encode(label),
            amount
        ))
        .await
    }
}
