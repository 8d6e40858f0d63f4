use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::employee::Employee;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Cash,
    Card,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceItem {
    pub service_id: i64,
    pub price: f64,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductItem {
    pub product_id: i64,
    pub quantity: u32,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRef {
    pub employee_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PosTransactionRequest {
    pub customer: String,
    pub employee: EmployeeRef,
    pub services: Vec<ServiceItem>,
    pub products: Vec<ProductItem>,
    pub payment_method: PaymentMethod,
    pub total_amount: f64,
    pub transaction_time: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PosTransaction {
    pub transaction_id: i64,
    #[serde(default)]
    pub customer: Option<String>,
    #[serde(default)]
    pub employee: Option<Employee>,
    pub transaction_time: NaiveDateTime,
    pub total_amount: f64,
    pub payment_method: PaymentMethod,
}
