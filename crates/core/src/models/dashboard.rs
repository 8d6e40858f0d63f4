use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub today_appointments: u32,
    pub total_customers: u32,
    pub today_revenue: f64,
    pub monthly_revenue: f64,
}

/// Hosted payment page returned for bookings and tips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutSession {
    pub url: String,
}
