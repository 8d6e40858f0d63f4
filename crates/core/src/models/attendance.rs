use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::employee::Employee;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Leave,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendance {
    #[serde(default)]
    pub attendance_id: i64,
    pub employee: Employee,
    #[serde(default)]
    pub arrival: Option<NaiveDateTime>,
    #[serde(default)]
    pub departure: Option<NaiveDateTime>,
    pub attendance_status: AttendanceStatus,
}

/// One employee's row in the monthly salary report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryRecord {
    #[serde(default)]
    pub employee: Option<Employee>,
    pub month: NaiveDate,
    pub services_provided: u32,
    pub base_salary: f64,
    pub commision: f64,
    pub performance: f64,
    pub total_salary: f64,
}
