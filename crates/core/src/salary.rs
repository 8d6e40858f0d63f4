use crate::models::attendance::SalaryRecord;

/// Totals shown above the monthly salary report.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SalarySummary {
    pub total_payroll: f64,
    pub average_salary: f64,
    pub total_services: u32,
}

impl SalarySummary {
    pub fn from_records(records: &[SalaryRecord]) -> Self {
        if records.is_empty() {
            return Self::default();
        }
        let total_payroll: f64 = records.iter().map(|r| r.total_salary).sum();
        let total_services = records.iter().map(|r| r.services_provided).sum();
        Self {
            total_payroll,
            average_salary: (total_payroll / records.len() as f64).round(),
            total_services,
        }
    }
}
