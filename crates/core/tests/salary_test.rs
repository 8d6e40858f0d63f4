use chrono::NaiveDate;
use salonbook_core::models::attendance::SalaryRecord;
use salonbook_core::salary::SalarySummary;

#[test]
fn test_salary_summary() {
    let month = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
    let record = |total: f64, services: u32| SalaryRecord {
        employee: None,
        month,
        services_provided: services,
        base_salary: 40000.0,
        commision: 0.0,
        performance: 0.0,
        total_salary: total,
    };

    let summary = SalarySummary::from_records(&[record(40000.0, 3), record(45001.0, 5)]);
    assert_eq!(summary.total_payroll, 85001.0);
    assert_eq!(summary.average_salary, 42501.0);
    assert_eq!(summary.total_services, 8);

    assert_eq!(SalarySummary::from_records(&[]), SalarySummary::default());
}
