//! Demo fixtures for local development.

use chrono::NaiveDate;
use entity::Department;
use rust_decimal::Decimal;

use crate::{EmployeeInput, EmployeeService, HrResult};

const DEMO_EMPLOYEES: &[(&str, &str, &str, Department, i64, (i32, u32, u32))] = &[
    ("Ann", "Lee", "ann.lee@example.com", Department::Engineering, 9_000_000, (2020, 1, 1)),
    ("Omar", "Haddad", "omar.haddad@example.com", Department::Sales, 6_250_050, (2022, 6, 15)),
    ("Grace", "Kim", "grace.kim@example.com", Department::HumanResources, 7_100_000, (2019, 3, 4)),
    ("Luis", "Ortega", "luis.ortega@example.com", Department::Finance, 8_400_000, (2023, 11, 20)),
    ("Mira", "Patel", "mira.patel@example.com", Department::It, 7_800_000, (2024, 2, 1)),
];

/// Inserts the demo employees whose email is not taken yet. Returns how many
/// rows were created.
pub async fn seed_demo_employees(service: &EmployeeService) -> HrResult<usize> {
    let mut created = 0;
    for &(first, last, email, department, salary_cents, (y, m, d)) in DEMO_EMPLOYEES {
        if service.repository().exists_by_email(email).await? {
            continue;
        }
        let input = EmployeeInput {
            id: None,
            first_name: Some(first.into()),
            last_name: Some(last.into()),
            email: Some(email.into()),
            department: Some(department),
            salary: Some(Decimal::new(salary_cents, 2)),
            hire_date: NaiveDate::from_ymd_opt(y, m, d),
        };
        service.create_employee(input).await?;
        created += 1;
    }
    Ok(created)
}
