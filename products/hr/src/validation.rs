//! Field checks applied to incoming employee payloads.

use chrono::NaiveDate;
use entity::Department;
use platform_api::FieldErrors;
use rust_decimal::Decimal;
use validator::ValidateEmail;

use crate::dto::{EmployeeInput, salary_to_cents};

/// Largest salary the store accepts, `NUMERIC(10,2)` expressed in cents.
pub const MAX_SALARY_CENTS: i64 = 9_999_999_999;

/// A payload that passed every field check, trimmed and ready to persist.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidEmployee {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: Department,
    pub salary_cents: i64,
    pub hire_date: NaiveDate,
}

/// Checks every field and reports all failures at once.
pub fn validate(input: &EmployeeInput) -> Result<ValidEmployee, FieldErrors> {
    let mut errors = FieldErrors::new();

    let first_name = required_text(&mut errors, "firstName", &input.first_name, "First name");
    let last_name = required_text(&mut errors, "lastName", &input.last_name, "Last name");
    let email = required_text(&mut errors, "email", &input.email, "Email");
    if let Some(email) = &email {
        if !email.validate_email() {
            errors.insert("email".into(), "Email should be valid".into());
        }
    }
    if input.department.is_none() {
        errors.insert("department".into(), "Department is required".into());
    }
    let salary_cents = match input.salary {
        None => {
            errors.insert("salary".into(), "Salary is required".into());
            None
        }
        Some(salary) => match check_salary(salary) {
            Ok(cents) => Some(cents),
            Err(msg) => {
                errors.insert("salary".into(), msg.into());
                None
            }
        },
    };
    if input.hire_date.is_none() {
        errors.insert("hireDate".into(), "Hire date is required".into());
    }

    if !errors.is_empty() {
        return Err(errors);
    }
    match (
        first_name,
        last_name,
        email,
        input.department,
        salary_cents,
        input.hire_date,
    ) {
        (
            Some(first_name),
            Some(last_name),
            Some(email),
            Some(department),
            Some(salary_cents),
            Some(hire_date),
        ) => {
            Ok(ValidEmployee {
                first_name,
                last_name,
                email,
                department,
                salary_cents,
                hire_date,
            })
        }
        _ => Err(errors),
    }
}

fn required_text(
    errors: &mut FieldErrors,
    field: &str,
    value: &Option<String>,
    label: &str,
) -> Option<String> {
    match value.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => Some(text.to_string()),
        _ => {
            errors.insert(field.to_string(), format!("{label} is required"));
            None
        }
    }
}

fn check_salary(salary: Decimal) -> Result<i64, &'static str> {
    if salary <= Decimal::ZERO {
        return Err("Salary must be positive");
    }
    match salary_to_cents(salary) {
        None if salary.normalize().scale() > 2 => Err("Salary must have at most 2 decimal places"),
        Some(cents) if cents <= MAX_SALARY_CENTS => Ok(cents),
        _ => Err("Salary is too large"),
    }
}
