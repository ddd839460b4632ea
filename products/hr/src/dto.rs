//! Wire representations of an employee.

use chrono::NaiveDate;
use entity::{Department, employees};
use rust_decimal::{Decimal, prelude::ToPrimitive};
use serde::{Deserialize, Serialize};

/// Employee as returned by the API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDto {
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: Department,
    /// Emitted as a JSON number; accepted as a number or a string.
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub salary: Decimal,
    pub hire_date: NaiveDate,
}

impl From<employees::Model> for EmployeeDto {
    fn from(model: employees::Model) -> Self {
        Self {
            id: Some(model.id),
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
            department: model.department,
            salary: cents_to_salary(model.salary_cents),
            hire_date: model.hire_date,
        }
    }
}

/// Employee as submitted by clients on create and update. Every field is
/// optional so missing values surface as validation errors rather than
/// deserialization failures. `id` is accepted and ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeInput {
    pub id: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub department: Option<Department>,
    pub salary: Option<Decimal>,
    pub hire_date: Option<NaiveDate>,
}

pub fn cents_to_salary(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

/// Exact conversion to cents. `None` when the amount has more than two
/// fractional digits or does not fit in `i64`.
pub fn salary_to_cents(salary: Decimal) -> Option<i64> {
    if salary.normalize().scale() > 2 {
        return None;
    }
    salary
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|cents| cents.to_i64())
}
