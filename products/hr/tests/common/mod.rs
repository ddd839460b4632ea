use chrono::NaiveDate;
use hr::{Department, EmployeeInput, EmployeeService};
use migration::{Migrator, MigratorTrait};
use rust_decimal::Decimal;
use sea_orm::{Database, DatabaseConnection};

pub async fn setup_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

pub async fn setup_service() -> EmployeeService {
    EmployeeService::new(setup_db().await)
}

pub fn input(first: &str, email: &str, department: Department) -> EmployeeInput {
    EmployeeInput {
        id: None,
        first_name: Some(first.into()),
        last_name: Some("Lee".into()),
        email: Some(email.into()),
        department: Some(department),
        salary: Some(Decimal::from(90_000)),
        hire_date: NaiveDate::from_ymd_opt(2020, 1, 1),
    }
}
