use axum::{Json, Router, http::StatusCode, routing::get};
use chrono::NaiveDate;
use reports::{EmployeeApiClient, ReportsError, new_hires};
use serde_json::json;
use tokio::net::TcpListener;

async fn spawn_upstream(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn fetches_and_projects_employees() {
    let router = Router::new().route(
        "/api/employees",
        get(|| async {
            Json(json!([
                {
                    "id": 1,
                    "firstName": "Ann",
                    "lastName": "Lee",
                    "email": "ann@x.com",
                    "department": "ENGINEERING",
                    "salary": 90000.0,
                    "hireDate": "2024-01-01"
                },
                {
                    "id": 2,
                    "firstName": "Bob",
                    "lastName": "Roe",
                    "email": "bob@x.com",
                    "department": "SALES",
                    "salary": 50000.0,
                    "hireDate": "2024-01-21"
                }
            ]))
        }),
    );
    let base = spawn_upstream(router).await;
    let client = EmployeeApiClient::new(&base).unwrap();

    let employees = client.fetch_employees().await.unwrap();
    assert_eq!(employees.len(), 2);

    let today = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
    let rows = new_hires(employees, today, None);
    assert_eq!(rows[0].first_name, "Bob");
    assert_eq!(rows[0].days_since_hire, 10);
    assert_eq!(rows[1].days_since_hire, 30);
}

#[tokio::test]
async fn upstream_errors_are_reported() {
    let router = Router::new().route(
        "/api/employees",
        get(|| async { StatusCode::SERVICE_UNAVAILABLE }),
    );
    let base = spawn_upstream(router).await;
    let client = EmployeeApiClient::new(&base).unwrap();
    let err = client.fetch_employees().await.unwrap_err();
    assert!(matches!(err, ReportsError::UpstreamStatus(503)));
}

#[test]
fn rejects_malformed_base_url() {
    assert!(matches!(
        EmployeeApiClient::new("not a url"),
        Err(ReportsError::InvalidUrl(_))
    ));
}

#[test]
fn base_url_keeps_path_prefix() {
    let client = EmployeeApiClient::new("http://hr.internal/staff").unwrap();
    assert_eq!(client.base_url().as_str(), "http://hr.internal/staff/");
}
