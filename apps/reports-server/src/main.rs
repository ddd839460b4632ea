use std::net::SocketAddr;

use anyhow::Context;
use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use clap::Parser;
use platform_api::{ApiError, ApiResult};
use platform_obs::{ObsConfig, init_tracing};
use reports::{EmployeeApiClient, NewHire, new_hires, today};
use serde::Deserialize;
use tokio::signal;
use tower_http::trace::TraceLayer;

#[derive(Parser, Debug)]
#[command(name = "reports-server", version, about = "New-hire reports over the employee API")]
struct Cli {
    #[arg(long, env = "HOST", default_value_t = String::from("0.0.0.0"))]
    host: String,
    #[arg(long, env = "PORT", default_value_t = 8081)]
    port: u16,
    /// Base URL of the employee service.
    #[arg(long, env = "EMPLOYEE_API_URL", default_value = "http://localhost:8080")]
    employee_api_url: String,
}

#[derive(Clone)]
struct AppState {
    employees: EmployeeApiClient,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NewHireQuery {
    within_days: Option<i64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing(ObsConfig::for_service("reports-server"))?;
    let cli = Cli::parse();

    let employees = EmployeeApiClient::new(&cli.employee_api_url)?;
    tracing::info!(upstream = %employees.base_url(), "employee api configured");

    let addr: SocketAddr = format!("{}:{}", cli.host, cli.port)
        .parse()
        .context("invalid listen address")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "reports server listening");

    axum::serve(listener, app_router(AppState { employees }))
        .with_graceful_shutdown(async {
            signal::ctrl_c()
                .await
                .expect("failed to install Ctrl+C handler");
            tracing::info!("shutdown signal received");
        })
        .await
        .context("HTTP server error")?;
    Ok(())
}

fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/reports/new-hires", get(new_hires_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn new_hires_handler(
    State(state): State<AppState>,
    Query(query): Query<NewHireQuery>,
) -> ApiResult<Json<Vec<NewHire>>> {
    if matches!(query.within_days, Some(days) if days < 0) {
        return Err(ApiError::invalid("withinDays must not be negative"));
    }
    let employees = state.employees.fetch_employees().await?;
    Ok(Json(new_hires(employees, today(), query.within_days)))
}
