//! Handler for the service root.

use axum::Json;
use serde::Serialize;

/// Body of `GET /`.
#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}

/// GET /
pub async fn index() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Employee Payroll & Staff API is running",
    })
}
