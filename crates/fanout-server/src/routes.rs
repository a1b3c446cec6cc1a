//! Router construction and request handlers.

use axum::extract::rejection::JsonRejection;
use axum::http::Uri;
use axum::routing::{get, post};
use axum::{Json, Router};
use tracing::debug;

use fanout_core::observers::LoggingObserver;
use fanout_core::operation::Operation;
use fanout_orchestration::interfaces::{BatchRequest, BatchResponse};
use fanout_orchestration::operation_selection::available_operations;
use fanout_orchestration::orchestrator::execute_operation;

use crate::error::ApiError;

/// Build the router: one `POST /{name}` per operation, plus
/// `GET /health` and `GET /operations`.
pub fn create_router() -> Router {
    let mut router = Router::new()
        .route("/health", get(health))
        .route("/operations", get(operations));

    for operation in Operation::ALL {
        let path = format!("/{}", operation.name());
        router = router.route(
            &path,
            post(move |payload: Result<Json<BatchRequest>, JsonRejection>| {
                run_operation(operation, payload)
            }),
        );
    }

    router.fallback(not_found)
}

async fn health() -> &'static str {
    "OK"
}

async fn operations() -> Json<Vec<&'static str>> {
    Json(available_operations())
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}

/// Decode the batch, run it off the async workers, and encode the report.
///
/// The executors block until every element is done, so the batch runs on
/// the blocking pool rather than on a runtime worker thread.
async fn run_operation(
    operation: Operation,
    payload: Result<Json<BatchRequest>, JsonRejection>,
) -> Result<Json<BatchResponse>, ApiError> {
    let Json(request) = payload?;
    debug!(operation = operation.name(), size = request.numbers.len(), "request decoded");

    let outcome = tokio::task::spawn_blocking(move || {
        execute_operation(operation, &request.numbers, &LoggingObserver::new())
    })
    .await
    .map_err(|e| ApiError::Worker(e.to_string()))??;

    Ok(Json(outcome.to_response()))
}
