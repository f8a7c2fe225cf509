use crate::domain::dto::{ChangeStatusRequest, ErrorEnvelope, ErrorPayload, OnboardPayeeRequest, PayeeResponse};
use crate::domain::error::{OnboardingError, RepositoryError};
use crate::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use uuid::Uuid;

pub async fn onboard_payee(
    State(state): State<AppState>,
    Json(req): Json<OnboardPayeeRequest>,
) -> impl IntoResponse {
    match state.payee_service.onboard(req).await {
        Ok(resp) => (StatusCode::CREATED, Json(resp)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn get_payee(
    State(state): State<AppState>,
    Path(payee_id): Path<Uuid>,
) -> impl IntoResponse {
    match state.payees_repo.find_by_id(payee_id).await {
        Ok(Some(payee)) => (StatusCode::OK, Json(PayeeResponse::from_payee(&payee))).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(err("PAYEE_NOT_FOUND", &format!("payee {payee_id} not found"))),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(err("INTERNAL_ERROR", &e.to_string())),
        )
            .into_response(),
    }
}

pub async fn change_status(
    State(state): State<AppState>,
    Path(payee_id): Path<Uuid>,
    Json(req): Json<ChangeStatusRequest>,
) -> impl IntoResponse {
    match state.payee_service.change_status(payee_id, req.status).await {
        Ok(resp) => (StatusCode::OK, Json(resp)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

fn error_response(e: OnboardingError) -> Response {
    let (status, code) = match &e {
        OnboardingError::InvalidTransition(_) => (StatusCode::BAD_REQUEST, "INVALID_STATUS_TRANSITION"),
        OnboardingError::Repository(RepositoryError::NotFound(_)) => (StatusCode::NOT_FOUND, "PAYEE_NOT_FOUND"),
        OnboardingError::Repository(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        OnboardingError::Psp(_) => (StatusCode::BAD_GATEWAY, "PSP_ONBOARDING_FAILED"),
        OnboardingError::Publish(_) => (StatusCode::INTERNAL_SERVER_ERROR, "EVENT_PUBLISH_FAILED"),
    };

    (status, Json(err(code, &e.to_string()))).into_response()
}

fn err(code: &str, message: &str) -> ErrorEnvelope {
    ErrorEnvelope {
        error: ErrorPayload {
            code: code.to_string(),
            message: message.to_string(),
            details: None,
        },
    }
}
