use crate::domain::payee::Payee;
use crate::domain::status::PayeeStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OnboardPayeeRequest {
    pub name: String,
    pub email: String,
    pub bank_account: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChangeStatusRequest {
    pub status: PayeeStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct PayeeResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub bank_account: String,
    pub status: PayeeStatus,
    pub psp_reference: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PayeeResponse {
    pub fn from_payee(payee: &Payee) -> Self {
        Self {
            id: payee.id,
            name: payee.name.clone(),
            email: payee.email.clone(),
            bank_account: payee.bank_account.clone(),
            status: payee.status,
            psp_reference: payee.psp_reference.clone(),
            created_at: payee.created_at,
            updated_at: payee.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub error: ErrorPayload,
}

#[derive(Debug, Serialize)]
pub struct ErrorPayload {
    pub code: String,
    pub message: String,
    pub details: Option<String>,
}
