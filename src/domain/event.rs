use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Published once per successful onboarding, after the active record is
/// durable. Never read back by this service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayeeOnboardedEvent {
    pub event_type: String,
    pub payee_id: Uuid,
    pub name: String,
    pub email: String,
    pub psp_reference: String,
    pub timestamp: DateTime<Utc>,
}

impl PayeeOnboardedEvent {
    pub const EVENT_TYPE: &'static str = "payee_onboarded";

    pub fn new(
        payee_id: Uuid,
        name: &str,
        email: &str,
        psp_reference: &str,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            event_type: Self::EVENT_TYPE.to_string(),
            payee_id,
            name: name.to_string(),
            email: email.to_string(),
            psp_reference: psp_reference.to_string(),
            timestamp,
        }
    }
}
