use crate::domain::error::InvalidStatusTransition;
use crate::domain::status::PayeeStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payee {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub bank_account: String,
    pub status: PayeeStatus,
    pub psp_reference: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Payee {
    pub fn create(name: String, email: String, bank_account: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            bank_account,
            status: PayeeStatus::Pending,
            psp_reference: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn set_psp_reference(&mut self, psp_reference: impl Into<String>) {
        self.psp_reference = Some(psp_reference.into());
        self.updated_at = Utc::now();
    }

    /// Leaves the entity untouched when the requested edge is not in the
    /// transition table.
    pub fn transition_to(&mut self, new_status: PayeeStatus) -> Result<(), InvalidStatusTransition> {
        if !self.status.can_transition_to(new_status) {
            return Err(InvalidStatusTransition {
                from: self.status,
                to: new_status,
            });
        }
        self.status = new_status;
        self.updated_at = Utc::now();
        Ok(())
    }

    pub fn activate(&mut self) -> Result<(), InvalidStatusTransition> {
        self.transition_to(PayeeStatus::Active)
    }

    pub fn suspend(&mut self) -> Result<(), InvalidStatusTransition> {
        self.transition_to(PayeeStatus::Suspended)
    }

    pub fn deactivate(&mut self) -> Result<(), InvalidStatusTransition> {
        self.transition_to(PayeeStatus::Inactive)
    }

    pub fn mark_as_failed(&mut self) -> Result<(), InvalidStatusTransition> {
        self.transition_to(PayeeStatus::Failed)
    }

    pub fn is_active(&self) -> bool {
        self.status == PayeeStatus::Active
    }

    pub fn can_receive_payments(&self) -> bool {
        self.status == PayeeStatus::Active && self.psp_reference.is_some()
    }
}
