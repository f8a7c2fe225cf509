use crate::domain::status::PayeeStatus;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, Error)]
#[error("cannot transition payee from {from} to {to}")]
pub struct InvalidStatusTransition {
    pub from: PayeeStatus,
    pub to: PayeeStatus,
}

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("payee {0} not found")]
    NotFound(Uuid),
    #[error("payee {0} already exists")]
    AlreadyExists(Uuid),
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

#[derive(Debug, Clone, Error)]
pub enum PspError {
    #[error("psp rejected payee onboarding: {0}")]
    Rejected(String),
    #[error("psp request failed: {0}")]
    Transport(String),
}

#[derive(Debug, Clone, Error)]
pub enum PublishError {
    #[error("failed to encode event: {0}")]
    Encode(String),
    #[error("event publish failed: {0}")]
    Transport(String),
}

#[derive(Debug, Error)]
pub enum OnboardingError {
    #[error(transparent)]
    InvalidTransition(#[from] InvalidStatusTransition),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Psp(#[from] PspError),
    #[error(transparent)]
    Publish(#[from] PublishError),
}
