use crate::domain::error::RepositoryError;
use crate::domain::payee::Payee;
use uuid::Uuid;

pub mod memory;
pub mod postgres;

/// Durable store for payees. `save` and `update` must be atomic per id
/// under concurrent access.
#[async_trait::async_trait]
pub trait PayeeRepository: Send + Sync {
    async fn save(&self, payee: &Payee) -> Result<(), RepositoryError>;

    async fn find_by_id(&self, payee_id: Uuid) -> Result<Option<Payee>, RepositoryError>;

    async fn update(&self, payee: &Payee) -> Result<(), RepositoryError>;
}
