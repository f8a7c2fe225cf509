use crate::domain::error::RepositoryError;
use crate::domain::payee::Payee;
use crate::repo::PayeeRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// Map-backed repository for local runs and tests.
#[derive(Clone, Default)]
pub struct InMemoryPayeeRepository {
    storage: Arc<Mutex<HashMap<Uuid, Payee>>>,
}

impl InMemoryPayeeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all(&self) -> Vec<Payee> {
        let storage = self.storage.lock().expect("payee storage poisoned");
        storage.values().cloned().collect()
    }
}

#[async_trait::async_trait]
impl PayeeRepository for InMemoryPayeeRepository {
    async fn save(&self, payee: &Payee) -> Result<(), RepositoryError> {
        let mut storage = self.storage.lock().expect("payee storage poisoned");
        if storage.contains_key(&payee.id) {
            return Err(RepositoryError::AlreadyExists(payee.id));
        }
        storage.insert(payee.id, payee.clone());
        Ok(())
    }

    async fn find_by_id(&self, payee_id: Uuid) -> Result<Option<Payee>, RepositoryError> {
        let storage = self.storage.lock().expect("payee storage poisoned");
        Ok(storage.get(&payee_id).cloned())
    }

    async fn update(&self, payee: &Payee) -> Result<(), RepositoryError> {
        let mut storage = self.storage.lock().expect("payee storage poisoned");
        if !storage.contains_key(&payee.id) {
            return Err(RepositoryError::NotFound(payee.id));
        }
        storage.insert(payee.id, payee.clone());
        Ok(())
    }
}
