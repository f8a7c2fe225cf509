use crate::domain::error::PublishError;
use crate::domain::event::PayeeOnboardedEvent;
use crate::publisher::EventPublisher;
use std::sync::{Arc, Mutex};

/// Keeps published events in memory, readable back through `published`.
#[derive(Clone, Default)]
pub struct MockEventPublisher {
    events: Arc<Mutex<Vec<(String, PayeeOnboardedEvent)>>>,
}

impl MockEventPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn published(&self) -> Vec<(String, PayeeOnboardedEvent)> {
        self.events.lock().expect("event log poisoned").clone()
    }
}

#[async_trait::async_trait]
impl EventPublisher for MockEventPublisher {
    async fn publish(&self, topic: &str, event: &PayeeOnboardedEvent) -> Result<(), PublishError> {
        tracing::debug!(topic, payee_id = %event.payee_id, "event recorded");
        self.events
            .lock()
            .expect("event log poisoned")
            .push((topic.to_string(), event.clone()));
        Ok(())
    }
}
