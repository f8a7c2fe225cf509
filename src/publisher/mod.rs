use crate::domain::error::PublishError;
use crate::domain::event::PayeeOnboardedEvent;

pub mod mock;
pub mod redis_stream;

/// Best-effort hand-off of a domain event to the bus. Delivery retries and
/// exactly-once are out of scope at this seam.
#[async_trait::async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(&self, topic: &str, event: &PayeeOnboardedEvent) -> Result<(), PublishError>;
}
