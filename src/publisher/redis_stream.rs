use crate::domain::error::PublishError;
use crate::domain::event::PayeeOnboardedEvent;
use crate::publisher::EventPublisher;

/// Appends events to a redis stream named after the topic.
#[derive(Clone)]
pub struct RedisStreamPublisher {
    pub client: redis::Client,
}

#[async_trait::async_trait]
impl EventPublisher for RedisStreamPublisher {
    async fn publish(&self, topic: &str, event: &PayeeOnboardedEvent) -> Result<(), PublishError> {
        let payload = serde_json::to_string(event).map_err(|e| PublishError::Encode(e.to_string()))?;

        let mut conn = self
            .client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| PublishError::Transport(e.to_string()))?;

        let _id: String = redis::cmd("XADD")
            .arg(topic)
            .arg("MAXLEN")
            .arg("~")
            .arg(1_000_000)
            .arg("*")
            .arg("event")
            .arg(payload)
            .query_async(&mut conn)
            .await
            .map_err(|e| PublishError::Transport(e.to_string()))?;

        Ok(())
    }
}
