use crate::domain::dto::{OnboardPayeeRequest, PayeeResponse};
use crate::domain::error::{OnboardingError, RepositoryError};
use crate::domain::event::PayeeOnboardedEvent;
use crate::domain::payee::Payee;
use crate::domain::status::PayeeStatus;
use crate::psp::PspClient;
use crate::publisher::EventPublisher;
use crate::repo::PayeeRepository;
use std::sync::Arc;
use uuid::Uuid;

pub const PAYEE_EVENTS_TOPIC: &str = "payee-events";

#[derive(Clone)]
pub struct PayeeService {
    pub repository: Arc<dyn PayeeRepository>,
    pub psp_client: Arc<dyn PspClient>,
    pub event_publisher: Arc<dyn EventPublisher>,
}

impl PayeeService {
    /// Onboarding saga: persist PENDING, call the PSP, then either activate
    /// and publish or record FAILED and re-raise the PSP error unchanged.
    /// Ordering: the PENDING write precedes the PSP call; the ACTIVE update
    /// precedes the publish. A failed publish leaves the payee durably
    /// active with no event emitted.
    pub async fn onboard(&self, request: OnboardPayeeRequest) -> Result<PayeeResponse, OnboardingError> {
        let mut payee = Payee::create(request.name, request.email, request.bank_account);

        self.repository.save(&payee).await?;

        let psp_reference = match self
            .psp_client
            .onboard_payee(&payee.name, &payee.email, &payee.bank_account)
            .await
        {
            Ok(reference) => reference,
            Err(err) => {
                tracing::warn!(payee_id = %payee.id, error = %err, "psp onboarding failed, marking payee failed");
                payee.mark_as_failed()?;
                self.repository.update(&payee).await?;
                return Err(err.into());
            }
        };

        payee.set_psp_reference(&psp_reference);
        payee.activate()?;

        self.repository.update(&payee).await?;

        let event = PayeeOnboardedEvent::new(
            payee.id,
            &payee.name,
            &payee.email,
            &psp_reference,
            payee.updated_at,
        );
        self.event_publisher.publish(PAYEE_EVENTS_TOPIC, &event).await?;

        tracing::info!(payee_id = %payee.id, psp_reference = %psp_reference, "payee onboarded");

        Ok(PayeeResponse::from_payee(&payee))
    }

    /// Operator-driven lifecycle change. Illegal edges are rejected without
    /// touching the stored record.
    pub async fn change_status(
        &self,
        payee_id: Uuid,
        new_status: PayeeStatus,
    ) -> Result<PayeeResponse, OnboardingError> {
        let mut payee = self
            .repository
            .find_by_id(payee_id)
            .await?
            .ok_or(RepositoryError::NotFound(payee_id))?;

        payee.transition_to(new_status)?;
        self.repository.update(&payee).await?;

        tracing::info!(payee_id = %payee.id, status = payee.status.as_str(), "payee status changed");

        Ok(PayeeResponse::from_payee(&payee))
    }
}
