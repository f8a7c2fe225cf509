use crate::domain::error::PspError;

pub mod http;
pub mod mock;

/// Registers a payee's bank account with the payment service provider and
/// returns the provider's reference for it. No retries at this seam.
#[async_trait::async_trait]
pub trait PspClient: Send + Sync {
    fn name(&self) -> &'static str;

    async fn onboard_payee(
        &self,
        name: &str,
        email: &str,
        bank_account: &str,
    ) -> Result<String, PspError>;
}
