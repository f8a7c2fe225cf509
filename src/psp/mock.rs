use crate::domain::error::PspError;
use crate::psp::PspClient;

pub struct MockPspClient {
    pub behavior: String,
}

#[async_trait::async_trait]
impl PspClient for MockPspClient {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn onboard_payee(
        &self,
        _name: &str,
        _email: &str,
        _bank_account: &str,
    ) -> Result<String, PspError> {
        match self.behavior.as_str() {
            "ALWAYS_REJECT" => Err(PspError::Rejected("mock decline".to_string())),
            "ALWAYS_TIMEOUT" => Err(PspError::Transport("mock timeout".to_string())),
            _ => {
                let hex = uuid::Uuid::new_v4().simple().to_string();
                Ok(format!("PSP-{}", hex[..12].to_uppercase()))
            }
        }
    }
}
