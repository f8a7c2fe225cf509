use crate::domain::error::PspError;
use crate::psp::PspClient;
use serde_json::json;

pub struct HttpPspClient {
    pub base_url: String,
    pub api_key: String,
    pub timeout_ms: u64,
    pub client: reqwest::Client,
}

#[async_trait::async_trait]
impl PspClient for HttpPspClient {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn onboard_payee(
        &self,
        name: &str,
        email: &str,
        bank_account: &str,
    ) -> Result<String, PspError> {
        let url = format!("{}/v1/payees", self.base_url);
        let body = json!({
            "name": name,
            "email": email,
            "bank_account": bank_account,
        });

        let resp = self
            .client
            .post(url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .timeout(std::time::Duration::from_millis(self.timeout_ms))
            .send()
            .await;

        match resp {
            Ok(r) if r.status().is_success() => {
                let v: serde_json::Value = r
                    .json()
                    .await
                    .map_err(|e| PspError::Transport(e.to_string()))?;
                v.get("reference")
                    .and_then(|id| id.as_str())
                    .map(ToString::to_string)
                    .ok_or_else(|| PspError::Rejected("provider response missing reference".to_string()))
            }
            Ok(r) => {
                let status = r.status();
                let body = r.text().await.unwrap_or_default();
                Err(PspError::Rejected(format!(
                    "HTTP_{}: {}",
                    status.as_u16(),
                    body.chars().take(200).collect::<String>()
                )))
            }
            Err(e) if e.is_timeout() => Err(PspError::Transport("psp timeout".to_string())),
            Err(e) => Err(PspError::Transport(e.to_string())),
        }
    }
}
