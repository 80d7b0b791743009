use crate::error::ChatbotError;
use serde::{Deserialize, Serialize};

/// Reply shown whenever the remote chatbot cannot be reached or answers badly
pub const FALLBACK_REPLY: &str = "There was some error";

#[derive(Debug, Serialize)]
struct PromptRequest<'a> {
    prompt: &'a str,
}

#[derive(Debug, Deserialize)]
struct PromptResponse {
    #[serde(alias = "reply")]
    data: String,
}

/// Клиент для внешнего чат-бота
pub struct ChatbotClient {
    http_client: reqwest::Client,
    endpoint: String,
}

impl ChatbotClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn with_http_client(endpoint: impl Into<String>, http_client: reqwest::Client) -> Self {
        Self {
            http_client,
            endpoint: endpoint.into(),
        }
    }

    /// Один запрос без повторов: POST {"prompt": ...}, ответ в поле `data`
    pub async fn ask(&self, prompt: &str) -> Result<String, ChatbotError> {
        let response = self
            .http_client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(&PromptRequest { prompt })
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(ChatbotError::Status(status, text));
        }

        let reply: PromptResponse = serde_json::from_str(&text)?;
        Ok(reply.data)
    }

    /// Same as [`ask`](Self::ask) but never fails: errors become [`FALLBACK_REPLY`].
    pub async fn reply_or_fallback(&self, prompt: &str) -> String {
        match self.ask(prompt).await {
            Ok(reply) => {
                log::debug!("📡 Chatbot replied ({} chars)", reply.len());
                reply
            }
            Err(e) => {
                log::error!("Chatbot error: {}", e);
                FALLBACK_REPLY.to_string()
            }
        }
    }
}
