use crate::ai::{ChatbotClient, LocalAI};
use crate::config::{ChatbotMode, Config};

const EMPTY_INPUT_REPLY: &str = "How can I help you today?";

enum Backend {
    Remote(ChatbotClient),
    Offline(LocalAI),
}

/// Chat agent behind the hero widget. Each call is independent, no history is kept.
pub struct SupportAgent {
    backend: Backend,
}

impl SupportAgent {
    pub fn new(config: &Config) -> Self {
        let backend = match config.chatbot_mode {
            ChatbotMode::Remote => {
                log::info!("📡 Chatbot endpoint: {}", config.chatbot_url);
                Backend::Remote(ChatbotClient::new(config.chatbot_url.clone()))
            }
            ChatbotMode::Offline => {
                log::info!("📴 Chatbot runs offline on keyword rules");
                Backend::Offline(LocalAI::new(config.latency.bot))
            }
        };

        Self { backend }
    }

    pub fn mode(&self) -> ChatbotMode {
        match self.backend {
            Backend::Remote(_) => ChatbotMode::Remote,
            Backend::Offline(_) => ChatbotMode::Offline,
        }
    }

    /// Всегда возвращает какой-то ответ: ошибки сети превращаются в FALLBACK_REPLY
    pub async fn get_response(&self, user_input: &str) -> String {
        if user_input.trim().is_empty() {
            return EMPTY_INPUT_REPLY.to_string();
        }

        match &self.backend {
            Backend::Remote(client) => client.reply_or_fallback(user_input).await,
            Backend::Offline(local) => local.get_response(user_input).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::FALLBACK_REPLY;
    use crate::core::responder;

    #[tokio::test]
    async fn test_offline_agent_uses_rules() {
        let agent = SupportAgent::new(&Config::offline());
        assert_eq!(agent.mode(), ChatbotMode::Offline);
        assert_eq!(
            agent.get_response("I am anxious about an exam").await,
            responder::RULES[0].reply
        );
    }

    #[tokio::test]
    async fn test_blank_input_short_circuits() {
        let agent = SupportAgent::new(&Config::offline());
        assert_eq!(agent.get_response("   ").await, EMPTY_INPUT_REPLY);
    }

    #[tokio::test]
    async fn test_remote_failure_yields_fallback() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let config = Config {
            chatbot_mode: ChatbotMode::Remote,
            chatbot_url: format!("http://{}/chatbot", addr),
            ..Config::offline()
        };
        let agent = SupportAgent::new(&config);
        assert_eq!(agent.mode(), ChatbotMode::Remote);
        assert_eq!(agent.get_response("hello").await, FALLBACK_REPLY);
    }
}
