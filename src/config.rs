use std::env;
use std::time::Duration;

pub const DEFAULT_CHATBOT_URL: &str = "https://sih-mental.onrender.com/chatbot";

/// Откуда берутся ответы чат-бота
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatbotMode {
    /// Внешний HTTP endpoint
    Remote,
    /// Локальные правила по ключевым словам
    Offline,
}

impl ChatbotMode {
    fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "offline" | "local" => ChatbotMode::Offline,
            _ => ChatbotMode::Remote,
        }
    }
}

/// Artificial delays that stand in for network round trips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    pub resources: Duration,
    pub bot: Duration,
    pub booking: Duration,
}

impl Latency {
    pub const NONE: Latency = Latency {
        resources: Duration::ZERO,
        bot: Duration::ZERO,
        booking: Duration::ZERO,
    };

    pub fn simulated() -> Self {
        Self {
            resources: Duration::from_millis(350),
            bot: Duration::from_millis(1000),
            booking: Duration::from_millis(1200),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub app_name: String,
    pub chatbot_url: String,
    pub chatbot_mode: ChatbotMode,
    pub latency: Latency,
    pub window_width: f32,
    pub window_height: f32,
    pub community_url: String,
}

impl Default for Config {
    fn default() -> Self {
        dotenv::dotenv().ok();

        let chatbot_url = env::var("DIGIPSYCH_CHATBOT_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CHATBOT_URL.to_string());

        let chatbot_mode = env::var("DIGIPSYCH_CHATBOT_MODE")
            .map(|v| ChatbotMode::parse(&v))
            .unwrap_or(ChatbotMode::Remote);

        let simulate_latency = env::var("DIGIPSYCH_SIMULATE_LATENCY")
            .unwrap_or_else(|_| "true".to_string())
            .to_lowercase() != "false";

        Self {
            app_name: "DigiPsych".to_string(),
            chatbot_url,
            chatbot_mode,
            latency: if simulate_latency {
                Latency::simulated()
            } else {
                Latency::NONE
            },
            window_width: 1200.0,
            window_height: 860.0,
            community_url: "https://www.reddit.com/r/MentalHealthSupport/".to_string(),
        }
    }
}

impl Config {
    /// Offline configuration without delays, handy for tests.
    pub fn offline() -> Self {
        Self {
            chatbot_mode: ChatbotMode::Offline,
            latency: Latency::NONE,
            ..Self::default()
        }
    }
}
