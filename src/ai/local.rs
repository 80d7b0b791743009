use crate::core::responder;
use std::time::Duration;

/// Локальный бот: ответы по ключевым словам с искусственной задержкой
pub struct LocalAI {
    delay: Duration,
}

impl LocalAI {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub async fn get_response(&self, user_input: &str) -> String {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        responder::select_reply(user_input).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_local_reply_matches_selector() {
        let ai = LocalAI::new(Duration::ZERO);
        assert_eq!(ai.get_response("hello there").await, responder::RULES[4].reply);
        assert_eq!(ai.get_response("banana").await, responder::DEFAULT_REPLY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_local_reply_waits_for_delay() {
        let ai = LocalAI::new(Duration::from_millis(1000));
        let started = tokio::time::Instant::now();
        ai.get_response("exam").await;
        assert!(started.elapsed() >= Duration::from_millis(1000));
    }
}
