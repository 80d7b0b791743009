/// Canned replies picked by keyword, used when the chatbot runs offline

pub struct KeywordRule {
    pub triggers: &'static [&'static str],
    pub reply: &'static str,
}

pub const DEFAULT_REPLY: &str = "I'm here to help. Could you please tell me a bit more?";

/// Checked top to bottom, the first rule with a matching trigger wins.
pub const RULES: &[KeywordRule] = &[
    KeywordRule {
        triggers: &["exam", "stress"],
        reply: "Exam stress is very common. Remember to take short breaks, stay hydrated, and practice deep breathing. Would you like me to suggest a relaxation video from our resources?",
    },
    KeywordRule {
        triggers: &["anxious", "anxiety"],
        reply: "It sounds like you're going through a tough time. A useful technique is the 5-4-3-2-1 grounding exercise. Notice 5 things you can see, 4 you can feel, 3 you can hear, 2 you can smell, and 1 you can taste. This can help bring you back to the present moment.",
    },
    KeywordRule {
        triggers: &["sad", "depressed"],
        reply: "I'm sorry to hear you're feeling this way. It's important to talk about these feelings. Our peer support forum is a safe place, or you can book a confidential session with a counsellor. Your feelings are valid.",
    },
    KeywordRule {
        triggers: &["help", "counsellor"],
        reply: "Seeking help is a sign of strength. You can book an anonymous appointment with a professional by clicking the 'Book Appointment' button in the navigation bar.",
    },
    KeywordRule {
        triggers: &["hi", "hello"],
        reply: "Hello! I'm your friendly support bot. How are you feeling today? Feel free to share anything that's on your mind.",
    },
];

impl KeywordRule {
    fn matches(&self, lower_msg: &str) -> bool {
        self.triggers.iter().any(|&word| lower_msg.contains(word))
    }
}

pub fn select_reply_from(rules: &[KeywordRule], message: &str) -> &'static str {
    let lower_msg = message.to_lowercase();
    rules
        .iter()
        .find(|rule| rule.matches(&lower_msg))
        .map(|rule| rule.reply)
        .unwrap_or(DEFAULT_REPLY)
}

pub fn select_reply(message: &str) -> &'static str {
    select_reply_from(RULES, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting() {
        assert_eq!(select_reply("hello there"), RULES[4].reply);
    }

    #[test]
    fn test_sadness() {
        assert_eq!(select_reply("I feel really sad lately"), RULES[2].reply);
    }

    #[test]
    fn test_default_reply() {
        assert_eq!(select_reply("banana"), DEFAULT_REPLY);
        assert_eq!(select_reply(""), DEFAULT_REPLY);
    }

    #[test]
    fn test_earlier_rule_wins() {
        assert_eq!(select_reply("I am anxious about an exam"), RULES[0].reply);
        assert_eq!(select_reply("so depressed, I need help"), RULES[2].reply);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(select_reply("ANXIETY is killing me"), RULES[1].reply);
        assert_eq!(select_reply("Where is a Counsellor?"), RULES[3].reply);
    }

    #[test]
    fn test_substring_triggers() {
        // "hi" внутри "think" тоже срабатывает
        assert_eq!(select_reply("I think so"), RULES[4].reply);
        assert_eq!(select_reply("stressful week"), RULES[0].reply);
    }

    #[test]
    fn test_deterministic() {
        for msg in ["hello", "exam", "banana", "sad and anxious"] {
            assert_eq!(select_reply(msg), select_reply(msg));
        }
    }

    #[test]
    fn test_custom_rule_order() {
        let rules = [
            KeywordRule { triggers: &["b"], reply: "first" },
            KeywordRule { triggers: &["a"], reply: "second" },
        ];
        assert_eq!(select_reply_from(&rules, "ab"), "first");
        assert_eq!(select_reply_from(&rules, "a"), "second");
        assert_eq!(select_reply_from(&[], "a"), DEFAULT_REPLY);
    }
}
