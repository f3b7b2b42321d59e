//! Reply selection over the rule tables.

use serde::Serialize;

use super::rules::{first_match, Category, COMPACT_RULES, DETAILED_RULES};

/// The matched category and the reply text it produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub category: Category,
    pub reply: String,
}

/// Select the reply for `/api/chat`.
///
/// Matching is case-insensitive. When no rule matches, the reply echoes
/// `message` exactly as received.
pub fn select_reply(message: &str) -> Selection {
    let lowered = message.to_lowercase();
    match first_match(DETAILED_RULES, &lowered) {
        Some(rule) => Selection {
            category: rule.category,
            reply: rule.reply.to_string(),
        },
        None => Selection {
            category: Category::Echo,
            reply: format!(
                "Thank you for sharing that with me. You said: \"{}\". \
                 I'm listening, tell me more about how you're feeling.",
                message
            ),
        },
    }
}

/// Select the text-only reply used by the unified endpoint.
pub fn compact_reply(message: &str) -> Selection {
    let lowered = message.to_lowercase();
    match first_match(COMPACT_RULES, &lowered) {
        Some(rule) => Selection {
            category: rule.category,
            reply: rule.reply.to_string(),
        },
        None => Selection {
            category: Category::Echo,
            reply: format!("I hear you. You said: {}", message),
        },
    }
}

/// Broad tone of a voice-emotion label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceTone {
    /// excited, happy
    Enthusiastic,
    /// sad, angry
    Empathetic,
    Neutral,
}

impl VoiceTone {
    pub fn classify(label: &str) -> Self {
        let label = label.to_lowercase();
        match label.as_str() {
            "excited" | "happy" => Self::Enthusiastic,
            "sad" | "angry" => Self::Empathetic,
            _ => Self::Neutral,
        }
    }
}

/// Reply driven by a voice-emotion label. The label is echoed as sent.
pub fn voice_reply(label: &str) -> String {
    match VoiceTone::classify(label) {
        VoiceTone::Enthusiastic => format!(
            "I can hear that you're feeling {} in your voice! That energy is wonderful. \
             What's bringing it on?",
            label
        ),
        VoiceTone::Empathetic => format!(
            "I can hear that you're feeling {} from your voice. I'm here with you, \
             take all the time you need.",
            label
        ),
        VoiceTone::Neutral => format!(
            "I notice a {} tone in your voice. How are you feeling right now?",
            label
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sad_fallback() {
        let selection = select_reply("I had a sad morning");
        assert_eq!(selection.category, Category::Sad);
        assert!(selection.reply.contains("sadness"));
    }

    #[test]
    fn test_topic_group_beats_fallback_tier() {
        let selection = select_reply("I feel lonely and sad");
        assert_eq!(selection.category, Category::Loneliness);
    }

    #[test]
    fn test_case_insensitive() {
        for message in ["SAD", "Sad", "sad"] {
            assert_eq!(select_reply(message).category, Category::Sad);
        }
    }

    #[test]
    fn test_group_priority_order() {
        assert_eq!(select_reply("I forget my family").category, Category::Memory);
        assert_eq!(
            select_reply("They took my license and I worry").category,
            Category::Independence
        );
        assert_eq!(
            select_reply("My children want me in assisted living").category,
            Category::Burden
        );
        assert_eq!(
            select_reply("Thinking about assisted living").category,
            Category::LivingArrangement
        );
        assert_eq!(select_reply("I am getting old").category, Category::Aging);
        assert_eq!(
            select_reply("My new phone is a mystery").category,
            Category::Technology
        );
        assert_eq!(select_reply("I'm the last one left").category, Category::PeerLoss);
        assert_eq!(select_reply("I'm proud of my garden").category, Category::Vitality);
    }

    #[test]
    fn test_emotion_tier_order() {
        assert_eq!(select_reply("happy but angry").category, Category::Happy);
        assert_eq!(select_reply("So frustrated").category, Category::Angry);
        assert_eq!(select_reply("I'm scared").category, Category::Worried);
    }

    #[test]
    fn test_echo_keeps_message_verbatim() {
        let selection = select_reply("  Hello There  ");
        assert_eq!(selection.category, Category::Echo);
        assert!(selection.reply.contains("\"  Hello There  \""));
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(select_reply("I miss her"), select_reply("I miss her"));
    }

    #[test]
    fn test_compact_ladder() {
        assert_eq!(compact_reply("I am calm today").category, Category::Calm);
        assert!(compact_reply("I am calm today").reply.contains("calm"));
        assert_eq!(compact_reply("so ANGRY").category, Category::Angry);

        let echo = compact_reply("I feel lonely");
        assert_eq!(echo.category, Category::Echo);
        assert!(echo.reply.ends_with("I feel lonely"));
    }

    #[test]
    fn test_compact_and_detailed_wording_differ() {
        assert_ne!(compact_reply("sad").reply, select_reply("sad").reply);
    }

    #[test]
    fn test_voice_tone_classification() {
        assert_eq!(VoiceTone::classify("Excited"), VoiceTone::Enthusiastic);
        assert_eq!(VoiceTone::classify("HAPPY"), VoiceTone::Enthusiastic);
        assert_eq!(VoiceTone::classify("sad"), VoiceTone::Empathetic);
        assert_eq!(VoiceTone::classify("Angry"), VoiceTone::Empathetic);
        assert_eq!(VoiceTone::classify("calm"), VoiceTone::Neutral);
    }

    #[test]
    fn test_voice_reply_interpolates_label() {
        assert!(voice_reply("Excited").contains("feeling Excited"));
        assert!(voice_reply("sad").contains("here with you"));
        assert!(voice_reply("calm").contains("calm tone"));
    }
}
