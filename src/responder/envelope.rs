//! Reply envelope for the voice-aware endpoint.

use serde::Serialize;

use super::selector::{compact_reply, voice_reply};
use crate::config::ArcTimestamp;

/// Intensity reported when a voice emotion was supplied.
pub const VOICE_INTENSITY: f64 = 0.7;
/// Intensity reported for text-only turns.
pub const BASELINE_INTENSITY: f64 = 0.5;
/// Mood reported when no voice emotion was supplied.
pub const NEUTRAL_MOOD: &str = "neutral";
/// Trigger recorded on every arc entry.
pub const ARC_TRIGGER: &str = "user_input";
/// Voice-emotion value the frontend sends when nothing was detected.
pub const NO_VOICE_EMOTION: &str = "none";

/// One point of the emotional arc.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArcEntry {
    pub timestamp: String,
    pub mood: String,
    pub intensity: f64,
    pub trigger: String,
}

/// Full response of the unified endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyEnvelope {
    pub reply: String,
    pub mood: String,
    pub intensity: f64,
    pub voice_data: Option<String>,
    pub emotional_arc: Vec<ArcEntry>,
}

/// Build the envelope for one turn.
///
/// A voice emotion counts as supplied when it is non-empty. Mood, intensity
/// and the arc depend only on that; the reply additionally ignores the
/// literal `"none"` and falls back to the compact text ladder.
pub fn unified_reply(
    message: &str,
    voice_emotion: Option<&str>,
    timestamp: ArcTimestamp,
) -> ReplyEnvelope {
    let supplied = voice_emotion.filter(|v| !v.is_empty());

    let reply = match supplied {
        Some(label) if label != NO_VOICE_EMOTION => voice_reply(label),
        _ => compact_reply(message).reply,
    };

    let mood = supplied.unwrap_or(NEUTRAL_MOOD).to_string();
    let intensity = if supplied.is_some() {
        VOICE_INTENSITY
    } else {
        BASELINE_INTENSITY
    };

    ReplyEnvelope {
        reply,
        emotional_arc: vec![ArcEntry {
            timestamp: timestamp.stamp(),
            mood: mood.clone(),
            intensity,
            trigger: ARC_TRIGGER.to_string(),
        }],
        mood,
        intensity,
        voice_data: supplied.map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FIXED_ARC_TIMESTAMP;

    #[test]
    fn test_voice_emotion_envelope() {
        let envelope = unified_reply("hello", Some("happy"), ArcTimestamp::Fixed);
        assert_eq!(envelope.mood, "happy");
        assert_eq!(envelope.intensity, VOICE_INTENSITY);
        assert_eq!(envelope.voice_data.as_deref(), Some("happy"));
        assert_eq!(envelope.emotional_arc.len(), 1);
        assert_eq!(envelope.emotional_arc[0].mood, "happy");
        assert_eq!(envelope.emotional_arc[0].intensity, VOICE_INTENSITY);
        assert_eq!(envelope.emotional_arc[0].trigger, "user_input");
        assert_eq!(envelope.emotional_arc[0].timestamp, FIXED_ARC_TIMESTAMP);
        assert!(envelope.reply.contains("happy"));
    }

    #[test]
    fn test_voice_emotion_overrides_text() {
        let envelope = unified_reply("I am so sad", Some("excited"), ArcTimestamp::Fixed);
        assert!(envelope.reply.contains("feeling excited"));
    }

    #[test]
    fn test_text_only_envelope() {
        let envelope = unified_reply("I am calm today", None, ArcTimestamp::Fixed);
        assert_eq!(envelope.mood, "neutral");
        assert_eq!(envelope.intensity, BASELINE_INTENSITY);
        assert!(envelope.voice_data.is_none());
        assert!(envelope.reply.contains("calm"));
        assert_eq!(envelope.emotional_arc[0].mood, "neutral");
    }

    #[test]
    fn test_none_label_uses_text_ladder() {
        let envelope = unified_reply("I am sad", Some("none"), ArcTimestamp::Fixed);
        assert_eq!(envelope.reply, compact_reply("I am sad").reply);
        assert_eq!(envelope.mood, "none");
        assert_eq!(envelope.intensity, VOICE_INTENSITY);
    }

    #[test]
    fn test_empty_label_is_absent() {
        let envelope = unified_reply("hi", Some(""), ArcTimestamp::Fixed);
        assert_eq!(envelope.mood, "neutral");
        assert_eq!(envelope.intensity, BASELINE_INTENSITY);
        assert!(envelope.voice_data.is_none());
    }

    #[test]
    fn test_serialized_field_names() {
        let envelope = unified_reply("hi", None, ArcTimestamp::Fixed);
        let json = serde_json::to_value(&envelope).unwrap();
        assert!(json.get("voiceData").is_some());
        assert!(json["voiceData"].is_null());
        assert!(json["emotionalArc"].is_array());
        assert_eq!(json["emotionalArc"][0]["trigger"], "user_input");
    }
}
