//! Rule-based reply selection.
//!
//! Pure functions from message text (and an optional voice-emotion label) to
//! a reply. The rule tables are `'static` and read-only, so every function
//! here can be called concurrently without coordination.
//!
//! ```text
//! /api/chat           → select_reply   (DETAILED_RULES, echo fallback)
//! /api/unified-chat   → unified_reply  (voice label, else COMPACT_RULES)
//! ```

pub mod envelope;
pub mod rules;
pub mod selector;

pub use envelope::{unified_reply, ArcEntry, ReplyEnvelope};
pub use rules::{Category, Rule, COMPACT_RULES, DETAILED_RULES};
pub use selector::{compact_reply, select_reply, voice_reply, Selection, VoiceTone};
