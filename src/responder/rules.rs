//! Static keyword rule tables.
//!
//! Two ladders exist: the detailed one behind `/api/chat` and the compact one
//! used by the unified endpoint when no voice emotion is supplied. They share
//! the [`Rule`] shape and the matching routine but keep separate vocabularies
//! and wording. Order matters: the first matching rule wins.

use serde::Serialize;

/// Reply category a rule belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Loneliness,
    Memory,
    Independence,
    Burden,
    LivingArrangement,
    Aging,
    Technology,
    PeerLoss,
    Vitality,
    Sad,
    Happy,
    Angry,
    Worried,
    Calm,
    /// Nothing matched; the reply echoes the message.
    Echo,
}

/// A trigger keyword set paired with its reply template.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub category: Category,
    /// Lowercase substrings; any one of them selects the rule.
    pub triggers: &'static [&'static str],
    pub reply: &'static str,
}

impl Rule {
    /// `lowered` must already be lower-cased.
    pub fn matches(&self, lowered: &str) -> bool {
        self.triggers.iter().any(|t| lowered.contains(t))
    }
}

/// Return the first rule in `rules` whose triggers occur in `lowered`.
pub fn first_match<'a>(rules: &'a [Rule], lowered: &str) -> Option<&'a Rule> {
    rules.iter().find(|rule| rule.matches(lowered))
}

/// Ladder for `/api/chat`: nine topic groups, then the emotion fallback tier.
pub const DETAILED_RULES: &[Rule] = &[
    Rule {
        category: Category::Loneliness,
        triggers: &["lonely", "isolated", "alone", "miss", "passed away"],
        reply: "I'm so sorry you're carrying this. Losing people we love and feeling \
                alone can be one of the hardest parts of life. You are not alone right \
                now. I'm here, and I'd love to hear about them or about how your days \
                have been.",
    },
    Rule {
        category: Category::Memory,
        triggers: &["memory", "forget", "confused", "can't remember"],
        reply: "Moments of forgetting or confusion can feel unsettling, and it's natural \
                to worry about them. Many people experience this, and it doesn't take \
                away who you are. Would it help to talk through what's been happening?",
    },
    Rule {
        category: Category::Independence,
        triggers: &["independence", "driving", "license", "freedom"],
        reply: "Losing some independence is a real loss, and it makes sense to grieve it. \
                Your wish to decide things for yourself matters. Let's think together \
                about the ways you can keep doing what's important to you.",
    },
    Rule {
        category: Category::Burden,
        triggers: &["burden", "family", "children", "worry"],
        reply: "Please don't think of yourself as a burden. The people who love you want \
                to be part of your life, just as you have been part of theirs. Your \
                presence means more to them than you might realise.",
    },
    Rule {
        category: Category::LivingArrangement,
        triggers: &["retirement home", "assisted living", "move"],
        reply: "Deciding where to live is a big step, and leaving a familiar home can \
                bring up a lot of feelings. Whatever you're weighing, your comfort and \
                your voice in the decision matter.",
    },
    Rule {
        category: Category::Aging,
        triggers: &["aging", "getting old", "time running out"],
        reply: "Growing older can bring thoughts about time and what lies ahead. Your \
                life, your experiences and your wisdom have real value, today as much \
                as ever. What has been bringing you meaning lately?",
    },
    Rule {
        category: Category::Technology,
        triggers: &["technology", "phone", "computer", "confusing"],
        reply: "Technology changes so quickly that it frustrates almost everyone. There \
                is nothing wrong with taking it one step at a time. If you'd like, we \
                can work through it together, slowly.",
    },
    Rule {
        category: Category::PeerLoss,
        triggers: &["friends gone", "last one", "survived"],
        reply: "Outliving friends brings a very particular kind of grief. Those \
                friendships were part of your story, and missing them shows how much \
                they meant. I'd be honoured to hear about them.",
    },
    Rule {
        category: Category::Vitality,
        triggers: &["proud", "still active", "exercise", "walk"],
        reply: "That's wonderful to hear! Staying active and taking pride in what you do \
                is something to celebrate. Your energy and spirit are inspiring.",
    },
    Rule {
        category: Category::Sad,
        triggers: &["sad"],
        reply: "I hear sadness in your words. I'm here with you, and it's okay to feel \
                this way. Would you like to tell me what's weighing on you?",
    },
    Rule {
        category: Category::Happy,
        triggers: &["happy"],
        reply: "That's wonderful! I can feel your joy, and I'm so glad you shared it \
                with me.",
    },
    Rule {
        category: Category::Angry,
        triggers: &["angry", "frustrated"],
        reply: "It sounds like something has really frustrated you. Those feelings are \
                valid. Do you want to tell me what happened?",
    },
    Rule {
        category: Category::Worried,
        triggers: &["worried", "scared"],
        reply: "Feeling worried or scared is hard, and it makes sense given what you're \
                facing. You don't have to face it alone. Let's talk it through together.",
    },
];

/// Text ladder for the unified endpoint when no voice emotion is supplied.
pub const COMPACT_RULES: &[Rule] = &[
    Rule {
        category: Category::Sad,
        triggers: &["sad"],
        reply: "I'm sorry you're feeling sad. I'm right here with you.",
    },
    Rule {
        category: Category::Happy,
        triggers: &["happy"],
        reply: "That's lovely to hear! Your happiness really comes through.",
    },
    Rule {
        category: Category::Angry,
        triggers: &["angry"],
        reply: "It sounds like something upset you. It's okay to feel angry.",
    },
    Rule {
        category: Category::Calm,
        triggers: &["calm"],
        reply: "It's good that you're feeling calm. Let's enjoy this peaceful moment \
                together.",
    },
];
