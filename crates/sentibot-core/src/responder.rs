//! Canned-response selection.
//!
//! The bot's replies are deterministic: a fixed rule ladder keyed on
//! farewell/greeting phrases first, then the message's sentiment label.
//! An optional [`IntentResolver`](crate::intent::IntentResolver) is
//! consulted before the ladder; its absence or a miss changes nothing.

use crate::intent::IntentResolver;
use crate::sentiment::SentimentLabel;

const FAREWELL_SEE_YOU: &str = "See you later! Feel free to come back anytime.";
const FAREWELL_GOODBYE: &str = "Goodbye! Have a great day!";
const GREETING: &str = "Hi there! What's on your mind?";
const REPLY_POSITIVE: &str = "Great! I'm happy for you.";
const REPLY_NEGATIVE: &str = "I understand your concern. I'll make sure it's addressed.";
const REPLY_NEUTRAL: &str = "I see. Tell me more about that.";

/// Selects the bot's reply for a user message.
pub struct Responder {
    name: String,
    intent_resolver: Option<Box<dyn IntentResolver>>,
}

impl Responder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            intent_resolver: None,
        }
    }

    /// Attaches an intent resolver consulted before the rule ladder.
    pub fn with_intent_resolver(mut self, resolver: Box<dyn IntentResolver>) -> Self {
        self.intent_resolver = Some(resolver);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Produces the reply for one user message and its sentiment label.
    pub fn reply(&self, input: &str, label: SentimentLabel) -> String {
        if let Some(resolver) = &self.intent_resolver
            && let Some(reply) = resolver.resolve(input)
        {
            return reply;
        }

        let lower = input.to_lowercase();
        let words: Vec<&str> = lower
            .split(|c: char| !c.is_alphanumeric() && c != '\'')
            .filter(|w| !w.is_empty())
            .collect();

        // Farewells take precedence over everything else.
        if words.contains(&"goodbye") {
            return FAREWELL_SEE_YOU.to_string();
        }
        if words.contains(&"bye") {
            return FAREWELL_GOODBYE.to_string();
        }
        if lower.contains("see you") {
            return FAREWELL_SEE_YOU.to_string();
        }

        if ["hello", "hi", "hey", "greetings"]
            .iter()
            .any(|greeting| words.contains(greeting))
        {
            return GREETING.to_string();
        }

        match label {
            SentimentLabel::Positive => REPLY_POSITIVE.to_string(),
            SentimentLabel::Negative => REPLY_NEGATIVE.to_string(),
            SentimentLabel::Neutral => REPLY_NEUTRAL.to_string(),
        }
    }

    /// The banner shown when a session starts.
    pub fn welcome_message(&self) -> String {
        format!(
            "\n\
             ╔══════════════════════════════════════════════╗\n\
             ║   Welcome to {:<32}║\n\
             ║   I'm here to chat and understand your mood  ║\n\
             ║   Type 'quit' or 'exit' to end conversation  ║\n\
             ╚══════════════════════════════════════════════╝\n",
            format!("{}!", self.name)
        )
    }
}
