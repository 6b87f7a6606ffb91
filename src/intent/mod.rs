/*! Keyword-driven intent matching

The rule-based chatbot core: a fixed dispatch table of keyword sets over
lowercased tokens, plus canned responses per intent. The interactive loop
is not part of the crate; callers classify one utterance at a time.
!*/
use std::collections::{HashMap, HashSet};
use std::io::Read;

use lazy_static::lazy_static;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::sources::tokenize;

lazy_static! {
    static ref GREETING_WORDS: HashSet<&'static str> =
        ["hello", "hi", "hey"].iter().copied().collect();
    static ref FAREWELL_WORDS: HashSet<&'static str> =
        ["bye", "goodbye"].iter().copied().collect();
    static ref THANKS_WORDS: HashSet<&'static str> =
        ["thank", "thanks", "thankyou"].iter().copied().collect();
}

/// Recognized conversational intents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Greeting,
    Farewell,
    Thanks,
    AskName,
    Unknown,
}

/// Classify one utterance.
///
/// Keyword checks run over lowercased word tokens in a fixed order, so an
/// utterance holding both a greeting and a farewell classifies as a
/// greeting. The name question is a substring rule, not a token rule.
pub fn detect_intent(text: &str) -> Intent {
    let lowered = text.to_lowercase();
    let tokens = tokenize(&lowered);

    if tokens.iter().any(|t| GREETING_WORDS.contains(t.as_str())) {
        Intent::Greeting
    } else if tokens.iter().any(|t| FAREWELL_WORDS.contains(t.as_str())) {
        Intent::Farewell
    } else if tokens.iter().any(|t| THANKS_WORDS.contains(t.as_str())) {
        Intent::Thanks
    } else if lowered.contains("your name") {
        Intent::AskName
    } else {
        Intent::Unknown
    }
}

/// Canned responses per intent.
///
/// Loadable from a JSON map of intent name to response list; the built-in
/// default covers every intent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseSet {
    responses: HashMap<Intent, Vec<String>>,
}

impl ResponseSet {
    /// Load a response map from JSON.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, Error> {
        let responses = serde_json::from_reader(reader)?;
        Ok(Self { responses })
    }

    /// Pick one response for `intent` at random.
    ///
    /// Intents missing from the map fall back to the unknown-intent
    /// responses.
    pub fn pick<R: Rng>(&self, intent: Intent, rng: &mut R) -> &str {
        let pool = self
            .responses
            .get(&intent)
            .filter(|r| !r.is_empty())
            .or_else(|| self.responses.get(&Intent::Unknown))
            .filter(|r| !r.is_empty());

        match pool {
            Some(responses) => &responses[rng.gen_range(0..responses.len())],
            None => "...",
        }
    }
}

impl Default for ResponseSet {
    fn default() -> Self {
        let mut responses = HashMap::new();
        responses.insert(
            Intent::Greeting,
            vec!["Hello!".to_string(), "Hi there!".to_string()],
        );
        responses.insert(
            Intent::Farewell,
            vec!["Goodbye!".to_string(), "See you later!".to_string()],
        );
        responses.insert(
            Intent::Thanks,
            vec!["You're welcome!".to_string(), "Any time.".to_string()],
        );
        responses.insert(
            Intent::AskName,
            vec!["I'm a rule-based chatbot.".to_string()],
        );
        responses.insert(
            Intent::Unknown,
            vec!["Sorry, I didn't get that.".to_string()],
        );
        Self { responses }
    }
}
