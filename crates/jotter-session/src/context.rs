use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::nudge::follow_up_prompt;

/// Fixed reflective prompts offered on the entry form
pub const WRITING_PROMPTS: [&str; 5] = [
    "How's your day going?",
    "What's been on your mind today?",
    "What gave you energy this week?",
    "What's one small win you had recently?",
    "What's been draining your energy lately?",
];

/// Prompt forced once the refresh counter reaches `MAX_REFRESHES`
pub const FALLBACK_PROMPT: &str = "Just write whatever's on your mind.";

const MAX_REFRESHES: u32 = 2;

/// Ephemeral per-session UI state
///
/// Carried in request and response bodies rather than held server-side, so
/// every handler works from (and hands back) an explicit context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionContext {
    pub current_prompt: String,
    pub refresh_count: u32,
}

impl Default for SessionContext {
    fn default() -> Self {
        Self {
            current_prompt: WRITING_PROMPTS[0].to_string(),
            refresh_count: 0,
        }
    }
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a "new prompt" request
    ///
    /// Increments the refresh counter. From the second refresh on the prompt
    /// is forced to `FALLBACK_PROMPT`; before that a prompt is drawn
    /// uniformly from the fixed set, excluding the one currently shown.
    pub fn rotate_prompt<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.refresh_count += 1;
        if self.refresh_count >= MAX_REFRESHES {
            self.current_prompt = FALLBACK_PROMPT.to_string();
            return;
        }

        let choices: Vec<&str> = WRITING_PROMPTS
            .iter()
            .copied()
            .filter(|p| *p != self.current_prompt)
            .collect();
        if let Some(next) = choices.choose(rng) {
            self.current_prompt = (*next).to_string();
        }
    }

    /// Reset to the initial state after a successful entry save
    pub fn reset_after_save(&mut self) {
        self.refresh_count = 0;
        self.current_prompt = WRITING_PROMPTS[0].to_string();
    }

    /// Load a nudge follow-up as the current prompt and clear the counter
    pub fn accept_nudge(&mut self, theme: &str) {
        self.current_prompt = follow_up_prompt(theme);
        self.refresh_count = 0;
    }
}
