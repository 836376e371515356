mod context;
mod nudge;

pub use context::{SessionContext, FALLBACK_PROMPT, WRITING_PROMPTS};
pub use nudge::{follow_up_prompt, hot_theme, HotTheme, NUDGE_THRESHOLD, RECENT_WINDOW};
