use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Number of recent entries considered when looking for recurring themes
pub const RECENT_WINDOW: usize = 10;

/// Occurrences within the window required before a nudge is offered
pub const NUDGE_THRESHOLD: u64 = 3;

/// A theme that recurs often enough to nudge about
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotTheme {
    pub name: String,
    pub count: u64,
}

/// Pick the theme to nudge about, if any reaches the threshold
///
/// Deterministic tie-break: highest count wins, equal counts go to the
/// lexicographically smallest name.
pub fn hot_theme(counts: &BTreeMap<String, u64>, threshold: u64) -> Option<HotTheme> {
    counts
        .iter()
        .filter(|(_, &count)| count >= threshold)
        .max_by(|(a_name, a_count), (b_name, b_count)| {
            a_count.cmp(b_count).then_with(|| b_name.cmp(a_name))
        })
        .map(|(name, &count)| HotTheme {
            name: name.clone(),
            count,
        })
}

/// Tailored follow-up prompt for a recurring theme
pub fn follow_up_prompt(theme: &str) -> String {
    format!(
        "Would you like to explore what's behind your recent {}? What patterns have you noticed?",
        theme.to_lowercase()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(pairs: &[(&str, u64)]) -> BTreeMap<String, u64> {
        pairs.iter().map(|(n, c)| (n.to_string(), *c)).collect()
    }

    #[test]
    fn test_no_nudge_for_empty_counts() {
        assert_eq!(hot_theme(&BTreeMap::new(), NUDGE_THRESHOLD), None);
    }

    #[test]
    fn test_no_nudge_below_threshold() {
        let counts = counts(&[("Stress", 2), ("Sleep", 1)]);
        assert_eq!(hot_theme(&counts, NUDGE_THRESHOLD), None);
    }

    #[test]
    fn test_theme_at_threshold_is_picked() {
        let counts = counts(&[("Stress", 3), ("Sleep", 1)]);
        let hot = hot_theme(&counts, NUDGE_THRESHOLD).unwrap();
        assert_eq!(hot.name, "Stress");
        assert_eq!(hot.count, 3);
    }

    #[test]
    fn test_highest_count_wins() {
        let counts = counts(&[("Anxiety", 3), ("Stress", 5)]);
        assert_eq!(hot_theme(&counts, NUDGE_THRESHOLD).unwrap().name, "Stress");
    }

    #[test]
    fn test_tie_goes_to_lexicographically_smallest() {
        let counts = counts(&[("Stress", 3), ("Anxiety", 3), ("Sleep", 3)]);
        assert_eq!(hot_theme(&counts, NUDGE_THRESHOLD).unwrap().name, "Anxiety");
    }

    #[test]
    fn test_follow_up_prompt_lowercases_theme() {
        let prompt = follow_up_prompt("Stress");
        assert!(prompt.contains("your recent stress?"));
        assert!(prompt.ends_with("What patterns have you noticed?"));
    }
}
