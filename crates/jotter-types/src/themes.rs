//! Theme-name normalization and aggregation
//!
//! Every comparison in the system (filter matching, frequency counts,
//! summarizer output) goes through `title_case`, so stored and queried
//! names always agree regardless of how the model or the user cased them.

use std::collections::{BTreeMap, BTreeSet};

use crate::summary::{SummaryRecord, Theme};

/// Normalize a theme name to title case
///
/// Trims the input, uppercases the first letter of each whitespace-separated
/// word and lowercases the rest.
pub fn title_case(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut out = String::with_capacity(word.len());
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                out.extend(first.to_uppercase());
                out.extend(chars.flat_map(char::to_lowercase));
            }
            out
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Distinct title-cased theme names, with empty names dropped
pub fn theme_names(themes: &[Theme]) -> BTreeSet<String> {
    themes
        .iter()
        .map(|t| title_case(&t.name))
        .filter(|n| !n.is_empty())
        .collect()
}

/// Whether an entry's latest summary matches a theme filter
///
/// The filter is title-cased before comparison. Entries without a summary
/// never match an active filter.
pub fn latest_summary_matches(latest: Option<&SummaryRecord>, filter: &str) -> bool {
    match latest {
        Some(summary) => theme_names(&summary.themes).contains(&title_case(filter)),
        None => false,
    }
}

/// Fold one summary into a frequency map, counting each distinct theme name
/// at most once per summary
pub fn accumulate_theme_counts(counts: &mut BTreeMap<String, u64>, themes: &[Theme]) {
    for name in theme_names(themes) {
        *counts.entry(name).or_insert(0) += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn summary_with(names: &[&str]) -> SummaryRecord {
        SummaryRecord {
            id: "s1".to_string(),
            entry_id: "e1".to_string(),
            summary_text: "recap".to_string(),
            themes: names.iter().map(|n| Theme::new(*n, "desc")).collect(),
            suggested_prompts: vec![],
            model: "test-model".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_title_case_basic() {
        assert_eq!(title_case("stress"), "Stress");
        assert_eq!(title_case("STRESS"), "Stress");
        assert_eq!(title_case("work life"), "Work Life");
        assert_eq!(title_case("  sleep quality  "), "Sleep Quality");
    }

    #[test]
    fn test_title_case_empty() {
        assert_eq!(title_case(""), "");
        assert_eq!(title_case("   "), "");
    }

    #[test]
    fn test_theme_names_dedups_by_normalized_name() {
        let themes = vec![
            Theme::new("stress", "a"),
            Theme::new("STRESS", "b"),
            Theme::new("Sleep", "c"),
        ];
        let names = theme_names(&themes);
        assert_eq!(names.len(), 2);
        assert!(names.contains("Stress"));
        assert!(names.contains("Sleep"));
    }

    #[test]
    fn test_theme_names_drops_empty() {
        let themes = vec![Theme::new("", "a"), Theme::new("  ", "b")];
        assert!(theme_names(&themes).is_empty());
    }

    #[test]
    fn test_filter_matches_case_insensitively() {
        let summary = summary_with(&["Stress", "Sleep"]);
        assert!(latest_summary_matches(Some(&summary), "stress"));
        assert!(latest_summary_matches(Some(&summary), "SLEEP"));
        assert!(!latest_summary_matches(Some(&summary), "energy"));
    }

    #[test]
    fn test_filter_never_matches_unsummarized_entries() {
        assert!(!latest_summary_matches(None, "stress"));
    }

    #[test]
    fn test_counts_one_occurrence_per_entry() {
        let mut counts = BTreeMap::new();
        accumulate_theme_counts(&mut counts, &summary_with(&["Stress"]).themes);
        accumulate_theme_counts(&mut counts, &summary_with(&["Stress", "Sleep"]).themes);
        accumulate_theme_counts(&mut counts, &summary_with(&["Stress"]).themes);

        assert_eq!(counts.get("Stress"), Some(&3));
        assert_eq!(counts.get("Sleep"), Some(&1));
    }

    #[test]
    fn test_counts_dedup_within_single_summary() {
        let mut counts = BTreeMap::new();
        accumulate_theme_counts(&mut counts, &summary_with(&["stress", "Stress"]).themes);
        assert_eq!(counts.get("Stress"), Some(&1));
    }
}
