//! Career-title matching and skill suggestion filtering.

use crate::knowledge::{self, KNOWLEDGE_BASE};
use skillpilot_types::SkillSuggestion;
use tracing::debug;

/// Suggest skills for a career title, excluding skills already held.
///
/// The title is matched against the knowledge base by bidirectional
/// substring containment (case-insensitive), first bucket wins. Unmatched
/// titles fall back to the default bucket. Bucket order is preserved; no
/// re-sorting happens here.
pub fn suggest_skills_for_career(
    career_title: &str,
    existing_skills: &[String],
) -> Vec<SkillSuggestion> {
    let normalized = career_title.to_lowercase();

    let mut bucket: &[knowledge::SuggestionEntry] = &[];
    for &(career, entries) in KNOWLEDGE_BASE {
        let career_lower = career.to_lowercase();
        if normalized.contains(&career_lower) || career_lower.contains(&normalized) {
            debug!(career, title = career_title, "matched career bucket");
            bucket = entries;
            break;
        }
    }

    if bucket.is_empty() {
        debug!(title = career_title, "no career match, using default bucket");
        bucket = knowledge::default_bucket();
    }

    let existing_lower: Vec<String> = existing_skills.iter().map(|s| s.to_lowercase()).collect();
    bucket
        .iter()
        .filter(|entry| !existing_lower.contains(&entry.name.to_lowercase()))
        .map(|entry| entry.to_suggestion())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use skillpilot_types::Priority;

    #[test]
    fn test_exact_title_returns_full_bucket() {
        let suggestions = suggest_skills_for_career("Frontend Developer", &[]);
        assert_eq!(suggestions.len(), 6);
        assert_eq!(suggestions[0].name, "HTML & CSS");
        assert_eq!(suggestions[0].priority, Priority::High);
        assert_eq!(suggestions[5].name, "CSS Frameworks");
    }

    #[test]
    fn test_title_containing_bucket_key() {
        let suggestions = suggest_skills_for_career("Senior Frontend Developer (Remote)", &[]);
        assert_eq!(suggestions[0].name, "HTML & CSS");
        assert_eq!(suggestions.len(), 6);
    }

    #[test]
    fn test_bucket_key_containing_title() {
        // "frontend" is a substring of "frontend developer".
        let suggestions = suggest_skills_for_career("Frontend", &[]);
        assert_eq!(suggestions.len(), 6);
        assert_eq!(suggestions[2].name, "React");
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let upper = suggest_skills_for_career("DATA SCIENTIST", &[]);
        let lower = suggest_skills_for_career("data scientist", &[]);
        assert_eq!(upper, lower);
        assert_eq!(upper[0].name, "Python");
    }

    #[test]
    fn test_unmatched_title_falls_back_to_full_stack() {
        let suggestions = suggest_skills_for_career("Astronaut", &[]);
        let names: Vec<&str> = suggestions.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            ["HTML & CSS", "JavaScript", "React", "Node.js", "Databases", "Git"]
        );
    }

    #[test]
    fn test_existing_skills_filtered_case_insensitively() {
        let existing = vec!["react".to_string(), "JAVASCRIPT".to_string()];
        let suggestions = suggest_skills_for_career("Frontend Developer", &existing);
        let names: Vec<&str> = suggestions.iter().map(|s| s.name.as_str()).collect();
        assert!(!names.contains(&"React"));
        assert!(!names.contains(&"JavaScript"));
        assert_eq!(suggestions.len(), 4);
    }

    #[test]
    fn test_all_skills_held_returns_empty() {
        let existing: Vec<String> = suggest_skills_for_career("Backend Developer", &[])
            .into_iter()
            .map(|s| s.name)
            .collect();
        let suggestions = suggest_skills_for_career("Backend Developer", &existing);
        assert!(suggestions.is_empty());
    }

    #[test]
    fn test_empty_title_matches_first_bucket() {
        // The empty string is contained in every key, so the first bucket
        // wins. Matches the original containment semantics.
        let suggestions = suggest_skills_for_career("", &[]);
        assert_eq!(suggestions[0].category, "Web Fundamentals");
        assert_eq!(suggestions.len(), 6);
    }

    proptest! {
        #[test]
        fn prop_never_suggests_an_existing_skill(title in ".{0,40}") {
            let existing = vec!["JavaScript".to_string(), "python".to_string()];
            let suggestions = suggest_skills_for_career(&title, &existing);
            for suggestion in suggestions {
                let lower = suggestion.name.to_lowercase();
                prop_assert!(lower != "javascript" && lower != "python");
            }
        }

        #[test]
        fn prop_suggestions_come_from_some_bucket(title in ".{0,40}") {
            let suggestions = suggest_skills_for_career(&title, &[]);
            if let Some(first) = suggestions.first() {
                let known = crate::knowledge::KNOWLEDGE_BASE
                    .iter()
                    .any(|(_, entries)| entries.iter().any(|e| e.name == first.name));
                prop_assert!(known);
            }
        }
    }
}
