//! Time-budget and prerequisite conflict detection for a skill set.

use crate::knowledge::PREREQUISITES;
use skillpilot_types::{Conflict, ConflictAnalysis, ConflictKind, Severity, SkillEstimate};
use tracing::debug;

/// Weeks assumed for a skill with no duration estimate.
pub const DEFAULT_WEEKS_PER_SKILL: u32 = 4;

/// Analyze a flat skill list against an available-time budget.
///
/// Emits at most one time-overload conflict (high above 1.5x the budget,
/// medium above 1x; both boundaries strictly greater-than), then one
/// missing-prerequisite conflict per rule whose skill is present with
/// prerequisites absent, in rule order. Name matching is case-insensitive.
pub fn analyze_conflicts(skills: &[SkillEstimate], available_weeks: u32) -> ConflictAnalysis {
    let mut conflicts = Vec::new();

    let total_weeks_needed: u32 = skills
        .iter()
        .map(|s| s.estimated_weeks.unwrap_or(DEFAULT_WEEKS_PER_SKILL))
        .sum();
    debug!(total_weeks_needed, available_weeks, "time budget check");

    if f64::from(total_weeks_needed) > f64::from(available_weeks) * 1.5 {
        conflicts.push(Conflict {
            kind: ConflictKind::TimeOverload,
            description: format!(
                "You need ~{total_weeks_needed} weeks but have {available_weeks} weeks available."
            ),
            severity: Severity::High,
            suggestion: "Consider prioritizing fewer skills or extending your deadline."
                .to_string(),
        });
    } else if total_weeks_needed > available_weeks {
        conflicts.push(Conflict {
            kind: ConflictKind::TimeOverload,
            description: format!(
                "Timeline is tight: {total_weeks_needed} weeks needed vs {available_weeks} available."
            ),
            severity: Severity::Medium,
            suggestion: "You may need to parallelize learning or increase study time.".to_string(),
        });
    }

    let skill_names: Vec<String> = skills.iter().map(|s| s.name.to_lowercase()).collect();
    for (skill, prereqs) in PREREQUISITES {
        if !skill_names.iter().any(|name| name == skill) {
            continue;
        }
        let missing: Vec<&str> = prereqs
            .iter()
            .filter(|prereq| !skill_names.iter().any(|name| name == **prereq))
            .copied()
            .collect();
        if !missing.is_empty() {
            conflicts.push(Conflict {
                kind: ConflictKind::MissingPrerequisite,
                description: format!("{skill} typically requires: {}", missing.join(", ")),
                severity: Severity::Medium,
                suggestion: format!(
                    "Consider adding {} before or alongside {skill}.",
                    missing.join(" and ")
                ),
            });
        }
    }

    ConflictAnalysis {
        has_conflicts: !conflicts.is_empty(),
        conflicts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn estimated(name: &str, weeks: u32) -> SkillEstimate {
        SkillEstimate {
            name: name.to_string(),
            estimated_weeks: Some(weeks),
        }
    }

    #[test]
    fn test_no_skills_no_conflicts() {
        let analysis = analyze_conflicts(&[], 10);
        assert!(!analysis.has_conflicts);
        assert!(analysis.conflicts.is_empty());
    }

    #[test]
    fn test_total_equal_to_budget_is_fine() {
        // Boundary is strictly greater-than.
        let skills = vec![estimated("Databases", 6), estimated("Docker", 4)];
        let analysis = analyze_conflicts(&skills, 10);
        assert!(!analysis.has_conflicts);
    }

    #[test]
    fn test_medium_overload_above_budget() {
        let skills = vec![estimated("Databases", 6), estimated("Docker", 5)];
        let analysis = analyze_conflicts(&skills, 10);
        assert_eq!(analysis.conflicts.len(), 1);
        let conflict = &analysis.conflicts[0];
        assert_eq!(conflict.kind, ConflictKind::TimeOverload);
        assert_eq!(conflict.severity, Severity::Medium);
        assert_eq!(
            conflict.description,
            "Timeline is tight: 11 weeks needed vs 10 available."
        );
    }

    #[test]
    fn test_high_overload_above_one_and_a_half_times() {
        let skills = vec![estimated("Databases", 16)];
        let analysis = analyze_conflicts(&skills, 10);
        assert_eq!(analysis.conflicts[0].severity, Severity::High);
        assert_eq!(
            analysis.conflicts[0].description,
            "You need ~16 weeks but have 10 weeks available."
        );
    }

    #[test]
    fn test_exactly_one_and_a_half_times_is_medium() {
        // 15 > 10 * 1.5 is false, but 15 > 10, so the medium branch fires.
        let skills = vec![estimated("Databases", 15)];
        let analysis = analyze_conflicts(&skills, 10);
        assert_eq!(analysis.conflicts.len(), 1);
        assert_eq!(analysis.conflicts[0].severity, Severity::Medium);
    }

    #[test]
    fn test_missing_duration_defaults_to_four_weeks() {
        let skills = vec![
            SkillEstimate::named("Databases"),
            SkillEstimate::named("Docker"),
            SkillEstimate::named("Git"),
        ];
        // 12 weeks needed vs 11 available.
        let analysis = analyze_conflicts(&skills, 11);
        assert_eq!(analysis.conflicts[0].kind, ConflictKind::TimeOverload);
    }

    #[test]
    fn test_react_without_prerequisites() {
        let analysis = analyze_conflicts(&[SkillEstimate::named("react")], 100);
        assert!(analysis.has_conflicts);
        let conflict = &analysis.conflicts[0];
        assert_eq!(conflict.kind, ConflictKind::MissingPrerequisite);
        assert_eq!(conflict.severity, Severity::Medium);
        assert_eq!(conflict.description, "react typically requires: javascript, html & css");
        assert_eq!(
            conflict.suggestion,
            "Consider adding javascript and html & css before or alongside react."
        );
    }

    #[test]
    fn test_prerequisite_match_is_case_insensitive() {
        let skills = vec![
            SkillEstimate::named("React"),
            SkillEstimate::named("JavaScript"),
            SkillEstimate::named("HTML & CSS"),
        ];
        let analysis = analyze_conflicts(&skills, 100);
        assert!(!analysis.has_conflicts);
    }

    #[test]
    fn test_partially_satisfied_prerequisites() {
        let skills = vec![
            SkillEstimate::named("React"),
            SkillEstimate::named("JavaScript"),
        ];
        let analysis = analyze_conflicts(&skills, 100);
        assert_eq!(analysis.conflicts.len(), 1);
        assert_eq!(
            analysis.conflicts[0].description,
            "react typically requires: html & css"
        );
    }

    #[test]
    fn test_multiple_prerequisite_conflicts_in_rule_order() {
        let skills = vec![
            SkillEstimate::named("TypeScript"),
            SkillEstimate::named("Next.js"),
        ];
        let analysis = analyze_conflicts(&skills, 100);
        // next.js comes before typescript in the rule table.
        assert_eq!(analysis.conflicts.len(), 2);
        assert!(analysis.conflicts[0].description.starts_with("next.js"));
        assert!(analysis.conflicts[1].description.starts_with("typescript"));
    }

    #[test]
    fn test_overload_precedes_prerequisite_conflicts() {
        let skills = vec![estimated("Machine Learning", 30)];
        let analysis = analyze_conflicts(&skills, 10);
        assert_eq!(analysis.conflicts.len(), 2);
        assert_eq!(analysis.conflicts[0].kind, ConflictKind::TimeOverload);
        assert_eq!(
            analysis.conflicts[1].kind,
            ConflictKind::MissingPrerequisite
        );
    }

    proptest! {
        #[test]
        fn prop_no_overload_when_total_within_budget(
            weeks in proptest::collection::vec(1u32..10, 0..6),
        ) {
            let skills: Vec<SkillEstimate> = weeks
                .iter()
                .enumerate()
                .map(|(i, w)| estimated(&format!("skill-{i}"), *w))
                .collect();
            let total: u32 = weeks.iter().sum();
            let analysis = analyze_conflicts(&skills, total);
            let overloads = analysis
                .conflicts
                .iter()
                .filter(|c| c.kind == ConflictKind::TimeOverload)
                .count();
            prop_assert_eq!(overloads, 0);
        }

        #[test]
        fn prop_at_most_one_time_overload(
            weeks in proptest::collection::vec(1u32..20, 1..8),
            budget in 0u32..40,
        ) {
            let skills: Vec<SkillEstimate> = weeks
                .iter()
                .enumerate()
                .map(|(i, w)| estimated(&format!("skill-{i}"), *w))
                .collect();
            let analysis = analyze_conflicts(&skills, budget);
            let overloads = analysis
                .conflicts
                .iter()
                .filter(|c| c.kind == ConflictKind::TimeOverload)
                .count();
            prop_assert!(overloads <= 1);
            prop_assert_eq!(analysis.has_conflicts, !analysis.conflicts.is_empty());
        }
    }
}
