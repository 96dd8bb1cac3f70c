//! Side-by-side comparison of two career plans.

use crate::conflict::analyze_conflicts;
use crate::readiness::EXPECTED_MINUTES_PER_SKILL;
use skillpilot_types::{
    ComparisonResult, PlanForComparison, PlanSkill, PlanTimeAnalysis, SkillEstimate, SkillRef,
    TimeAnalysis,
};
use std::collections::HashSet;
use tracing::debug;

/// Time budget assumed when the caller does not supply one.
pub const DEFAULT_AVAILABLE_WEEKS: u32 = 24;

/// Compare two plans' skill sets, time totals, and merged-set conflicts.
///
/// Skills are matched by id only; a name collision across different ids is
/// two different skills. Common and unique-to-A lists follow A's skill
/// order, unique-to-B follows B's. Conflicts are analyzed over the
/// hypothetical merge of A with B's skills not already in A, using names
/// only, so each merged skill is costed at the analyzer's default duration.
pub fn compare_career_plans(
    plan_a: &PlanForComparison,
    plan_b: &PlanForComparison,
    available_weeks: u32,
) -> ComparisonResult {
    let ids_a: HashSet<&str> = plan_a.skills.iter().map(|s| s.id.as_str()).collect();
    let ids_b: HashSet<&str> = plan_b.skills.iter().map(|s| s.id.as_str()).collect();

    let mut common_skills = Vec::new();
    let mut unique_to_a = Vec::new();
    for skill in &plan_a.skills {
        if ids_b.contains(skill.id.as_str()) {
            common_skills.push(skill_ref(skill));
        } else {
            unique_to_a.push(skill_ref(skill));
        }
    }

    let unique_to_b: Vec<SkillRef> = plan_b
        .skills
        .iter()
        .filter(|s| !ids_a.contains(s.id.as_str()))
        .map(skill_ref)
        .collect();

    let merged: Vec<SkillEstimate> = plan_a
        .skills
        .iter()
        .map(|s| SkillEstimate::named(&s.name))
        .chain(
            plan_b
                .skills
                .iter()
                .filter(|s| !ids_a.contains(s.id.as_str()))
                .map(|s| SkillEstimate::named(&s.name)),
        )
        .collect();
    debug!(
        plan_a = %plan_a.id,
        plan_b = %plan_b.id,
        merged_skills = merged.len(),
        "comparing plans"
    );
    let ai_insights = analyze_conflicts(&merged, available_weeks);

    ComparisonResult {
        common_skills,
        unique_to_a,
        unique_to_b,
        time_analysis: TimeAnalysis {
            plan_a: plan_time(&plan_a.skills),
            plan_b: plan_time(&plan_b.skills),
        },
        ai_insights,
    }
}

fn skill_ref(skill: &PlanSkill) -> SkillRef {
    SkillRef {
        id: skill.id.clone(),
        name: skill.name.clone(),
    }
}

fn plan_time(skills: &[PlanSkill]) -> PlanTimeAnalysis {
    let total_time: u64 = skills.iter().map(|s| u64::from(s.time_spent)).sum();
    let estimated_remaining: f64 = skills
        .iter()
        .map(|s| {
            let remaining_percent = f64::from(100u8.saturating_sub(s.progress));
            remaining_percent / 100.0 * f64::from(EXPECTED_MINUTES_PER_SKILL)
        })
        .sum();
    PlanTimeAnalysis {
        total_time,
        estimated_remaining,
    }
}
