//! Value types exchanged with the guidance engine.
//!
//! These are plain, per-call snapshots: the engine never owns persistent
//! state, so identity and lifecycle belong to the data layer. Skill identity
//! for comparison purposes is the `id` field; names may legitimately collide
//! across different ids.

use serde::{Deserialize, Serialize};

/// Priority of a suggested skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Core skill for the career path.
    High,
    /// Valuable but not blocking.
    Medium,
    /// Nice to have.
    Low,
}

/// Severity of a detected conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Needs attention before the plan is workable.
    High,
    /// Workable but risky.
    Medium,
    /// Informational.
    Low,
}

/// Kind of conflict detected when pursuing a skill set under a time budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictKind {
    /// Estimated learning time exceeds the available budget.
    TimeOverload,
    /// A skill is present without its usual prerequisites.
    MissingPrerequisite,
    /// Two skills cover substantially the same ground.
    SkillOverlap,
}

/// A suggested skill for a career path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillSuggestion {
    /// Skill name.
    pub name: String,
    /// Short description of the skill.
    pub description: String,
    /// Category label (e.g. "Programming", "DevOps").
    pub category: String,
    /// Estimated weeks to reach working proficiency.
    pub estimated_weeks: u32,
    /// How important the skill is for the career.
    pub priority: Priority,
    /// Why the skill is suggested.
    pub reason: String,
}

/// A completed/pending checklist item belonging to a skill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillItemProgress {
    /// Item id.
    pub id: String,
    /// Item title.
    pub title: String,
    /// Whether the item is done.
    pub completed: bool,
    /// Minutes spent on this item.
    pub time_spent: u32,
}

/// Point-in-time snapshot of a skill with its tracked progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillWithProgress {
    /// Skill id.
    pub id: String,
    /// Skill name.
    pub name: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Optional category label.
    #[serde(default)]
    pub category: Option<String>,
    /// Completion percentage, 0-100.
    pub progress: u8,
    /// Minutes spent on the skill.
    pub time_spent: u32,
    /// Checklist items, in display order.
    #[serde(default)]
    pub items: Vec<SkillItemProgress>,
}

/// Component scores behind a readiness score, each 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessBreakdown {
    /// Average completion across skills.
    pub skills_coverage: u8,
    /// Time invested relative to the expected total.
    pub time_allocation: u8,
    /// Projected pace against the deadline.
    pub progress_rate: u8,
}

/// Composite 0-100 readiness estimate with qualitative guidance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessScore {
    /// Composite score, 0-100.
    pub score: u8,
    /// Component scores.
    pub breakdown: ReadinessBreakdown,
    /// Observations about the current state, in emission order.
    pub insights: Vec<String>,
    /// Suggested next steps, in emission order.
    pub recommendations: Vec<String>,
}

/// A single detected conflict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conflict {
    /// What kind of conflict this is.
    #[serde(rename = "type")]
    pub kind: ConflictKind,
    /// Human-readable description.
    pub description: String,
    /// How serious the conflict is.
    pub severity: Severity,
    /// Suggested remediation.
    pub suggestion: String,
}

/// Result of analyzing a skill set against a time budget.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictAnalysis {
    /// Whether any conflicts were found.
    pub has_conflicts: bool,
    /// Detected conflicts: time overload first, then prerequisite issues
    /// in knowledge-base order.
    pub conflicts: Vec<Conflict>,
}

/// Conflict-analysis input: a skill name with an optional duration estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillEstimate {
    /// Skill name.
    pub name: String,
    /// Estimated weeks to learn, if known.
    #[serde(default)]
    pub estimated_weeks: Option<u32>,
}

impl SkillEstimate {
    /// A skill estimate with no duration data (the analyzer applies its
    /// per-skill default).
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            estimated_weeks: None,
        }
    }
}

/// A skill id/name pair, as reported in comparison results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillRef {
    /// Skill id.
    pub id: String,
    /// Skill name.
    pub name: String,
}

/// A plan's skill as supplied to the comparator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSkill {
    /// Skill id.
    pub id: String,
    /// Skill name.
    pub name: String,
    /// Completion percentage, 0-100.
    pub progress: u8,
    /// Minutes spent on the skill.
    pub time_spent: u32,
}

/// One side of a plan comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanForComparison {
    /// Plan id.
    pub id: String,
    /// Plan title.
    pub title: String,
    /// The plan's skills, in display order.
    pub skills: Vec<PlanSkill>,
}

/// Time totals for a single plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanTimeAnalysis {
    /// Total minutes spent across the plan's skills.
    pub total_time: u64,
    /// Estimated minutes remaining to complete all skills.
    pub estimated_remaining: f64,
}

/// Per-plan time analysis for both sides of a comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeAnalysis {
    /// Totals for plan A.
    pub plan_a: PlanTimeAnalysis,
    /// Totals for plan B.
    pub plan_b: PlanTimeAnalysis,
}

/// Full result of comparing two career plans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    /// Skills present in both plans (by id), in plan A's order.
    pub common_skills: Vec<SkillRef>,
    /// Skills only in plan A, in A's order.
    pub unique_to_a: Vec<SkillRef>,
    /// Skills only in plan B, in B's order.
    pub unique_to_b: Vec<SkillRef>,
    /// Per-plan time totals and remaining estimates.
    pub time_analysis: TimeAnalysis,
    /// Conflict analysis over the hypothetical merged skill set.
    pub ai_insights: ConflictAnalysis,
}

/// Request shape for building an LLM guidance prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuidanceRequest {
    /// The user's stated career goal.
    pub user_goal: String,
    /// Names of skills the user already holds.
    #[serde(default)]
    pub existing_skills: Vec<String>,
    /// Learning timeline in weeks, if the user set one.
    #[serde(default)]
    pub timeline_weeks: Option<u32>,
    /// Free-text learning preferences.
    #[serde(default)]
    pub preferences: Vec<String>,
}

/// Structured guidance returned by an LLM, parsed from its JSON payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuidanceResponse {
    /// Skills the model suggests adding.
    pub suggested_skills: Vec<SkillSuggestion>,
    /// Optional deadline suggestion (ISO date string).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_deadline: Option<String>,
    /// Prioritization notes.
    pub priority_notes: Vec<String>,
    /// Conflicts the model identified.
    pub conflicts: ConflictAnalysis,
}
