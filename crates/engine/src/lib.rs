//! Rule-based career guidance engine for SkillPilot.
//!
//! This crate provides:
//! - Skill suggestions from a static career knowledge base
//! - Readiness scoring for a plan's skills against an optional deadline
//! - Time-budget and prerequisite conflict detection
//! - Side-by-side comparison of two career plans
//! - Prompt/schema construction for LLM-backed guidance
//!
//! Every function is pure and synchronous: the caller loads plan and skill
//! records, hands them over as plain values, and persists or renders what
//! comes back. Nothing here performs I/O or keeps state between calls.

pub mod compare;
pub mod conflict;
pub mod guidance;
mod knowledge;
pub mod readiness;
pub mod suggest;

pub use compare::{compare_career_plans, DEFAULT_AVAILABLE_WEEKS};
pub use conflict::{analyze_conflicts, DEFAULT_WEEKS_PER_SKILL};
pub use guidance::{
    build_guidance_prompt, parse_guidance_response, GuidanceError, GuidancePrompt,
};
pub use readiness::{
    calculate_readiness_score, calculate_readiness_score_at, EXPECTED_MINUTES_PER_SKILL,
};
pub use suggest::suggest_skills_for_career;
