//! Shared types for the SkillPilot career-planning engine.
//!
//! This crate provides:
//! - Value types exchanged with the guidance engine (suggestions, readiness
//!   scores, conflict analyses, comparison results)
//! - Validated input shapes for the CRUD layer (create/update/compare/merge)
//!
//! All public types serialize with camelCase field names so the JSON shapes
//! match what the web client already consumes.

pub mod engine;
pub mod inputs;

pub use engine::{
    ComparisonResult, Conflict, ConflictAnalysis, ConflictKind, GuidanceRequest, GuidanceResponse,
    PlanForComparison, PlanSkill, PlanTimeAnalysis, Priority, ReadinessBreakdown, ReadinessScore,
    Severity, SkillEstimate, SkillItemProgress, SkillRef, SkillSuggestion, SkillWithProgress,
    TimeAnalysis,
};
pub use inputs::{
    AddSkillToCareerInput, CompareCareerPlansInput, CreateCareerPlanInput, CreateSkillInput,
    CreateSkillItemInput, MergeSkillsInput, ToggleSkillItemInput, UpdateCareerPlanInput,
    UpdateSkillProgressInput, ValidationError,
};
