//! Validated input shapes for the CRUD layer.
//!
//! Each input mirrors a form or action payload from the web client. The data
//! layer calls `validate()` before touching the store; the engine itself
//! assumes inputs have already passed these checks.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation failure for a CRUD input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required text field is empty.
    #[error("{field} must not be empty")]
    Empty {
        /// Field name.
        field: &'static str,
    },
    /// A text field exceeds its maximum length.
    #[error("{field} must be at most {max} characters")]
    TooLong {
        /// Field name.
        field: &'static str,
        /// Maximum allowed characters.
        max: usize,
    },
    /// A numeric field is outside its allowed range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        /// Field name.
        field: &'static str,
        /// Minimum allowed value.
        min: u32,
        /// Maximum allowed value.
        max: u32,
    },
    /// A deadline string does not parse as a date.
    #[error("invalid deadline: {value:?}")]
    InvalidDeadline {
        /// The rejected value.
        value: String,
    },
    /// A merge request named no source skills.
    #[error("at least one source skill is required")]
    NoSourceSkills,
}

fn check_text(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(())
}

fn check_deadline(value: &str) -> Result<(), ValidationError> {
    // Accept RFC 3339 timestamps or plain ISO dates, the two forms the
    // client sends.
    if DateTime::parse_from_rfc3339(value).is_ok()
        || NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
    {
        Ok(())
    } else {
        Err(ValidationError::InvalidDeadline {
            value: value.to_string(),
        })
    }
}

fn check_percentage(field: &'static str, value: u8) -> Result<(), ValidationError> {
    if value > 100 {
        return Err(ValidationError::OutOfRange {
            field,
            min: 0,
            max: 100,
        });
    }
    Ok(())
}

/// Payload for creating a career plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCareerPlanInput {
    /// Plan title, 1-100 characters.
    pub title: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Optional goal statement.
    #[serde(default)]
    pub goal: Option<String>,
    /// Optional deadline as an ISO date string.
    #[serde(default)]
    pub deadline: Option<String>,
}

impl CreateCareerPlanInput {
    /// Check field constraints.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_text("title", &self.title, 100)?;
        if let Some(deadline) = &self.deadline {
            check_deadline(deadline)?;
        }
        Ok(())
    }
}

/// Partial update payload for a career plan. Absent fields are untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCareerPlanInput {
    /// New title, if changing.
    #[serde(default)]
    pub title: Option<String>,
    /// New description, if changing.
    #[serde(default)]
    pub description: Option<String>,
    /// New goal, if changing.
    #[serde(default)]
    pub goal: Option<String>,
    /// New deadline, if changing.
    #[serde(default)]
    pub deadline: Option<String>,
}

impl UpdateCareerPlanInput {
    /// Check field constraints on whichever fields are present.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(title) = &self.title {
            check_text("title", title, 100)?;
        }
        if let Some(deadline) = &self.deadline {
            check_deadline(deadline)?;
        }
        Ok(())
    }
}

/// Payload for creating a skill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSkillInput {
    /// Skill name, 1-100 characters.
    pub name: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Optional category label.
    #[serde(default)]
    pub category: Option<String>,
}

impl CreateSkillInput {
    /// Check field constraints.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_text("name", &self.name, 100)
    }
}

/// Payload for recording progress on a skill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSkillProgressInput {
    /// Skill id.
    pub skill_id: String,
    /// New completion percentage, 0-100.
    pub progress_percentage: u8,
    /// Additional minutes spent, if tracked.
    #[serde(default)]
    pub time_spent: Option<u32>,
}

impl UpdateSkillProgressInput {
    /// Check field constraints.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_text("skillId", &self.skill_id, 100)?;
        check_percentage("progressPercentage", self.progress_percentage)
    }
}

fn default_true() -> bool {
    true
}

/// Payload for adding a checklist item to a skill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSkillItemInput {
    /// Owning skill id.
    pub skill_id: String,
    /// Item title, 1-200 characters.
    pub title: String,
    /// Whether the user created the item (as opposed to a template).
    #[serde(default = "default_true")]
    pub is_custom: bool,
}

impl CreateSkillItemInput {
    /// Check field constraints.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_text("skillId", &self.skill_id, 100)?;
        check_text("title", &self.title, 200)
    }
}

/// Payload for toggling a checklist item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleSkillItemInput {
    /// Item id.
    pub skill_item_id: String,
    /// New completion state.
    pub completed: bool,
    /// Additional minutes spent, if tracked.
    #[serde(default)]
    pub time_spent: Option<u32>,
}

impl ToggleSkillItemInput {
    /// Check field constraints.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_text("skillItemId", &self.skill_item_id, 100)
    }
}

fn default_target_progress() -> u8 {
    100
}

/// Payload for linking a skill into a career plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddSkillToCareerInput {
    /// Plan id.
    pub career_plan_id: String,
    /// Skill id.
    pub skill_id: String,
    /// Target completion percentage within this plan.
    #[serde(default = "default_target_progress")]
    pub target_progress: u8,
    /// Ordering priority within the plan (0 = unranked).
    #[serde(default)]
    pub priority: u32,
}

impl AddSkillToCareerInput {
    /// Check field constraints.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_text("careerPlanId", &self.career_plan_id, 100)?;
        check_text("skillId", &self.skill_id, 100)?;
        check_percentage("targetProgress", self.target_progress)
    }
}

/// Payload for comparing two career plans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareCareerPlansInput {
    /// First plan id.
    pub plan_id_a: String,
    /// Second plan id.
    pub plan_id_b: String,
}

impl CompareCareerPlansInput {
    /// Check field constraints.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_text("planIdA", &self.plan_id_a, 100)?;
        check_text("planIdB", &self.plan_id_b, 100)
    }
}

/// Payload for merging skills into an existing or new plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeSkillsInput {
    /// Skills to merge.
    pub source_skill_ids: Vec<String>,
    /// Target plan; when absent, a new plan is created.
    #[serde(default)]
    pub target_career_plan_id: Option<String>,
    /// Title for the new plan, when one is created.
    #[serde(default)]
    pub new_plan_title: Option<String>,
}

impl MergeSkillsInput {
    /// Check field constraints.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.source_skill_ids.is_empty() {
            return Err(ValidationError::NoSourceSkills);
        }
        if let Some(title) = &self.new_plan_title {
            check_text("newPlanTitle", title, 100)?;
        }
        Ok(())
    }
}
