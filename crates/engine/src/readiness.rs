//! Readiness scoring for a plan's skill set against an optional deadline.

use chrono::{DateTime, Utc};
use skillpilot_types::{ReadinessBreakdown, ReadinessScore, SkillWithProgress};

/// Expected investment per skill at 100% completion: 20 hours in minutes.
pub const EXPECTED_MINUTES_PER_SKILL: u32 = 20 * 60;

/// Progress-rate score used when no deadline is set.
const DEFAULT_PROGRESS_RATE: u8 = 50;

const NO_SKILLS_INSIGHT: &str = "No skills added yet. Start by adding skills to your career plan.";
const NO_SKILLS_RECOMMENDATION: &str = "Add skills relevant to your career goal.";

/// Compute a readiness score for a skill set, evaluated at the current time.
pub fn calculate_readiness_score(
    skills: &[SkillWithProgress],
    deadline: Option<DateTime<Utc>>,
) -> ReadinessScore {
    calculate_readiness_score_at(skills, deadline, Utc::now())
}

/// Compute a readiness score evaluated at an explicit `now`.
///
/// The breakdown combines average completion (weight 0.5), time invested
/// against a 20-hours-per-skill expectation (0.25), and projected pace
/// toward the deadline (0.25). Insights and recommendations accumulate:
/// a progress-stage pair always, plus a time-investment pair when invested
/// time is under 30% of the expected total.
pub fn calculate_readiness_score_at(
    skills: &[SkillWithProgress],
    deadline: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> ReadinessScore {
    if skills.is_empty() {
        return ReadinessScore {
            score: 0,
            breakdown: ReadinessBreakdown::default(),
            insights: vec![NO_SKILLS_INSIGHT.to_string()],
            recommendations: vec![NO_SKILLS_RECOMMENDATION.to_string()],
        };
    }

    // Progress outside 0-100 is clamped rather than rejected; the
    // validation layer should have caught it upstream.
    let avg_progress = skills
        .iter()
        .map(|s| f64::from(s.progress.min(100)))
        .sum::<f64>()
        / skills.len() as f64;
    let skills_coverage = avg_progress.round() as u8;

    let total_time_spent: u64 = skills.iter().map(|s| u64::from(s.time_spent)).sum();
    let expected_total = skills.len() as u64 * u64::from(EXPECTED_MINUTES_PER_SKILL);
    let time_allocation = ((total_time_spent as f64 / expected_total as f64) * 100.0)
        .round()
        .min(100.0) as u8;

    let progress_rate = match deadline {
        None => DEFAULT_PROGRESS_RATE,
        Some(deadline) => {
            let days_remaining = days_until(deadline, now);
            // Pace window carried over unchanged from the original scoring
            // rules: 30 - days_remaining + 30, floored at one day.
            let window = (60 - days_remaining).max(1);
            let progress_per_day = avg_progress / window as f64;
            let projected = avg_progress + progress_per_day * days_remaining as f64;
            projected.round().min(100.0) as u8
        }
    };

    let score = (f64::from(skills_coverage) * 0.5
        + f64::from(time_allocation) * 0.25
        + f64::from(progress_rate) * 0.25)
        .round() as u8;

    let mut insights = Vec::new();
    let mut recommendations = Vec::new();

    if avg_progress < 30.0 {
        insights.push("You're in the early stages of skill development.".to_string());
        recommendations.push("Focus on completing foundational skills first.".to_string());
    } else if avg_progress < 70.0 {
        insights.push("Good progress! You're building a solid skill set.".to_string());
        recommendations.push("Consider deepening expertise in high-priority skills.".to_string());
    } else {
        insights
            .push("Excellent progress! You're well-prepared for this career path.".to_string());
        recommendations
            .push("Start applying your skills through projects or internships.".to_string());
    }

    if (total_time_spent as f64) < expected_total as f64 * 0.3 {
        insights.push("Time investment is below target.".to_string());
        recommendations.push("Try to dedicate more consistent time to learning.".to_string());
    }

    ReadinessScore {
        score,
        breakdown: ReadinessBreakdown {
            skills_coverage,
            time_allocation,
            progress_rate,
        },
        insights,
        recommendations,
    }
}

/// Whole days until the deadline, rounded up and floored at one.
fn days_until(deadline: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let days = (deadline - now).num_milliseconds() as f64 / 86_400_000.0;
    (days.ceil() as i64).max(1)
}
