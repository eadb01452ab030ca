use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-round aggregates. Always derived from the round's holes.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoreStats {
    pub gross_score: i32,
    pub adjusted_gross_score: i32,
    pub score_differential: f64,
    pub score_to_par: i32,
    pub total_putts: i32,
    pub fairways_hit: u32,
    pub fairways_total: u32,
    pub greens_in_regulation: u32,
    pub greens_total: u32,
    pub penalties: i32,
    pub putts_per_hole: f64,
}

/// Count of hole outcomes across many rounds.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScoreHistogram {
    pub birdies_or_better: u32,
    pub pars: u32,
    pub bogeys: u32,
    pub double_bogey_or_worse: u32,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserStatistics {
    pub total_rounds: u32,
    pub average_score: f64,
    pub lowest_score: i32,
    pub highest_score: i32,
    pub average_differential: f64,
    pub estimated_handicap: f64,
    pub fairway_percentage: u32,
    pub gir_percentage: u32,
    pub average_putts: f64,
    pub total_penalties: i32,
    #[serde(flatten)]
    pub histogram: ScoreHistogram,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CourseStatistics {
    pub course_id: String,
    pub course_name: String,
    pub rounds_played: u32,
    pub average_score: f64,
    pub best_score: i32,
    pub worst_score: i32,
    pub last_played: DateTime<Utc>,
}
