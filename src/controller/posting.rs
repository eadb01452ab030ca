//! Checks and payloads for posting a finished round to the handicap registry.
//! The submission itself happens elsewhere.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{HoleResult, Round, RoundType};

pub const MIN_POSTING_HOLES: usize = 9;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PostingRejection {
    #[error("score already posted")]
    AlreadyPosted,
    #[error("must play at least {MIN_POSTING_HOLES} holes, played {0}")]
    TooFewHoles(usize),
    #[error("round is not eligible: every hole of a {0}-hole round needs a score")]
    Incomplete(usize),
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PostingPayload {
    pub round_id: String,
    pub user_id: String,
    pub course_id: String,
    pub played_at: DateTime<Utc>,
    pub tee_name: String,
    pub tee_color: String,
    pub course_rating: f64,
    pub slope_rating: i32,
    pub holes_played: usize,
    pub adjusted_gross_score: i32,
    pub differential: f64,
}

/// A round can be posted when it has the full hole count for its type and
/// every hole has a score.
#[must_use]
pub fn posting_eligible(round_type: RoundType, holes: &[HoleResult]) -> bool {
    holes.len() == round_type.expected_holes() && holes.iter().all(|h| h.strokes() > 0)
}

/// # Errors
///
/// Will return `Err` if the round was already posted, is shorter than nine holes, or is incomplete
pub fn validate_for_posting(round: &Round) -> Result<PostingPayload, PostingRejection> {
    let status = round.posting_status();
    if status.posted {
        return Err(PostingRejection::AlreadyPosted);
    }
    let played = round.holes().len();
    if played < MIN_POSTING_HOLES {
        return Err(PostingRejection::TooFewHoles(played));
    }
    if !status.eligible {
        return Err(PostingRejection::Incomplete(
            round.round_type().expected_holes(),
        ));
    }

    let tee = round.tee();
    let stats = round.stats();
    Ok(PostingPayload {
        round_id: round.id().to_string(),
        user_id: round.user_id().to_string(),
        course_id: round.course().id.clone(),
        played_at: round.played_at(),
        tee_name: tee.name.clone(),
        tee_color: tee.color.clone(),
        course_rating: tee.course_rating,
        slope_rating: tee.slope_rating,
        holes_played: played,
        adjusted_gross_score: stats.adjusted_gross_score,
        differential: stats.score_differential,
    })
}
