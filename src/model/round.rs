use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::stats::ScoreStats;
use super::tee::Tee;
use super::timestamp::ExternalTimestamp;
use crate::error::ScoreError;
use crate::score::esc::adjust_holes;
use crate::score::round_stats::compute_round_stats;

pub const MAX_HOLES: usize = 18;
/// Ceiling on strokes, putts and penalties recorded for a single hole.
pub const MAX_HOLE_STROKES: i32 = 99;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundType {
    #[serde(rename = "18")]
    Eighteen,
    #[serde(rename = "9-front")]
    FrontNine,
    #[serde(rename = "9-back")]
    BackNine,
}

impl RoundType {
    #[must_use]
    pub fn expected_holes(self) -> usize {
        match self {
            RoundType::Eighteen => 18,
            RoundType::FrontNine | RoundType::BackNine => 9,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CourseInfo {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// Raw outcome of one hole as entered by the player.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HoleScore {
    pub hole_number: i32,
    pub par: i32,
    #[serde(alias = "handicapIndex")]
    pub stroke_index: i32,
    pub strokes: i32,
    #[serde(default)]
    pub putts: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fairway_hit: Option<bool>,
    #[serde(default)]
    pub green_in_regulation: bool,
    #[serde(default)]
    pub penalties: i32,
}

impl HoleScore {
    /// # Errors
    ///
    /// Will return `Err` if any field is outside its legal range
    pub fn validate(&self) -> Result<(), ScoreError> {
        let n = self.hole_number;
        if !(1..=18).contains(&n) {
            return Err(ScoreError::invalid(format!("hole number {n} outside 1-18")));
        }
        if !(3..=5).contains(&self.par) {
            return Err(ScoreError::invalid(format!(
                "hole {n}: par {} outside 3-5",
                self.par
            )));
        }
        if !(1..=18).contains(&self.stroke_index) {
            return Err(ScoreError::invalid(format!(
                "hole {n}: stroke index {} outside 1-18",
                self.stroke_index
            )));
        }
        if self.strokes < 0 || self.putts < 0 || self.penalties < 0 {
            return Err(ScoreError::invalid(format!(
                "hole {n}: strokes, putts and penalties must not be negative"
            )));
        }
        let most = self.strokes.max(self.putts).max(self.penalties);
        if most > MAX_HOLE_STROKES {
            return Err(ScoreError::invalid(format!(
                "hole {n}: {most} exceeds the {MAX_HOLE_STROKES} per-hole limit"
            )));
        }
        Ok(())
    }
}

/// A hole after Equitable Stroke Control has been applied.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HoleResult {
    #[serde(flatten)]
    pub score: HoleScore,
    pub adjusted_strokes: i32,
}

impl HoleResult {
    #[must_use]
    pub fn par(&self) -> i32 {
        self.score.par
    }

    #[must_use]
    pub fn strokes(&self) -> i32 {
        self.score.strokes
    }
}

/// Checks a full card: every hole on its own, then the card as a whole.
///
/// # Errors
///
/// Will return `Err` on an empty or oversized card, a bad hole, or a repeated hole number or stroke index
pub fn validate_holes(holes: &[HoleScore]) -> Result<(), ScoreError> {
    if holes.is_empty() || holes.len() > MAX_HOLES {
        return Err(ScoreError::invalid(format!(
            "a round needs 1-18 holes, got {}",
            holes.len()
        )));
    }
    let mut numbers = HashSet::with_capacity(holes.len());
    let mut indexes = HashSet::with_capacity(holes.len());
    for hole in holes {
        hole.validate()?;
        if !numbers.insert(hole.hole_number) {
            return Err(ScoreError::invalid(format!(
                "hole {} appears more than once",
                hole.hole_number
            )));
        }
        if !indexes.insert(hole.stroke_index) {
            return Err(ScoreError::invalid(format!(
                "stroke index {} is used by more than one hole",
                hole.stroke_index
            )));
        }
    }
    Ok(())
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PostingStatus {
    pub eligible: bool,
    pub posted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmation_number: Option<String>,
}

/// A round as submitted by a client, before validation.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RoundInput {
    #[serde(default)]
    pub id: String,
    pub user_id: String,
    #[serde(alias = "date")]
    pub played_at: ExternalTimestamp,
    pub round_type: RoundType,
    pub course: CourseInfo,
    pub tee: Tee,
    pub holes: Vec<HoleScore>,
    #[serde(default)]
    pub handicap_index: Option<f64>,
    #[serde(default)]
    pub posting_status: Option<PostingStatus>,
}

/// A completed round. Built only through [`Round::new`], which validates the
/// card and derives adjusted strokes and statistics from it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase", try_from = "RoundInput")]
pub struct Round {
    id: String,
    user_id: String,
    played_at: DateTime<Utc>,
    round_type: RoundType,
    course: CourseInfo,
    tee: Tee,
    holes: Vec<HoleResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    handicap_index: Option<f64>,
    posting_status: PostingStatus,
    stats: ScoreStats,
}

impl Round {
    /// # Errors
    ///
    /// Will return `Err` if the tee, the holes, the handicap index or the timestamp are invalid
    pub fn new(input: RoundInput) -> Result<Self, ScoreError> {
        if input.user_id.trim().is_empty() {
            return Err(ScoreError::invalid("round has no owning user"));
        }
        let played_at = input.played_at.normalize()?;
        let (holes, stats) = derive_card(&input.holes, &input.tee, input.handicap_index)?;

        let id = if input.id.trim().is_empty() {
            let prefix: String = input.user_id.chars().take(8).collect();
            format!("score_{prefix}_{}", played_at.timestamp_millis())
        } else {
            input.id
        };

        let previous = input.posting_status.unwrap_or_default();
        let posting_status = PostingStatus {
            eligible: crate::controller::posting::posting_eligible(input.round_type, &holes),
            ..previous
        };

        Ok(Self {
            id,
            user_id: input.user_id,
            played_at,
            round_type: input.round_type,
            course: input.course,
            tee: input.tee,
            holes,
            handicap_index: input.handicap_index,
            posting_status,
            stats,
        })
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    #[must_use]
    pub fn played_at(&self) -> DateTime<Utc> {
        self.played_at
    }

    #[must_use]
    pub fn round_type(&self) -> RoundType {
        self.round_type
    }

    #[must_use]
    pub fn course(&self) -> &CourseInfo {
        &self.course
    }

    #[must_use]
    pub fn tee(&self) -> &Tee {
        &self.tee
    }

    #[must_use]
    pub fn holes(&self) -> &[HoleResult] {
        &self.holes
    }

    #[must_use]
    pub fn handicap_index(&self) -> Option<f64> {
        self.handicap_index
    }

    #[must_use]
    pub fn posting_status(&self) -> &PostingStatus {
        &self.posting_status
    }

    #[must_use]
    pub fn stats(&self) -> &ScoreStats {
        &self.stats
    }

    /// Replaces the card and recomputes everything derived from it.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the round was already posted or the new holes are invalid
    pub fn amend_holes(&mut self, holes: Vec<HoleScore>) -> Result<(), ScoreError> {
        if self.posting_status.posted {
            return Err(ScoreError::invalid(format!(
                "round {} was posted and can no longer change",
                self.id
            )));
        }
        let (holes, stats) = derive_card(&holes, &self.tee, self.handicap_index)?;
        self.posting_status.eligible =
            crate::controller::posting::posting_eligible(self.round_type, &holes);
        self.holes = holes;
        self.stats = stats;
        Ok(())
    }

    /// # Errors
    ///
    /// Will return `Err` if the round was already posted
    pub fn mark_posted(
        &mut self,
        confirmation_number: impl Into<String>,
        at: DateTime<Utc>,
    ) -> Result<(), ScoreError> {
        if self.posting_status.posted {
            return Err(ScoreError::invalid(format!(
                "round {} is already posted",
                self.id
            )));
        }
        self.posting_status.posted = true;
        self.posting_status.post_date = Some(at);
        self.posting_status.confirmation_number = Some(confirmation_number.into());
        Ok(())
    }
}

impl TryFrom<RoundInput> for Round {
    type Error = ScoreError;

    fn try_from(value: RoundInput) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

fn derive_card(
    holes: &[HoleScore],
    tee: &Tee,
    handicap_index: Option<f64>,
) -> Result<(Vec<HoleResult>, ScoreStats), ScoreError> {
    tee.validate()?;
    validate_holes(holes)?;
    let adjusted = adjust_holes(holes, handicap_index)?;
    let stats = compute_round_stats(&adjusted, tee)?;
    Ok((adjusted, stats))
}
