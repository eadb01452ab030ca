use super::compute_differential;
use crate::error::ScoreError;
use crate::model::{HoleResult, ScoreStats, Tee};

/// Rounded share of `hit` in `total`, 0 when there is nothing to count.
#[must_use]
pub fn percentage(hit: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (f64::from(hit) / f64::from(total) * 100.0).round() as u32
}

fn checked_total(
    holes: &[HoleResult],
    what: &str,
    field: impl Fn(&HoleResult) -> i32,
) -> Result<i32, ScoreError> {
    holes
        .iter()
        .try_fold(0i32, |acc, h| acc.checked_add(field(h)))
        .ok_or_else(|| ScoreError::invalid(format!("{what} total overflows")))
}

/// # Errors
///
/// Will return `Err` if the tee's slope rating is not positive or a card
/// total does not fit in an `i32`
pub fn compute_round_stats(holes: &[HoleResult], tee: &Tee) -> Result<ScoreStats, ScoreError> {
    let gross_score = checked_total(holes, "stroke", HoleResult::strokes)?;
    let adjusted_gross_score = checked_total(holes, "adjusted stroke", |h| h.adjusted_strokes)?;
    let par_total = checked_total(holes, "par", HoleResult::par)?;
    let total_putts = checked_total(holes, "putt", |h| h.score.putts)?;
    let penalties = checked_total(holes, "penalty", |h| h.score.penalties)?;

    // fairways only count on holes played with a driver
    let driving_holes = holes.iter().filter(|h| h.par() >= 4);
    let fairways_total = driving_holes.clone().count() as u32;
    let fairways_hit = driving_holes
        .filter(|h| h.score.fairway_hit == Some(true))
        .count() as u32;

    let greens_total = holes.len() as u32;
    let greens_in_regulation = holes
        .iter()
        .filter(|h| h.score.green_in_regulation)
        .count() as u32;

    let score_differential =
        compute_differential(adjusted_gross_score, tee.course_rating, tee.slope_rating)?;

    let score_to_par = gross_score
        .checked_sub(par_total)
        .ok_or_else(|| ScoreError::invalid("score to par overflows"))?;

    let putts_per_hole = if holes.is_empty() {
        0.0
    } else {
        f64::from(total_putts) / holes.len() as f64
    };

    Ok(ScoreStats {
        gross_score,
        adjusted_gross_score,
        score_differential,
        score_to_par,
        total_putts,
        fairways_hit,
        fairways_total,
        greens_in_regulation,
        greens_total,
        penalties,
        putts_per_hole,
    })
}
