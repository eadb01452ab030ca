use super::round_to_tenth;
use crate::error::ScoreError;
use crate::model::{SCRATCH_SLOPE, Tee};

/// `(113 / slope) * (adjusted gross - course rating)`, to one decimal.
///
/// # Errors
///
/// Will return `Err` if `slope_rating` is not positive or `course_rating` is not finite
pub fn compute_differential(
    adjusted_gross_score: i32,
    course_rating: f64,
    slope_rating: i32,
) -> Result<f64, ScoreError> {
    if slope_rating <= 0 {
        return Err(ScoreError::invalid(format!(
            "slope rating must be positive, got {slope_rating}"
        )));
    }
    if !course_rating.is_finite() {
        return Err(ScoreError::invalid("course rating must be a finite number"));
    }
    let differential = (f64::from(SCRATCH_SLOPE) / f64::from(slope_rating))
        * (f64::from(adjusted_gross_score) - course_rating);
    Ok(round_to_tenth(differential))
}

/// Strokes a player receives from a tee: `index * slope / 113 + (rating - par)`.
///
/// # Errors
///
/// Will return `Err` if the tee is invalid or the index is not finite
pub fn course_handicap(handicap_index: f64, tee: &Tee) -> Result<i32, ScoreError> {
    tee.validate()?;
    if !handicap_index.is_finite() {
        return Err(ScoreError::invalid("handicap index must be a finite number"));
    }
    let raw = handicap_index * f64::from(tee.slope_rating) / f64::from(SCRATCH_SLOPE)
        + (tee.course_rating - f64::from(tee.par));
    Ok(raw.round() as i32)
}

/// Handicap strokes allocated to a hole on an 18-hole card.
///
/// Strokes go to the hardest holes first (stroke index 1). A plus handicap
/// gives strokes back starting from the easiest hole (stroke index 18).
#[must_use]
pub fn strokes_received(course_handicap: i32, stroke_index: i32) -> i32 {
    let holes = 18;
    let full = course_handicap.abs() / holes;
    let extra = course_handicap.abs() % holes;
    if course_handicap >= 0 {
        full + i32::from(stroke_index <= extra)
    } else {
        -(full + i32::from(stroke_index > holes - extra))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strokes_follow_stroke_index() {
        assert_eq!(strokes_received(0, 1), 0);
        assert_eq!(strokes_received(10, 10), 1);
        assert_eq!(strokes_received(10, 11), 0);
        assert_eq!(strokes_received(20, 2), 2);
        assert_eq!(strokes_received(20, 3), 1);
        assert_eq!(strokes_received(-2, 18), -1);
        assert_eq!(strokes_received(-2, 17), -1);
        assert_eq!(strokes_received(-2, 16), 0);
    }

    #[test]
    fn course_handicap_for_standard_tee() {
        let tee = Tee::new("White", "White", 72.0, 113);
        assert_eq!(course_handicap(10.0, &tee).unwrap(), 10);

        let hard = Tee::new("Blue", "Blue", 74.0, 135);
        // 10 * 135 / 113 + 2 = 13.95
        assert_eq!(course_handicap(10.0, &hard).unwrap(), 14);
    }
}
