use serde::{Deserialize, Serialize};

use crate::error::ScoreError;

/// Slope rating of a course of standard playing difficulty.
pub const SCRATCH_SLOPE: i32 = 113;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TeeGender {
    #[serde(rename = "M")]
    Men,
    #[serde(rename = "F")]
    Women,
}

/// One set of tee markers at a course. Rounds keep a copy of the tee they
/// were played from, so corrections to course data never rewrite history.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Tee {
    pub name: String,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<TeeGender>,
    #[serde(alias = "rating")]
    pub course_rating: f64,
    #[serde(alias = "slope")]
    pub slope_rating: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yardage: Option<i32>,
    #[serde(default = "default_par")]
    pub par: i32,
}

fn default_par() -> i32 {
    72
}

impl Tee {
    #[must_use]
    pub fn new(name: &str, color: &str, course_rating: f64, slope_rating: i32) -> Self {
        Self {
            name: name.to_string(),
            color: color.to_string(),
            gender: None,
            course_rating,
            slope_rating,
            yardage: None,
            par: default_par(),
        }
    }

    /// # Errors
    ///
    /// Will return `Err` if the slope is not positive or the rating is not a finite number
    pub fn validate(&self) -> Result<(), ScoreError> {
        if self.slope_rating <= 0 {
            return Err(ScoreError::invalid(format!(
                "tee '{}' has non-positive slope rating {}",
                self.name, self.slope_rating
            )));
        }
        if !self.course_rating.is_finite() {
            return Err(ScoreError::invalid(format!(
                "tee '{}' has a non-finite course rating",
                self.name
            )));
        }
        if self.par <= 0 {
            return Err(ScoreError::invalid(format!(
                "tee '{}' has non-positive par {}",
                self.name, self.par
            )));
        }
        Ok(())
    }
}

/// Tee table used whenever the course-data provider can't supply one.
#[must_use]
pub fn default_tees() -> Vec<Tee> {
    vec![
        Tee::new("Championship", "Black", 74.0, 135),
        Tee::new("Blue", "Blue", 72.0, 130),
        Tee::new("White", "White", 70.0, 125),
        Tee::new("Gold/Senior", "Gold", 68.5, 120),
        Tee::new("Red", "Red", 71.0, 125),
    ]
}
