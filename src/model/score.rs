use serde::Serialize;
use std::fmt;

/// Conventional name for a hole result relative to par.
///
/// Anything better than an eagle is reported as `Albatross`, so a condor or a
/// hole-in-one on a par 5 shares the label.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(into = "String")]
pub enum ScoreName {
    Albatross,
    Eagle,
    Birdie,
    Par,
    Bogey,
    Double,
    Triple,
    Over(i32),
}

impl ScoreName {
    #[must_use]
    pub fn from_i32(diff: i32) -> Self {
        match diff {
            i32::MIN..=-3 => ScoreName::Albatross,
            -2 => ScoreName::Eagle,
            -1 => ScoreName::Birdie,
            0 => ScoreName::Par,
            1 => ScoreName::Bogey,
            2 => ScoreName::Double,
            3 => ScoreName::Triple,
            over => ScoreName::Over(over),
        }
    }
}

impl From<i32> for ScoreName {
    fn from(value: i32) -> Self {
        Self::from_i32(value)
    }
}

impl fmt::Display for ScoreName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreName::Albatross => write!(f, "Albatross"),
            ScoreName::Eagle => write!(f, "Eagle"),
            ScoreName::Birdie => write!(f, "Birdie"),
            ScoreName::Par => write!(f, "Par"),
            ScoreName::Bogey => write!(f, "Bogey"),
            ScoreName::Double => write!(f, "Double"),
            ScoreName::Triple => write!(f, "Triple"),
            ScoreName::Over(diff) => write!(f, "+{diff}"),
        }
    }
}

impl From<ScoreName> for String {
    fn from(value: ScoreName) -> Self {
        value.to_string()
    }
}

/// Scorecard color band for a hole result. Serializes as its hex code.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(into = "String")]
pub enum ScoreColor {
    Gold,
    Green,
    Black,
    Orange,
    Red,
}

impl ScoreColor {
    #[must_use]
    pub fn from_i32(diff: i32) -> Self {
        match diff {
            i32::MIN..=-2 => ScoreColor::Gold,
            -1 => ScoreColor::Green,
            0 => ScoreColor::Black,
            1 => ScoreColor::Orange,
            _ => ScoreColor::Red,
        }
    }

    #[must_use]
    pub fn hex(self) -> &'static str {
        match self {
            ScoreColor::Gold => "#FFD700",
            ScoreColor::Green => "#00C875",
            ScoreColor::Black => "#333333",
            ScoreColor::Orange => "#FFA500",
            ScoreColor::Red => "#FF4444",
        }
    }
}

impl From<ScoreColor> for String {
    fn from(value: ScoreColor) -> Self {
        value.hex().to_string()
    }
}

/// Everything a scorecard cell needs to render one hole.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ScoreDisplay {
    pub color: ScoreColor,
    pub name: ScoreName,
    pub diff: i32,
}
