#![allow(dead_code)]

use caddy_score::model::{
    CourseInfo, ExternalTimestamp, HoleScore, Round, RoundInput, RoundType, Tee,
};

pub const FRONT_NINE_PARS: [i32; 9] = [4, 4, 3, 5, 4, 4, 3, 5, 4];
// the front nine takes the odd stroke indexes
pub const FRONT_NINE_INDEXES: [i32; 9] = [7, 3, 15, 1, 11, 5, 17, 9, 13];

pub fn hole(number: i32, par: i32, stroke_index: i32, strokes: i32) -> HoleScore {
    HoleScore {
        hole_number: number,
        par,
        stroke_index,
        strokes,
        putts: 2,
        fairway_hit: None,
        green_in_regulation: false,
        penalties: 0,
    }
}

pub fn front_nine(strokes: [i32; 9]) -> Vec<HoleScore> {
    (0..9)
        .map(|i| {
            hole(
                i as i32 + 1,
                FRONT_NINE_PARS[i],
                FRONT_NINE_INDEXES[i],
                strokes[i],
            )
        })
        .collect()
}

pub fn nine_hole_tee() -> Tee {
    let mut tee = Tee::new("White", "White", 35.5, 120);
    tee.par = 36;
    tee
}

pub fn course(id: &str, name: &str) -> CourseInfo {
    CourseInfo {
        id: id.to_string(),
        name: name.to_string(),
        city: None,
        state: None,
    }
}

pub fn round_input(id: &str, holes: Vec<HoleScore>, handicap_index: Option<f64>) -> RoundInput {
    RoundInput {
        id: id.to_string(),
        user_id: "user-0001-abcdef".to_string(),
        played_at: ExternalTimestamp::Text("2024-06-01T14:30:00Z".to_string()),
        round_type: RoundType::FrontNine,
        course: course("course-1", "Pine Hollow"),
        tee: nine_hole_tee(),
        holes,
        handicap_index,
        posting_status: None,
    }
}

pub fn round(id: &str, holes: Vec<HoleScore>, handicap_index: Option<f64>) -> Round {
    Round::new(round_input(id, holes, handicap_index)).unwrap()
}
