mod common;

use caddy_score::controller::posting::{PostingRejection, validate_for_posting};
use caddy_score::error::ScoreError;
use caddy_score::model::{MAX_HOLE_STROKES, Round, RoundType, Tee};
use caddy_score::score::{adjust_holes, compute_round_stats};
use chrono::{TimeZone, Utc};
use common::{FRONT_NINE_PARS, front_nine, hole, nine_hole_tee, round, round_input};

fn invalid(res: Result<Round, ScoreError>) -> String {
    match res {
        Err(ScoreError::InvalidInput(msg)) => msg,
        Ok(_) => panic!("expected invalid input"),
    }
}

#[test]
fn card_validation() {
    let mut card = front_nine(FRONT_NINE_PARS);
    card[4].stroke_index = card[0].stroke_index;
    let msg = invalid(Round::new(round_input("r", card, None)));
    assert!(msg.contains("stroke index"));

    let mut card = front_nine(FRONT_NINE_PARS);
    card[8].hole_number = 19;
    invalid(Round::new(round_input("r", card, None)));

    let mut card = front_nine(FRONT_NINE_PARS);
    card[8].hole_number = 1;
    let msg = invalid(Round::new(round_input("r", card, None)));
    assert!(msg.contains("more than once"));

    let mut card = front_nine(FRONT_NINE_PARS);
    card[0].par = 6;
    invalid(Round::new(round_input("r", card, None)));

    let mut card = front_nine(FRONT_NINE_PARS);
    card[0].strokes = -1;
    invalid(Round::new(round_input("r", card, None)));

    invalid(Round::new(round_input("r", Vec::new(), None)));

    let nineteen: Vec<_> = (1..=19).map(|n| hole(n, 4, n, 4)).collect();
    invalid(Round::new(round_input("r", nineteen, None)));
}

#[test]
fn oversized_hole_counts_are_rejected() {
    let mut card = front_nine(FRONT_NINE_PARS);
    card[0].strokes = i32::MAX;
    card[1].strokes = i32::MAX;
    let msg = invalid(Round::new(round_input("huge", card, None)));
    assert!(msg.contains("per-hole limit"));

    let mut card = front_nine(FRONT_NINE_PARS);
    card[3].putts = MAX_HOLE_STROKES + 1;
    invalid(Round::new(round_input("putts", card, None)));

    let mut card = front_nine(FRONT_NINE_PARS);
    card[3].penalties = i32::MAX;
    invalid(Round::new(round_input("penalties", card, None)));

    let mut card = front_nine(FRONT_NINE_PARS);
    card[3].strokes = MAX_HOLE_STROKES;
    let r = round("ceiling", card, None);
    assert_eq!(r.stats().gross_score, 36 - 5 + MAX_HOLE_STROKES);
}

#[test]
fn unvalidated_card_totals_do_not_overflow() {
    let card = front_nine(FRONT_NINE_PARS);
    let mut holes = adjust_holes(&card, None).unwrap();
    holes[0].score.strokes = i32::MAX;
    holes[1].score.strokes = i32::MAX;
    assert!(matches!(
        compute_round_stats(&holes, &nine_hole_tee()),
        Err(ScoreError::InvalidInput(_))
    ));
}

#[test]
fn zero_slope_tee_is_rejected() {
    let mut input = round_input("r", front_nine(FRONT_NINE_PARS), None);
    input.tee = Tee::new("Broken", "Grey", 70.0, 0);
    let msg = invalid(Round::new(input));
    assert!(msg.contains("slope"));
}

#[test]
fn missing_user_and_bad_date_are_rejected() {
    let mut input = round_input("r", front_nine(FRONT_NINE_PARS), None);
    input.user_id = "  ".to_string();
    invalid(Round::new(input));

    let mut input = round_input("r", front_nine(FRONT_NINE_PARS), None);
    input.played_at = caddy_score::model::ExternalTimestamp::Text("soon".to_string());
    invalid(Round::new(input));
}

#[test]
fn id_is_generated_when_missing() {
    let r = round("", front_nine(FRONT_NINE_PARS), None);
    assert_eq!(r.id(), "score_user-000_1717252200000");
}

#[test]
fn json_round_trip_recomputes_the_same_round() {
    let mut original = round("trip", front_nine([5, 6, 4, 9, 5, 6, 5, 7, 6]), Some(22.0));
    original
        .mark_posted("GHIN-42", Utc.with_ymd_and_hms(2024, 6, 2, 9, 0, 0).unwrap())
        .unwrap();

    let json = serde_json::to_string(&original).unwrap();
    let back: Round = serde_json::from_str(&json).unwrap();
    assert_eq!(back, original);
    assert_eq!(back.stats().adjusted_gross_score, 52);
    assert!(back.posting_status().posted);
}

#[test]
fn tampered_stats_are_ignored_on_load() {
    let r = round("t", front_nine(FRONT_NINE_PARS), None);
    let mut value = serde_json::to_value(&r).unwrap();
    value["stats"]["grossScore"] = serde_json::json!(1);
    let back: Round = serde_json::from_value(value).unwrap();
    assert_eq!(back.stats().gross_score, 36);
}

#[test]
fn posting_payload_carries_registry_fields() {
    let r = round("post", front_nine([5, 6, 4, 9, 5, 6, 5, 7, 6]), Some(22.0));
    assert!(r.posting_status().eligible);

    let payload = validate_for_posting(&r).unwrap();
    assert_eq!(payload.round_id, "post");
    assert_eq!(payload.course_id, "course-1");
    assert_eq!(payload.holes_played, 9);
    assert_eq!(payload.adjusted_gross_score, 52);
    assert_eq!(payload.slope_rating, 120);
    assert!((payload.differential - 15.5).abs() < 1e-9);
    assert!((payload.course_rating - 35.5).abs() < 1e-9);
}

#[test]
fn posted_rounds_are_frozen() {
    let mut r = round("frozen", front_nine(FRONT_NINE_PARS), None);
    let at = Utc.with_ymd_and_hms(2024, 6, 2, 9, 0, 0).unwrap();
    r.mark_posted("GHIN-1", at).unwrap();

    assert_eq!(r.posting_status().post_date, Some(at));
    assert_eq!(
        r.posting_status().confirmation_number.as_deref(),
        Some("GHIN-1")
    );
    assert!(r.mark_posted("GHIN-2", at).is_err());
    assert!(r.amend_holes(front_nine([9; 9])).is_err());
    assert_eq!(r.stats().gross_score, 36);
    assert_eq!(validate_for_posting(&r), Err(PostingRejection::AlreadyPosted));
}

#[test]
fn amending_recomputes_stats() {
    let mut r = round("amend", front_nine(FRONT_NINE_PARS), None);
    r.amend_holes(front_nine([5, 6, 4, 9, 5, 6, 5, 7, 6])).unwrap();
    assert_eq!(r.stats().gross_score, 53);
    // no index on the round, so double bogey caps: 9 on the par 5 counts 7
    assert_eq!(r.stats().adjusted_gross_score, 51);
}

#[test]
fn short_or_incomplete_rounds_cannot_post() {
    let mut card = front_nine(FRONT_NINE_PARS);
    card.pop();
    let short = round("short", card, None);
    assert!(!short.posting_status().eligible);
    assert_eq!(
        validate_for_posting(&short),
        Err(PostingRejection::TooFewHoles(8))
    );

    let mut card = front_nine(FRONT_NINE_PARS);
    card[5].strokes = 0;
    let unfinished = round("unfinished", card, None);
    assert_eq!(
        validate_for_posting(&unfinished),
        Err(PostingRejection::Incomplete(9))
    );

    let mut input = round_input("wrong-type", front_nine(FRONT_NINE_PARS), None);
    input.round_type = RoundType::Eighteen;
    let wrong_type = Round::new(input).unwrap();
    assert_eq!(
        validate_for_posting(&wrong_type),
        Err(PostingRejection::Incomplete(18))
    );
}
