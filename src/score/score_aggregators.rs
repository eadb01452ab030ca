use ahash::RandomState;
use std::collections::HashMap;
use tracing::debug;

use super::{estimate_handicap_index, percentage, round_to_tenth, score_to_par};
use crate::model::{CourseStatistics, Round, ScoreHistogram, UserStatistics};

fn mean(values: impl Iterator<Item = f64>, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    values.sum::<f64>() / count as f64
}

#[must_use]
pub fn histogram(rounds: &[Round]) -> ScoreHistogram {
    let mut hist = ScoreHistogram::default();
    for hole in rounds.iter().flat_map(Round::holes) {
        match score_to_par(hole.strokes(), hole.par()) {
            i32::MIN..=-1 => hist.birdies_or_better += 1,
            0 => hist.pars += 1,
            1 => hist.bogeys += 1,
            _ => hist.double_bogey_or_worse += 1,
        }
    }
    hist
}

/// Totals and averages over a player's rounds. No rounds gives all zeros.
#[must_use]
pub fn aggregate_statistics(rounds: &[Round]) -> UserStatistics {
    if rounds.is_empty() {
        return UserStatistics::default();
    }
    let total_rounds = rounds.len();

    let gross: Vec<i32> = rounds.iter().map(|r| r.stats().gross_score).collect();
    let differentials: Vec<f64> = rounds
        .iter()
        .map(|r| r.stats().score_differential)
        .collect();

    let (mut fairways_hit, mut fairways_total) = (0, 0);
    let (mut greens_hit, mut greens_total) = (0, 0);
    let (mut total_putts, mut total_penalties) = (0, 0);
    for stats in rounds.iter().map(Round::stats) {
        fairways_hit += stats.fairways_hit;
        fairways_total += stats.fairways_total;
        greens_hit += stats.greens_in_regulation;
        greens_total += stats.greens_total;
        total_putts += stats.total_putts;
        total_penalties += stats.penalties;
    }

    debug!(total_rounds, "aggregating round statistics");

    UserStatistics {
        total_rounds: total_rounds as u32,
        average_score: round_to_tenth(mean(gross.iter().map(|&g| f64::from(g)), total_rounds)),
        lowest_score: gross.iter().copied().min().unwrap_or(0),
        highest_score: gross.iter().copied().max().unwrap_or(0),
        average_differential: round_to_tenth(mean(differentials.iter().copied(), total_rounds)),
        estimated_handicap: estimate_handicap_index(&differentials),
        fairway_percentage: percentage(fairways_hit, fairways_total),
        gir_percentage: percentage(greens_hit, greens_total),
        average_putts: round_to_tenth(f64::from(total_putts) / total_rounds as f64),
        total_penalties,
        histogram: histogram(rounds),
    }
}

/// Rounds grouped by course id, ordered by course id.
#[must_use]
pub fn group_by_course(rounds: &[Round]) -> Vec<(String, Vec<&Round>)> {
    let mut grouped: HashMap<String, Vec<&Round>, RandomState> = HashMap::default();
    for round in rounds {
        grouped
            .entry(round.course().id.clone())
            .or_default()
            .push(round);
    }

    let mut sorted: Vec<(String, Vec<&Round>)> = grouped.into_iter().collect();
    sorted.sort_by(|(a, _), (b, _)| a.cmp(b));
    sorted
}

#[must_use]
pub fn course_statistics(rounds: &[Round], course_id: &str) -> Option<CourseStatistics> {
    let played: Vec<&Round> = rounds
        .iter()
        .filter(|r| r.course().id == course_id)
        .collect();
    let first = played.first()?;

    let gross: Vec<i32> = played.iter().map(|r| r.stats().gross_score).collect();
    Some(CourseStatistics {
        course_id: course_id.to_string(),
        course_name: first.course().name.clone(),
        rounds_played: played.len() as u32,
        average_score: round_to_tenth(mean(gross.iter().map(|&g| f64::from(g)), gross.len())),
        best_score: gross.iter().copied().min().unwrap_or(0),
        worst_score: gross.iter().copied().max().unwrap_or(0),
        last_played: played.iter().map(|r| r.played_at()).max()?,
    })
}
