use super::round_to_tenth;

/// How many of the lowest differentials count toward the index.
///
/// This is the product's simplified table. It deliberately skips the
/// official low-count adjustments because stored handicaps were computed
/// with it.
#[must_use]
pub fn differentials_to_use(available: usize) -> usize {
    match available {
        0 => 0,
        1..=8 => 1,
        9..=10 => 2,
        11..=12 => 3,
        13..=14 => 4,
        15..=16 => 5,
        17..=18 => 6,
        19 => 7,
        _ => 8,
    }
}

/// Mean of the best differentials, to one decimal. No rounds gives 0.
#[must_use]
pub fn estimate_handicap_index(differentials: &[f64]) -> f64 {
    let count = differentials_to_use(differentials.len());
    if count == 0 {
        return 0.0;
    }

    let mut sorted = differentials.to_vec();
    sorted.sort_by(f64::total_cmp);

    let best = &sorted[..count];
    let average = best.iter().sum::<f64>() / best.len() as f64;
    round_to_tenth(average)
}
