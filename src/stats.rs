//! Descriptive statistics read straight off a [`FrequencyTable`].
//!
//! Nothing here looks at raw samples: every function is a single ascending
//! pass over the score domain, so cost depends on the table size only.
//!
//! `total` is the number of lines the table's direction was measured over.
//! Invalid entries are part of it but hold no slot, which is why a side with
//! many invalid scores can leave the median rank unreachable.

use crate::table::FrequencyTable;

/// `sum(score * count) / total`, or `None` for an empty input.
pub fn mean(table: &FrequencyTable, total: u64) -> Option<f64> {
    if total == 0 {
        return None;
    }

    let sum: f64 = table
        .iter_non_zero()
        .map(|(score, count)| score as f64 * count as f64)
        .sum();

    Some(sum / total as f64)
}

/// Median over the frequency table.
///
/// With an odd `total` this is the score holding rank `ceil(total / 2)`. With
/// an even `total` it is the midpoint of the scores holding ranks `total / 2`
/// and `total / 2 + 1`.
pub fn median(table: &FrequencyTable, total: u64) -> Option<f64> {
    if total == 0 {
        return None;
    }

    if total % 2 == 1 {
        rank_score(table, total.div_ceil(2)).map(|score| score as f64)
    } else {
        let lower = rank_score(table, total / 2)?;
        let upper = rank_score(table, total / 2 + 1)?;
        Some((lower + upper) as f64 / 2.0)
    }
}

/// First score at which the running count reaches `rank` (1-based).
fn rank_score(table: &FrequencyTable, rank: u64) -> Option<usize> {
    let mut running = 0u64;
    for (score, &count) in table.slots().iter().enumerate() {
        running += count;
        if running >= rank {
            return Some(score);
        }
    }
    None
}
