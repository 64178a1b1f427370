use crate::accumulator::AccumulationResult;
use crate::direction::Direction;
use crate::stats;
use crate::table::FrequencyTable;
use serde::Serialize;
use strum::IntoEnumIterator;

/// One report row: how many lines landed here and where that leaves the
/// running total. All percentages are of the overall line count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Share {
    pub count: u64,
    pub percent: f64,
    pub cumulative: f64,
    pub outstanding: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreRow {
    pub score: usize,
    #[serde(flatten)]
    pub share: Share,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectionSummary {
    pub direction: Direction,
    pub total: u64,
    pub invalid: Share,
    pub rows: Vec<ScoreRow>,
    pub mean: Option<f64>,
    pub median: Option<f64>,
    /// Highest score with any occurrences; sizes the score column.
    pub max_score_seen: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub total: u64,
    pub sections: Vec<DirectionSummary>,
}

/// Percentage of `total`, defined as 0 for an empty input.
pub fn percent(count: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        100.0 * (count as f64 / total as f64)
    }
}

impl DirectionSummary {
    pub fn new(direction: Direction, table: &FrequencyTable, total: u64) -> Self {
        // Invalid entries sort first, so the running total starts with them.
        let mut running = table.invalid();
        let invalid = share(table.invalid(), running, total);

        let rows = table
            .iter_non_zero()
            .map(|(score, count)| {
                running += count;
                ScoreRow {
                    score,
                    share: share(count, running, total),
                }
            })
            .collect();

        Self {
            direction,
            total,
            invalid,
            rows,
            mean: stats::mean(table, total),
            median: stats::median(table, total),
            max_score_seen: table.max_non_zero_index(),
        }
    }

    /// The "total number of requests/responses" row: everything, nothing outstanding.
    pub fn total_share(&self) -> Share {
        share(self.total, self.total, self.total)
    }
}

impl Report {
    pub fn from_result(result: &AccumulationResult) -> Self {
        let sections = Direction::iter()
            .map(|d| DirectionSummary::new(d, result.table(d), result.total))
            .collect();

        Self {
            total: result.total,
            sections,
        }
    }

    pub fn section(&self, direction: Direction) -> Option<&DirectionSummary> {
        self.sections.iter().find(|s| s.direction == direction)
    }
}

fn share(count: u64, running: u64, total: u64) -> Share {
    let cumulative = percent(running, total);
    Share {
        count,
        percent: percent(count, total),
        cumulative,
        outstanding: if total == 0 { 0.0 } else { 100.0 - cumulative },
    }
}

/// Digits needed to print `n` in decimal.
pub fn digit_width(n: u64) -> usize {
    let mut width = 1;
    let mut n = n;
    while n > 9 {
        n /= 10;
        width += 1;
    }
    width
}
