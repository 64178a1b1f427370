#![allow(dead_code)]

use wafreport::accumulator::{AccumulationResult, ScoreAccumulator};
use wafreport::table::{FrequencyTable, Score};

/// Table with `count` occurrences at each `(score, count)` entry.
pub fn table_from_counts(max_score: usize, counts: &[(u64, u64)]) -> FrequencyTable {
    let mut table = FrequencyTable::with_max_score(max_score);
    for &(score, count) in counts {
        for _ in 0..count {
            table.increment(Score::Valid(score));
        }
    }
    table
}

/// Runs the full default-sized accumulator over an in-memory input.
pub fn accumulate(input: &str) -> AccumulationResult {
    let mut acc = ScoreAccumulator::new();
    acc.ingest(input.as_bytes());
    acc.finish()
}
