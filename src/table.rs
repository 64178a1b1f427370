use crate::consts::MAX_SCORE;

/// A single anomaly score as read from one side of a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Score {
    Valid(u64),
    /// Missing, sentinel or negative.
    Invalid,
}

impl Score {
    /// Negative values are treated as missing.
    pub fn from_raw(raw: i64) -> Self {
        if raw < 0 {
            Score::Invalid
        } else {
            Score::Valid(raw as u64)
        }
    }
}

/// Bounded-domain occurrence counter for the scores of one direction.
///
/// Slots cover `0..=max_score`; the top slot also absorbs every score above
/// the ceiling. Invalid scores are tallied separately, so
/// `sum(counts) + invalid == total()` always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: Box<[u64]>,
    invalid: u64,
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::with_max_score(MAX_SCORE)
    }

    pub fn with_max_score(max_score: usize) -> Self {
        Self {
            counts: vec![0u64; max_score + 1].into_boxed_slice(),
            invalid: 0,
        }
    }

    pub fn max_score(&self) -> usize {
        self.counts.len() - 1
    }

    /// Records one score. Out-of-range values clamp into the overflow bucket,
    /// so this never fails.
    pub fn increment(&mut self, score: Score) {
        match score {
            Score::Invalid => self.invalid += 1,
            Score::Valid(value) => {
                let slot = usize::try_from(value)
                    .unwrap_or(usize::MAX)
                    .min(self.max_score());
                self.counts[slot] += 1;
            }
        }
    }

    /// Occurrences recorded at `score`. Indices past the ceiling read as zero.
    pub fn count(&self, score: usize) -> u64 {
        self.counts.get(score).copied().unwrap_or(0)
    }

    pub fn invalid(&self) -> u64 {
        self.invalid
    }

    /// Number of valid scores recorded.
    pub fn valid(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Valid plus invalid entries.
    pub fn total(&self) -> u64 {
        self.valid() + self.invalid
    }

    /// Largest score with a non-zero count, or 0 when no valid score exists.
    pub fn max_non_zero_index(&self) -> usize {
        self.counts.iter().rposition(|&c| c != 0).unwrap_or(0)
    }

    /// Ascending `(score, count)` pairs, skipping empty slots.
    pub fn iter_non_zero(&self) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c != 0)
            .map(|(score, &c)| (score, c))
    }

    /// Every slot in ascending score order, including empty ones.
    pub fn slots(&self) -> &[u64] {
        &self.counts
    }
}
