/// Highest score tracked individually. Larger scores are clamped into this slot,
/// which doubles as the overflow bucket.
pub const MAX_SCORE: usize = 65536;

/// Sentinel token marking a missing score in front of an outbound value (`- 50`).
pub const MISSING_SENTINEL: char = '-';

/// Upper bound accepted for `--max-score`; each direction allocates one u64 per score.
pub const MAX_SCORE_LIMIT: usize = 1 << 24;
