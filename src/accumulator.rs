use crate::consts::MAX_SCORE;
use crate::direction::Direction;
use crate::parser::parse_line;
use crate::table::FrequencyTable;
use std::io::BufRead;
use tracing::{debug, warn};

/// Final tallies of one ingestion run. Read-only once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccumulationResult {
    pub inbound: FrequencyTable,
    pub outbound: FrequencyTable,
    /// Lines that matched a known shape, whatever the validity of each side.
    pub total: u64,
}

impl AccumulationResult {
    pub fn table(&self, direction: Direction) -> &FrequencyTable {
        match direction {
            Direction::Inbound => &self.inbound,
            Direction::Outbound => &self.outbound,
        }
    }
}

/// Owns both direction tables while lines are being read.
#[derive(Debug, Clone)]
pub struct ScoreAccumulator {
    inbound: FrequencyTable,
    outbound: FrequencyTable,
    total: u64,
}

impl Default for ScoreAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreAccumulator {
    pub fn new() -> Self {
        Self::with_max_score(MAX_SCORE)
    }

    pub fn with_max_score(max_score: usize) -> Self {
        Self {
            inbound: FrequencyTable::with_max_score(max_score),
            outbound: FrequencyTable::with_max_score(max_score),
            total: 0,
        }
    }

    /// Feeds one line. Returns `false` if the line was discarded.
    pub fn record(&mut self, line: &str) -> bool {
        match parse_line(line) {
            Some(parsed) => {
                self.inbound.increment(parsed.inbound);
                self.outbound.increment(parsed.outbound);
                self.total += 1;
                true
            }
            None => false,
        }
    }

    /// Reads `reader` to the end. A read error ends ingestion the same way
    /// EOF does; everything counted so far is kept.
    pub fn ingest<R: BufRead>(&mut self, mut reader: R) {
        let mut buf = Vec::new();
        let mut matched = 0u64;
        let mut discarded = 0u64;

        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) => break,
                Ok(_) => {
                    let line = String::from_utf8_lossy(&buf);
                    if self.record(&line) {
                        matched += 1;
                    } else {
                        discarded += 1;
                    }
                }
                Err(e) => {
                    warn!("Input read failed, stopping early: {}", e);
                    break;
                }
            }
        }

        debug!(
            "Ingested {} lines ({} matched, {} discarded)",
            matched + discarded,
            matched,
            discarded
        );
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn finish(self) -> AccumulationResult {
        AccumulationResult {
            inbound: self.inbound,
            outbound: self.outbound,
            total: self.total,
        }
    }
}
