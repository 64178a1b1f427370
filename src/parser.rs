use crate::consts::MISSING_SENTINEL;
use crate::table::Score;

/// Which input shape a line was recognised as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineFormat {
    /// `123 456`
    Pair,
    /// `123 -`, or any integer followed by junk.
    InboundOnly,
    /// `- 456`
    OutboundOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedLine {
    pub inbound: Score,
    pub outbound: Score,
    pub format: LineFormat,
}

/// Byte cursor with C `%d` scanning semantics.
struct Scanner<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while matches!(
            self.peek(),
            Some(b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C)
        ) {
            self.pos += 1;
        }
    }

    /// Leading whitespace, optional sign, at least one digit. Magnitudes that
    /// do not fit an i64 saturate. On failure the cursor is left untouched.
    fn scan_int(&mut self) -> Option<i64> {
        let start = self.pos;
        self.skip_whitespace();

        let negative = match self.peek() {
            Some(b'-') => {
                self.pos += 1;
                true
            }
            Some(b'+') => {
                self.pos += 1;
                false
            }
            _ => false,
        };

        let digits_start = self.pos;
        let mut magnitude: i64 = 0;
        while let Some(d @ b'0'..=b'9') = self.peek() {
            magnitude = magnitude
                .saturating_mul(10)
                .saturating_add(i64::from(d - b'0'));
            self.pos += 1;
        }

        if self.pos == digits_start {
            self.pos = start;
            return None;
        }

        Some(if negative { -magnitude } else { magnitude })
    }

    fn eat(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }
}

/// Tries the known line shapes in order, first match wins:
///
/// 1. two integers: `(first, second)`
/// 2. one integer, anything after it: `(value, Invalid)`
/// 3. the missing-score sentinel, then an integer: `(Invalid, value)`
///
/// Negative numbers become [`Score::Invalid`]. Lines matching none of the
/// shapes yield `None` and must not be counted anywhere.
pub fn parse_line(line: &str) -> Option<ParsedLine> {
    let mut scanner = Scanner::new(line.as_bytes());

    if let Some(inbound) = scanner.scan_int() {
        return Some(match scanner.scan_int() {
            Some(outbound) => ParsedLine {
                inbound: Score::from_raw(inbound),
                outbound: Score::from_raw(outbound),
                format: LineFormat::Pair,
            },
            None => ParsedLine {
                inbound: Score::from_raw(inbound),
                outbound: Score::Invalid,
                format: LineFormat::InboundOnly,
            },
        });
    }

    // The sentinel must be the very first byte; no whitespace is skipped before it.
    let mut scanner = Scanner::new(line.as_bytes());
    if scanner.eat(MISSING_SENTINEL as u8) {
        if let Some(outbound) = scanner.scan_int() {
            return Some(ParsedLine {
                inbound: Score::Invalid,
                outbound: Score::from_raw(outbound),
                format: LineFormat::OutboundOnly,
            });
        }
    }

    None
}
