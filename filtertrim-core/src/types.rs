use crate::classifier::is_blank_char;
use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Default cap on active rules when neither the CLI nor a config file sets one
pub const DEFAULT_MAX_RULES: usize = 800;

// ===== LINE TYPES =====

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineKind {
    /// Starts with one of the comment prefixes (`!` or `#` by default)
    Comment,
    /// Empty or whitespace-only
    Blank,
    /// Anything else: one filtering directive
    Rule,
}

impl LineKind {
    /// Comment and blank lines may appear in the header
    pub fn is_header_line(self) -> bool {
        matches!(self, LineKind::Comment | LineKind::Blank)
    }
}

// ===== RULE LIMIT =====

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("max_rules must be an integer")]
pub struct ParseRuleLimitError;

/// How many body rules to keep, as an arbitrary-size signed integer.
///
/// A limit of `n >= 0` keeps the first `n` rules. A negative limit `-n` keeps
/// all but the last `n`. Limits too large for `usize` keep everything.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRuleLimit", into = "RawRuleLimit")]
pub struct RuleLimit {
    negative: bool,
    /// Decimal digits without leading zeros ("0" for zero)
    magnitude: String,
}

impl RuleLimit {
    pub fn keep_first(n: usize) -> Self {
        Self {
            negative: false,
            magnitude: n.to_string(),
        }
    }

    pub fn from_i64(n: i64) -> Self {
        Self {
            negative: n < 0,
            magnitude: n.unsigned_abs().to_string(),
        }
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Number of rules kept out of `total`
    pub fn kept_count(&self, total: usize) -> usize {
        // Only digits are stored, so a parse failure means overflow
        let magnitude = self.magnitude.parse::<usize>().unwrap_or(usize::MAX);
        if self.negative {
            total.saturating_sub(magnitude)
        } else {
            total.min(magnitude)
        }
    }

    fn as_i64(&self) -> Option<i64> {
        self.to_string().parse().ok()
    }
}

impl Default for RuleLimit {
    fn default() -> Self {
        Self::keep_first(DEFAULT_MAX_RULES)
    }
}

impl From<usize> for RuleLimit {
    fn from(n: usize) -> Self {
        Self::keep_first(n)
    }
}

/// Accepts surrounding whitespace, one leading sign, and single underscores
/// between digits: ` -1_000 ` is minus one thousand.
impl FromStr for RuleLimit {
    type Err = ParseRuleLimitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim_matches(is_blank_char);
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };

        let well_formed = !digits.is_empty()
            && !digits.starts_with('_')
            && !digits.ends_with('_')
            && !digits.contains("__")
            && digits.chars().all(|c| c.is_ascii_digit() || c == '_');
        if !well_formed {
            return Err(ParseRuleLimitError);
        }

        let digits: String = digits.chars().filter(|c| *c != '_').collect();
        let magnitude = match digits.trim_start_matches('0') {
            "" => "0",
            trimmed => trimmed,
        };

        Ok(Self {
            negative: negative && magnitude != "0",
            magnitude: magnitude.to_string(),
        })
    }
}

impl fmt::Display for RuleLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "-{}", self.magnitude)
        } else {
            f.write_str(&self.magnitude)
        }
    }
}

// YAML form: a plain integer, or a string for values beyond i64
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawRuleLimit {
    Int(i64),
    Text(String),
}

impl TryFrom<RawRuleLimit> for RuleLimit {
    type Error = ParseRuleLimitError;

    fn try_from(raw: RawRuleLimit) -> Result<Self, Self::Error> {
        match raw {
            RawRuleLimit::Int(n) => Ok(Self::from_i64(n)),
            RawRuleLimit::Text(s) => s.parse(),
        }
    }
}

impl From<RuleLimit> for RawRuleLimit {
    fn from(limit: RuleLimit) -> Self {
        match limit.as_i64() {
            Some(n) => RawRuleLimit::Int(n),
            None => RawRuleLimit::Text(limit.to_string()),
        }
    }
}

// ===== TRIM MARKER =====

/// The synthetic comment inserted between the header and the kept rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrimMarker {
    /// The requested maximum, not the number of rules actually kept
    pub max_rules: RuleLimit,
    pub trimmed_at: DateTime<Utc>,
}

impl TrimMarker {
    pub fn new(max_rules: RuleLimit, trimmed_at: DateTime<Utc>) -> Self {
        Self {
            max_rules,
            trimmed_at,
        }
    }

    /// ISO-8601 without an offset. Microseconds are only printed when non-zero.
    pub fn timestamp(&self) -> String {
        let naive = self.trimmed_at.naive_utc();
        let seconds = naive.format("%Y-%m-%dT%H:%M:%S").to_string();
        let micros = naive.nanosecond() / 1_000;
        if micros == 0 {
            seconds
        } else {
            format!("{seconds}.{micros:06}")
        }
    }
}

impl fmt::Display for TrimMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "! Trimmed to {} rules on {}Z",
            self.max_rules,
            self.timestamp()
        )
    }
}

// ===== TRIM REPORT =====

/// Counts describing one trim, logged after every run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrimReport {
    pub header_lines: usize,
    /// Rule lines found after the header
    pub rules_found: usize,
    pub rules_kept: usize,
    pub rules_discarded: usize,
    /// Comment and blank lines below the header, always dropped
    pub body_lines_dropped: usize,
}

impl TrimReport {
    /// Header + marker + kept rules
    pub fn output_lines(&self) -> usize {
        self.header_lines + 1 + self.rules_kept
    }
}
