//! Lookup in maps keyed by integer ranges.
//!
//! Range keys are strings of the form `"low-high"`, both bounds inclusive.
//! Either bound may be negative (`"-10--5"`).

use std::{fmt, str::FromStr};

use crate::value::{Key, Map, Value};

/// An inclusive integer interval parsed from a `"low-high"` key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RangeKey {
    low: i64,
    high: i64,
}

/// Why a string is not a valid range key.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RangeKeyError {
    #[error("range key `{0}` has no `-` separator")]
    MissingSeparator(String),
    #[error("range bound `{0}` is not an integer")]
    InvalidBound(String),
    #[error("range low bound {low} exceeds high bound {high}")]
    Inverted { low: i64, high: i64 },
}

impl RangeKey {
    pub fn new(low: i64, high: i64) -> Result<Self, RangeKeyError> {
        if low > high {
            return Err(RangeKeyError::Inverted { low, high });
        }
        Ok(Self { low, high })
    }

    /// Parses `"low-high"`.
    ///
    /// Parsing is lenient in two ways, so such keys are matched rather than
    /// skipped by [`lookup_range`]: whitespace around the key and around each
    /// bound is ignored, and each bound may carry a leading `+` (`"+3-+8"`).
    pub fn parse(text: &str) -> Result<Self, RangeKeyError> {
        let text = text.trim();
        // The separator is the first `-` that is not the low bound's sign.
        let separator = text
            .char_indices()
            .skip(1)
            .find(|&(_, c)| c == '-')
            .map(|(index, _)| index)
            .ok_or_else(|| RangeKeyError::MissingSeparator(text.to_owned()))?;

        let low = parse_bound(&text[..separator])?;
        let high = parse_bound(&text[separator + 1..])?;
        Self::new(low, high)
    }

    pub fn low(self) -> i64 {
        self.low
    }

    pub fn high(self) -> i64 {
        self.high
    }

    pub fn contains(self, value: i64) -> bool {
        self.low <= value && value <= self.high
    }
}

fn parse_bound(raw: &str) -> Result<i64, RangeKeyError> {
    let raw = raw.trim();
    raw.parse()
        .map_err(|_| RangeKeyError::InvalidBound(raw.to_owned()))
}

impl FromStr for RangeKey {
    type Err = RangeKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RangeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}

/// Iterates the entries of `map` whose keys parse as range keys, in map order.
///
/// Integer keys and malformed string keys are skipped.
pub fn range_entries(map: &Map) -> impl Iterator<Item = (RangeKey, &Value)> {
    map.iter().filter_map(|(key, value)| match key {
        Key::Str(raw) => RangeKey::parse(raw).ok().map(|range| (range, value)),
        Key::Int(_) => None,
    })
}

/// Returns the value of the first range key containing `query`.
///
/// # Example
///
/// ```rust
/// use dictwalk::{Value, lookup_range, map};
///
/// let bands = map! { "1-5" => "a", "10-20" => "b" }.into_map().unwrap();
/// assert_eq!(lookup_range(&bands, 3), Some(&Value::from("a")));
/// assert_eq!(lookup_range(&bands, 7), None);
/// ```
pub fn lookup_range(map: &Map, query: i64) -> Option<&Value> {
    range_entries(map)
        .find(|(range, _)| range.contains(query))
        .map(|(_, value)| value)
}
