//! TTL specifier parsing for index document expiry.
//!
//! Elasticsearch accepts TTL values in the form `1d / 1w / 1ms / 1s / 1h / 1m`,
//! where the suffix picks the time unit. A bare integer is interpreted as days.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info};

/// Sentinel for "TTL not provided / string did not parse".
pub const DEFAULT_TTL_MS: i64 = -1;

const MILLIS_PER_SECOND: i64 = 1_000;
const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;
const MILLIS_PER_WEEK: i64 = 7 * MILLIS_PER_DAY;

// An unrecognized letter suffix still matches the pattern and disables the
// TTL (0), while input that fails the pattern entirely maps to "not
// provided" (-1). Callers depend on that distinction.
static TTL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)([a-zA-Z]*)$").expect("invalid TTL pattern"));

/// Converts a TTL specifier string into milliseconds.
///
/// Returns `-1` when the input does not look like a TTL at all and `0` when
/// the magnitude parses but the unit suffix is unknown. Malformed input never
/// errors; configuration parsing degrades to sentinels instead.
pub fn parse_ttl(ttl: &str) -> i64 {
    let caps = match TTL_PATTERN.captures(ttl) {
        Some(caps) => caps,
        None => {
            info!(
                component = "ttl",
                event = "no_match",
                raw = %ttl,
                "TTL not provided, skipping the TTL config"
            );
            return DEFAULT_TTL_MS;
        }
    };

    let magnitude: i64 = match caps[1].parse() {
        Ok(n) => n,
        Err(_) => {
            debug!(
                component = "ttl",
                event = "magnitude_overflow",
                raw = %ttl,
                "TTL magnitude does not fit i64, skipping the TTL config"
            );
            return DEFAULT_TTL_MS;
        }
    };

    match caps[2].to_ascii_lowercase().as_str() {
        "ms" => magnitude,
        "s" => magnitude.saturating_mul(MILLIS_PER_SECOND),
        "m" => magnitude.saturating_mul(MILLIS_PER_MINUTE),
        "h" => magnitude.saturating_mul(MILLIS_PER_HOUR),
        "d" => magnitude.saturating_mul(MILLIS_PER_DAY),
        "w" => magnitude.saturating_mul(MILLIS_PER_WEEK),
        "" => {
            info!(
                component = "ttl",
                event = "empty_qualifier",
                raw = %ttl,
                "TTL qualifier is empty, defaulting to day qualifier"
            );
            magnitude.saturating_mul(MILLIS_PER_DAY)
        }
        unknown => {
            debug!(
                component = "ttl",
                event = "unknown_qualifier",
                qualifier = %unknown,
                raw = %ttl,
                "unknown TTL qualifier provided, setting TTL to 0"
            );
            0
        }
    }
}
