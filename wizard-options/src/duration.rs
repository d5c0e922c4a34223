//! Governor durations: `"<n> <unit>[s]"` converted to a block count.

use std::sync::LazyLock;

use regex::Regex;

use crate::{Error, Result};

const SECONDS_PER_DAY: f64 = 86_400.0;

fn unit_seconds(unit: &str) -> Option<f64> {
    Some(match unit {
        "second" => 1.0,
        "minute" => 60.0,
        "hour" => 3_600.0,
        "day" => SECONDS_PER_DAY,
        "week" => 7.0 * SECONDS_PER_DAY,
        "month" => 30.0 * SECONDS_PER_DAY,
        "year" => 365.0 * SECONDS_PER_DAY,
        _ => return None,
    })
}

static DURATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d+(?:\.\d+)?)\s+(second|minute|hour|day|week|month|year|block)s?\s*$")
        .expect("valid duration pattern")
});

fn invalid(option: &'static str, value: &str, reason: &str) -> Box<Error> {
    Error::invalid_option(option, value, reason)
}

/// Convert a duration to blocks, given the average block time in seconds.
///
/// `option` names the field for error reporting. The result must be a whole
/// number of blocks.
pub fn duration_to_blocks(option: &'static str, duration: &str, block_time: u32) -> Result<u64> {
    const FORMAT: &str = "expected a duration such as \"1 day\", \"2 weeks\" or \"10 blocks\"";
    const WHOLE: &str = "number of blocks must be a whole number";

    let caps = DURATION
        .captures(duration)
        .ok_or_else(|| invalid(option, duration, FORMAT))?;
    let amount: f64 = caps[1]
        .parse()
        .map_err(|_| invalid(option, duration, FORMAT))?;

    let blocks = match &caps[2] {
        "block" => amount,
        unit => {
            let seconds = unit_seconds(unit).ok_or_else(|| invalid(option, duration, FORMAT))?;
            if block_time == 0 {
                return Err(invalid("blockTime", "0", "block time must be at least one second"));
            }
            amount * seconds / f64::from(block_time)
        }
    };

    if blocks.fract() != 0.0 || blocks > u64::MAX as f64 {
        return Err(invalid(option, duration, WHOLE));
    }
    Ok(blocks as u64)
}
