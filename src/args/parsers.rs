use std::time::Duration;

use super::types::Probability;
use crate::error::ValidationError;

pub(crate) fn parse_probability(s: &str) -> Result<Probability, ValidationError> {
    s.parse::<Probability>()
}

/// Milliseconds per accepted duration suffix. A bare number means seconds.
const DURATION_UNITS: [(&str, u64); 4] = [
    ("ms", 1),
    ("s", 1_000),
    ("m", 60_000),
    ("h", 3_600_000),
];

pub(crate) fn parse_duration_arg(s: &str) -> Result<Duration, ValidationError> {
    let value = s.trim();
    if value.is_empty() {
        return Err(ValidationError::DurationEmpty);
    }

    let split = value
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(value.len());
    let (digits, suffix) = value.split_at(split);
    if digits.is_empty() {
        return Err(ValidationError::InvalidDurationFormat {
            value: value.to_owned(),
        });
    }
    let number: u64 = digits
        .parse()
        .map_err(|source| ValidationError::InvalidDurationNumber {
            value: value.to_owned(),
            source,
        })?;

    let unit = if suffix.is_empty() { "s" } else { suffix };
    let factor = DURATION_UNITS
        .iter()
        .find(|(name, _)| *name == unit)
        .map(|(_, factor)| *factor)
        .ok_or_else(|| ValidationError::InvalidDurationUnit {
            unit: unit.to_owned(),
        })?;
    let millis = number
        .checked_mul(factor)
        .ok_or(ValidationError::DurationOverflow)?;
    if millis == 0 {
        return Err(ValidationError::DurationZero);
    }
    Ok(Duration::from_millis(millis))
}
