use crate::{
    foundation::error::{RingTimerError, RingTimerResult},
    timer::timefmt::{HHMMSS_DIGITS, format_raw_input, parse_hhmmss_to_ms},
};

const MAX_HOURS: u32 = 99;

/// Digit-by-digit `HHMMSS` entry, at most six ASCII digits.
///
/// Typing past six digits shifts the oldest digit out on the left, like a microwave keypad.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeInput(String);

impl TimeInput {
    /// Empty entry (reads as `00:00:00`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate an existing digit string.
    pub fn parse(value: &str) -> RingTimerResult<Self> {
        parse_hhmmss_to_ms(value)?;
        Ok(Self(value.to_owned()))
    }

    /// The digits as typed.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Nothing typed yet.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Append one digit, dropping the leftmost one when already full. Non-digits are ignored
    /// and reported as `false`.
    pub fn push_digit(&mut self, c: char) -> bool {
        if !c.is_ascii_digit() {
            return false;
        }
        if self.0.len() >= HHMMSS_DIGITS {
            self.0.remove(0);
        }
        self.0.push(c);
        true
    }

    /// Drop the last digit.
    pub fn backspace(&mut self) {
        self.0.pop();
    }

    /// Add whole minutes.
    ///
    /// Crossing the hour carries exactly one hour and lands on `:00` minutes; the hour wraps from
    /// 99 back to 1. Seconds are kept. The result is always six digits.
    pub fn add_minutes(&mut self, minutes: u32) {
        let padded = format!("{:0>width$}", self.0, width = HHMMSS_DIGITS);
        let field = |r: std::ops::Range<usize>| padded[r].parse::<u32>().unwrap_or(0);
        let (hours, current, seconds) = (field(0..2), field(2..4), field(4..6));

        let next = current.saturating_add(minutes);
        let (hours, next) = if next >= 60 {
            let hours = if hours + 1 > MAX_HOURS { 1 } else { hours + 1 };
            (hours, next.min(60) % 60)
        } else {
            (hours, next)
        };
        self.0 = format!("{hours:02}{next:02}{seconds:02}");
    }

    /// Total duration in milliseconds, with minutes and seconds capped at 59.
    pub fn total_ms(&self) -> u64 {
        parse_hhmmss_to_ms(&self.0).unwrap_or(0)
    }

    /// `HH:MM:SS` as typed, for the focused input.
    pub fn raw_display(&self) -> String {
        format_raw_input(&self.0)
    }
}

impl TryFrom<String> for TimeInput {
    type Error = RingTimerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse_hhmmss_to_ms(&value)?;
        Ok(Self(value))
    }
}

impl From<TimeInput> for String {
    fn from(value: TimeInput) -> Self {
        value.0
    }
}

impl std::fmt::Display for TimeInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timer/input.rs"]
mod tests;
