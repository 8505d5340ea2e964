use crate::foundation::error::{RingTimerError, RingTimerResult};

/// Digits in a full `HHMMSS` value.
pub const HHMMSS_DIGITS: usize = 6;

const MAX_MINUTES: u64 = 59;
const MAX_SECONDS: u64 = 59;

fn pad6(value: &str) -> String {
    format!("{value:0>width$}", width = HHMMSS_DIGITS)
}

/// Split a padded six-char value into its three two-char groups.
fn groups(padded: &str) -> [String; 3] {
    let chars: Vec<char> = padded.chars().collect();
    let take = |from: usize| chars.iter().skip(from).take(2).collect::<String>();
    [take(0), take(2), take(4)]
}

/// Read up to six digits as `HHMMSS` and return the duration in milliseconds.
///
/// Short input is left-padded with zeros, so `"115"` is one minute fifteen. Minutes and seconds
/// above 59 are capped at 59 rather than carried.
pub fn parse_hhmmss_to_ms(value: &str) -> RingTimerResult<u64> {
    if value.chars().count() > HHMMSS_DIGITS {
        return Err(RingTimerError::validation(format!(
            "time '{value}' has more than {HHMMSS_DIGITS} digits"
        )));
    }
    if !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(RingTimerError::validation(format!(
            "time '{value}' must contain only digits"
        )));
    }

    let padded = pad6(value);
    let hours: u64 = padded[0..2].parse().unwrap_or(0);
    let minutes: u64 = padded[2..4].parse().unwrap_or(0);
    let seconds: u64 = padded[4..6].parse().unwrap_or(0);

    Ok((hours * 3600 + minutes.min(MAX_MINUTES) * 60 + seconds.min(MAX_SECONDS)) * 1000)
}

/// Format milliseconds as bare `HHMMSS`. Negative input is treated as zero.
pub fn format_ms_to_hhmmss(ms: i64) -> String {
    let total_seconds = ms.max(0) / 1000;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{hours:02}{minutes:02}{seconds:02}")
}

/// Show raw digit entry as `HH:MM:SS` without any capping.
pub fn format_raw_input(value: &str) -> String {
    let [h, m, s] = groups(&pad6(value));
    format!("{h}:{m}:{s}")
}

/// Remaining time of a running timer as `HH:MM:SS`, clamped at zero. Negative `elapsed_ms`
/// counts as nothing elapsed.
pub fn format_timer_running(value: &str, elapsed_ms: i64) -> RingTimerResult<String> {
    let total = i64::try_from(parse_hhmmss_to_ms(value)?)
        .map_err(|_| RingTimerError::validation(format!("time '{value}' is out of range")))?;
    let remaining = total.saturating_sub(elapsed_ms.max(0));
    Ok(format_raw_input(&format_ms_to_hhmmss(remaining)))
}

/// Like [`format_timer_running`], but drops leading zero groups: `SS`, `MM:SS` or `HH:MM:SS`.
pub fn format_timer_compact(value: &str, elapsed_ms: i64) -> RingTimerResult<String> {
    let full = format_timer_running(value, elapsed_ms)?;
    let [h, m, s] = groups(&full.replace(':', ""));
    Ok(match (h.as_str(), m.as_str()) {
        ("00", "00") => s,
        ("00", _) => format!("{m}:{s}"),
        _ => full,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/timer/timefmt.rs"]
mod tests;
