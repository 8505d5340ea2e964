use super::*;

fn typed(digits: &str) -> TimeInput {
    let mut input = TimeInput::new();
    for c in digits.chars() {
        input.push_digit(c);
    }
    input
}

#[test]
fn push_keeps_at_most_six_digits() {
    let input = typed("12345678");
    assert_eq!(input.as_str(), "345678");
}

#[test]
fn push_ignores_non_digits() {
    let mut input = typed("12");
    assert!(!input.push_digit('a'));
    assert!(!input.push_digit(':'));
    assert_eq!(input.as_str(), "12");
}

#[test]
fn backspace_drops_last_digit() {
    let mut input = typed("130");
    input.backspace();
    assert_eq!(input.as_str(), "13");
    input.backspace();
    input.backspace();
    input.backspace();
    assert!(input.is_empty());
}

#[test]
fn add_minutes_within_hour() {
    let mut input = typed("115");
    input.add_minutes(10);
    assert_eq!(input.as_str(), "001115");
    assert_eq!(input.raw_display(), "00:11:15");
}

#[test]
fn add_minutes_carries_one_hour_and_lands_on_zero() {
    let mut input = TimeInput::parse("015530").unwrap();
    input.add_minutes(15);
    assert_eq!(input.as_str(), "020030");

    let mut input = TimeInput::parse("004500").unwrap();
    input.add_minutes(15);
    assert_eq!(input.as_str(), "010000");
}

#[test]
fn add_minutes_wraps_hour_past_ninety_nine() {
    let mut input = TimeInput::parse("995900").unwrap();
    input.add_minutes(1);
    assert_eq!(input.as_str(), "010000");
}

#[test]
fn total_ms_caps_fields() {
    assert_eq!(typed("006500").total_ms(), 59 * 60 * 1000);
    assert_eq!(TimeInput::new().total_ms(), 0);
}

#[test]
fn serde_is_a_plain_validated_string() {
    let input = typed("130");
    assert_eq!(serde_json::to_string(&input).unwrap(), "\"130\"");
    let back: TimeInput = serde_json::from_str("\"000500\"").unwrap();
    assert_eq!(back.total_ms(), 300_000);
    assert!(serde_json::from_str::<TimeInput>("\"12ab\"").is_err());
}
