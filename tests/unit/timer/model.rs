use super::*;

fn record(time: &str) -> TimerRecord {
    TimerRecord::new("t").with_time(TimeInput::parse(time).unwrap())
}

#[test]
fn elapsed_accumulates_across_runs() {
    let mut t = record("000100");
    assert!(t.start(1_000));
    assert_eq!(t.elapsed_ms(4_000), 3_000);

    assert!(t.stop(5_000));
    assert!(t.is_paused && !t.is_running);
    assert_eq!(t.elapsed_ms(99_000), 4_000);

    assert!(t.start(10_000));
    assert_eq!(t.elapsed_ms(12_500), 6_500);
    assert_eq!(t.remaining_ms(12_500), 53_500);
    assert_eq!(t.display(12_500).unwrap(), "00:00:53");
}

#[test]
fn start_refused_when_nothing_left_or_running() {
    let mut empty = record("");
    assert!(!empty.start(0));

    let mut t = record("000005");
    assert!(t.start(0));
    assert!(!t.start(10));
    t.stop(6_000);
    assert!(!t.start(6_000), "overrun timer cannot restart");
}

#[test]
fn stop_without_start_is_noop() {
    let mut t = record("000010");
    assert!(!t.stop(100));
    assert_eq!(t.accumulated_time, 0);
    assert!(!t.is_paused);
}

#[test]
fn reset_discards_progress_until_ring_finishes() {
    let mut t = record("000010");
    t.start(0);
    t.stop(4_000);
    t.reset();
    assert_eq!(t.elapsed_ms(10_000), 0);
    assert!(t.is_resetting && !t.is_running && !t.is_paused);

    t.finish_reset();
    assert!(!t.is_resetting);
}

#[test]
fn json_uses_camel_case_fields() {
    let mut t = record("013930");
    t.start(500);
    let json = serde_json::to_value(&t).unwrap();
    assert_eq!(json["time"], "013930");
    assert_eq!(json["isRunning"], true);
    assert_eq!(json["isPaused"], false);
    assert_eq!(json["accumulatedTime"], 0);
    assert_eq!(json["startTime"], 500);
    assert_eq!(json["isResetting"], false);
}

#[test]
fn board_starts_with_one_timer_and_keeps_it() {
    let mut board = TimerBoard::new();
    assert_eq!(board.len(), 1);
    let only = board.iter().next().unwrap().id.clone();
    assert!(board.remove(&only).is_none());

    let second = board.add().id.clone();
    assert_ne!(only, second);
    assert_eq!(board.remove(&only).unwrap().id, only);
    assert_eq!(board.len(), 1);
    assert!(board.remove("missing").is_none());
}

#[test]
fn events_route_to_matching_timer() {
    let mut board = TimerBoard::new();
    let id = board.iter().next().unwrap().id.clone();
    {
        let t = board.get_mut(&id).unwrap();
        t.time = TimeInput::parse("000002").unwrap();
        t.start(0);
    }

    board.apply_event(&AnimationEvent::Completed(id.clone()), 2_000);
    let t = board.get(&id).unwrap();
    assert!(!t.is_running && !t.is_paused);
    assert_eq!(t.accumulated_time, 2_000);

    board.get_mut(&id).unwrap().reset();
    board.apply_event(&AnimationEvent::ResetFinished(id.clone()), 3_000);
    assert!(!board.get(&id).unwrap().is_resetting);

    board.apply_event(&AnimationEvent::Completed("ghost".into()), 0);
}

#[test]
fn reload_forces_idle_and_keeps_banked_time() {
    let mut board = TimerBoard::new();
    let a = board.iter().next().unwrap().id.clone();
    let b = board.add().id.clone();
    {
        let t = board.get_mut(&a).unwrap();
        t.time = TimeInput::parse("000100").unwrap();
        t.start(0);
        t.stop(20_000);
        t.start(30_000);
    }
    board.get_mut(&b).unwrap().reset();

    let loaded = TimerBoard::from_json(&board.to_json().unwrap()).unwrap();
    assert_eq!(loaded.len(), 2);
    for t in loaded.iter() {
        assert!(!t.is_running && !t.is_paused && !t.is_resetting);
        assert!(t.start_time.is_none());
    }
    assert_eq!(loaded.get(&a).unwrap().accumulated_time, 20_000);
}

#[test]
fn reload_never_reuses_ids() {
    let mut board = TimerBoard::from_json(
        r#"[{"time":"","id":"timer-1","isRunning":false,"isPaused":false,
            "accumulatedTime":0,"startTime":null,"isResetting":false}]"#,
    )
    .unwrap();
    let fresh = board.add().id.clone();
    assert_eq!(fresh, "timer-2");
}

#[test]
fn reload_rejects_bad_json() {
    assert!(matches!(
        TimerBoard::from_json("{"),
        Err(crate::foundation::error::RingTimerError::Serde(_))
    ));
    assert!(TimerBoard::from_json(r#"[{"time":"abc","id":"x"}]"#).is_err());
    assert_eq!(TimerBoard::from_json("[]").unwrap().len(), 1);
}

#[test]
fn huge_banked_time_saturates() {
    let board = TimerBoard::from_json(
        r#"[{"time":"000030","id":"timer-1","isRunning":false,"isPaused":false,
            "accumulatedTime":9223372036854775808,"startTime":null,"isResetting":false}]"#,
    )
    .unwrap();
    let t = board.get("timer-1").unwrap();
    assert_eq!(t.remaining_ms(0), 30_000 - i64::MAX);
    assert_eq!(t.display(0).unwrap(), "00:00:00");

    let mut t = t.clone();
    assert!(!t.start(0));
    t.accumulated_time = u64::MAX;
    t.start_time = Some(0);
    assert_eq!(t.elapsed_ms(1_000), u64::MAX);
    assert!(t.stop(1_000));
    assert_eq!(t.accumulated_time, u64::MAX);
    assert_eq!(t.remaining_ms(1_000), 30_000 - i64::MAX);
}
