use super::*;
use crate::foundation::core::Fps;
use crate::scheduler::provider::{AnimationEvent, NoopControl, Scheduler};

fn ring(duration: f64) -> RingView {
    RingView::with_canvas(
        "t1",
        duration,
        Canvas::square(100).unwrap(),
        &SceneSettings::default(),
    )
    .unwrap()
}

fn run(s: &mut Scheduler, from_frame: u64, frames: u64) -> Vec<AnimationEvent> {
    let fps = Fps::new(60, 1).unwrap();
    (from_frame..from_frame + frames)
        .flat_map(|n| s.tick(fps.timestamp_ms(0.0, n)))
        .collect()
}

#[test]
fn mount_paints_the_resting_ring() {
    let view = ring(2.0);
    let mut s = Scheduler::new();
    view.mount(&mut s);

    assert_eq!(view.with_circle(Circle::dot_count), 7);
    let top = view.frame().pixel(50, 10).unwrap();
    assert!(top[3] > 200, "dot 0 is painted at the top: {top:?}");
    assert!(!s.is_loop_active());
}

#[test]
fn noop_control_never_paints() {
    let view = ring(2.0);
    view.mount(&mut NoopControl);
    assert!(view.frame().data.iter().all(|&b| b == 0));
}

#[test]
fn countdown_completes_and_leaves_only_glows() {
    let view = ring(2.0);
    let mut s = Scheduler::new();
    view.mount(&mut s);
    s.start(view.id());

    let events = run(&mut s, 0, 240);
    assert_eq!(events, vec![AnimationEvent::Completed("t1".into())]);
    assert!(!s.is_loop_active());
    assert!(view.with_circle(|c| c.is_complete() && c.progress() == 1.0));

    let top = view.frame().pixel(50, 10).unwrap();
    assert!(top[3] > 0 && top[3] < 100, "only the glow remains: {top:?}");
}

#[test]
fn reset_retracts_every_dot() {
    let view = ring(2.0);
    let mut s = Scheduler::new();
    view.mount(&mut s);
    s.start(view.id());
    assert!(run(&mut s, 0, 90).is_empty());
    s.pause(view.id());
    assert!(view.with_circle(|c| c.progress() > 0.5));

    s.reset(view.id());
    let events = run(&mut s, 1000, 400);
    assert_eq!(events, vec![AnimationEvent::ResetFinished("t1".into())]);
    assert!(view.with_circle(|c| c.is_reset() && c.progress() == 0.0));
    assert!(view.with_circle(|c| c.dots().iter().all(|d| d.is_visible())));
}

#[test]
fn unmount_keeps_last_frame() {
    let view = ring(2.0);
    let mut s = Scheduler::new();
    view.mount(&mut s);
    let before = view.frame();
    view.unmount(&mut s);
    assert!(s.is_empty());
    assert_eq!(view.frame(), before);
}
