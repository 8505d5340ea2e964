use super::*;
use crate::render::painter::RecordingPainter;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn run_forward(circle: &mut Circle, delta: f64, duration: f64) {
    let mut elapsed = 0.0;
    while elapsed < duration {
        circle.update(delta, duration);
        elapsed += delta;
    }
}

#[test]
fn dots_start_at_top_and_go_clockwise() {
    let circle = Circle::new(4, 10.0, Point::new(50.0, 50.0));
    let dots = circle.dots();

    assert_eq!(circle.dot_count(), 4);
    assert!(close(dots[0].origin().x, 50.0));
    assert!(close(dots[0].origin().y, 40.0));
    assert!(close(dots[1].origin().x, 60.0));
    assert!(close(dots[1].origin().y, 50.0));
    assert!(close(dots[2].origin().y, 60.0));
    assert!(dots.iter().enumerate().all(|(i, d)| d.index() == i));
}

#[test]
fn first_update_starts_popping_dot_zero_only() {
    let mut circle = Circle::new(10, 100.0, Point::new(200.0, 200.0));
    circle.update(0.5, 10.0);

    assert!(close(circle.progress(), 0.05));
    assert!(circle.dots()[0].progress() > 0.0);
    assert!(circle.dots()[1..].iter().all(|d| d.progress() == 0.0));
}

#[test]
fn pop_moves_radially_outward() {
    let mut circle = Circle::new(4, 10.0, Point::new(0.0, 0.0));
    circle.update(1.0, 100.0);

    let top = &circle.dots()[0];
    assert_eq!(top.progress(), 1.0);
    assert!(close(top.position().x, 0.0));
    assert!(close(top.position().y, -50.0));
}

#[test]
fn full_pass_reaches_exactly_one_and_hides_every_dot() {
    for (delta, duration) in [(0.015625, 2.0), (0.25, 4.0), (1.0, 2.5), (0.5, 0.5)] {
        let mut circle = Circle::new(42, 150.0, Point::new(200.0, 200.0));
        run_forward(&mut circle, delta, duration);
        assert_eq!(circle.progress(), 1.0, "delta={delta} duration={duration}");

        // Let the trailing one-second pop-outs finish.
        let mut extra = 0.0;
        while extra < 1.0 + delta {
            circle.update(delta, duration);
            extra += delta;
        }
        assert_eq!(circle.progress(), 1.0);
        assert!(circle.is_complete());
        assert!(circle.dots().iter().all(|d| !d.is_visible()));
    }
}

#[test]
fn reset_after_full_pass_restores_every_dot() {
    let mut circle = Circle::new(30, 120.0, Point::new(150.0, 150.0));
    run_forward(&mut circle, 0.03125, 3.0);
    for _ in 0..64 {
        circle.update(0.03125, 3.0);
    }
    assert!(circle.is_complete());

    let mut last: Vec<f64> = circle.dots().iter().map(|d| d.progress()).collect();
    let mut steps = 0;
    while !circle.is_reset() {
        circle.update_reset(0.03125, 2.0);
        for (dot, prev) in circle.dots().iter().zip(last.iter_mut()) {
            assert!(dot.progress() <= *prev);
            *prev = dot.progress();
        }
        steps += 1;
        assert!(steps < 1_000, "reset never settled");
    }

    assert_eq!(circle.progress(), 0.0);
    assert!(circle.dots().iter().all(|d| d.is_visible()));
    assert!(circle.dots().iter().all(|d| d.progress() == 0.0));
}

#[test]
fn reset_retracts_trailing_dots_first() {
    let mut circle = Circle::new(10, 100.0, Point::ZERO);
    for _ in 0..60 {
        circle.update(0.25, 10.0);
    }
    assert!(circle.is_complete());

    circle.update_reset(1.0, 2.0);
    // ring progress 0.5 -> only dots 5..10 retract this frame
    assert!(circle.dots()[..5].iter().all(|d| d.progress() == 1.0));
    assert!(circle.dots()[5..].iter().all(|d| d.progress() == 0.0));
}

#[test]
fn custom_pop_out_is_applied() {
    let mut circle = Circle::new(1, 10.0, Point::ZERO).with_pop_out(PopOut {
        distance: 5.0,
        duration: 0.5,
    });
    circle.update(0.5, 100.0);
    assert_eq!(circle.dots()[0].progress(), 1.0);
    assert!(close(circle.dots()[0].position().y, -15.0));
}

#[test]
fn draw_paints_two_circles_per_dot() {
    let circle = Circle::new(12, 50.0, Point::ZERO).with_dot_size(3.0);
    let mut painter = RecordingPainter::default();
    circle.draw(&mut painter, &DotStyle::default());
    assert_eq!(painter.ops.len(), 24);
}

#[test]
fn for_canvas_sizes_from_edge() {
    let circle = Circle::for_canvas(500.0);
    assert_eq!(circle.dot_count(), 35);
    assert!(close(circle.radius(), 200.0));
    assert_eq!(circle.center(), Point::new(250.0, 250.0));
}

#[test]
fn layout_caps_canvas_by_device_pixel_ratio() {
    let layout = RingLayout::default();
    assert_eq!(layout.canvas_size(400.0, 1.0), 400.0);
    assert_eq!(layout.canvas_size(1920.0, 1.0), 750.0);
    assert_eq!(layout.canvas_size(1920.0, 2.0), 1500.0);
}
