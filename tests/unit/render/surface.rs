use super::*;

use kurbo::Shape as _;

fn canvas(w: u32, h: u32) -> Canvas {
    Canvas::new(w, h).unwrap()
}

#[test]
fn empty_surface_renders_transparent() {
    let mut s = Surface::new(canvas(8, 4)).unwrap();
    let frame = s.frame();
    assert_eq!(frame.data.len(), 8 * 4 * 4);
    assert!(frame.data.iter().all(|&b| b == 0));
}

#[test]
fn clear_color_fills_background() {
    let mut s = Surface::new(canvas(2, 2))
        .unwrap()
        .with_clear_rgba([18, 20, 28, 255]);
    let frame = s.frame();
    assert_eq!(frame.pixel(1, 1), Some([18, 20, 28, 255]));
    assert_eq!(frame.pixel(2, 0), None);
}

#[test]
fn filled_circle_covers_its_center_only() {
    let mut s = Surface::new(canvas(32, 32)).unwrap();
    s.fill_circle(Point::new(16.0, 16.0), 6.0, Rgba8::WHITE);
    let frame = s.frame();

    assert_eq!(frame.pixel(16, 16), Some([255, 255, 255, 255]));
    assert_eq!(frame.pixel(0, 0), Some([0, 0, 0, 0]));
}

#[test]
fn clear_drops_queued_draws() {
    let mut s = Surface::new(canvas(16, 16)).unwrap();
    s.fill_circle(Point::new(8.0, 8.0), 4.0, Rgba8::WHITE);
    s.clear();
    let frame = s.frame();
    assert!(frame.data.iter().all(|&b| b == 0));
}

#[test]
fn transparent_draws_are_skipped() {
    let mut s = Surface::new(canvas(16, 16)).unwrap();
    s.fill_circle(Point::new(8.0, 8.0), 4.0, Rgba8::WHITE.with_opacity(0.0));
    s.fill_circle(Point::new(8.0, 8.0), 0.0, Rgba8::WHITE);
    assert!(s.frame().data.iter().all(|&b| b == 0));
}

#[test]
fn composite_rejects_size_mismatch() {
    let mut a = FrameRGBA::transparent(canvas(2, 2));
    let b = FrameRGBA::transparent(canvas(3, 2));
    assert!(a.composite_over(&b, 1.0).is_err());
}

#[test]
fn straight_rgba_unpremultiplies() {
    let frame = FrameRGBA {
        width: 1,
        height: 1,
        data: vec![51, 51, 51, 51],
    };
    assert_eq!(frame.to_straight_rgba(), vec![255, 255, 255, 51]);
}

#[test]
fn radial_fill_fades_from_center_to_rim() {
    let mut s = Surface::new(canvas(32, 32)).unwrap();
    let square = kurbo::Rect::new(0.0, 0.0, 32.0, 32.0).to_path(0.1);
    s.fill_radial(
        &square,
        Point::new(16.0, 16.0),
        16.0,
        &[(0.0, Rgba8::WHITE), (1.0, Rgba8::new(255, 255, 255, 0))],
    );
    let frame = s.frame();
    let center = frame.pixel(16, 16).unwrap()[3];
    let near_rim = frame.pixel(29, 16).unwrap()[3];
    assert!(center > 200, "{center}");
    assert!(near_rim < 64, "{near_rim}");
    assert_eq!(frame.pixel(0, 0).unwrap()[3], 0);
}

#[test]
fn fully_transparent_radial_fill_is_skipped() {
    let mut s = Surface::new(canvas(8, 8)).unwrap();
    let square = kurbo::Rect::new(0.0, 0.0, 8.0, 8.0).to_path(0.1);
    s.fill_radial(&square, Point::new(4.0, 4.0), 4.0, &[(0.0, Rgba8::new(0, 0, 0, 0))]);
    assert!(s.frame().data.iter().all(|&b| b == 0));
}
