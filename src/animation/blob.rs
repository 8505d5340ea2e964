use std::f64::consts::{PI, TAU};

use kurbo::Shape as _;

use crate::{
    foundation::core::{BezPath, Point, Rgba8, Vec2},
    render::painter::Painter,
};

const POINT_COUNT: usize = 24;
const CYCLE_SECS: f64 = 20.0;
const WAVE_INTENSITY: f64 = 45.0;
const WAVE_FREQUENCY: f64 = 0.4;
const SECONDARY_WAVE_INTENSITY: f64 = 0.7;
const BODY_STOPS: [f64; 3] = [0.0, 0.6, 1.0];
const BODY_REACH: f64 = 1.2;
const HIGHLIGHT_STOPS: [f64; 3] = [0.0, 0.5, 1.0];

/// A slowly wobbling closed outline used by the decorative background.
///
/// The wobble is periodic: `progress` swings between 0 and 1 once every 40 seconds.
#[derive(Clone, Debug, PartialEq)]
pub struct Blob {
    points: Vec<Point>,
    center: Point,
    radius: f64,
    noise_offset: f64,
    total_time: f64,
    progress: f64,
}

impl Blob {
    /// Default phase offset between blobs.
    pub const DEFAULT_NOISE_OFFSET: f64 = 1000.0;

    /// A blob at rest: a plain circle of `radius` around `center`.
    pub fn new(center: Point, radius: f64, noise_offset: f64) -> Self {
        let points = (0..POINT_COUNT)
            .map(|i| center + Vec2::from_angle(point_angle(i)) * radius)
            .collect();
        Self {
            points,
            center,
            radius,
            noise_offset,
            total_time: 0.0,
            progress: 0.0,
        }
    }

    /// Outline control points.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Oscillation phase in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Blob center.
    pub fn center(&self) -> Point {
        self.center
    }

    /// Advance the wobble by `delta` seconds.
    pub fn update(&mut self, delta: f64) {
        self.total_time += delta / CYCLE_SECS;
        self.progress = ((self.total_time * PI).sin() + 1.0) / 2.0;

        let wave_phase = self.progress * TAU * WAVE_FREQUENCY;
        let secondary_phase = wave_phase * 1.5;
        let secondary = WAVE_INTENSITY * SECONDARY_WAVE_INTENSITY;

        for (i, point) in self.points.iter_mut().enumerate() {
            let fi = i as f64;
            let primary = wave_phase + self.noise_offset + fi * 0.5;
            let trailing = secondary_phase - fi * 0.2;

            let wave_x = primary.sin() * WAVE_INTENSITY + trailing.cos() * secondary;
            let wave_y = primary.cos() * WAVE_INTENSITY + trailing.sin() * secondary;

            let angle = point_angle(i);
            *point = Point::new(
                self.center.x + angle.cos() * (self.radius + wave_x),
                self.center.y + angle.sin() * (self.radius + wave_y),
            );
        }
    }

    /// Smooth closed outline through the midpoints of consecutive control points.
    pub fn outline(&self) -> BezPath {
        let mut path = BezPath::new();
        let n = self.points.len();
        if n == 0 {
            return path;
        }

        path.move_to(self.points[0]);
        for i in 0..=n {
            let p = self.points[i % n];
            let next = self.points[(i + 1) % n];
            path.quad_to(p, p.midpoint(next));
        }
        path.close_path();
        path
    }

    /// Paint the translucent body, its outline and a soft highlight.
    pub fn draw(&self, painter: &mut dyn Painter, style: &BlobStyle) {
        let outline = self.outline();
        painter.fill_radial(
            &outline,
            self.center,
            self.radius * BODY_REACH,
            &ramp(style.color, BODY_STOPS, style.fill_opacity),
        );
        painter.stroke_path(
            &outline,
            style.stroke_width,
            style.color.with_opacity(style.stroke_opacity),
        );

        let highlight = self.center + Vec2::from_angle(PI * 0.7) * (self.radius * 0.8);
        let highlight_radius = self.radius * 0.5;
        painter.fill_radial(
            &kurbo::Circle::new(highlight, highlight_radius).to_path(0.1),
            highlight,
            highlight_radius,
            &ramp(style.color, HIGHLIGHT_STOPS, style.highlight_opacity),
        );
    }
}

/// How a blob is painted.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BlobStyle {
    /// Base color for fill, stroke and highlight.
    pub color: Rgba8,
    /// Body opacity at the center, 60% out and the rim of a gradient reaching past the
    /// outline.
    pub fill_opacity: [f64; 3],
    /// Outline opacity.
    pub stroke_opacity: f64,
    /// Outline width in px.
    pub stroke_width: f64,
    /// Highlight opacity at its center, halfway and its edge.
    pub highlight_opacity: [f64; 3],
}

impl Default for BlobStyle {
    fn default() -> Self {
        Self {
            color: Rgba8::WHITE,
            fill_opacity: [0.05, 0.1, 0.15],
            stroke_opacity: 0.8,
            stroke_width: 1.0,
            highlight_opacity: [0.2, 0.1, 0.0],
        }
    }
}

fn ramp(color: Rgba8, offsets: [f64; 3], opacity: [f64; 3]) -> [(f64, Rgba8); 3] {
    std::array::from_fn(|i| (offsets[i], color.with_opacity(opacity[i])))
}

fn point_angle(i: usize) -> f64 {
    (i as f64 / POINT_COUNT as f64) * TAU
}

#[cfg(test)]
#[path = "../../tests/unit/animation/blob.rs"]
mod tests;
