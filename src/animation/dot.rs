use crate::{
    animation::ease::{ease_in_cubic, lerp},
    foundation::core::{Point, Rgba8, Vec2},
    render::painter::Painter,
};

/// Parameters for one step of a dot's outward pop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DotMotion {
    /// Direction of travel (radians, screen coordinates).
    pub angle: f64,
    /// Displacement at full progress, in px.
    pub distance: f64,
    /// Length of the pop in seconds.
    pub duration: f64,
}

/// Parameters for one step of a dot's retraction back to its origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DotRetract {
    /// Direction of the remaining offset (radians).
    pub angle: f64,
    /// Length of the retraction in seconds.
    pub duration: f64,
}

/// How a dot is painted.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DotStyle {
    /// Base color; its alpha is scaled by the dot's opacity.
    pub color: Rgba8,
    /// Opacity of the static glow drawn at the origin.
    pub glow_opacity: f64,
    /// Glow radius as a multiple of the dot size.
    pub glow_scale: f64,
}

impl Default for DotStyle {
    fn default() -> Self {
        Self {
            color: Rgba8::WHITE,
            glow_opacity: 0.2,
            glow_scale: 3.0,
        }
    }
}

/// A single point of the countdown ring.
///
/// `position` is always `origin` pushed radially by an amount derived from `progress`.
#[derive(Clone, Debug, PartialEq)]
pub struct Dot {
    position: Point,
    origin: Point,
    opacity: f64,
    progress: f64,
    visible: bool,
    size: f64,
    index: usize,
}

impl Dot {
    /// Default dot radius in px.
    pub const DEFAULT_SIZE: f64 = 2.0;

    /// A dot at rest on `origin`.
    pub fn new(origin: Point, index: usize) -> Self {
        Self {
            position: origin,
            origin,
            opacity: 1.0,
            progress: 0.0,
            visible: true,
            size: Self::DEFAULT_SIZE,
            index,
        }
    }

    /// Override the dot radius.
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    /// Current animated position.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Resting position on the ring.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Current opacity in `[0, 1]`.
    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    /// Pop progress in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// `false` once the dot has fully popped out.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Dot radius.
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Position on the ring, 0 at the top.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Advance the outward pop by `delta` seconds.
    pub fn update(&mut self, delta: f64, motion: DotMotion) {
        if self.progress >= 1.0 {
            self.visible = false;
            return;
        }

        self.progress = (self.progress + step(delta, motion.duration)).min(1.0);
        let eased = ease_in_cubic(self.progress);

        self.position = self.origin + Vec2::from_angle(motion.angle) * (motion.distance * eased);
        self.opacity = 1.0 - eased;
        if self.progress >= 1.0 {
            self.visible = false;
        }
    }

    /// Pull the dot back toward its origin by `delta` seconds.
    ///
    /// The displacement is rescaled from the current offset, not the original pop distance, so
    /// a dot interrupted mid-pop retracts from wherever it is.
    pub fn update_reset(&mut self, delta: f64, retract: DotRetract) {
        if self.progress <= 0.0 {
            self.visible = true;
            return;
        }

        self.progress = (self.progress - step(delta, retract.duration)).max(0.0);
        let eased = ease_in_cubic(self.progress);

        let distance = (self.position - self.origin).hypot();
        self.position = self.origin + Vec2::from_angle(retract.angle) * (distance * eased);
        self.opacity = lerp(0.5, 1.0, 1.0 - eased);
        if self.progress <= 0.0 {
            self.visible = true;
        }
    }

    /// Paint the glow at the origin, then the dot at its animated position.
    pub fn draw(&self, painter: &mut dyn Painter, style: &DotStyle) {
        painter.fill_circle(
            self.origin,
            self.size * style.glow_scale,
            style.color.with_opacity(style.glow_opacity),
        );
        painter.fill_circle(
            self.position,
            self.size,
            style.color.with_opacity(self.opacity),
        );
    }
}

/// Progress gained over `delta` seconds; zero-length animations jump straight to their end.
pub(crate) fn step(delta: f64, duration: f64) -> f64 {
    if duration <= 0.0 {
        return f64::INFINITY;
    }
    delta / duration
}

#[cfg(test)]
#[path = "../../tests/unit/animation/dot.rs"]
mod tests;
