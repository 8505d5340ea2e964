use std::f64::consts::{FRAC_PI_2, TAU};

use crate::{
    animation::dot::{Dot, DotMotion, DotRetract, DotStyle, step},
    foundation::core::{Point, Vec2},
    render::painter::Painter,
};

/// Per-dot pop-out animation layered on top of the ring schedule.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PopOut {
    /// Outward travel in px.
    pub distance: f64,
    /// Pop (and retract) length in seconds, independent of the ring duration.
    pub duration: f64,
}

impl Default for PopOut {
    fn default() -> Self {
        Self {
            distance: 40.0,
            duration: 1.0,
        }
    }
}

/// How a ring is sized from the canvas it is drawn on.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RingLayout {
    /// Ring radius as a fraction of the canvas size.
    pub radius_ratio: f64,
    /// Dots per px of canvas size.
    pub dot_density: f64,
    /// Largest canvas edge in logical px; scaled by the device-pixel ratio.
    pub max_logical_size: f64,
}

impl Default for RingLayout {
    fn default() -> Self {
        Self {
            radius_ratio: 0.4,
            dot_density: 0.07,
            max_logical_size: 750.0,
        }
    }
}

impl RingLayout {
    /// Square canvas edge in device px for a viewport `available` logical px wide.
    pub fn canvas_size(&self, available: f64, dpr: f64) -> f64 {
        (available * dpr).min(self.max_logical_size * dpr).floor()
    }

    /// Ring centered on a `size`-px square canvas.
    pub fn circle(&self, size: f64) -> Circle {
        let dot_count = (self.dot_density * size).floor().max(0.0) as usize;
        Circle::new(
            dot_count,
            self.radius_ratio * size,
            Point::new(size / 2.0, size / 2.0),
        )
    }
}

/// A ring of [`Dot`]s that empties as a countdown progresses.
///
/// `progress` is the fraction of the countdown elapsed. Dot `i` starts popping out once
/// `floor(progress * dot_count) >= i`, so dots leave one by one starting at the top.
#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
    dots: Vec<Dot>,
    radius: f64,
    center: Point,
    progress: f64,
    pop: PopOut,
}

impl Circle {
    /// Lay out `dot_count` dots evenly on a ring, dot 0 at twelve o'clock.
    pub fn new(dot_count: usize, radius: f64, center: Point) -> Self {
        let dots = (0..dot_count)
            .map(|i| {
                let angle = (i as f64 / dot_count as f64) * TAU - FRAC_PI_2;
                Dot::new(center + Vec2::from_angle(angle) * radius, i)
            })
            .collect();
        Self {
            dots,
            radius,
            center,
            progress: 0.0,
            pop: PopOut::default(),
        }
    }

    /// Default-sized ring for a `size`-px square canvas; see [`RingLayout`].
    pub fn for_canvas(size: f64) -> Self {
        RingLayout::default().circle(size)
    }

    /// Override the per-dot pop-out animation.
    pub fn with_pop_out(mut self, pop: PopOut) -> Self {
        self.pop = pop;
        self
    }

    /// Override every dot's radius.
    pub fn with_dot_size(mut self, size: f64) -> Self {
        self.dots = self.dots.into_iter().map(|d| d.with_size(size)).collect();
        self
    }

    /// Ring dots in index order.
    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    /// Number of dots.
    pub fn dot_count(&self) -> usize {
        self.dots.len()
    }

    /// Ring radius.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Ring center.
    pub fn center(&self) -> Point {
        self.center
    }

    /// Ring progress in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Advance the countdown by `delta` seconds of a `duration`-second timer.
    pub fn update(&mut self, delta: f64, duration: f64) {
        self.progress = (self.progress + step(delta, duration)).min(1.0);
        let to_hide = self.boundary_index();

        for dot in &mut self.dots {
            if dot.index() <= to_hide {
                let angle = (dot.origin() - self.center).atan2();
                dot.update(
                    delta,
                    DotMotion {
                        angle,
                        distance: self.pop.distance,
                        duration: self.pop.duration,
                    },
                );
            }
        }
    }

    /// Wind the countdown back by `delta` seconds, retracting over `duration` seconds overall.
    pub fn update_reset(&mut self, delta: f64, duration: f64) {
        self.progress = (self.progress - step(delta, duration)).max(0.0);
        let to_show = self.boundary_index();

        for dot in &mut self.dots {
            if dot.index() >= to_show {
                let angle = (dot.origin() - self.center).atan2();
                dot.update_reset(
                    delta,
                    DotRetract {
                        angle,
                        duration: self.pop.duration,
                    },
                );
            }
        }
    }

    /// Every dot has fully popped out.
    pub fn is_complete(&self) -> bool {
        self.dots.iter().all(|d| d.progress() >= 1.0)
    }

    /// Every dot is back at rest.
    pub fn is_reset(&self) -> bool {
        self.dots.iter().all(|d| d.progress() <= 0.0)
    }

    /// Paint all dots in index order.
    pub fn draw(&self, painter: &mut dyn Painter, style: &DotStyle) {
        for dot in &self.dots {
            dot.draw(painter, style);
        }
    }

    fn boundary_index(&self) -> usize {
        (self.progress * self.dots.len() as f64).floor() as usize
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/circle.rs"]
mod tests;
