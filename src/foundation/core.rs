use crate::foundation::error::{RingTimerError, RingTimerResult};

pub use kurbo::{BezPath, Point, Vec2};

/// Pixel dimensions of a drawing surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in device pixels.
    pub width: u32,
    /// Height in device pixels.
    pub height: u32,
}

impl Canvas {
    /// Build a canvas, rejecting empty or oversized dimensions.
    pub fn new(width: u32, height: u32) -> RingTimerResult<Self> {
        if width == 0 || height == 0 {
            return Err(RingTimerError::validation("Canvas dimensions must be > 0"));
        }
        if width > u32::from(u16::MAX) || height > u32::from(u16::MAX) {
            return Err(RingTimerError::validation(format!(
                "Canvas dimensions must be <= {} (got {width}x{height})",
                u16::MAX
            )));
        }
        Ok(Self { width, height })
    }

    /// Square canvas of `size` px.
    pub fn square(size: u32) -> RingTimerResult<Self> {
        Self::new(size, size)
    }

    /// Geometric center.
    pub fn center(self) -> Point {
        Point::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }
}

/// Frame rate used by hosts that drive the scheduler on a fixed clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds), must be > 0.
    pub den: u32,
}

impl Fps {
    /// Build a frame rate, rejecting zero components.
    pub fn new(num: u32, den: u32) -> RingTimerResult<Self> {
        if den == 0 {
            return Err(RingTimerError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(RingTimerError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Length of one frame in milliseconds.
    pub fn frame_duration_ms(self) -> f64 {
        1000.0 * f64::from(self.den) / f64::from(self.num)
    }

    /// Host timestamp (ms) of frame `n`, counting from `origin_ms`.
    pub fn timestamp_ms(self, origin_ms: f64, n: u64) -> f64 {
        origin_ms + (n as f64) * self.frame_duration_ms()
    }
}

/// Straight (non-premultiplied) RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);

    /// Build a color from its four channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with alpha scaled by `opacity` (clamped to `[0, 1]`).
    pub fn with_opacity(self, opacity: f64) -> Self {
        let o = opacity.clamp(0.0, 1.0);
        Self {
            a: (f64::from(self.a) * o).round() as u8,
            ..self
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
