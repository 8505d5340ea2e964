use std::path::Path;

use crate::{
    animation::{blob::BlobStyle, circle::PopOut, circle::RingLayout, dot::DotStyle},
    foundation::core::{Canvas, Fps, Rgba8},
    foundation::error::{RingTimerError, RingTimerResult},
};

/// Environment override for the default frame rate.
pub const FPS_ENV: &str = "RINGTIMER_FPS";

const DEFAULT_FPS: u32 = 60;

/// Frame rate from [`FPS_ENV`], falling back to 60.
pub fn default_fps() -> u32 {
    std::env::var(FPS_ENV)
        .ok()
        .and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|&n| n > 0)
        .unwrap_or(DEFAULT_FPS)
}

/// One background blob, anchored relative to the viewport.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BlobPlacement {
    /// Horizontal anchor as a fraction of viewport width.
    pub x: f64,
    /// Vertical anchor as a fraction of viewport height.
    pub y: f64,
    /// Base radius in px.
    pub radius: f64,
}

/// Everything that shapes the rendered scene.
///
/// Every field has a default, so a settings file only needs the keys it changes.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneSettings {
    /// Viewport in logical px.
    pub viewport: Canvas,
    /// Device-pixel ratio.
    pub dpr: f64,
    /// Frames per second for hosts on a fixed clock.
    pub fps: u32,
    /// Ring sizing.
    pub ring: RingLayout,
    /// Per-dot pop-out.
    pub pop_out: PopOut,
    /// Seconds the ring takes to retract after a reset.
    pub reset_duration: f64,
    /// Dot radius in px.
    pub dot_size: f64,
    /// Dot paint.
    pub dot_style: DotStyle,
    /// Blob paint.
    pub blob_style: BlobStyle,
    /// Background blobs, drawn in order.
    pub background: Vec<BlobPlacement>,
    /// Opaque backdrop for exported frames; alpha 0 keeps them transparent.
    pub clear_color: Rgba8,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            viewport: Canvas {
                width: 1280,
                height: 800,
            },
            dpr: 1.0,
            fps: default_fps(),
            ring: RingLayout::default(),
            pop_out: PopOut::default(),
            reset_duration: 2.0,
            dot_size: 2.0,
            dot_style: DotStyle::default(),
            blob_style: BlobStyle::default(),
            background: vec![
                BlobPlacement {
                    x: 1.0,
                    y: 0.0,
                    radius: 450.0,
                },
                BlobPlacement {
                    x: 0.0,
                    y: 1.0,
                    radius: 400.0,
                },
            ],
            clear_color: Rgba8::new(0, 0, 0, 0),
        }
    }
}

impl SceneSettings {
    /// Load and validate a settings file.
    pub fn from_json_path(path: &Path) -> RingTimerResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            RingTimerError::Other(
                anyhow::Error::new(e).context(format!("read settings '{}'", path.display())),
            )
        })?;
        Self::from_json_str(&text)
    }

    /// Parse and validate settings JSON.
    pub fn from_json_str(json: &str) -> RingTimerResult<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject values that would produce an empty or degenerate scene.
    pub fn validate(&self) -> RingTimerResult<()> {
        Canvas::new(self.viewport.width, self.viewport.height)?;
        positive("dpr", self.dpr)?;
        Fps::new(self.fps, 1)?;
        positive("ring.radius_ratio", self.ring.radius_ratio)?;
        positive("ring.dot_density", self.ring.dot_density)?;
        positive("ring.max_logical_size", self.ring.max_logical_size)?;
        positive("pop_out.duration", self.pop_out.duration)?;
        positive("reset_duration", self.reset_duration)?;
        positive("dot_size", self.dot_size)?;
        if !self.pop_out.distance.is_finite() || self.pop_out.distance < 0.0 {
            return Err(RingTimerError::validation(
                "pop_out.distance must be finite and >= 0",
            ));
        }
        for (i, b) in self.background.iter().enumerate() {
            positive(&format!("background[{i}].radius"), b.radius)?;
        }
        Ok(())
    }

    /// Frame rate as [`Fps`].
    pub fn frame_rate(&self) -> RingTimerResult<Fps> {
        Fps::new(self.fps, 1)
    }

    /// Edge of the square ring canvas in device px.
    pub fn ring_canvas(&self) -> RingTimerResult<Canvas> {
        let size = self
            .ring
            .canvas_size(f64::from(self.viewport.width), self.dpr);
        Canvas::square(size as u32)
    }

    /// Straight clear color as premultiplied bytes.
    pub fn clear_rgba(&self) -> [u8; 4] {
        let c = self.clear_color;
        let a = u16::from(c.a);
        let premul = |v: u8| ((u16::from(v) * a + 127) / 255) as u8;
        [premul(c.r), premul(c.g), premul(c.b), c.a]
    }
}

fn positive(name: &str, v: f64) -> RingTimerResult<()> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(RingTimerError::validation(format!(
            "{name} must be finite and > 0 (got {v})"
        )))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/settings.rs"]
mod tests;
