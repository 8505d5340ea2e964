use std::path::Path;

use kurbo::Shape as _;

use crate::{
    foundation::core::{BezPath, Canvas, Point, Rgba8},
    foundation::error::{RingTimerError, RingTimerResult},
    render::composite::{over, over_in_place, unpremultiply},
    render::painter::Painter,
};

/// Flattening tolerance used when converting circles to paths.
const CIRCLE_TOLERANCE: f64 = 0.1;

/// A rendered surface as premultiplied RGBA8 bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Width in px.
    pub width: u32,
    /// Height in px.
    pub height: u32,
    /// Row-major premultiplied RGBA8.
    pub data: Vec<u8>,
}

impl FrameRGBA {
    /// Fully transparent frame.
    pub fn transparent(canvas: Canvas) -> Self {
        Self {
            width: canvas.width,
            height: canvas.height,
            data: vec![0; canvas.width as usize * canvas.height as usize * 4],
        }
    }

    /// Premultiplied pixel at `(x, y)`, if in bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    /// Composite `top` over this frame with the given opacity.
    pub fn composite_over(&mut self, top: &FrameRGBA, opacity: f32) -> RingTimerResult<()> {
        if self.width != top.width || self.height != top.height {
            return Err(RingTimerError::render(format!(
                "cannot composite {}x{} over {}x{}",
                top.width, top.height, self.width, self.height
            )));
        }
        over_in_place(&mut self.data, &top.data, opacity)
    }

    /// Straight-alpha copy of the pixel data.
    pub fn to_straight_rgba(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.data.len());
        for px in self.data.chunks_exact(4) {
            out.extend_from_slice(&unpremultiply([px[0], px[1], px[2], px[3]]));
        }
        out
    }

    /// Encode as PNG at `path`.
    pub fn write_png(&self, path: &Path) -> RingTimerResult<()> {
        image::save_buffer_with_format(
            path,
            &self.to_straight_rgba(),
            self.width,
            self.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .map_err(|e| RingTimerError::render(format!("write png '{}': {e}", path.display())))
    }
}

/// A retained drawing target backed by `vello_cpu`.
///
/// Draw calls queue up in the render context until [`Surface::clear`]; [`Surface::frame`]
/// rasterizes whatever is queued. This mirrors a 2D canvas that is cleared and fully redrawn
/// every frame.
pub struct Surface {
    canvas: Canvas,
    clear_rgba: [u8; 4],
    ctx: vello_cpu::RenderContext,
    pixmap: vello_cpu::Pixmap,
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("canvas", &self.canvas)
            .field("clear_rgba", &self.clear_rgba)
            .finish_non_exhaustive()
    }
}

impl Surface {
    /// Transparent surface of the given size.
    pub fn new(canvas: Canvas) -> RingTimerResult<Self> {
        let (w, h) = dims_u16(canvas)?;
        Ok(Self {
            canvas,
            clear_rgba: [0, 0, 0, 0],
            ctx: vello_cpu::RenderContext::new(w, h),
            pixmap: vello_cpu::Pixmap::new(w, h),
        })
    }

    /// Fill with a premultiplied color before drawing each frame.
    pub fn with_clear_rgba(mut self, rgba: [u8; 4]) -> Self {
        self.clear_rgba = rgba;
        self
    }

    /// Surface dimensions.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Drop every queued draw call.
    pub fn clear(&mut self) {
        self.ctx.reset();
    }

    /// Rasterize the queued draw calls.
    pub fn frame(&mut self) -> FrameRGBA {
        self.pixmap.data_as_u8_slice_mut().fill(0);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut self.pixmap);
        let drawn = self.pixmap.data_as_u8_slice();

        let data = if self.clear_rgba[3] == 0 {
            drawn.to_vec()
        } else {
            drawn
                .chunks_exact(4)
                .flat_map(|px| over(self.clear_rgba, [px[0], px[1], px[2], px[3]], 1.0))
                .collect()
        };
        FrameRGBA {
            width: self.canvas.width,
            height: self.canvas.height,
            data,
        }
    }
}

impl Painter for Surface {
    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba8) {
        if radius <= 0.0 || color.a == 0 {
            return;
        }
        let path = kurbo::Circle::new(center, radius).to_path(CIRCLE_TOLERANCE);
        self.fill_path(&path, color);
    }

    fn fill_path(&mut self, path: &BezPath, color: Rgba8) {
        if color.a == 0 {
            return;
        }
        self.ctx.set_paint(color_to_cpu(color));
        self.ctx.fill_path(&bezpath_to_cpu(path));
    }

    fn stroke_path(&mut self, path: &BezPath, width: f64, color: Rgba8) {
        if width <= 0.0 || color.a == 0 {
            return;
        }
        self.ctx.set_paint(color_to_cpu(color));
        self.ctx.set_stroke(vello_cpu::kurbo::Stroke::new(width));
        self.ctx.stroke_path(&bezpath_to_cpu(path));
    }

    fn fill_radial(
        &mut self,
        path: &BezPath,
        center: Point,
        radius: f64,
        stops: &[(f64, Rgba8)],
    ) {
        if radius <= 0.0 || stops.iter().all(|(_, c)| c.a == 0) {
            return;
        }
        let stops: Vec<_> = stops
            .iter()
            .map(|&(offset, c)| (offset.clamp(0.0, 1.0) as f32, color_to_cpu(c)))
            .collect();
        let gradient =
            vello_cpu::peniko::Gradient::new_radial(point_to_cpu(center), radius as f32)
                .with_stops(stops.as_slice());
        self.ctx.set_paint(gradient);
        self.ctx.fill_path(&bezpath_to_cpu(path));
    }
}

fn dims_u16(canvas: Canvas) -> RingTimerResult<(u16, u16)> {
    let w = u16::try_from(canvas.width)
        .map_err(|_| RingTimerError::render("surface width exceeds u16"))?;
    let h = u16::try_from(canvas.height)
        .map_err(|_| RingTimerError::render("surface height exceeds u16"))?;
    if w == 0 || h == 0 {
        return Err(RingTimerError::render("surface dimensions must be > 0"));
    }
    Ok((w, h))
}

fn color_to_cpu(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
