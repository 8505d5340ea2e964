use crate::foundation::core::{BezPath, Point, Rgba8};

/// Minimal 2D drawing surface the animated entities paint onto.
///
/// Entities only describe shapes; the implementor owns rasterization and clearing.
pub trait Painter {
    /// Fill a circle.
    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba8);

    /// Fill an arbitrary closed path (non-zero winding).
    fn fill_path(&mut self, path: &BezPath, color: Rgba8);

    /// Stroke a path with a solid line of `width` px.
    fn stroke_path(&mut self, path: &BezPath, width: f64, color: Rgba8);

    /// Fill a closed path with a radial gradient around `center`. Stop offsets run from `0`
    /// at the center to `1` at `radius`; the last color extends past it.
    fn fill_radial(
        &mut self,
        path: &BezPath,
        center: Point,
        radius: f64,
        stops: &[(f64, Rgba8)],
    );
}

/// One recorded draw call.
#[derive(Clone, Debug, PartialEq)]
pub enum PaintOp {
    /// See [`Painter::fill_circle`].
    Circle {
        /// Circle center.
        center: Point,
        /// Circle radius.
        radius: f64,
        /// Fill color.
        color: Rgba8,
    },
    /// See [`Painter::fill_path`].
    FillPath {
        /// Number of path elements.
        elements: usize,
        /// Fill color.
        color: Rgba8,
    },
    /// See [`Painter::stroke_path`].
    StrokePath {
        /// Number of path elements.
        elements: usize,
        /// Line width.
        width: f64,
        /// Stroke color.
        color: Rgba8,
    },
    /// See [`Painter::fill_radial`].
    RadialPath {
        /// Number of path elements.
        elements: usize,
        /// Gradient center.
        center: Point,
        /// Gradient radius.
        radius: f64,
        /// Offset/color pairs.
        stops: Vec<(f64, Rgba8)>,
    },
}

/// Painter that records draw calls instead of rasterizing them.
///
/// Used by headless hosts that only need to know what would be drawn.
#[derive(Clone, Debug, Default)]
pub struct RecordingPainter {
    /// Calls in issue order.
    pub ops: Vec<PaintOp>,
}

impl RecordingPainter {
    /// Forget all recorded calls.
    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl Painter for RecordingPainter {
    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba8) {
        self.ops.push(PaintOp::Circle {
            center,
            radius,
            color,
        });
    }

    fn fill_path(&mut self, path: &BezPath, color: Rgba8) {
        self.ops.push(PaintOp::FillPath {
            elements: path.elements().len(),
            color,
        });
    }

    fn stroke_path(&mut self, path: &BezPath, width: f64, color: Rgba8) {
        self.ops.push(PaintOp::StrokePath {
            elements: path.elements().len(),
            width,
            color,
        });
    }

    fn fill_radial(
        &mut self,
        path: &BezPath,
        center: Point,
        radius: f64,
        stops: &[(f64, Rgba8)],
    ) {
        self.ops.push(PaintOp::RadialPath {
            elements: path.elements().len(),
            center,
            radius,
            stops: stops.to_vec(),
        });
    }
}
