//! Drawing: the [`Painter`](painter::Painter) seam and the vello_cpu-backed [`Surface`](surface::Surface).

pub(crate) mod composite;
pub(crate) mod painter;
pub(crate) mod surface;
