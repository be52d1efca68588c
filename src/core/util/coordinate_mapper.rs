use crate::core::data::complex::Complex;
use crate::core::data::view_state::ViewState;
use crate::core::data::window_size::WindowSize;

const VISIBLE_REAL_SPAN: f64 = 3.5;
const VISIBLE_IMAG_SPAN: f64 = 2.0;

/// Plane units per window pixel at zoom 1.
///
/// The larger of the two per-axis ratios is used for both axes, so the plane
/// is never stretched and at least a 3.5 × 2 region is visible.
#[must_use]
pub fn plane_unit(window: WindowSize) -> f64 {
    let per_width = VISIBLE_REAL_SPAN / f64::from(window.width());
    let per_height = VISIBLE_IMAG_SPAN / f64::from(window.height());

    per_width.max(per_height)
}

/// Pixel ↔ plane transform for one snapshot of the view.
///
/// `scale` lets an export raster that is `scale` times larger than the window
/// cover exactly the region the window shows.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CoordinateMapper {
    half_width: f64,
    half_height: f64,
    pan_x: f64,
    pan_y: f64,
    zoom: f64,
    unit: f64,
    scale: f64,
}

impl CoordinateMapper {
    #[must_use]
    pub fn new(view: &ViewState, window: WindowSize) -> Self {
        Self::with_scale(view, window, 1)
    }

    #[must_use]
    pub fn with_scale(view: &ViewState, window: WindowSize, scale: u32) -> Self {
        Self {
            half_width: f64::from(window.width()) / 2.0,
            half_height: f64::from(window.height()) / 2.0,
            pan_x: view.pan_x(),
            pan_y: view.pan_y(),
            zoom: view.zoom(),
            unit: plane_unit(window),
            scale: f64::from(scale.max(1)),
        }
    }

    #[must_use]
    pub fn pixel_to_plane(&self, px: f64, py: f64) -> Complex {
        let real = ((px / self.scale - self.half_width) / self.zoom - self.pan_x) * self.unit;
        let imag = ((py / self.scale - self.half_height) / self.zoom - self.pan_y) * self.unit;

        Complex { real, imag }
    }

    #[must_use]
    pub fn plane_to_pixel(&self, c: Complex) -> (f64, f64) {
        let px = ((c.real / self.unit + self.pan_x) * self.zoom + self.half_width) * self.scale;
        let py = ((c.imag / self.unit + self.pan_y) * self.zoom + self.half_height) * self.scale;

        (px, py)
    }
}

#[must_use]
pub fn pixel_to_plane(px: f64, py: f64, view: &ViewState, window: WindowSize) -> Complex {
    CoordinateMapper::new(view, window).pixel_to_plane(px, py)
}

#[must_use]
pub fn plane_to_pixel(c: Complex, view: &ViewState, window: WindowSize) -> (f64, f64) {
    CoordinateMapper::new(view, window).plane_to_pixel(c)
}
