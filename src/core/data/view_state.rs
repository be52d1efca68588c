use log::warn;

/// Smallest zoom factor a view will accept. Anything lower is clamped here so
/// the coordinate transform never divides by zero.
pub const MIN_ZOOM: f64 = 1e-6;
/// Largest zoom factor a view will accept. Beyond it neighbouring pixels
/// collapse onto the same `f64` plane coordinate.
pub const MAX_ZOOM: f64 = 1e13;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum ColourMode {
    #[default]
    Gradient,
    BlackWhite,
}

impl ColourMode {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Gradient => Self::BlackWhite,
            Self::BlackWhite => Self::Gradient,
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Gradient => "Gradient",
            Self::BlackWhite => "Black and white",
        }
    }
}

impl std::fmt::Display for ColourMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Pan, zoom and colouring of the interactive view.
///
/// Pan offsets are measured in window pixels at zoom 1. The struct is `Copy`
/// so the renderer can take a snapshot at the start of every frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewState {
    pan_x: f64,
    pan_y: f64,
    zoom: f64,
    colour_mode: ColourMode,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            pan_x: 0.0,
            pan_y: 0.0,
            zoom: 1.0,
            colour_mode: ColourMode::default(),
        }
    }
}

fn clamp_zoom(zoom: f64) -> f64 {
    if zoom.is_nan() || zoom < MIN_ZOOM {
        warn!("zoom {} clamped to {}", zoom, MIN_ZOOM);
        return MIN_ZOOM;
    }

    if zoom > MAX_ZOOM {
        warn!("zoom {} clamped to {}", zoom, MAX_ZOOM);
        return MAX_ZOOM;
    }

    zoom
}

impl ViewState {
    #[must_use]
    pub fn new(pan_x: f64, pan_y: f64, zoom: f64) -> Self {
        Self {
            pan_x,
            pan_y,
            zoom: clamp_zoom(zoom),
            colour_mode: ColourMode::default(),
        }
    }

    #[must_use]
    pub fn pan_x(&self) -> f64 {
        self.pan_x
    }

    #[must_use]
    pub fn pan_y(&self) -> f64 {
        self.pan_y
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn colour_mode(&self) -> ColourMode {
        self.colour_mode
    }

    #[must_use]
    pub fn with_colour_mode(mut self, colour_mode: ColourMode) -> Self {
        self.colour_mode = colour_mode;
        self
    }

    /// Moves the view by a screen-space delta. The delta is divided by the
    /// zoom so a drag follows the pointer at any magnification.
    pub fn pan_by_screen_delta(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx / self.zoom;
        self.pan_y += dy / self.zoom;
    }

    pub fn scale_zoom(&mut self, factor: f64) {
        self.zoom = clamp_zoom(self.zoom * factor);
    }

    pub fn add_zoom(&mut self, delta: f64) {
        self.zoom = clamp_zoom(self.zoom + delta);
    }

    pub fn toggle_colour_mode(&mut self) {
        self.colour_mode = self.colour_mode.toggled();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_view() {
        let view = ViewState::default();

        assert_eq!(view.pan_x(), 0.0);
        assert_eq!(view.pan_y(), 0.0);
        assert_eq!(view.zoom(), 1.0);
        assert_eq!(view.colour_mode(), ColourMode::Gradient);
    }

    #[test]
    fn test_new_clamps_non_positive_zoom() {
        assert_eq!(ViewState::new(0.0, 0.0, 0.0).zoom(), MIN_ZOOM);
        assert_eq!(ViewState::new(0.0, 0.0, -3.0).zoom(), MIN_ZOOM);
        assert_eq!(ViewState::new(0.0, 0.0, f64::NAN).zoom(), MIN_ZOOM);
    }

    #[test]
    fn test_new_clamps_huge_and_infinite_zoom() {
        assert_eq!(ViewState::new(0.0, 0.0, 1e300).zoom(), MAX_ZOOM);
        assert_eq!(ViewState::new(0.0, 0.0, f64::INFINITY).zoom(), MAX_ZOOM);
    }

    #[test]
    fn test_zoom_stays_finite_and_recovers() {
        let mut view = ViewState::default();
        for _ in 0..2000 {
            view.scale_zoom(2.0);
        }
        assert_eq!(view.zoom(), MAX_ZOOM);

        view.add_zoom(f64::MAX);
        assert_eq!(view.zoom(), MAX_ZOOM);

        view.scale_zoom(0.5);
        assert_eq!(view.zoom(), MAX_ZOOM / 2.0);
    }

    #[test]
    fn test_pan_is_scaled_by_inverse_zoom() {
        let mut view = ViewState::new(0.0, 0.0, 4.0);
        view.pan_by_screen_delta(40.0, -8.0);

        assert_eq!(view.pan_x(), 10.0);
        assert_eq!(view.pan_y(), -2.0);
    }

    #[test]
    fn test_pan_accumulates() {
        let mut view = ViewState::default();
        view.pan_by_screen_delta(5.0, 5.0);
        view.pan_by_screen_delta(-2.0, 1.0);

        assert_eq!(view.pan_x(), 3.0);
        assert_eq!(view.pan_y(), 6.0);
    }

    #[test]
    fn test_scale_zoom() {
        let mut view = ViewState::default();
        view.scale_zoom(2.0);
        view.scale_zoom(2.0);
        assert_eq!(view.zoom(), 4.0);

        view.scale_zoom(0.5);
        assert_eq!(view.zoom(), 2.0);
    }

    #[test]
    fn test_add_zoom_never_reaches_zero() {
        let mut view = ViewState::default();
        view.add_zoom(-1.0);
        assert_eq!(view.zoom(), MIN_ZOOM);

        view.add_zoom(-5.0);
        assert_eq!(view.zoom(), MIN_ZOOM);
        assert!(view.zoom() > 0.0);
    }

    #[test]
    fn test_toggle_colour_mode_round_trips() {
        let mut view = ViewState::default();
        view.toggle_colour_mode();
        assert_eq!(view.colour_mode(), ColourMode::BlackWhite);

        view.toggle_colour_mode();
        assert_eq!(view.colour_mode(), ColourMode::Gradient);
    }

    #[test]
    fn test_with_colour_mode_leaves_geometry_alone() {
        let view = ViewState::new(1.0, 2.0, 3.0);
        let other = view.with_colour_mode(ColourMode::BlackWhite);

        assert_eq!(other.pan_x(), 1.0);
        assert_eq!(other.pan_y(), 2.0);
        assert_eq!(other.zoom(), 3.0);
        assert_eq!(other.colour_mode(), ColourMode::BlackWhite);
    }
}
