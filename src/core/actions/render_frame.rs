use std::error::Error;
use std::fmt;

use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer,
};
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer_parallel_rayon::generate_pixel_buffer_parallel_rayon;
use crate::core::colour::colour_mapper::{ColourMapError, ColourMapper};
use crate::core::colour::palette::Palette;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::pixel_result::PixelResult;
use crate::core::data::view_state::ViewState;
use crate::core::data::window_size::{WindowSize, WindowSizeError};
use crate::core::fractals::escape_time::{EscapeTimeAlgorithm, EscapeTimeAlgorithmConstructorError};
use crate::core::fractals::recurrence::Recurrence;
use crate::core::util::coordinate_mapper::CoordinateMapper;

#[derive(Debug, PartialEq)]
pub enum RenderError {
    Algorithm(EscapeTimeAlgorithmConstructorError),
    ColourMap(ColourMapError),
    PixelBuffer(PixelBufferError),
    WindowSize(WindowSizeError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Algorithm(err) => write!(f, "algorithm error: {}", err),
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
            Self::WindowSize(err) => write!(f, "raster size error: {}", err),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Algorithm(err) => Some(err),
            Self::ColourMap(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
            Self::WindowSize(err) => Some(err),
        }
    }
}

impl From<GeneratePixelBufferError<ColourMapError>> for RenderError {
    fn from(err: GeneratePixelBufferError<ColourMapError>) -> Self {
        match err {
            GeneratePixelBufferError::ColourMap(err) => Self::ColourMap(err),
            GeneratePixelBufferError::PixelBuffer(err) => Self::PixelBuffer(err),
        }
    }
}

impl From<EscapeTimeAlgorithmConstructorError> for RenderError {
    fn from(err: EscapeTimeAlgorithmConstructorError) -> Self {
        Self::Algorithm(err)
    }
}

impl From<WindowSizeError> for RenderError {
    fn from(err: WindowSizeError) -> Self {
        Self::WindowSize(err)
    }
}

/// Evaluation parameters that stay fixed for the lifetime of a session.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RenderSettings {
    pub max_iterations: u32,
    pub recurrence: Recurrence,
    /// Output pixels per window pixel along each axis. 1 for the window.
    pub scale: u32,
}

/// One rendered raster together with the evaluator output it was coloured from.
#[derive(Debug, Clone)]
pub struct Frame {
    pub results: Vec<PixelResult>,
    pub pixel_buffer: PixelBuffer,
}

fn prepare(
    view: &ViewState,
    window: WindowSize,
    palette: &Palette,
    settings: RenderSettings,
) -> Result<(WindowSize, EscapeTimeAlgorithm), RenderError> {
    if palette.max_iterations() != settings.max_iterations {
        return Err(RenderError::ColourMap(ColourMapError::PaletteMismatch {
            palette_max: palette.max_iterations(),
            max_iterations: settings.max_iterations,
        }));
    }

    let output_size = window.scaled(settings.scale)?;
    let mapper = CoordinateMapper::with_scale(view, window, settings.scale);
    let algorithm = EscapeTimeAlgorithm::new(mapper, settings.max_iterations, settings.recurrence)?;

    Ok((output_size, algorithm))
}

/// Renders the view into a raster of `window` scaled by `settings.scale`.
///
/// `view` is taken by value: the frame is computed from this snapshot even
/// if the caller's view changes while rendering.
pub fn render_frame(
    view: ViewState,
    window: WindowSize,
    palette: &Palette,
    settings: RenderSettings,
) -> Result<Frame, RenderError> {
    let (output_size, algorithm) = prepare(&view, window, palette, settings)?;

    let results = match generate_fractal_parallel_rayon(output_size, &algorithm) {
        Ok(results) => results,
        Err(never) => match never {},
    };

    let colour_map = ColourMapper::new(palette, view.colour_mode());
    let pixel_buffer = generate_pixel_buffer(&results, &colour_map, output_size)?;

    Ok(Frame {
        results,
        pixel_buffer,
    })
}

/// Same raster as [`render_frame`], without keeping the per-pixel results.
///
/// Used for exports, where the raster can be many times the window size.
pub fn render_pixel_buffer(
    view: ViewState,
    window: WindowSize,
    palette: &Palette,
    settings: RenderSettings,
) -> Result<PixelBuffer, RenderError> {
    let (output_size, algorithm) = prepare(&view, window, palette, settings)?;
    let colour_map = ColourMapper::new(palette, view.colour_mode());

    Ok(generate_pixel_buffer_parallel_rayon(
        output_size,
        &algorithm,
        &colour_map,
    )?)
}
