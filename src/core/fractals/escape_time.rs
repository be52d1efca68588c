use std::convert::Infallible;
use std::error::Error;
use std::fmt;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::pixel_result::PixelResult;
use crate::core::data::point::Point;
use crate::core::fractals::recurrence::Recurrence;
use crate::core::util::coordinate_mapper::CoordinateMapper;

/// Squared radius past which an orbit is considered divergent.
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Iterates `recurrence` from `z = 0` until the orbit leaves the escape
/// radius or `max_iterations` updates have been applied.
#[must_use]
pub fn evaluate(c: Complex, max_iterations: u32, recurrence: Recurrence) -> PixelResult {
    let mut z = Complex::ORIGIN;
    let mut iterations = 0;

    while iterations < max_iterations && z.magnitude_squared() <= ESCAPE_RADIUS_SQUARED {
        z = recurrence.apply(z, c);
        iterations += 1;
    }

    PixelResult {
        iterations,
        escaped: iterations < max_iterations,
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum EscapeTimeAlgorithmConstructorError {
    ZeroMaxIterationsError,
}

impl fmt::Display for EscapeTimeAlgorithmConstructorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterationsError => {
                write!(f, "Maximum iterations must be greater than zero")
            }
        }
    }
}

impl Error for EscapeTimeAlgorithmConstructorError {}

/// Maps a pixel to the plane and evaluates it.
#[derive(Debug, Clone, Copy)]
pub struct EscapeTimeAlgorithm {
    mapper: CoordinateMapper,
    max_iterations: u32,
    recurrence: Recurrence,
}

impl EscapeTimeAlgorithm {
    pub fn new(
        mapper: CoordinateMapper,
        max_iterations: u32,
        recurrence: Recurrence,
    ) -> Result<Self, EscapeTimeAlgorithmConstructorError> {
        if max_iterations == 0 {
            return Err(EscapeTimeAlgorithmConstructorError::ZeroMaxIterationsError);
        }

        Ok(Self {
            mapper,
            max_iterations,
            recurrence,
        })
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

impl FractalAlgorithm for EscapeTimeAlgorithm {
    type Success = PixelResult;
    type Failure = Infallible;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let c = self
            .mapper
            .pixel_to_plane(f64::from(pixel.x), f64::from(pixel.y));

        Ok(evaluate(c, self.max_iterations, self.recurrence))
    }
}
