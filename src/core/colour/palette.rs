use serde::Deserialize;
use std::error::Error;
use std::fmt;

use crate::core::data::colour::Colour;

pub const DEFAULT_DROPOFF: f64 = 4.0;
pub const DEFAULT_FLOOR: u8 = 64;

/// Which channels receive the gradient value.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradientChannels {
    /// Same value on red, green and blue.
    #[default]
    Grey,
    /// Value on red only, green and blue stay at zero.
    RedOnly,
}

impl GradientChannels {
    #[must_use]
    pub const fn colour(self, value: u8) -> Colour {
        match self {
            Self::Grey => Colour::grey(value),
            Self::RedOnly => Colour { r: value, g: 0, b: 0 },
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaletteSettings {
    /// Exponent of the brightness curve. Larger values keep fast-escaping
    /// points near the floor for longer.
    pub dropoff: f64,
    /// Brightness of points that escape on the first iteration.
    pub floor: u8,
    pub channels: GradientChannels,
}

impl Default for PaletteSettings {
    fn default() -> Self {
        Self {
            dropoff: DEFAULT_DROPOFF,
            floor: DEFAULT_FLOOR,
            channels: GradientChannels::default(),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PaletteError {
    ZeroMaxIterations,
    InvalidDropoff { dropoff: f64 },
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterations => {
                write!(f, "palette needs at least one iteration")
            }
            Self::InvalidDropoff { dropoff } => {
                write!(f, "palette dropoff must be a positive finite number, got {}", dropoff)
            }
        }
    }
}

impl Error for PaletteError {}

/// Iteration count → colour lookup table.
///
/// Holds `max_iterations + 1` entries. Entry `max_iterations` stands for
/// "never escaped" and is always black.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    entries: Vec<Colour>,
}

fn gradient_value(iterations: u32, max_iterations: u32, settings: &PaletteSettings) -> u8 {
    let remaining = f64::from(max_iterations - iterations) / f64::from(max_iterations);
    let range = f64::from(255 - settings.floor);
    let darkening = (range * remaining.powf(settings.dropoff)).round();

    (255.0 - darkening) as u8
}

impl Palette {
    pub fn build(max_iterations: u32, settings: &PaletteSettings) -> Result<Self, PaletteError> {
        if max_iterations == 0 {
            return Err(PaletteError::ZeroMaxIterations);
        }

        if !settings.dropoff.is_finite() || settings.dropoff <= 0.0 {
            return Err(PaletteError::InvalidDropoff {
                dropoff: settings.dropoff,
            });
        }

        let entries = (0..max_iterations)
            .map(|i| settings.channels.colour(gradient_value(i, max_iterations, settings)))
            .chain(std::iter::once(Colour::BLACK))
            .collect();

        Ok(Self { entries })
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        (self.entries.len() - 1) as u32
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, iterations: u32) -> Option<Colour> {
        self.entries.get(iterations as usize).copied()
    }

    #[must_use]
    pub fn entries(&self) -> &[Colour] {
        &self.entries
    }
}
