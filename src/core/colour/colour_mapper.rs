use std::error::Error;
use std::fmt;

use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::colour::palette::Palette;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_result::PixelResult;
use crate::core::data::view_state::ColourMode;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ColourMapError {
    IterationsExceedMax { iterations: u32, max_iterations: u32 },
    PaletteMismatch { palette_max: u32, max_iterations: u32 },
}

impl fmt::Display for ColourMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IterationsExceedMax {
                iterations,
                max_iterations,
            } => write!(
                f,
                "iteration count {} exceeds maximum {}",
                iterations, max_iterations
            ),
            Self::PaletteMismatch {
                palette_max,
                max_iterations,
            } => write!(
                f,
                "palette built for {} iterations cannot colour a {} iteration render",
                palette_max, max_iterations
            ),
        }
    }
}

impl Error for ColourMapError {}

pub fn colour_for(
    iterations: u32,
    max_iterations: u32,
    mode: ColourMode,
    palette: &Palette,
) -> Result<Colour, ColourMapError> {
    if iterations > max_iterations {
        return Err(ColourMapError::IterationsExceedMax {
            iterations,
            max_iterations,
        });
    }

    match mode {
        ColourMode::BlackWhite if iterations == max_iterations => Ok(Colour::BLACK),
        ColourMode::BlackWhite => Ok(Colour::WHITE),
        ColourMode::Gradient => {
            if palette.max_iterations() != max_iterations {
                return Err(ColourMapError::PaletteMismatch {
                    palette_max: palette.max_iterations(),
                    max_iterations,
                });
            }

            palette
                .get(iterations)
                .ok_or(ColourMapError::IterationsExceedMax {
                    iterations,
                    max_iterations,
                })
        }
    }
}

/// Colours evaluator output with a palette in one colour mode.
#[derive(Debug, Clone, Copy)]
pub struct ColourMapper<'a> {
    palette: &'a Palette,
    mode: ColourMode,
}

impl<'a> ColourMapper<'a> {
    #[must_use]
    pub fn new(palette: &'a Palette, mode: ColourMode) -> Self {
        Self { palette, mode }
    }
}

impl ColourMap<PixelResult> for ColourMapper<'_> {
    type Failure = ColourMapError;

    fn map(&self, value: PixelResult) -> Result<Colour, Self::Failure> {
        colour_for(
            value.iterations,
            self.palette.max_iterations(),
            self.mode,
            self.palette,
        )
    }

    fn display_name(&self) -> &str {
        self.mode.display_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::colour::palette::{GradientChannels, PaletteSettings};

    fn palette() -> Palette {
        Palette::build(100, &PaletteSettings::default()).unwrap()
    }

    #[test]
    fn test_black_white_inside_is_black() {
        let colour = colour_for(100, 100, ColourMode::BlackWhite, &palette()).unwrap();

        assert_eq!(colour, Colour::BLACK);
    }

    #[test]
    fn test_black_white_escaped_is_white() {
        let palette = palette();

        for iterations in [0, 1, 50, 99] {
            let colour = colour_for(iterations, 100, ColourMode::BlackWhite, &palette).unwrap();
            assert_eq!(colour, Colour::WHITE);
        }
    }

    #[test]
    fn test_gradient_reads_palette() {
        let palette = palette();

        assert_eq!(
            colour_for(10, 100, ColourMode::Gradient, &palette).unwrap(),
            Colour::grey(130)
        );
        assert_eq!(
            colour_for(100, 100, ColourMode::Gradient, &palette).unwrap(),
            Colour::BLACK
        );
    }

    #[test]
    fn test_gradient_honours_red_only_palette() {
        let settings = PaletteSettings {
            channels: GradientChannels::RedOnly,
            ..PaletteSettings::default()
        };
        let palette = Palette::build(100, &settings).unwrap();

        assert_eq!(
            colour_for(0, 100, ColourMode::Gradient, &palette).unwrap(),
            Colour { r: 64, g: 0, b: 0 }
        );
    }

    #[test]
    fn test_iterations_above_max_are_rejected() {
        assert_eq!(
            colour_for(101, 100, ColourMode::Gradient, &palette()),
            Err(ColourMapError::IterationsExceedMax {
                iterations: 101,
                max_iterations: 100
            })
        );
        assert!(colour_for(101, 100, ColourMode::BlackWhite, &palette()).is_err());
    }

    #[test]
    fn test_gradient_rejects_palette_of_other_length() {
        assert_eq!(
            colour_for(3, 50, ColourMode::Gradient, &palette()),
            Err(ColourMapError::PaletteMismatch {
                palette_max: 100,
                max_iterations: 50
            })
        );
    }

    #[test]
    fn test_mapper_uses_mode() {
        let palette = palette();
        let escaped = PixelResult {
            iterations: 10,
            escaped: true,
        };

        let gradient = ColourMapper::new(&palette, ColourMode::Gradient);
        let black_white = ColourMapper::new(&palette, ColourMode::BlackWhite);

        assert_eq!(gradient.map(escaped).unwrap(), Colour::grey(130));
        assert_eq!(black_white.map(escaped).unwrap(), Colour::WHITE);
        assert_eq!(black_white.display_name(), "Black and white");
    }
}
