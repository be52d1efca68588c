use serde::Deserialize;

use crate::core::data::complex::Complex;

/// Coefficient of the cross term `zx·zy` in the squared orbit.
const CROSS_TERM_COEFFICIENT: f64 = 2.0;

/// The per-iteration orbit update `z ← f(z, c)`.
///
/// Every variant shares the real part `zx² − zy² + cx`; they differ only in
/// how the cross term feeds the imaginary part.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recurrence {
    /// `z² + c`, the Mandelbrot set.
    #[default]
    Standard,
    /// Negated cross term, the "tricorn".
    SignFlipped,
    /// Absolute cross term, the "burning ship".
    Folded,
}

impl Recurrence {
    pub const ALL: &'static [Self] = &[Self::Standard, Self::SignFlipped, Self::Folded];

    #[inline]
    #[must_use]
    pub fn apply(self, z: Complex, c: Complex) -> Complex {
        let real = z.real * z.real - z.imag * z.imag + c.real;
        let cross = CROSS_TERM_COEFFICIENT * z.real * z.imag;

        let imag = match self {
            Self::Standard => cross,
            Self::SignFlipped => -cross,
            Self::Folded => cross.abs(),
        } + c.imag;

        Complex { real, imag }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Standard => "Mandelbrot",
            Self::SignFlipped => "Tricorn",
            Self::Folded => "Burning ship",
        }
    }
}

impl std::fmt::Display for Recurrence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
