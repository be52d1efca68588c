use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum WindowSizeError {
    ZeroDimension { width: u32, height: u32 },
    ScaleOverflow { width: u32, height: u32, scale: u32 },
}

impl fmt::Display for WindowSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDimension { width, height } => {
                write!(f, "window dimensions must be positive: {}x{}", width, height)
            }
            Self::ScaleOverflow {
                width,
                height,
                scale,
            } => {
                write!(
                    f,
                    "window {}x{} scaled by {} does not fit in a raster",
                    width, height, scale
                )
            }
        }
    }
}

impl Error for WindowSizeError {}

/// Dimensions of a raster in pixels. Both sides are at least one pixel.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct WindowSize {
    width: u32,
    height: u32,
}

impl WindowSize {
    pub fn new(width: u32, height: u32) -> Result<Self, WindowSizeError> {
        if width == 0 || height == 0 {
            return Err(WindowSizeError::ZeroDimension { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }

    /// Size of the raster produced when every window pixel becomes a
    /// `scale` × `scale` block.
    pub fn scaled(&self, scale: u32) -> Result<Self, WindowSizeError> {
        let overflow = WindowSizeError::ScaleOverflow {
            width: self.width,
            height: self.height,
            scale,
        };

        let width = self.width.checked_mul(scale).ok_or(overflow)?;
        let height = self.height.checked_mul(scale).ok_or(overflow)?;

        Self::new(width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_size_new_valid() {
        let size = WindowSize::new(1040, 500).unwrap();

        assert_eq!(size.width(), 1040);
        assert_eq!(size.height(), 500);
        assert_eq!(size.pixel_count(), 520_000);
    }

    #[test]
    fn test_window_size_rejects_zero_dimensions() {
        assert_eq!(
            WindowSize::new(0, 10),
            Err(WindowSizeError::ZeroDimension { width: 0, height: 10 })
        );
        assert_eq!(
            WindowSize::new(10, 0),
            Err(WindowSizeError::ZeroDimension { width: 10, height: 0 })
        );
    }

    #[test]
    fn test_single_pixel_window_is_allowed() {
        assert!(WindowSize::new(1, 1).is_ok());
    }

    #[test]
    fn test_contains() {
        let size = WindowSize::new(3, 2).unwrap();

        assert!(size.contains(Point { x: 0, y: 0 }));
        assert!(size.contains(Point { x: 2, y: 1 }));
        assert!(!size.contains(Point { x: 3, y: 1 }));
        assert!(!size.contains(Point { x: 2, y: 2 }));
    }

    #[test]
    fn test_scaled() {
        let size = WindowSize::new(1040, 500).unwrap();
        let scaled = size.scaled(10).unwrap();

        assert_eq!(scaled.width(), 10400);
        assert_eq!(scaled.height(), 5000);
    }

    #[test]
    fn test_scaled_by_zero_is_rejected() {
        let size = WindowSize::new(4, 4).unwrap();

        assert_eq!(
            size.scaled(0),
            Err(WindowSizeError::ZeroDimension { width: 0, height: 0 })
        );
    }

    #[test]
    fn test_scaled_overflow_is_rejected() {
        let size = WindowSize::new(u32::MAX, 4).unwrap();

        assert!(matches!(
            size.scaled(2),
            Err(WindowSizeError::ScaleOverflow { .. })
        ));
    }
}
