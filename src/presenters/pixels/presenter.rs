use std::error::Error;
use std::fmt;

use pixels::{Pixels, SurfaceTexture};
use winit::window::Window;

use crate::adapters::pixel_format::{BlitError, blit_rgb_into_rgba};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::window_size::WindowSize;

#[derive(Debug)]
pub enum PresentError {
    Blit(BlitError),
    Pixels(pixels::Error),
}

impl fmt::Display for PresentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blit(err) => write!(f, "cannot copy frame: {}", err),
            Self::Pixels(err) => write!(f, "surface error: {}", err),
        }
    }
}

impl Error for PresentError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Blit(err) => Some(err),
            Self::Pixels(err) => Some(err),
        }
    }
}

impl From<BlitError> for PresentError {
    fn from(err: BlitError) -> Self {
        Self::Blit(err)
    }
}

impl From<pixels::Error> for PresentError {
    fn from(err: pixels::Error) -> Self {
        Self::Pixels(err)
    }
}

/// Shows rendered frames in a window through a fixed-size pixels buffer.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
}

impl PixelsPresenter {
    pub fn new(window: &'static Window, buffer_size: WindowSize) -> Result<Self, pixels::Error> {
        let surface = window.inner_size();
        let surface_texture = SurfaceTexture::new(surface.width, surface.height, window);
        let pixels = Pixels::new(buffer_size.width(), buffer_size.height(), surface_texture)?;

        Ok(Self { pixels })
    }

    pub fn present(&mut self, buffer: &PixelBuffer) -> Result<(), PresentError> {
        blit_rgb_into_rgba(buffer, self.pixels.frame_mut())?;
        self.pixels.render()?;

        Ok(())
    }

    /// Converts a window position into buffer coordinates, clamped to the buffer.
    pub fn window_pos_to_buffer(&self, x: f64, y: f64) -> (f64, f64) {
        let (px, py) = self
            .pixels
            .window_pos_to_pixel((x as f32, y as f32))
            .unwrap_or_else(|pos| self.pixels.clamp_pixel_pos(pos));

        (px as f64, py as f64)
    }
}
