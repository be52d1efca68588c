//! Conversion from the renderer's RGB rasters to RGBA display surfaces.

use std::error::Error;
use std::fmt;

use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};

pub const RGBA_BYTES_PER_PIXEL: usize = 4;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BlitError {
    pub expected_len: usize,
    pub actual_len: usize,
}

impl fmt::Display for BlitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RGBA surface is {} bytes, raster needs {}",
            self.actual_len, self.expected_len
        )
    }
}

impl Error for BlitError {}

/// Copies every pixel of `buffer` into `dst`, setting alpha to 255.
///
/// `dst` must hold exactly four bytes per raster pixel; nothing is written
/// otherwise.
pub fn blit_rgb_into_rgba(buffer: &PixelBuffer, dst: &mut [u8]) -> Result<(), BlitError> {
    let expected_len = buffer.size().pixel_count() * RGBA_BYTES_PER_PIXEL;

    if dst.len() != expected_len {
        return Err(BlitError {
            expected_len,
            actual_len: dst.len(),
        });
    }

    for (src_pixel, dst_pixel) in buffer
        .buffer()
        .chunks_exact(BYTES_PER_PIXEL)
        .zip(dst.chunks_exact_mut(RGBA_BYTES_PER_PIXEL))
    {
        dst_pixel[..BYTES_PER_PIXEL].copy_from_slice(src_pixel);
        dst_pixel[3] = 255;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::window_size::WindowSize;

    #[test]
    fn test_blit_known_values() {
        let size = WindowSize::new(2, 2).unwrap();
        let src = vec![
            255, 0, 0, // red
            0, 255, 0, // green
            0, 0, 255, // blue
            255, 255, 255, // white
        ];
        let buffer = PixelBuffer::from_data(size, src).unwrap();
        let mut dst = vec![0; 16];

        blit_rgb_into_rgba(&buffer, &mut dst).unwrap();

        assert_eq!(
            dst,
            vec![
                255, 0, 0, 255, 0, 255, 0, 255, 0, 0, 255, 255, 255, 255, 255, 255
            ]
        );
    }

    #[test]
    fn test_blit_rejects_wrong_surface_size() {
        let buffer = PixelBuffer::new(WindowSize::new(3, 1).unwrap());
        let mut dst = vec![7; 8];

        assert_eq!(
            blit_rgb_into_rgba(&buffer, &mut dst),
            Err(BlitError {
                expected_len: 12,
                actual_len: 8
            })
        );
        assert!(dst.iter().all(|&b| b == 7));
    }
}
