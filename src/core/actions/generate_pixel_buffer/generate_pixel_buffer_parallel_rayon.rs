use std::convert::Infallible;

use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::GeneratePixelBufferError;
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer, PixelBufferData};
use crate::core::data::point::Point;
use crate::core::data::window_size::WindowSize;

/// Evaluates and colours every pixel straight into an RGB raster.
///
/// Per-pixel values are never stored, so the raster is the only allocation
/// that grows with `size`. Rows are filled in parallel and the output is
/// identical to running the sweep and [`generate_pixel_buffer`] separately.
///
/// [`generate_pixel_buffer`]: crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer
pub fn generate_pixel_buffer_parallel_rayon<Alg, CMap>(
    size: WindowSize,
    algorithm: &Alg,
    colour_map: &CMap,
) -> Result<PixelBuffer, GeneratePixelBufferError<CMap::Failure>>
where
    Alg: FractalAlgorithm<Failure = Infallible> + Sync,
    CMap: ColourMap<Alg::Success> + Sync,
    CMap::Failure: Send,
{
    let row_bytes = size.width() as usize * BYTES_PER_PIXEL;
    let mut buffer: PixelBufferData = vec![0; size.pixel_count() * BYTES_PER_PIXEL];

    buffer
        .par_chunks_mut(row_bytes)
        .enumerate()
        .try_for_each(|(y, row)| {
            for (x, pixel) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
                let point = Point {
                    x: x as u32,
                    y: y as u32,
                };
                let value = match algorithm.compute(point) {
                    Ok(value) => value,
                    Err(never) => match never {},
                };
                let Colour { r, g, b } = colour_map
                    .map(value)
                    .map_err(GeneratePixelBufferError::ColourMap)?;

                pixel.copy_from_slice(&[r, g, b]);
            }

            Ok::<(), GeneratePixelBufferError<CMap::Failure>>(())
        })?;

    Ok(PixelBuffer::from_data(size, buffer)?)
}
