use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;
use crate::core::data::window_size::WindowSize;

/// Evaluates every pixel of `size` in row-major order on the calling thread.
pub fn generate_fractal_serial<Alg: FractalAlgorithm>(
    size: WindowSize,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure> {
    (0..size.height())
        .flat_map(|y| (0..size.width()).map(move |x| Point { x, y }))
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}
