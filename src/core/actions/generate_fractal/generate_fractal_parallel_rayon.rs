use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;
use crate::core::data::window_size::WindowSize;

/// Generates fractal data in parallel using rayon's work-stealing scheduler.
///
/// The output is allocated once and split into disjoint rows, so the result
/// is identical to [`generate_fractal_serial`] for any algorithm.
///
/// [`generate_fractal_serial`]: crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial
pub fn generate_fractal_parallel_rayon<Alg>(
    size: WindowSize,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Default + Clone + Send,
    Alg::Failure: Send,
{
    let row_width = size.width() as usize;
    let mut results = vec![Alg::Success::default(); size.pixel_count()];

    results
        .par_chunks_mut(row_width)
        .enumerate()
        .try_for_each(|(y, row)| {
            for (x, slot) in row.iter_mut().enumerate() {
                *slot = algorithm.compute(Point {
                    x: x as u32,
                    y: y as u32,
                })?;
            }

            Ok(())
        })?;

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
    use std::error::Error;

    #[derive(Debug, PartialEq)]
    struct StubError {}

    impl std::fmt::Display for StubError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "StubError")
        }
    }

    impl Error for StubError {}

    #[derive(Debug)]
    struct StubSuccessAlgorithm {}

    impl FractalAlgorithm for StubSuccessAlgorithm {
        type Success = u64;
        type Failure = StubError;

        fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
            Ok(u64::from(pixel.x) * 1000 + u64::from(pixel.y))
        }
    }

    #[derive(Debug)]
    struct StubFailOnRowAlgorithm {
        failing_row: u32,
    }

    impl FractalAlgorithm for StubFailOnRowAlgorithm {
        type Success = u64;
        type Failure = StubError;

        fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
            if pixel.y == self.failing_row {
                return Err(StubError {});
            }

            Ok(0)
        }
    }

    #[test]
    fn test_rayon_generates_same_results_as_serial() {
        let algorithm = StubSuccessAlgorithm {};
        let size = WindowSize::new(11, 9).unwrap();

        let serial_results = generate_fractal_serial(size, &algorithm).unwrap();
        let rayon_results = generate_fractal_parallel_rayon(size, &algorithm).unwrap();

        assert_eq!(rayon_results, serial_results);
    }

    #[test]
    fn test_rayon_with_single_pixel() {
        let algorithm = StubSuccessAlgorithm {};
        let size = WindowSize::new(1, 1).unwrap();

        assert_eq!(
            generate_fractal_parallel_rayon(size, &algorithm).unwrap(),
            vec![0]
        );
    }

    #[test]
    fn test_rayon_with_large_rect() {
        let algorithm = StubSuccessAlgorithm {};
        let size = WindowSize::new(257, 131).unwrap();

        let serial_results = generate_fractal_serial(size, &algorithm).unwrap();
        let rayon_results = generate_fractal_parallel_rayon(size, &algorithm).unwrap();

        assert_eq!(rayon_results.len(), 257 * 131);
        assert_eq!(rayon_results, serial_results);
    }

    #[test]
    fn test_rayon_fills_a_single_allocation() {
        let algorithm = StubSuccessAlgorithm {};
        let size = WindowSize::new(64, 33).unwrap();

        let rayon_results = generate_fractal_parallel_rayon(size, &algorithm).unwrap();

        assert_eq!(rayon_results.len(), 64 * 33);
        assert_eq!(rayon_results.capacity(), rayon_results.len());
    }

    #[test]
    fn test_rayon_propagates_algorithm_failure() {
        let algorithm = StubFailOnRowAlgorithm { failing_row: 3 };
        let size = WindowSize::new(4, 5).unwrap();

        let result = generate_fractal_parallel_rayon(size, &algorithm);

        assert_eq!(result, Err(StubError {}));
    }
}
