/// Outcome of evaluating one plane coordinate.
///
/// `iterations` is always within `0..=max_iterations`; a point that used up
/// every iteration is reported with `escaped == false`.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct PixelResult {
    pub iterations: u32,
    pub escaped: bool,
}
