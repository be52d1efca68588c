pub mod by_extension;
pub mod png;
pub mod ppm;
