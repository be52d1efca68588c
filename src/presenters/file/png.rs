use std::io::Write;
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageError};

use crate::controllers::ports::file_presenter::{FilePresentError, FilePresenterPort};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::storage::atomic_write::atomic_write;

/// Encodes a raster as PNG straight from its RGB bytes.
pub fn write_png<W: Write>(buffer: &PixelBuffer, out: W) -> Result<(), FilePresentError> {
    let size = buffer.size();

    PngEncoder::new(out)
        .write_image(
            buffer.buffer(),
            size.width(),
            size.height(),
            ExtendedColorType::Rgb8,
        )
        .map_err(|err| match err {
            ImageError::IoError(err) => FilePresentError::Io(err),
            err => FilePresentError::Encode(Box::new(err)),
        })
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PngFilePresenter {}

impl PngFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}

impl FilePresenterPort for PngFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> Result<(), FilePresentError> {
        atomic_write(filepath, |out| write_png(buffer, out))
    }
}
