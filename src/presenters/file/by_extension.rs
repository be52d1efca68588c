use std::path::Path;

use crate::controllers::ports::file_presenter::{FilePresentError, FilePresenterPort};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::presenters::file::png::PngFilePresenter;
use crate::presenters::file::ppm::PpmFilePresenter;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ImageFileFormat {
    Png,
    Ppm,
}

impl ImageFileFormat {
    /// `.ppm` (any case) selects PPM; everything else, including no extension, is PNG.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("ppm") => Self::Ppm,
            _ => Self::Png,
        }
    }
}

/// Picks the encoder from the destination's file extension.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExtensionFilePresenter {
    png: PngFilePresenter,
    ppm: PpmFilePresenter,
}

impl ExtensionFilePresenter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FilePresenterPort for ExtensionFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> Result<(), FilePresentError> {
        match ImageFileFormat::from_path(filepath) {
            ImageFileFormat::Png => self.png.present(buffer, filepath),
            ImageFileFormat::Ppm => self.ppm.present(buffer, filepath),
        }
    }
}
