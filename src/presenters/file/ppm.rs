use std::io::{self, Write};
use std::path::Path;

use crate::controllers::ports::file_presenter::{FilePresentError, FilePresenterPort};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::storage::atomic_write::atomic_write;

/// Writes a raster as binary PPM.
pub fn write_ppm<W: Write + ?Sized>(buffer: &PixelBuffer, out: &mut W) -> io::Result<()> {
    let size = buffer.size();

    // PPM header: P6 means binary RGB, then width, height and max_colour
    writeln!(out, "P6")?;
    writeln!(out, "{} {}", size.width(), size.height())?;
    writeln!(out, "255")?;
    out.write_all(buffer.buffer())?;

    Ok(())
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PpmFilePresenter {}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> Result<(), FilePresentError> {
        atomic_write(filepath, |out| write_ppm(buffer, out))?;

        Ok(())
    }
}
