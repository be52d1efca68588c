use std::error::Error;
use std::fmt;
use std::io;
use std::path::Path;

use crate::core::data::pixel_buffer::PixelBuffer;

#[derive(Debug)]
pub enum FilePresentError {
    Io(io::Error),
    Encode(Box<dyn Error + Send + Sync>),
}

impl fmt::Display for FilePresentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "i/o error: {}", err),
            Self::Encode(err) => write!(f, "encoding error: {}", err),
        }
    }
}

impl Error for FilePresentError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Encode(err) => Some(err.as_ref()),
        }
    }
}

impl From<io::Error> for FilePresentError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

pub trait FilePresenterPort {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> Result<(), FilePresentError>;
}
