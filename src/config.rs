//! Viewer configuration.
//!
//! Everything here is fixed once the session is constructed. Values come from
//! an optional TOML file; missing keys fall back to the defaults below.

use serde::Deserialize;
use std::error::Error;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use crate::core::actions::render_frame::RenderSettings;
use crate::core::colour::palette::PaletteSettings;
use crate::core::data::view_state::ViewState;
use crate::core::data::window_size::{WindowSize, WindowSizeError};
use crate::core::fractals::recurrence::Recurrence;

pub const DEFAULT_CONFIG_FILE: &str = "fractal_viewer.toml";

const DEFAULT_WINDOW_WIDTH: u32 = 1040;
const DEFAULT_WINDOW_HEIGHT: u32 = 500;
const DEFAULT_EXPORT_SCALE: u32 = 10;
const DEFAULT_MAX_ITERATIONS: u32 = 100;
const DEFAULT_EXPORT_PATH: &str = "out.png";

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: io::Error },
    Parse(toml::de::Error),
    ZeroWindowDimension { width: u32, height: u32 },
    ZeroExportScale,
    ZeroMaxIterations { field: &'static str },
    InvalidDropoff { dropoff: f64 },
    InvalidZoom { zoom: f64 },
    InvalidPan { x: f64, y: f64 },
    ExportTooLarge(WindowSizeError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot read config {}: {}", path.display(), source)
            }
            Self::Parse(err) => write!(f, "invalid config file: {}", err),
            Self::ZeroWindowDimension { width, height } => {
                write!(f, "window dimensions must be positive: {}x{}", width, height)
            }
            Self::ZeroExportScale => write!(f, "export_scale must be greater than zero"),
            Self::ZeroMaxIterations { field } => {
                write!(f, "{} must be greater than zero", field)
            }
            Self::InvalidDropoff { dropoff } => {
                write!(f, "palette.dropoff must be a positive finite number, got {}", dropoff)
            }
            Self::InvalidZoom { zoom } => {
                write!(f, "initial_zoom must be a positive finite number, got {}", zoom)
            }
            Self::InvalidPan { x, y } => {
                write!(f, "initial pan offset must be finite, got ({}, {})", x, y)
            }
            Self::ExportTooLarge(err) => write!(f, "export raster too large: {}", err),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::ExportTooLarge(err) => Some(err),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        Self::Parse(err)
    }
}

/// Where a loaded configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewerConfig {
    pub window_width: u32,
    pub window_height: u32,
    /// Export raster is `window × export_scale` on each axis.
    pub export_scale: u32,
    pub max_iterations: u32,
    pub export_max_iterations: u32,
    pub recurrence: Recurrence,
    pub palette: PaletteSettings,
    pub initial_zoom: f64,
    pub initial_pan_x: f64,
    pub initial_pan_y: f64,
    pub export_path: PathBuf,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            export_scale: DEFAULT_EXPORT_SCALE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            export_max_iterations: DEFAULT_MAX_ITERATIONS,
            recurrence: Recurrence::default(),
            palette: PaletteSettings::default(),
            initial_zoom: 1.0,
            initial_pan_x: 0.0,
            initial_pan_y: 0.0,
            export_path: PathBuf::from(DEFAULT_EXPORT_PATH),
        }
    }
}

impl ViewerConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;

        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&source)
    }

    /// Loads `path` if it exists, otherwise returns the validated defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<(Self, ConfigSource), ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            let config = Self::default();
            config.validate()?;
            return Ok((config, ConfigSource::Defaults));
        }

        Ok((Self::load(path)?, ConfigSource::File(path.to_path_buf())))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let window = self.window_size()?;

        if self.export_scale == 0 {
            return Err(ConfigError::ZeroExportScale);
        }

        window
            .scaled(self.export_scale)
            .map_err(ConfigError::ExportTooLarge)?;

        if self.max_iterations == 0 {
            return Err(ConfigError::ZeroMaxIterations {
                field: "max_iterations",
            });
        }

        if self.export_max_iterations == 0 {
            return Err(ConfigError::ZeroMaxIterations {
                field: "export_max_iterations",
            });
        }

        if !self.palette.dropoff.is_finite() || self.palette.dropoff <= 0.0 {
            return Err(ConfigError::InvalidDropoff {
                dropoff: self.palette.dropoff,
            });
        }

        if !self.initial_zoom.is_finite() || self.initial_zoom <= 0.0 {
            return Err(ConfigError::InvalidZoom {
                zoom: self.initial_zoom,
            });
        }

        if !self.initial_pan_x.is_finite() || !self.initial_pan_y.is_finite() {
            return Err(ConfigError::InvalidPan {
                x: self.initial_pan_x,
                y: self.initial_pan_y,
            });
        }

        Ok(())
    }

    pub fn window_size(&self) -> Result<WindowSize, ConfigError> {
        WindowSize::new(self.window_width, self.window_height).map_err(|_| {
            ConfigError::ZeroWindowDimension {
                width: self.window_width,
                height: self.window_height,
            }
        })
    }

    #[must_use]
    pub fn initial_view(&self) -> ViewState {
        ViewState::new(self.initial_pan_x, self.initial_pan_y, self.initial_zoom)
    }

    #[must_use]
    pub fn interactive_settings(&self) -> RenderSettings {
        RenderSettings {
            max_iterations: self.max_iterations,
            recurrence: self.recurrence,
            scale: 1,
        }
    }

    #[must_use]
    pub fn export_settings(&self) -> RenderSettings {
        RenderSettings {
            max_iterations: self.export_max_iterations,
            recurrence: self.recurrence,
            scale: self.export_scale,
        }
    }
}
