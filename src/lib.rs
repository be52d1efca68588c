pub mod adapters;
pub mod config;
pub mod controllers;
pub mod core;
#[cfg(feature = "gui")]
pub mod input;
pub mod presenters;
pub mod session;
pub mod storage;

pub use crate::config::{ConfigError, ConfigSource, DEFAULT_CONFIG_FILE, ViewerConfig};
pub use crate::controllers::export::{ExportController, ExportError, ExportSummary};
pub use crate::core::actions::render_frame::{
    Frame, RenderError, RenderSettings, render_frame, render_pixel_buffer,
};
pub use crate::core::data::view_state::{ColourMode, ViewState};
pub use crate::core::fractals::recurrence::Recurrence;
#[cfg(feature = "gui")]
pub use crate::input::gui::{GuiError, run_gui};
pub use crate::presenters::file::by_extension::ExtensionFilePresenter;
pub use crate::session::viewer::{SessionAction, SessionError, ViewerSession};
