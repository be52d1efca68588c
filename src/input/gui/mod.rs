//! Windowed viewer built on winit for events and pixels for the framebuffer.

mod app;
mod events;

pub use app::{GuiError, run_gui};
