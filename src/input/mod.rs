//! Input adapters for the fractal viewer.
//!
//! Adapters receive input from a concrete source and translate it into
//! session events.

#[cfg(feature = "gui")]
pub mod gui;
