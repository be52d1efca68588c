//! The viewer session: everything one running viewer owns.

use std::error::Error;
use std::fmt;
use std::time::Instant;

use log::debug;

use crate::config::{ConfigError, ViewerConfig};
use crate::core::actions::render_frame::{Frame, RenderError, render_frame, render_pixel_buffer};
use crate::core::colour::palette::{Palette, PaletteError};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::view_state::ViewState;
use crate::core::data::window_size::WindowSize;
use crate::session::input::{InputEvent, InputHandler, Key};

#[derive(Debug)]
pub enum SessionError {
    Config(ConfigError),
    Palette(PaletteError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "configuration error: {}", err),
            Self::Palette(err) => write!(f, "palette error: {}", err),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Palette(err) => Some(err),
        }
    }
}

impl From<ConfigError> for SessionError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<PaletteError> for SessionError {
    fn from(err: PaletteError) -> Self {
        Self::Palette(err)
    }
}

/// What the event loop should do after an input event.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SessionAction {
    Continue,
    Redraw,
    Export,
    Quit,
}

pub struct ViewerSession {
    config: ViewerConfig,
    window: WindowSize,
    view: ViewState,
    input: InputHandler,
    palette: Palette,
    export_palette: Palette,
}

impl ViewerSession {
    pub fn new(config: ViewerConfig) -> Result<Self, SessionError> {
        config.validate()?;

        let window = config.window_size()?;
        let palette = Palette::build(config.max_iterations, &config.palette)?;
        let export_palette = Palette::build(config.export_max_iterations, &config.palette)?;
        let view = config.initial_view();

        Ok(Self {
            config,
            window,
            view,
            input: InputHandler::default(),
            palette,
            export_palette,
        })
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn window(&self) -> WindowSize {
        self.window
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn handle_event(&mut self, event: InputEvent) -> SessionAction {
        match event {
            InputEvent::Key(Key::S) => return SessionAction::Export,
            InputEvent::Key(Key::Escape) => return SessionAction::Quit,
            _ => {}
        }

        let before = self.view;
        self.input.handle(event, &mut self.view);

        if self.view == before {
            return SessionAction::Continue;
        }

        debug!(
            "view: pan ({:.3}, {:.3}), zoom {:.6}, {}",
            self.view.pan_x(),
            self.view.pan_y(),
            self.view.zoom(),
            self.view.colour_mode()
        );

        SessionAction::Redraw
    }

    /// Renders the current view at window size.
    pub fn render_frame(&self) -> Result<Frame, RenderError> {
        let start = Instant::now();
        let frame = render_frame(
            self.view,
            self.window,
            &self.palette,
            self.config.interactive_settings(),
        )?;

        debug!("frame rendered in {:?}", start.elapsed());

        Ok(frame)
    }

    /// Renders the current view at export size with the export palette.
    pub fn render_export(&self) -> Result<PixelBuffer, RenderError> {
        render_pixel_buffer(
            self.view,
            self.window,
            &self.export_palette,
            self.config.export_settings(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::complex::Complex;
    use crate::core::data::point::Point;
    use crate::core::data::view_state::ColourMode;
    use crate::core::util::coordinate_mapper::plane_to_pixel;
    use crate::session::input::{PointerButton, PointerEvent};

    fn small_config() -> ViewerConfig {
        ViewerConfig {
            window_width: 52,
            window_height: 25,
            export_scale: 2,
            max_iterations: 40,
            export_max_iterations: 60,
            ..ViewerConfig::default()
        }
    }

    #[test]
    fn test_default_session_origin_pixel_is_inside() {
        let session = ViewerSession::new(ViewerConfig::default()).unwrap();
        let (x, y) = plane_to_pixel(Complex::ORIGIN, &session.view(), session.window());
        assert_eq!((x, y), (520.0, 250.0));

        let frame = session.render_frame().unwrap();
        let index = 250 * 1040 + 520;

        assert_eq!(frame.results[index].iterations, 100);
        assert!(!frame.results[index].escaped);
        assert_eq!(
            frame.pixel_buffer.pixel(Point { x: 520, y: 250 }).unwrap(),
            Colour::BLACK
        );
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = ViewerConfig {
            max_iterations: 0,
            ..ViewerConfig::default()
        };

        assert!(matches!(
            ViewerSession::new(config),
            Err(SessionError::Config(ConfigError::ZeroMaxIterations { .. }))
        ));
    }

    #[test]
    fn test_space_toggles_mode_but_not_results() {
        let mut session = ViewerSession::new(small_config()).unwrap();
        let before = session.render_frame().unwrap();

        let action = session.handle_event(InputEvent::Key(Key::Space));
        let after = session.render_frame().unwrap();

        assert_eq!(action, SessionAction::Redraw);
        assert_eq!(session.view().colour_mode(), ColourMode::BlackWhite);
        assert_eq!(before.results, after.results);
    }

    #[test]
    fn test_session_keys_map_to_actions() {
        let mut session = ViewerSession::new(small_config()).unwrap();
        let view = session.view();

        assert_eq!(session.handle_event(InputEvent::Key(Key::S)), SessionAction::Export);
        assert_eq!(session.handle_event(InputEvent::Key(Key::Escape)), SessionAction::Quit);
        assert_eq!(session.view(), view);
    }

    #[test]
    fn test_unchanged_view_does_not_redraw() {
        let mut session = ViewerSession::new(small_config()).unwrap();

        let action = session.handle_event(InputEvent::PointerMove { x: 10.0, y: 10.0 });

        assert_eq!(action, SessionAction::Continue);
    }

    #[test]
    fn test_drag_redraws() {
        let mut session = ViewerSession::new(small_config()).unwrap();
        let press = PointerEvent {
            x: 5.0,
            y: 5.0,
            button: PointerButton::Primary,
        };

        assert_eq!(
            session.handle_event(InputEvent::PointerDown(press)),
            SessionAction::Continue
        );
        assert_eq!(
            session.handle_event(InputEvent::PointerMove { x: 9.0, y: 5.0 }),
            SessionAction::Redraw
        );
        assert_eq!(session.view().pan_x(), 4.0);
    }

    #[test]
    fn test_export_uses_scale_and_export_iterations() {
        let session = ViewerSession::new(small_config()).unwrap();

        let raster = session.render_export().unwrap();

        assert_eq!(raster.size(), WindowSize::new(104, 50).unwrap());
        assert_eq!(raster.pixel(Point { x: 52, y: 25 }).unwrap(), Colour::BLACK);
    }

    #[test]
    fn test_export_palette_follows_export_iterations() {
        let session = ViewerSession::new(small_config()).unwrap();
        let export_palette = Palette::build(60, &session.config().palette).unwrap();
        let interactive_palette = Palette::build(40, &session.config().palette).unwrap();

        let raster = session.render_export().unwrap();
        let corner = raster.pixel(Point { x: 0, y: 0 }).unwrap();

        // the corner escapes on the first iteration
        assert_eq!(Some(corner), export_palette.get(1));
        assert_ne!(export_palette.get(1), interactive_palette.get(1));
    }
}
