//! Main GUI application loop.

use std::error::Error;
use std::fmt;

use log::{error, info};
use winit::{
    dpi::PhysicalSize,
    error::{EventLoopError, OsError},
    event::{ElementState, Event, WindowEvent},
    event_loop::{EventLoop, EventLoopWindowTarget},
    window::{Window, WindowBuilder},
};

use crate::controllers::export::ExportController;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::input::gui::events;
use crate::presenters::pixels::presenter::PixelsPresenter;
use crate::session::input::InputEvent;
use crate::session::viewer::{SessionAction, ViewerSession};

const WINDOW_TITLE: &str = "Fractal Viewer";

#[derive(Debug)]
pub enum GuiError {
    EventLoop(EventLoopError),
    Window(OsError),
    Surface(pixels::Error),
}

impl fmt::Display for GuiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EventLoop(err) => write!(f, "event loop error: {}", err),
            Self::Window(err) => write!(f, "cannot create window: {}", err),
            Self::Surface(err) => write!(f, "cannot create pixels surface: {}", err),
        }
    }
}

impl Error for GuiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EventLoop(err) => Some(err),
            Self::Window(err) => Some(err),
            Self::Surface(err) => Some(err),
        }
    }
}

impl From<EventLoopError> for GuiError {
    fn from(err: EventLoopError) -> Self {
        Self::EventLoop(err)
    }
}

impl From<OsError> for GuiError {
    fn from(err: OsError) -> Self {
        Self::Window(err)
    }
}

impl From<pixels::Error> for GuiError {
    fn from(err: pixels::Error) -> Self {
        Self::Surface(err)
    }
}

struct GuiApp<P: FilePresenterPort> {
    session: ViewerSession,
    presenter: PixelsPresenter,
    exporter: ExportController<P>,
    cursor: (f64, f64),
}

impl<P: FilePresenterPort> GuiApp<P> {
    fn input_event(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = self.presenter.window_pos_to_buffer(position.x, position.y);
                Some(InputEvent::PointerMove {
                    x: self.cursor.0,
                    y: self.cursor.1,
                })
            }
            WindowEvent::MouseInput { state, button, .. } => {
                Some(events::pointer_event(*state, *button, self.cursor))
            }
            WindowEvent::MouseWheel { delta, .. } => Some(InputEvent::Scroll {
                delta: events::scroll_lines(*delta),
            }),
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                Some(InputEvent::Key(events::key(event.physical_key)))
            }
            _ => None,
        }
    }

    fn redraw(&mut self, elwt: &EventLoopWindowTarget<()>) {
        let frame = match self.session.render_frame() {
            Ok(frame) => frame,
            Err(err) => {
                error!("render failed: {}", err);
                elwt.exit();
                return;
            }
        };

        if let Err(err) = self.presenter.present(&frame.pixel_buffer) {
            error!("present failed: {}", err);
            elwt.exit();
        }
    }

    fn apply(&mut self, action: SessionAction, window: &Window, elwt: &EventLoopWindowTarget<()>) {
        match action {
            SessionAction::Continue => {}
            SessionAction::Redraw => window.request_redraw(),
            SessionAction::Export => {
                let path = self.session.config().export_path.clone();
                // failures are logged by the controller; the viewer keeps running
                let _ = self.exporter.export(&self.session, path);
            }
            SessionAction::Quit => elwt.exit(),
        }
    }
}

/// Opens the viewer window and runs until it is closed or Escape is pressed.
pub fn run_gui<P: FilePresenterPort>(
    session: ViewerSession,
    exporter: ExportController<P>,
) -> Result<(), GuiError> {
    let event_loop = EventLoop::new()?;
    let window_size = session.window();

    // Leak the window to get a 'static reference for pixels
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title(WINDOW_TITLE)
            .with_inner_size(PhysicalSize::new(window_size.width(), window_size.height()))
            .with_resizable(false)
            .build(&event_loop)?,
    ));

    let presenter = PixelsPresenter::new(window, window_size)?;
    let mut app = GuiApp {
        session,
        presenter,
        exporter,
        cursor: (0.0, 0.0),
    };

    info!(
        "viewer window open at {}x{}",
        window_size.width(),
        window_size.height()
    );
    window.request_redraw();

    event_loop.run(move |event, elwt| {
        let Event::WindowEvent { event, window_id } = event else {
            return;
        };

        if window_id != window.id() {
            return;
        }

        match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::RedrawRequested => app.redraw(elwt),
            ref other => {
                if let Some(input) = app.input_event(other) {
                    let action = app.session.handle_event(input);
                    app.apply(action, window, elwt);
                }
            }
        }
    })?;

    Ok(())
}
