//! Input events and the handlers that turn them into view changes.
//!
//! The windowing layer translates its native events into [`InputEvent`]s;
//! nothing in here knows about a particular toolkit.

use crate::core::data::view_state::ViewState;

/// Screen pixels an arrow key pans the view by, at zoom 1.
pub const ARROW_PAN_PIXELS: f64 = 30.0;
/// Zoom multiplier for PageUp / PageDown.
pub const KEY_ZOOM_FACTOR: f64 = 2.0;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
    Other,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Key {
    PageUp,
    PageDown,
    Space,
    Left,
    Right,
    Up,
    Down,
    S,
    Escape,
    Other,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerEvent {
    pub x: f64,
    pub y: f64,
    pub button: PointerButton,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InputEvent {
    PointerDown(PointerEvent),
    PointerUp(PointerEvent),
    PointerMove { x: f64, y: f64 },
    /// Wheel movement in lines, positive away from the user.
    Scroll { delta: f64 },
    Key(Key),
}

/// Applies input to a [`ViewState`].
///
/// Only remembers where an active drag last was; everything else lives in the
/// view itself.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct InputHandler {
    drag_anchor: Option<(f64, f64)>,
}

impl InputHandler {
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    pub fn handle(&mut self, event: InputEvent, view: &mut ViewState) {
        match event {
            InputEvent::PointerDown(pointer) => self.on_pointer_down(pointer, view),
            InputEvent::PointerUp(pointer) => self.on_pointer_up(pointer, view),
            InputEvent::PointerMove { x, y } => self.on_pointer_move(x, y, view),
            InputEvent::Scroll { delta } => self.on_scroll(delta, view),
            InputEvent::Key(key) => self.on_key(key, view),
        }
    }

    pub fn on_pointer_down(&mut self, event: PointerEvent, _view: &mut ViewState) {
        if event.button == PointerButton::Primary {
            self.drag_anchor = Some((event.x, event.y));
        }
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64, view: &mut ViewState) {
        if let Some((last_x, last_y)) = self.drag_anchor {
            view.pan_by_screen_delta(x - last_x, y - last_y);
            self.drag_anchor = Some((x, y));
        }
    }

    pub fn on_pointer_up(&mut self, event: PointerEvent, _view: &mut ViewState) {
        if event.button == PointerButton::Primary {
            self.drag_anchor = None;
        }
    }

    pub fn on_scroll(&mut self, delta: f64, view: &mut ViewState) {
        view.add_zoom(delta);
    }

    pub fn on_key(&mut self, key: Key, view: &mut ViewState) {
        match key {
            Key::PageUp => view.scale_zoom(KEY_ZOOM_FACTOR),
            Key::PageDown => view.scale_zoom(1.0 / KEY_ZOOM_FACTOR),
            Key::Space => view.toggle_colour_mode(),
            Key::Left => view.pan_by_screen_delta(ARROW_PAN_PIXELS, 0.0),
            Key::Right => view.pan_by_screen_delta(-ARROW_PAN_PIXELS, 0.0),
            Key::Up => view.pan_by_screen_delta(0.0, ARROW_PAN_PIXELS),
            Key::Down => view.pan_by_screen_delta(0.0, -ARROW_PAN_PIXELS),
            Key::S | Key::Escape | Key::Other => {}
        }
    }
}
