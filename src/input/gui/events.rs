//! Translation of winit events into session input events.

use winit::event::{ElementState, MouseButton, MouseScrollDelta};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::session::input::{InputEvent, Key, PointerButton, PointerEvent};

/// Trackpads report scrolling in pixels; this many count as one wheel line.
pub const SCROLL_PIXELS_PER_LINE: f64 = 40.0;

pub fn pointer_button(button: MouseButton) -> PointerButton {
    match button {
        MouseButton::Left => PointerButton::Primary,
        MouseButton::Right => PointerButton::Secondary,
        MouseButton::Middle => PointerButton::Middle,
        _ => PointerButton::Other,
    }
}

pub fn key(physical_key: PhysicalKey) -> Key {
    match physical_key {
        PhysicalKey::Code(KeyCode::PageUp) => Key::PageUp,
        PhysicalKey::Code(KeyCode::PageDown) => Key::PageDown,
        PhysicalKey::Code(KeyCode::Space) => Key::Space,
        PhysicalKey::Code(KeyCode::ArrowLeft) => Key::Left,
        PhysicalKey::Code(KeyCode::ArrowRight) => Key::Right,
        PhysicalKey::Code(KeyCode::ArrowUp) => Key::Up,
        PhysicalKey::Code(KeyCode::ArrowDown) => Key::Down,
        PhysicalKey::Code(KeyCode::KeyS) => Key::S,
        PhysicalKey::Code(KeyCode::Escape) => Key::Escape,
        _ => Key::Other,
    }
}

/// Wheel movement in lines, positive away from the user.
pub fn scroll_lines(delta: MouseScrollDelta) -> f64 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => f64::from(y),
        MouseScrollDelta::PixelDelta(position) => position.y / SCROLL_PIXELS_PER_LINE,
    }
}

pub fn pointer_event(
    state: ElementState,
    button: MouseButton,
    cursor: (f64, f64),
) -> InputEvent {
    let pointer = PointerEvent {
        x: cursor.0,
        y: cursor.1,
        button: pointer_button(button),
    };

    match state {
        ElementState::Pressed => InputEvent::PointerDown(pointer),
        ElementState::Released => InputEvent::PointerUp(pointer),
    }
}
