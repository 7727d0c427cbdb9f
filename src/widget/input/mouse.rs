//! Mouse input adapter for terminal hosts.
//!
//! Turns crossterm mouse events into pointer activations.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::PointerEvent;

/// Map a left-button press to a pointer activation.
///
/// Terminal cells are whole units, so the pointer is placed at the
/// center of the pressed cell. Other buttons, releases, drags and
/// scrolling yield `None`.
pub fn pointer_from_mouse(mouse: MouseEvent) -> Option<PointerEvent> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(PointerEvent::new(
            f64::from(mouse.column) + 0.5,
            f64::from(mouse.row) + 0.5,
        )),
        _ => None,
    }
}
