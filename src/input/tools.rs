use macroquad::prelude::*;

use crate::state::{ApplicationState, PointerEvent};

/// Turns raw mouse and touch samples into canvas pointer events.
/// Only the first active touch is followed; others are ignored.
pub struct PointerTracker {
    last_mouse: Option<Vec2>,
    active_touch: Option<u64>,
}

impl PointerTracker {
    pub fn new() -> Self {
        PointerTracker {
            last_mouse: None,
            active_touch: None,
        }
    }

    /// Forget in-flight gestures, e.g. when a modal takes over input
    pub fn reset(&mut self, state: &mut ApplicationState) {
        state.handle_pointer(PointerEvent::Up);
        self.last_mouse = None;
        self.active_touch = None;
    }
}

/// Handle mouse and touch input for painting
pub fn perform_drawing(state: &mut ApplicationState, tracker: &mut PointerTracker) {
    handle_mouse(state, tracker);
    handle_touches(state, tracker);
}

fn handle_mouse(state: &mut ApplicationState, tracker: &mut PointerTracker) {
    let screen = Vec2::from(mouse_position());
    let local = screen - state.canvas_origin;

    // Mouse just pressed - start new stroke
    if is_mouse_button_pressed(MouseButton::Left) {
        if state.over_canvas(screen) {
            state.handle_pointer(PointerEvent::Down { x: local.x, y: local.y });
            tracker.last_mouse = Some(screen);
        }
    }
    // Mouse held - paint wherever it moved, no interpolation
    else if is_mouse_button_down(MouseButton::Left) {
        if tracker.last_mouse.is_some_and(|last| last != screen) {
            if state.over_canvas(screen) {
                state.handle_pointer(PointerEvent::Move { x: local.x, y: local.y });
                tracker.last_mouse = Some(screen);
            } else {
                state.handle_pointer(PointerEvent::Leave);
                tracker.last_mouse = None;
            }
        }
    }

    // Mouse released - end stroke
    if is_mouse_button_released(MouseButton::Left) && tracker.last_mouse.take().is_some() {
        state.handle_pointer(PointerEvent::Up);
    }
}

fn handle_touches(state: &mut ApplicationState, tracker: &mut PointerTracker) {
    for touch in touches() {
        let local = touch.position - state.canvas_origin;
        match touch.phase {
            TouchPhase::Started if tracker.active_touch.is_none() => {
                if state.over_canvas(touch.position) {
                    tracker.active_touch = Some(touch.id);
                    state.handle_pointer(PointerEvent::Down { x: local.x, y: local.y });
                }
            }
            TouchPhase::Moved if tracker.active_touch == Some(touch.id) => {
                if state.over_canvas(touch.position) {
                    state.handle_pointer(PointerEvent::Move { x: local.x, y: local.y });
                } else {
                    state.handle_pointer(PointerEvent::Leave);
                    tracker.active_touch = None;
                }
            }
            TouchPhase::Ended | TouchPhase::Cancelled if tracker.active_touch == Some(touch.id) => {
                state.handle_pointer(PointerEvent::Up);
                tracker.active_touch = None;
            }
            _ => {}
        }
    }
}
