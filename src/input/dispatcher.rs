use macroquad::prelude::*;

use crate::state::ApplicationState;
use super::tools::{perform_drawing, PointerTracker};

/// Central input dispatcher for the editor surface. Modals handle their own input.
pub fn handle_input(state: &mut ApplicationState, tracker: &mut PointerTracker) {
    if state.picker.is_visible() || state.confirm_clear {
        tracker.reset(state);
        return;
    }

    if state.color_entry.is_active() {
        // Typing a color: keys go to the entry, clicks elsewhere commit it in the panel
        handle_color_entry_keys(state);
        tracker.reset(state);
        return;
    }

    // Hotkeys for brush size
    let brush_keys = [KeyCode::Key1, KeyCode::Key2, KeyCode::Key3, KeyCode::Key4];
    for (i, key) in brush_keys.into_iter().enumerate() {
        if is_key_pressed(key) {
            state.set_brush_size(i + 1);
        }
    }

    if is_key_pressed(KeyCode::LeftBracket) {
        state.step_grid_size(-1);
    }
    if is_key_pressed(KeyCode::RightBracket) {
        state.step_grid_size(1);
    }

    let ctrl = is_key_down(KeyCode::LeftControl) || is_key_down(KeyCode::RightControl);
    if ctrl && is_key_pressed(KeyCode::S) {
        state.export();
    }
    if is_key_pressed(KeyCode::P) {
        state.open_picker();
        tracker.reset(state);
        return;
    }
    if is_key_pressed(KeyCode::Delete) {
        state.request_clear();
        tracker.reset(state);
        return;
    }

    perform_drawing(state, tracker);
}

fn handle_color_entry_keys(state: &mut ApplicationState) {
    if is_key_pressed(KeyCode::Escape) {
        state.cancel_color_entry();
        return;
    }
    if is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::KpEnter) {
        state.commit_color_entry();
        return;
    }
    if is_key_pressed(KeyCode::Backspace) {
        state.color_entry_backspace();
    }
    while let Some(c) = get_char_pressed() {
        state.type_color_char(c);
    }
}
