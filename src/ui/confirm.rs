use macroquad::prelude::*;

use crate::input::ui::draw_button;
use crate::state::ApplicationState;

const PROMPT: &str = "Are you sure you want to clear the canvas?";

/// Modal prompt gating `clear()`. Y/Enter accepts, N/Escape declines.
pub fn render_clear_prompt(state: &mut ApplicationState) {
    if !state.confirm_clear {
        return;
    }

    if is_key_pressed(KeyCode::Y) || is_key_pressed(KeyCode::Enter) {
        state.resolve_clear(true);
        return;
    }
    if is_key_pressed(KeyCode::N) || is_key_pressed(KeyCode::Escape) {
        state.resolve_clear(false);
        return;
    }

    let width = 420.0;
    let height = 120.0;
    let x = ((screen_width() - width) / 2.0).max(0.0);
    let y = ((screen_height() - height) / 2.0).max(0.0);

    draw_rectangle(0.0, 0.0, screen_width(), screen_height(), Color::new(0.0, 0.0, 0.0, 0.45));
    draw_rectangle(x, y, width, height, Color::from_rgba(230, 230, 230, 255));
    draw_rectangle_lines(x, y, width, height, 2.0, BLACK);

    let text_size = measure_text(PROMPT, None, 18, 1.0);
    draw_text(PROMPT, x + (width - text_size.width) / 2.0, y + 35.0, 18.0, BLACK);

    if draw_button("Yes", x + 80.0, y + 65.0, 110.0, 30.0, false) {
        state.resolve_clear(true);
    } else if draw_button("No", x + 230.0, y + 65.0, 110.0, 30.0, false) {
        state.resolve_clear(false);
    }
}
