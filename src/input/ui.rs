use macroquad::prelude::*;

use crate::core::constants::{BRUSH_SIZES, GRID_SIZES};
use crate::state::ApplicationState;
use crate::ui::palette::render_swatches;

pub const PANEL_MARGIN: f32 = 10.0;

pub fn draw_button(text: &str, x: f32, y: f32, width: f32, height: f32, is_active: bool) -> bool {
    let color = if is_active { DARKGRAY } else { GRAY };
    let rect = Rect::new(x, y, width, height);
    draw_rectangle(x, y, width, height, color);
    draw_rectangle_lines(x, y, width, height, 2.0, BLACK);
    let text_size = measure_text(text, None, 20, 1.0);
    let text_x = x + (width - text_size.width) / 2.0;
    let text_y = y + (height + text_size.height) / 2.0;
    draw_text(text, text_x, text_y, 20.0, BLACK);
    is_mouse_button_pressed(MouseButton::Left) && rect.contains(Vec2::from(mouse_position()))
}

pub fn draw_label(text: &str, x: f32, y: f32) {
    draw_text(text, x, y, 18.0, BLACK);
}

/// Side panel with every tool control. Clicks are ignored while `enabled` is false.
pub fn render_ui_buttons(state: &mut ApplicationState, enabled: bool) {
    let x = PANEL_MARGIN;
    let mut y = 24.0;
    let pressed = enabled && is_mouse_button_pressed(MouseButton::Left);
    let mouse_pos = Vec2::from(mouse_position());

    // Grid size selector
    draw_label("Canvas size (clears drawing)", x, y);
    y += 8.0;
    for (i, &size) in GRID_SIZES.iter().enumerate() {
        let bx = x + i as f32 * 70.0;
        let active = state.canvas.grid_size() == size;
        if draw_button(&format!("{size}"), bx, y, 60.0, 30.0, active) && enabled && !active {
            state.set_grid_size(size);
        }
    }
    y += 60.0;

    // Brush size selector
    draw_label("Brush size", x, y);
    y += 8.0;
    for (i, &size) in BRUSH_SIZES.iter().enumerate() {
        let bx = x + i as f32 * 50.0;
        let active = state.canvas.brush().size() == size;
        if draw_button(&format!("{size}"), bx, y, 40.0, 30.0, active) && enabled {
            state.set_brush_size(size);
        }
    }
    y += 60.0;

    // Current color and picker launcher
    draw_label("Color", x, y);
    y += 8.0;
    draw_rectangle(x, y, 40.0, 40.0, state.canvas.color().to_mq_color());
    draw_rectangle_lines(x, y, 40.0, 40.0, 3.0, BLACK);
    let entry_rect = Rect::new(x + 48.0, y + 8.0, 84.0, 24.0);
    if pressed {
        if entry_rect.contains(mouse_pos) {
            state.begin_color_entry();
        } else if state.color_entry.is_active() {
            state.commit_color_entry();
        }
    }
    draw_color_entry(state, entry_rect);
    if draw_button("Pick color", x + 140.0, y + 5.0, 120.0, 30.0, state.picker.is_visible()) && enabled {
        state.open_picker();
    }
    y += 70.0;

    draw_label("Presets", x, y);
    y += 8.0;
    let presets: Vec<String> = state.presets.iter().map(|c| c.to_hex()).collect();
    let (clicked, height) = render_swatches(&presets, &state.canvas.color().to_hex(), x, y);
    if let Some(hex) = clicked.filter(|_| enabled) {
        state.set_color(&hex);
    }
    y += height + 24.0;

    draw_label("Recent colors", x, y);
    y += 8.0;
    if state.recent.is_empty() {
        draw_text("No recent colors yet", x, y + 18.0, 16.0, DARKGRAY);
        y += 30.0;
    } else {
        let recent = state.recent.colors().to_vec();
        let (clicked, height) = render_swatches(&recent, &state.canvas.color().to_hex(), x, y);
        if let Some(hex) = clicked.filter(|_| enabled) {
            state.set_color(&hex);
        }
        y += height;
    }
    y += 20.0;

    if draw_button("Clear", x, y, 120.0, 30.0, state.confirm_clear) && enabled {
        state.request_clear();
    }
    if draw_button("Export PNG", x + 130.0, y, 130.0, 30.0, false) && enabled {
        state.export();
    }
}

/// Current hex, editable in place; the border highlights while typing
fn draw_color_entry(state: &ApplicationState, rect: Rect) {
    let (text, border, thickness) = if state.color_entry.is_active() {
        (state.color_entry.text().to_string(), Color::from_rgba(80, 80, 150, 255), 2.5)
    } else {
        (state.canvas.color().to_hex(), GRAY, 1.0)
    };
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, WHITE);
    draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, thickness, border);
    draw_text(&text, rect.x + 4.0, rect.y + 18.0, 18.0, BLACK);
}
