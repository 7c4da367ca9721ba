use macroquad::prelude::*;

use crate::state::ApplicationState;

/// Outline the cells the brush would cover under the mouse
pub fn draw_brush_cursor(state: &ApplicationState, screen_mouse: Vec2) {
    if !state.over_canvas(screen_mouse) {
        return;
    }

    let canvas = &state.canvas;
    let local = screen_mouse - state.canvas_origin;
    let (cx, cy) = canvas.pointer_to_cell(local.x, local.y);
    let cell_size = canvas.cell_size();

    for (x, y) in canvas.brush().footprint(cx, cy) {
        if !canvas.grid().contains(x, y) {
            continue;
        }
        let sx = state.canvas_origin.x + x as f32 * cell_size;
        let sy = state.canvas_origin.y + y as f32 * cell_size;
        draw_rectangle(sx, sy, cell_size, cell_size, Color::new(0.0, 0.0, 0.0, 0.12));
    }

    // Highlight box around the target cell
    let target_x = state.canvas_origin.x + cx as f32 * cell_size;
    let target_y = state.canvas_origin.y + cy as f32 * cell_size;
    draw_rectangle_lines(target_x, target_y, cell_size, cell_size, 2.0, Color::from_rgba(0, 0, 0, 150));
}
