use macroquad::prelude::*;

use crate::core::color::Rgba;

const SWATCH_SIZE: f32 = 28.0;
const SWATCH_PADDING: f32 = 6.0;
const SWATCHES_PER_ROW: usize = 8;

/// Draw a grid of hex swatches at (x, y).
/// Returns the clicked color, if any, and the height the grid took up.
pub fn render_swatches(colors: &[String], current: &str, x: f32, y: f32) -> (Option<String>, f32) {
    let mouse_pos = Vec2::from(mouse_position());
    let mut clicked = None;

    for (i, hex) in colors.iter().enumerate() {
        let Ok(color) = Rgba::from_hex(hex) else { continue };

        let col = i % SWATCHES_PER_ROW;
        let row = i / SWATCHES_PER_ROW;
        let sx = x + col as f32 * (SWATCH_SIZE + SWATCH_PADDING);
        let sy = y + row as f32 * (SWATCH_SIZE + SWATCH_PADDING);

        draw_rectangle(sx, sy, SWATCH_SIZE, SWATCH_SIZE, color.to_mq_color());

        // Highlight if this is the current color
        let selected = hex.eq_ignore_ascii_case(current);
        let (border_width, border_color) = if selected {
            (3.0, Color::from_rgba(255, 255, 0, 255))
        } else {
            (1.5, BLACK)
        };
        draw_rectangle_lines(sx, sy, SWATCH_SIZE, SWATCH_SIZE, border_width, border_color);

        let rect = Rect::new(sx, sy, SWATCH_SIZE, SWATCH_SIZE);
        if is_mouse_button_pressed(MouseButton::Left) && rect.contains(mouse_pos) {
            clicked = Some(hex.clone());
        }
    }

    let rows = colors.len().div_ceil(SWATCHES_PER_ROW);
    (clicked, rows as f32 * (SWATCH_SIZE + SWATCH_PADDING))
}
