use macroquad::prelude::*;

use crate::core::*;

/// Replays the canvas' cached draw commands at a screen offset
pub struct CanvasRenderer {}

impl CanvasRenderer {
    pub fn new() -> Self {
        CanvasRenderer {}
    }

    pub fn draw(&self, canvas: &GridCanvas, origin: Vec2) {
        for command in canvas.frame() {
            match *command {
                DrawCommand::FillRect { x, y, size, color } => {
                    draw_rectangle(origin.x + x, origin.y + y, size, size, color.to_mq_color());
                }
                DrawCommand::Line { x0, y0, x1, y1, color } => {
                    // Half-pixel offset keeps 1px lines crisp
                    draw_line(
                        origin.x + x0 + 0.5,
                        origin.y + y0 + 0.5,
                        origin.x + x1 + 0.5,
                        origin.y + y1 + 0.5,
                        GRID_THICKNESS,
                        color.to_mq_color(),
                    );
                }
            }
        }
    }
}
