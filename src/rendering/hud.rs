use macroquad::prelude::*;

use crate::state::ApplicationState;

pub struct Hud {
    fps: i32,
    accum_time: f32,
    accum_frames: i32,
}

impl Hud {
    pub fn new() -> Self {
        Hud {
            fps: 0,
            accum_time: 0.0,
            accum_frames: 0,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.accum_time += dt;
        self.accum_frames += 1;
        if self.accum_time >= 1.0 {
            self.fps = (self.accum_frames as f32 / self.accum_time).round() as i32;
            self.accum_time = 0.0;
            self.accum_frames = 0;
        }
    }

    pub fn draw(&self, state: &ApplicationState) {
        let y_start = screen_height() - 60.0;
        let line_height = 20.0;
        let canvas = &state.canvas;

        let summary = format!(
            "Grid: {n}x{n}  Brush: {}  Color: {}  FPS: {}",
            canvas.brush().size(),
            canvas.color(),
            self.fps,
            n = canvas.grid_size(),
        );
        draw_text(&summary, 10.0, y_start, 18.0, BLACK);

        if let Some(status) = &state.status {
            draw_text(status, 10.0, y_start + line_height, 18.0, DARKGRAY);
        }
    }
}
