use macroquad::prelude::*;

use crate::picker::surface::PixelBuffer;
use crate::picker::ColorPicker;

fn upload(buffer: &PixelBuffer) -> Texture2D {
    let texture = Texture2D::from_rgba8(buffer.width, buffer.height, &buffer.bytes);
    texture.set_filter(FilterMode::Nearest);
    texture
}

/// GPU copies of the picker surfaces, re-uploaded when the hue changes
pub struct PickerTextures {
    square: Texture2D,
    square_revision: u64,
    hue_track: Texture2D,
}

impl PickerTextures {
    pub fn new(picker: &ColorPicker) -> Self {
        PickerTextures {
            square: upload(picker.square()),
            square_revision: picker.square_revision(),
            hue_track: upload(picker.hue_track()),
        }
    }

    pub fn update_if_needed(&mut self, picker: &ColorPicker) {
        if picker.square_revision() != self.square_revision {
            self.square = upload(picker.square());
            self.square_revision = picker.square_revision();
        }
    }

    pub fn draw_square(&self, origin: Vec2, picker: &ColorPicker) {
        draw_texture(&self.square, origin.x, origin.y, WHITE);

        let (cx, cy) = picker.square_cursor();
        draw_circle_lines(origin.x + cx, origin.y + cy, 6.0, 2.0, WHITE);
        draw_circle_lines(origin.x + cx, origin.y + cy, 7.0, 1.0, BLACK);
    }

    pub fn draw_hue_track(&self, origin: Vec2, picker: &ColorPicker) {
        draw_texture(&self.hue_track, origin.x, origin.y, WHITE);

        let width = picker.hue_track_size().0 as f32;
        let y = origin.y + picker.hue_cursor();
        draw_rectangle_lines(origin.x - 2.0, y - 3.0, width + 4.0, 6.0, 2.0, BLACK);
    }
}
