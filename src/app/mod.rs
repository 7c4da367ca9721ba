// src/app/mod.rs
use log::info;
use macroquad::prelude::*;

use crate::config::EditorConfig;
use crate::input::{handle_input, render_ui_buttons, PointerTracker};
use crate::rendering::{draw_brush_cursor, CanvasRenderer, Hud, PickerTextures};
use crate::state::{ApplicationState, FileStore};
use crate::ui::{render_clear_prompt, render_picker_window};

pub async fn run(config: EditorConfig) {
    // Touches are handled explicitly so only the first finger paints
    simulate_mouse_with_touch(false);

    let store = FileStore::new(FileStore::default_path());
    let mut state = ApplicationState::new(&config, Box::new(store), screen_width());
    let mut tracker = PointerTracker::new();
    let canvas_renderer = CanvasRenderer::new();
    let mut picker_textures = PickerTextures::new(&state.picker);
    let mut hud = Hud::new();
    let mut screen_size = (screen_width(), screen_height());

    info!(
        "editor ready: {n}x{n} grid, {} recent color(s)",
        state.recent.colors().len(),
        n = state.canvas.grid_size()
    );

    loop {
        hud.update(get_frame_time());

        let current_size = (screen_width(), screen_height());
        if current_size != screen_size {
            screen_size = current_size;
            state.resize(current_size.0);
        }

        let modal_open = state.picker.is_visible() || state.confirm_clear;
        handle_input(&mut state, &mut tracker);

        clear_background(Color::from_rgba(245, 245, 245, 255));

        canvas_renderer.draw(&state.canvas, state.canvas_origin);
        if !modal_open {
            draw_brush_cursor(&state, Vec2::from(mouse_position()));
        }
        render_ui_buttons(&mut state, !modal_open);
        hud.draw(&state);

        render_picker_window(&mut state, &mut picker_textures);
        render_clear_prompt(&mut state);
        state.apply_picked_colors();

        next_frame().await
    }
}
