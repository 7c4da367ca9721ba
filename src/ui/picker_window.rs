use macroquad::prelude::*;

use crate::input::ui::{draw_button, draw_label};
use crate::rendering::PickerTextures;
use crate::state::{ApplicationState, Field, PickerDrag};

const WINDOW_WIDTH: f32 = 400.0;
const WINDOW_HEIGHT: f32 = 330.0;
const TITLE_BAR_HEIGHT: f32 = 25.0;
const FIELD_WIDTH: f32 = 80.0;
const FIELD_HEIGHT: f32 = 26.0;

struct Layout {
    window: Rect,
    close: Rect,
    square: Rect,
    hue: Rect,
    preview: Rect,
}

impl Layout {
    fn centered(state: &ApplicationState) -> Self {
        let x = ((screen_width() - WINDOW_WIDTH) / 2.0).max(0.0);
        let y = ((screen_height() - WINDOW_HEIGHT) / 2.0).max(0.0);
        Self::at(x, y, state)
    }

    fn at(x: f32, y: f32, state: &ApplicationState) -> Self {
        let (sw, sh) = state.picker.square_size();
        let (hw, hh) = state.picker.hue_track_size();
        let content_y = y + TITLE_BAR_HEIGHT + 15.0;

        Layout {
            window: Rect::new(x, y, WINDOW_WIDTH, WINDOW_HEIGHT),
            close: Rect::new(x + WINDOW_WIDTH - 25.0, y, 25.0, TITLE_BAR_HEIGHT),
            square: Rect::new(x + 15.0, content_y, sw as f32, sh as f32),
            hue: Rect::new(x + 30.0 + sw as f32, content_y, hw as f32, hh as f32),
            preview: Rect::new(x + 60.0 + (sw + hw) as f32, content_y, FIELD_WIDTH + 30.0, 40.0),
        }
    }

    fn field(&self, index: usize) -> Rect {
        Rect::new(
            self.preview.x + 30.0,
            self.preview.y + 55.0 + index as f32 * (FIELD_HEIGHT + 10.0),
            FIELD_WIDTH,
            FIELD_HEIGHT,
        )
    }
}

/// Draw the picker modal and route mouse and keyboard input into it
pub fn render_picker_window(state: &mut ApplicationState, textures: &mut PickerTextures) {
    if !state.picker.is_visible() {
        return;
    }

    let layout = Layout::centered(state);
    let mouse_pos = Vec2::from(mouse_position());

    if state.take_picker_opened() {
        // Drop the click or key that opened the picker
        while get_char_pressed().is_some() {}
    } else {
        handle_mouse(state, &layout, mouse_pos);
        if !state.picker.is_visible() {
            return;
        }
        handle_keys(state);
        if !state.picker.is_visible() {
            return;
        }
    }

    textures.update_if_needed(&state.picker);

    // Backdrop
    draw_rectangle(0.0, 0.0, screen_width(), screen_height(), Color::new(0.0, 0.0, 0.0, 0.45));

    let w = layout.window;
    draw_rectangle(w.x, w.y, w.w, TITLE_BAR_HEIGHT, Color::from_rgba(80, 80, 150, 255));
    draw_text("Pick a color", w.x + 10.0, w.y + 18.0, 18.0, WHITE);
    draw_text("x", layout.close.x + 8.0, w.y + 18.0, 20.0, WHITE);
    draw_rectangle(w.x, w.y + TITLE_BAR_HEIGHT, w.w, w.h - TITLE_BAR_HEIGHT, Color::from_rgba(230, 230, 230, 255));
    draw_rectangle_lines(w.x, w.y, w.w, w.h, 2.0, BLACK);

    textures.draw_square(layout.square.point(), &state.picker);
    textures.draw_hue_track(layout.hue.point(), &state.picker);

    let p = layout.preview;
    draw_rectangle(p.x, p.y, p.w, p.h, state.picker.rgb().to_mq_color());
    draw_rectangle_lines(p.x, p.y, p.w, p.h, 2.0, BLACK);

    for (i, field) in Field::ALL.into_iter().enumerate() {
        let rect = layout.field(i);
        draw_label(field.label(), rect.x - 30.0, rect.y + 18.0);
        draw_rectangle(rect.x, rect.y, rect.w, rect.h, WHITE);
        let focused = state.picker_form.focus == Some(field);
        let border = if focused { Color::from_rgba(80, 80, 150, 255) } else { BLACK };
        draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, if focused { 2.5 } else { 1.0 }, border);
        draw_text(state.picker_form.text(field), rect.x + 5.0, rect.y + 18.0, 18.0, BLACK);
    }

    let hsv = state.picker.hsv();
    draw_text(
        &format!("H {:.0} S {:.0} V {:.0}", hsv.h, hsv.s, hsv.v),
        p.x,
        layout.field(Field::ALL.len()).y + 14.0,
        16.0,
        DARKGRAY,
    );

    let button_y = w.y + w.h - 45.0;
    if draw_button("Apply", w.x + 15.0, button_y, 100.0, 30.0, false) {
        state.picker.confirm_selection();
    } else if draw_button("Cancel", w.x + 125.0, button_y, 100.0, 30.0, false) {
        state.picker.cancel();
    }
}

fn handle_mouse(state: &mut ApplicationState, layout: &Layout, mouse_pos: Vec2) {
    if is_mouse_button_pressed(MouseButton::Left) {
        handle_press(state, layout, mouse_pos);
        if !state.picker.is_visible() {
            return;
        }
    }

    if is_mouse_button_down(MouseButton::Left) {
        match state.picker_drag {
            Some(PickerDrag::Square) => {
                let local = mouse_pos - layout.square.point();
                state.picker.update_from_square(local.x, local.y);
                state.picker_form.sync_from(&state.picker);
            }
            Some(PickerDrag::Hue) => {
                state.picker.update_from_hue(mouse_pos.y - layout.hue.y);
                state.picker_form.sync_from(&state.picker);
            }
            None => {}
        }
    }

    if is_mouse_button_released(MouseButton::Left) {
        state.picker_drag = None;
    }
}

fn handle_press(state: &mut ApplicationState, layout: &Layout, mouse_pos: Vec2) {
    if !layout.window.contains(mouse_pos) || layout.close.contains(mouse_pos) {
        // Backdrop or close button dismisses without committing
        state.picker.cancel();
        return;
    }

    state.picker_drag = if layout.square.contains(mouse_pos) {
        Some(PickerDrag::Square)
    } else if layout.hue.contains(mouse_pos) {
        Some(PickerDrag::Hue)
    } else {
        None
    };
    state.picker_form.focus = Field::ALL
        .into_iter()
        .enumerate()
        .find(|(i, _)| layout.field(*i).contains(mouse_pos))
        .map(|(_, field)| field);
}

fn handle_keys(state: &mut ApplicationState) {
    if is_key_pressed(KeyCode::Escape) {
        state.picker.cancel();
        return;
    }
    if is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::KpEnter) {
        state.picker.confirm_selection();
        return;
    }
    if is_key_pressed(KeyCode::Tab) {
        let next = match state.picker_form.focus {
            Some(current) => {
                let i = Field::ALL.iter().position(|f| *f == current).unwrap_or(0);
                Field::ALL[(i + 1) % Field::ALL.len()]
            }
            None => Field::Hex,
        };
        state.picker_form.focus = Some(next);
        return;
    }
    if is_key_pressed(KeyCode::Backspace) {
        state.picker_form.backspace(&mut state.picker);
    }
    while let Some(c) = get_char_pressed() {
        state.picker_form.type_char(c, &mut state.picker);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EditorConfig;
    use crate::state::MemoryStore;

    fn state() -> ApplicationState {
        ApplicationState::new(&EditorConfig::default(), Box::new(MemoryStore::default()), 1040.0)
    }

    /// One frame of picker input with a left press at `pos`
    fn press_frame(state: &mut ApplicationState, layout: &Layout, pos: Vec2) {
        if !state.take_picker_opened() {
            handle_press(state, layout, pos);
        }
    }

    #[test]
    fn press_that_opened_the_picker_is_not_a_dismissal() {
        let mut state = state();
        let layout = Layout::at(320.0, 195.0, &state);
        let pick_button = Vec2::new(200.0, 190.0);
        assert!(!layout.window.contains(pick_button));

        state.open_picker();
        press_frame(&mut state, &layout, pick_button);
        assert!(state.picker.is_visible());

        press_frame(&mut state, &layout, pick_button);
        assert!(!state.picker.is_visible());
    }

    #[test]
    fn close_button_dismisses() {
        let mut state = state();
        let layout = Layout::at(0.0, 0.0, &state);
        state.open_picker();
        state.take_picker_opened();

        handle_press(&mut state, &layout, layout.close.center());
        assert!(!state.picker.is_visible());
    }

    #[test]
    fn press_picks_drag_target_and_field() {
        let mut state = state();
        let layout = Layout::at(0.0, 0.0, &state);
        state.open_picker();

        handle_press(&mut state, &layout, layout.square.center());
        assert_eq!(state.picker_drag, Some(PickerDrag::Square));
        assert_eq!(state.picker_form.focus, None);

        handle_press(&mut state, &layout, layout.hue.center());
        assert_eq!(state.picker_drag, Some(PickerDrag::Hue));

        handle_press(&mut state, &layout, layout.field(2).center());
        assert_eq!(state.picker_drag, None);
        assert_eq!(state.picker_form.focus, Some(Field::Green));
        assert!(state.picker.is_visible());
    }
}
