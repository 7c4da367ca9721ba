//! Application State Module
//!
//! Composes the grid canvas, the color picker, the recent-colors list and the
//! stroke state machine. The picker reports confirmed colors over a channel
//! that is drained once per frame by [`ApplicationState::apply_picked_colors`].
//! Everything here takes plain values; window and input access stays in the
//! `input`, `ui` and `rendering` modules.

pub mod form;
pub mod recent;
pub mod stroke;

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};

use log::{info, warn};
use macroquad::prelude::Vec2;

use crate::config::EditorConfig;
use crate::core::*;
use crate::picker::ColorPicker;

pub use form::{ColorEntry, Field, PickerForm};
#[cfg(test)]
pub use recent::MemoryStore;
pub use recent::{FileStore, RecentColorStore, RecentColors};
pub use stroke::{PointerEvent, StrokeState};

/// Which picker control a drag started on
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PickerDrag {
    Square,
    Hue,
}

/// The main application state
pub struct ApplicationState {
    pub canvas: GridCanvas,
    pub picker: ColorPicker,
    pub picker_form: PickerForm,
    pub picker_drag: Option<PickerDrag>,
    pub color_entry: ColorEntry,
    pub recent: RecentColors,
    pub stroke: StrokeState,
    pub presets: Vec<Rgba>,
    /// Clear was requested and awaits confirmation
    pub confirm_clear: bool,
    /// Screen position of the canvas' top-left corner
    pub canvas_origin: Vec2,
    /// Last export outcome, shown in the status line
    pub status: Option<String>,
    panel_width: f32,
    export_dir: PathBuf,
    /// Set by `open_picker`, cleared by the picker's first frame
    picker_opened: bool,
    picked: Receiver<String>,
}

impl ApplicationState {
    /// Creates a new ApplicationState for a window `screen_width` pixels wide
    pub fn new(config: &EditorConfig, store: Box<dyn RecentColorStore>, screen_width: f32) -> Self {
        let (sender, picked) = mpsc::channel();
        let picker = ColorPicker::new(
            (PICKER_SQUARE_PX, PICKER_SQUARE_PX),
            (PICKER_HUE_TRACK_WIDTH, PICKER_SQUARE_PX),
            Box::new(move |hex| {
                // Receiver lives as long as the state that owns this picker
                let _ = sender.send(hex);
            }),
        );

        let canvas = GridCanvas::new(
            config.initial_grid_size(),
            screen_width - config.panel_width,
            config.canvas_settings(),
        );

        ApplicationState {
            canvas,
            picker,
            picker_form: PickerForm::default(),
            picker_drag: None,
            color_entry: ColorEntry::default(),
            recent: RecentColors::load(store),
            stroke: StrokeState::default(),
            presets: config.presets.clone(),
            confirm_clear: false,
            canvas_origin: Vec2::new(config.panel_width, 0.0),
            status: None,
            panel_width: config.panel_width,
            export_dir: config.export_dir(),
            picker_opened: false,
            picked,
        }
    }

    /// Make `hex` the paint color and remember it
    pub fn set_color(&mut self, hex: &str) {
        match hex.parse::<Rgba>() {
            Ok(color) => {
                self.canvas.set_color(color);
                self.recent.add(&color.to_hex());
            }
            Err(e) => warn!("ignoring paint color {hex:?}: {e}"),
        }
    }

    /// Make `hex` the paint color without adding it to the recent list
    pub fn preview_color(&mut self, hex: &str) {
        if let Ok(color) = hex.parse::<Rgba>() {
            self.canvas.set_color(color);
        }
    }

    /// Apply colors confirmed in the picker since the last call
    pub fn apply_picked_colors(&mut self) {
        while let Ok(hex) = self.picked.try_recv() {
            self.set_color(&hex);
        }
    }

    pub fn open_picker(&mut self) {
        let current = self.canvas.color().to_hex();
        self.picker.open(&current);
        self.picker_form = PickerForm::default();
        self.picker_form.sync_from(&self.picker);
        self.picker_drag = None;
        self.picker_opened = true;
    }

    /// True exactly once after `open_picker`. The input that opened the picker
    /// is still pending on that frame and must not reach the modal.
    pub fn take_picker_opened(&mut self) -> bool {
        std::mem::take(&mut self.picker_opened)
    }

    /// Start typing a hex color into the panel
    pub fn begin_color_entry(&mut self) {
        self.color_entry.begin(self.canvas.color());
    }

    pub fn type_color_char(&mut self, c: char) {
        if let Some(color) = self.color_entry.type_char(c) {
            self.preview_color(&color.to_hex());
        }
    }

    pub fn color_entry_backspace(&mut self) {
        if let Some(color) = self.color_entry.backspace() {
            self.preview_color(&color.to_hex());
        }
    }

    /// Finish typing: a complete color is committed, anything else is rolled back
    pub fn commit_color_entry(&mut self) {
        match self.color_entry.finish() {
            Some(Ok(color)) => self.set_color(&color.to_hex()),
            Some(Err(original)) => self.canvas.set_color(original),
            None => {}
        }
    }

    pub fn cancel_color_entry(&mut self) {
        if let Some(original) = self.color_entry.cancel() {
            self.canvas.set_color(original);
        }
    }

    pub fn set_grid_size(&mut self, size: usize) {
        self.stroke = StrokeState::Idle;
        self.canvas.set_grid_size(size);
    }

    /// Step to the next smaller (-1) or larger (+1) supported grid size
    pub fn step_grid_size(&mut self, direction: i32) {
        let current = GRID_SIZES
            .iter()
            .position(|&size| size == self.canvas.grid_size())
            .unwrap_or(1) as i32;
        let next = (current + direction).clamp(0, GRID_SIZES.len() as i32 - 1) as usize;
        if GRID_SIZES[next] != self.canvas.grid_size() {
            self.set_grid_size(GRID_SIZES[next]);
        }
    }

    pub fn set_brush_size(&mut self, size: usize) {
        self.canvas.set_brush_size(size);
    }

    pub fn request_clear(&mut self) {
        self.confirm_clear = true;
    }

    /// Answer the pending clear prompt
    pub fn resolve_clear(&mut self, accepted: bool) {
        if !self.confirm_clear {
            return;
        }
        self.confirm_clear = false;
        if accepted {
            self.canvas.clear();
        }
    }

    /// Feed canvas-local pointer activity through the stroke state machine
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        if let Some((x, y)) = self.stroke.handle(event) {
            let (cell_x, cell_y) = self.canvas.pointer_to_cell(x, y);
            self.canvas.paint(cell_x, cell_y);
        }
    }

    /// Whether a screen position lies over the rendered canvas
    pub fn over_canvas(&self, screen: Vec2) -> bool {
        let local = screen - self.canvas_origin;
        let extent = self.canvas.canvas_px();
        local.x >= 0.0 && local.y >= 0.0 && local.x < extent && local.y < extent
    }

    pub fn export(&mut self) {
        match save_png(self.canvas.grid(), &self.export_dir) {
            Ok(path) => self.status = Some(format!("Saved {}", path.display())),
            Err(e) => {
                warn!("export failed: {e}");
                self.status = Some(format!("Export failed: {e}"));
            }
        }
    }

    /// Refit the canvas after the window changed size
    pub fn resize(&mut self, screen_width: f32) {
        info!("viewport resized to {screen_width}px wide");
        self.canvas.resize_viewport(screen_width - self.panel_width);
    }

    #[cfg(test)]
    fn with_export_dir(mut self, dir: PathBuf) -> Self {
        self.export_dir = dir;
        self
    }
}
