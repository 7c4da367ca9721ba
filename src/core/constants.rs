// Core constants for the pixel canvas
use super::color::Rgba;

pub const GRID_SIZES: [usize; 4] = [8, 16, 32, 64];
pub const DEFAULT_GRID_SIZE: usize = 16;

pub const BRUSH_SIZES: [usize; 4] = [1, 2, 3, 4];
pub const MAX_BRUSH_SIZE: usize = 4;

/// Largest rendered canvas edge in screen pixels
pub const MAX_CANVAS_PX: f32 = 600.0;
/// Cells never shrink below this, even if the canvas overflows
pub const MIN_CELL_PX: f32 = 2.0;

pub const GRID_THICKNESS: f32 = 1.0;

pub const BACKGROUND: Rgba = Rgba::rgb(255, 255, 255);
pub const GRIDLINE: Rgba = Rgba::rgb(0x40, 0x40, 0x40);
pub const DEFAULT_PAINT: Rgba = Rgba::rgb(0, 0, 0);

pub const RECENT_COLORS_CAPACITY: usize = 8;
pub const RECENT_COLORS_KEY: &str = "pixelEditorRecentColors";

// Picker surface dimensions
pub const PICKER_SQUARE_PX: u16 = 200;
pub const PICKER_HUE_TRACK_WIDTH: u16 = 20;
