//! Grid canvas controller.
//!
//! Owns the pixel grid, the brush and the active paint color, and turns them
//! into a flat list of draw commands. Nothing in here touches the window: the
//! rendering layer replays [`GridCanvas::frame`] and the input layer feeds
//! canvas-local pointer positions into [`GridCanvas::pointer_to_cell`].

use log::{debug, info};

use super::brush::Brush;
use super::color::Rgba;
use super::constants::*;
use super::grid::PixelGrid;

/// Visual parameters that stay fixed for the lifetime of a canvas
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CanvasSettings {
    pub background: Rgba,
    pub gridline: Rgba,
    pub max_canvas_px: f32,
    pub min_cell_px: f32,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        CanvasSettings {
            background: BACKGROUND,
            gridline: GRIDLINE,
            max_canvas_px: MAX_CANVAS_PX,
            min_cell_px: MIN_CELL_PX,
        }
    }
}

/// One primitive of a rendered canvas, in canvas-local pixels
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DrawCommand {
    FillRect { x: f32, y: f32, size: f32, color: Rgba },
    Line { x0: f32, y0: f32, x1: f32, y1: f32, color: Rgba },
}

/// Per-cell pixel size that fits `grid_size` cells into the viewport
pub fn fit_cell_size(grid_size: usize, available_px: f32, max_canvas_px: f32, min_cell_px: f32) -> f32 {
    let max_size = max_canvas_px.min(available_px);
    let cell = (max_size / grid_size.max(1) as f32).floor();
    // NaN and negative widths both land on the floor
    if cell >= min_cell_px {
        cell
    } else {
        min_cell_px
    }
}

pub struct GridCanvas {
    grid: PixelGrid,
    brush: Brush,
    color: Rgba,
    cell_size: f32,
    available_px: f32,
    settings: CanvasSettings,
    frame: Vec<DrawCommand>,
}

impl GridCanvas {
    pub fn new(grid_size: usize, available_px: f32, settings: CanvasSettings) -> Self {
        let mut canvas = GridCanvas {
            grid: PixelGrid::new(grid_size, settings.background),
            brush: Brush::default(),
            color: DEFAULT_PAINT,
            cell_size: settings.min_cell_px,
            available_px,
            settings,
            frame: Vec::new(),
        };
        canvas.set_grid_size(grid_size);
        canvas
    }

    pub fn grid(&self) -> &PixelGrid {
        &self.grid
    }

    pub fn grid_size(&self) -> usize {
        self.grid.size()
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Edge length of the rendered canvas in pixels
    pub fn canvas_px(&self) -> f32 {
        self.grid.size() as f32 * self.cell_size
    }

    pub fn brush(&self) -> Brush {
        self.brush
    }

    pub fn set_brush_size(&mut self, size: usize) {
        self.brush = Brush::new(size);
    }

    pub fn color(&self) -> Rgba {
        self.color
    }

    pub fn set_color(&mut self, color: Rgba) {
        self.color = color;
    }

    pub fn frame(&self) -> &[DrawCommand] {
        &self.frame
    }

    /// Replace the grid with a blank one of the given size. Drawing is lost.
    pub fn set_grid_size(&mut self, size: usize) {
        let size = size.max(1);
        self.grid = PixelGrid::new(size, self.settings.background);
        self.cell_size = self.fitted_cell_size();
        info!("grid reset to {size}x{size}, cell size {}px", self.cell_size);
        self.render();
    }

    /// Refit the canvas into a new viewport width; drawing is kept
    pub fn resize_viewport(&mut self, available_px: f32) {
        self.available_px = available_px;
        self.cell_size = self.fitted_cell_size();
        self.render();
    }

    pub fn clear(&mut self) {
        self.grid.fill(self.settings.background);
        info!("canvas cleared");
        self.render();
    }

    /// Map a canvas-local pointer position to cell coordinates, unclamped
    pub fn pointer_to_cell(&self, local_x: f32, local_y: f32) -> (i32, i32) {
        (
            (local_x / self.cell_size).floor() as i32,
            (local_y / self.cell_size).floor() as i32,
        )
    }

    /// Apply the brush at (x, y). Returns how many cells were written.
    pub fn paint(&mut self, x: i32, y: i32) -> usize {
        if !self.grid.contains(x, y) {
            return 0;
        }

        let color = self.color;
        let mut written = 0;
        for (px, py) in self.brush.footprint(x, y) {
            if self.grid.set(px, py, color) {
                written += 1;
            }
        }

        debug!("painted {written} cell(s) at ({x}, {y}) with {color}");
        self.render();
        written
    }

    /// Rebuild the cached frame: cells first, then gridlines on top
    pub fn render(&mut self) {
        let n = self.grid.size();
        let cs = self.cell_size;
        let extent = self.canvas_px();
        let gridline = self.settings.gridline;

        self.frame.clear();
        self.frame.reserve(n * n + 2 * (n + 1));

        for ((x, y), color) in self.grid.iter() {
            self.frame.push(DrawCommand::FillRect {
                x: x as f32 * cs,
                y: y as f32 * cs,
                size: cs,
                color,
            });
        }

        for i in 0..=n {
            let offset = i as f32 * cs;
            // Vertical line
            self.frame.push(DrawCommand::Line { x0: offset, y0: 0.0, x1: offset, y1: extent, color: gridline });
            // Horizontal line
            self.frame.push(DrawCommand::Line { x0: 0.0, y0: offset, x1: extent, y1: offset, color: gridline });
        }
    }

    fn fitted_cell_size(&self) -> f32 {
        fit_cell_size(
            self.grid.size(),
            self.available_px,
            self.settings.max_canvas_px,
            self.settings.min_cell_px,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba = Rgba::rgb(255, 0, 0);

    fn canvas(size: usize) -> GridCanvas {
        GridCanvas::new(size, 1000.0, CanvasSettings::default())
    }

    fn changed_cells(canvas: &GridCanvas) -> Vec<(i32, i32)> {
        canvas
            .grid()
            .iter()
            .filter(|(_, c)| *c != BACKGROUND)
            .map(|(xy, _)| xy)
            .collect()
    }

    #[test]
    fn cell_size_fits_viewport() {
        assert_eq!(fit_cell_size(16, 1000.0, 600.0, 2.0), 37.0);
        assert_eq!(fit_cell_size(16, 320.0, 600.0, 2.0), 20.0);
        assert_eq!(fit_cell_size(64, 100.0, 600.0, 2.0), 2.0);
        assert_eq!(fit_cell_size(8, -50.0, 600.0, 2.0), 2.0);
    }

    #[test]
    fn paint_single_cell_scenario() {
        let mut canvas = canvas(16);
        canvas.set_color(RED);
        assert_eq!(canvas.paint(0, 0), 1);

        assert_eq!(canvas.grid().get(0, 0), Some(RED));
        assert_eq!(changed_cells(&canvas), vec![(0, 0)]);
        assert_eq!(canvas.grid().iter().filter(|(_, c)| *c == BACKGROUND).count(), 255);
    }

    #[test]
    fn paint_out_of_bounds_is_noop() {
        let mut canvas = canvas(8);
        canvas.set_color(RED);
        canvas.set_brush_size(3);
        for (x, y) in [(-1, 0), (0, -1), (8, 3), (3, 8), (100, 100)] {
            assert_eq!(canvas.paint(x, y), 0);
        }
        assert!(changed_cells(&canvas).is_empty());
    }

    #[test]
    fn brush_is_clipped_at_edges() {
        let mut canvas = canvas(8);
        canvas.set_color(RED);
        canvas.set_brush_size(3);

        assert_eq!(canvas.paint(0, 0), 4);
        assert_eq!(changed_cells(&canvas), vec![(0, 0), (1, 0), (0, 1), (1, 1)]);

        assert_eq!(canvas.paint(4, 4), 9);
        assert_eq!(canvas.paint(7, 7), 4);
    }

    #[test]
    fn brush_never_exceeds_its_area() {
        for size in 1..=4 {
            for (x, y) in [(0, 0), (3, 3), (7, 0), (7, 7), (2, 6)] {
                let mut canvas = canvas(8);
                canvas.set_color(RED);
                canvas.set_brush_size(size);
                let written = canvas.paint(x, y);
                assert!(written <= size * size);
                assert_eq!(changed_cells(&canvas).len(), written);
            }
        }
    }

    #[test]
    fn even_brush_footprint_is_top_left_biased() {
        let mut canvas = canvas(8);
        canvas.set_color(RED);
        canvas.set_brush_size(2);
        canvas.paint(3, 3);
        assert_eq!(changed_cells(&canvas), vec![(2, 2), (3, 2), (2, 3), (3, 3)]);
    }

    #[test]
    fn set_grid_size_discards_drawing() {
        let mut canvas = canvas(16);
        canvas.set_color(RED);
        canvas.paint(5, 5);

        canvas.set_grid_size(32);
        assert_eq!(canvas.grid_size(), 32);
        assert_eq!(canvas.grid().iter().count(), 32 * 32);
        assert!(changed_cells(&canvas).is_empty());
    }

    #[test]
    fn clear_keeps_dimensions() {
        let mut canvas = canvas(8);
        canvas.set_color(RED);
        canvas.set_brush_size(4);
        canvas.paint(4, 4);
        canvas.clear();
        assert_eq!(canvas.grid_size(), 8);
        assert!(changed_cells(&canvas).is_empty());
    }

    #[test]
    fn pointer_mapping_is_unclamped() {
        let canvas = GridCanvas::new(16, 320.0, CanvasSettings::default());
        assert_eq!(canvas.cell_size(), 20.0);
        assert_eq!(canvas.pointer_to_cell(0.0, 0.0), (0, 0));
        assert_eq!(canvas.pointer_to_cell(39.9, 20.0), (1, 1));
        assert_eq!(canvas.pointer_to_cell(-0.5, 400.0), (-1, 20));
    }

    #[test]
    fn render_emits_cells_then_gridlines() {
        let mut canvas = GridCanvas::new(8, 160.0, CanvasSettings::default());
        canvas.set_color(RED);
        canvas.paint(2, 1);

        let frame = canvas.frame();
        assert_eq!(frame.len(), 64 + 2 * 9);
        assert!(frame[..64].iter().all(|c| matches!(c, DrawCommand::FillRect { size, .. } if *size == 20.0)));
        assert!(frame[64..].iter().all(|c| matches!(c, DrawCommand::Line { color, .. } if *color == GRIDLINE)));
        assert_eq!(frame[10], DrawCommand::FillRect { x: 40.0, y: 20.0, size: 20.0, color: RED });
        assert_eq!(
            frame.last(),
            Some(&DrawCommand::Line { x0: 0.0, y0: 160.0, x1: 160.0, y1: 160.0, color: GRIDLINE })
        );
    }

    #[test]
    fn viewport_resize_is_idempotent() {
        let mut canvas = canvas(16);
        canvas.set_color(RED);
        canvas.paint(1, 1);
        canvas.resize_viewport(320.0);
        let first = canvas.frame().to_vec();
        canvas.resize_viewport(320.0);
        assert_eq!(canvas.frame(), first.as_slice());
        assert_eq!(canvas.grid().get(1, 1), Some(RED));
    }
}
