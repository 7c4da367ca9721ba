use super::constants::MAX_BRUSH_SIZE;

/// Square brush. Even sizes lean toward the top/left of the target cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Brush {
    size: usize,
}

impl Default for Brush {
    fn default() -> Self {
        Brush { size: 1 }
    }
}

impl Brush {
    pub fn new(size: usize) -> Self {
        Brush {
            size: size.clamp(1, MAX_BRUSH_SIZE),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Every cell covered when the brush is centered on (x, y), unclipped
    pub fn footprint(&self, x: i32, y: i32) -> impl Iterator<Item = (i32, i32)> {
        let size = self.size as i32;
        let half = size / 2;
        (0..size).flat_map(move |dy| (0..size).map(move |dx| (x - half + dx, y - half + dy)))
    }
}
