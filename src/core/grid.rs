use super::color::Rgba;

/// Square grid of opaque colors, stored row-major
#[derive(Clone, Debug, PartialEq)]
pub struct PixelGrid {
    size: usize,
    cells: Vec<Rgba>,
}

impl PixelGrid {
    pub fn new(size: usize, fill: Rgba) -> Self {
        PixelGrid {
            size,
            cells: vec![fill; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.size && (y as usize) < self.size
    }

    #[cfg(test)]
    pub fn get(&self, x: i32, y: i32) -> Option<Rgba> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Write one cell; returns false when (x, y) is off the grid
    pub fn set(&mut self, x: i32, y: i32, color: Rgba) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = color;
                true
            }
            None => false,
        }
    }

    pub fn fill(&mut self, color: Rgba) {
        self.cells.iter_mut().for_each(|cell| *cell = color);
    }

    /// Cells in row-major order as ((x, y), color)
    pub fn iter(&self) -> impl Iterator<Item = ((i32, i32), Rgba)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, color)| (((i % size) as i32, (i / size) as i32), *color))
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.contains(x, y) {
            Some(y as usize * self.size + x as usize)
        } else {
            None
        }
    }
}
