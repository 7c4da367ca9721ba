use std::fs;
use std::path::{Path, PathBuf};

use image::{ImageFormat, Rgba as Pixel, RgbaImage};
use log::info;

use super::grid::PixelGrid;
use crate::error::ExportError;

pub fn export_file_name(grid_size: usize) -> String {
    format!("pixel-art-{grid_size}x{grid_size}.png")
}

/// One pixel per cell, no gridlines
pub fn export_raster(grid: &PixelGrid) -> RgbaImage {
    let size = grid.size() as u32;
    let mut image = RgbaImage::new(size, size);
    for ((x, y), color) in grid.iter() {
        image.put_pixel(x as u32, y as u32, Pixel([color.r, color.g, color.b, color.a]));
    }
    image
}

/// Encode the grid as PNG into `dir`, returning the written path
pub fn save_png(grid: &PixelGrid, dir: &Path) -> Result<PathBuf, ExportError> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }

    let path = dir.join(export_file_name(grid.size()));
    export_raster(grid).save_with_format(&path, ImageFormat::Png)?;
    info!("exported {}x{} image to {}", grid.size(), grid.size(), path.display());
    Ok(path)
}
