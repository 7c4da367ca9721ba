pub mod brush;
pub mod canvas;
pub mod color;
pub mod constants;
pub mod export;
pub mod grid;

pub use canvas::*;
pub use color::*;
pub use constants::*;
pub use export::*;
