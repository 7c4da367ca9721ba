pub mod confirm;
pub mod palette;
pub mod picker_window;

pub use confirm::render_clear_prompt;
pub use picker_window::render_picker_window;
