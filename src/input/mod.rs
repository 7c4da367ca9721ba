pub mod dispatcher;
pub mod tools;
pub mod ui;

pub use dispatcher::handle_input;
pub use tools::PointerTracker;
pub use ui::render_ui_buttons;
