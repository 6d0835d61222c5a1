mod handler;
mod keymap;
mod script;

pub use handler::Command;
pub use keymap::handle_key_event;
pub use script::parse_line;
