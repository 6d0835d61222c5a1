mod document;
mod history;
mod storage;
mod word_buffer;

pub use document::{Document, Word};
pub use history::{Action, History, DEFAULT_MAX_UNDO};
pub use word_buffer::{Status, WordBuffer};
