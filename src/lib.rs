//! wordedit - 具備有限撤銷歷史的單字編輯器

pub mod buffer;
pub mod config;
pub mod editor;
pub mod error;
pub mod input;
pub mod utils;
pub mod view;

mod dialog;
mod terminal;

// 重新導出常用類型
pub use buffer::{Action, Document, History, Status, Word, WordBuffer};
pub use config::Config;
pub use editor::Editor;
pub use error::{EditError, StackKind};
