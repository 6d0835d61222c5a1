// 核心編輯錯誤

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// 歷史堆疊種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackKind {
    Undo,
    Redo,
}

impl fmt::Display for StackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StackKind::Undo => write!(f, "undo"),
            StackKind::Redo => write!(f, "redo"),
        }
    }
}

#[derive(Debug, Error)]
pub enum EditError {
    #[error("Nothing to {0}")]
    EmptyHistory(StackKind),

    #[error("No word at position {position} (document has {len} words)")]
    InvalidPosition { position: usize, len: usize },

    #[error("Invalid word {0:?}: words must be non-empty and contain no whitespace")]
    InvalidWord(String),

    #[error("Word {word:?} is longer than {max} characters")]
    WordTooLong { word: String, max: usize },

    #[error("No file name given")]
    NoFilePath,

    #[error("Cannot access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl EditError {
    /// 歷史為空屬於無操作，不是真正的失敗
    pub fn is_empty_history(&self) -> bool {
        matches!(self, EditError::EmptyHistory(_))
    }
}

pub type EditResult<T> = std::result::Result<T, EditError>;
