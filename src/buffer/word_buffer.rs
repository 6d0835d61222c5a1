use std::path::{Path, PathBuf};

use super::document::{Document, Word};
use super::history::{Action, History};
use super::storage;
use crate::config::Config;
use crate::error::{EditError, EditResult};

/// 顯示用的狀態摘要
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    pub word_count: usize,
    pub undo_count: usize,
    pub undo_capacity: usize,
    pub redo_count: usize,
}

/// 一個編輯工作階段：文件、歷史與檔案狀態
pub struct WordBuffer {
    document: Document,
    history: History,
    file_path: Option<PathBuf>,
    modified: bool,
    max_word_len: Option<usize>,
}

impl WordBuffer {
    pub fn new(config: &Config) -> Self {
        Self {
            document: Document::new(),
            history: History::new(config.max_undo),
            file_path: None,
            modified: false,
            max_word_len: config.max_word_len,
        }
    }

    /// 開啟文件；文件不存在時建立空緩衝區並記住路徑
    pub fn from_file(path: &Path, config: &Config) -> EditResult<Self> {
        let mut buffer = Self::new(config);
        if path.exists() {
            buffer.load(path)?;
        } else {
            buffer.file_path = Some(path.to_path_buf());
        }
        Ok(buffer)
    }

    fn make_word(&self, text: &str) -> EditResult<Word> {
        Word::with_limit(text, self.max_word_len)
    }

    /// 插入一個單字並記錄到歷史，回傳實際位置
    pub fn insert(&mut self, text: &str, position: usize) -> EditResult<usize> {
        let word = self.make_word(text)?;
        let at = self.document.insert_at(word.clone(), position);
        log::debug!("insert {:?} at {} (requested {})", word.as_str(), at, position);
        self.history.record_insert(word, at);
        self.modified = true;
        Ok(at)
    }

    pub fn append(&mut self, text: &str) -> EditResult<usize> {
        self.insert(text, self.document.len() + 1)
    }

    pub fn delete(&mut self, position: usize) -> EditResult<Word> {
        let word = self.document.delete_at(position)?;
        log::debug!("delete {:?} at {}", word.as_str(), position);
        self.history.record_delete(word.clone(), position);
        self.modified = true;
        Ok(word)
    }

    /// 以一行輸入建立初始內容，每個單字都可撤銷
    pub fn seed(&mut self, line: &str) -> EditResult<usize> {
        let words = line
            .split_whitespace()
            .map(|token| self.make_word(token))
            .collect::<EditResult<Vec<_>>>()?;

        let count = words.len();
        for word in words {
            let at = self.document.append(word.clone());
            self.history.record_insert(word, at);
        }
        if count > 0 {
            self.modified = true;
        }
        Ok(count)
    }

    // 撤銷/重做方法
    pub fn undo(&mut self) -> EditResult<Action> {
        let action = self.history.undo(&mut self.document)?;
        log::debug!("undo {:?}", action);
        self.modified = true;
        Ok(action)
    }

    pub fn redo(&mut self) -> EditResult<Action> {
        let action = self.history.redo(&mut self.document)?;
        log::debug!("redo {:?}", action);
        self.modified = true;
        Ok(action)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// 載入文件：先完整讀取，成功後才清空文件與兩個歷史堆疊
    pub fn load(&mut self, path: &Path) -> EditResult<usize> {
        let words = storage::read_words(path, self.max_word_len)?;

        self.document.clear();
        self.history.clear();
        for word in words {
            self.document.append(word);
        }

        self.file_path = Some(path.to_path_buf());
        self.modified = false;
        log::debug!("loaded {} words from {}", self.document.len(), path.display());
        Ok(self.document.len())
    }

    pub fn save(&mut self) -> EditResult<()> {
        let path = self.file_path.clone().ok_or(EditError::NoFilePath)?;
        self.save_to(&path)
    }

    pub fn save_to(&mut self, path: &Path) -> EditResult<()> {
        storage::write_words(path, self.document.iter())?;
        self.file_path = Some(path.to_path_buf());
        self.modified = false;
        log::debug!("saved {} words to {}", self.document.len(), path.display());
        Ok(())
    }

    /// 結束工作階段時釋放所有內容
    pub fn clear(&mut self) {
        self.document.clear();
        self.history.clear();
    }

    pub fn status(&self) -> Status {
        Status {
            word_count: self.document.len(),
            undo_count: self.history.undo_len(),
            undo_capacity: self.history.max_undo(),
            redo_count: self.history.redo_len(),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn file_name(&self) -> String {
        self.file_path
            .as_ref()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
            .unwrap_or("[No Name]")
            .to_string()
    }
}

impl Default for WordBuffer {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
