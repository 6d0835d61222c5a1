// 文件模型：以位置（從 1 開始）定址的單字序列

use std::fmt;

use crate::error::{EditError, EditResult};

/// 單一單字，非空且不含空白
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word(String);

impl Word {
    pub fn new(text: impl Into<String>) -> EditResult<Self> {
        let text = text.into();
        if text.is_empty() || text.chars().any(char::is_whitespace) {
            return Err(EditError::InvalidWord(text));
        }
        Ok(Self(text))
    }

    /// 建立單字並檢查長度上限（以字元計）
    pub fn with_limit(text: impl Into<String>, max_len: Option<usize>) -> EditResult<Self> {
        let word = Self::new(text)?;
        match max_len {
            Some(max) if word.char_len() > max => Err(EditError::WordTooLong { word: word.0, max }),
            _ => Ok(word),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    words: Vec<Word>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// 在 `position` 之前插入；`position <= 1` 插到最前，超過長度則附加到最後。
    /// 回傳實際落點。
    pub fn insert_at(&mut self, word: Word, position: usize) -> usize {
        let index = position.saturating_sub(1).min(self.words.len());
        self.words.insert(index, word);
        index + 1
    }

    /// 刪除 `position` 上的單字，位置必須在 `1..=len` 之內
    pub fn delete_at(&mut self, position: usize) -> EditResult<Word> {
        if position == 0 || position > self.words.len() {
            return Err(EditError::InvalidPosition {
                position,
                len: self.words.len(),
            });
        }
        Ok(self.words.remove(position - 1))
    }

    pub fn append(&mut self, word: Word) -> usize {
        self.words.push(word);
        self.words.len()
    }

    pub fn get(&self, position: usize) -> Option<&Word> {
        position.checked_sub(1).and_then(|i| self.words.get(i))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn clear(&mut self) {
        self.words.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(word.as_str())?;
        }
        Ok(())
    }
}
