// 撤銷/重做歷史管理

use std::collections::VecDeque;

use super::document::{Document, Word};
use crate::error::{EditError, EditResult, StackKind};

pub const DEFAULT_MAX_UNDO: usize = 5;

/// 一次已完成的編輯，建立後不再修改
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Insert { position: usize, word: Word },
    Delete { position: usize, word: Word },
}

impl Action {
    pub fn position(&self) -> usize {
        match self {
            Action::Insert { position, .. } | Action::Delete { position, .. } => *position,
        }
    }

    pub fn word(&self) -> &Word {
        match self {
            Action::Insert { word, .. } | Action::Delete { word, .. } => word,
        }
    }

    /// 反向套用（撤銷）
    fn revert(&self, document: &mut Document) -> EditResult<()> {
        match self {
            // 只信任位置，不比對該位置上的內容
            Action::Insert { position, .. } => document.delete_at(*position).map(drop),
            Action::Delete { position, word } => {
                document.insert_at(word.clone(), *position);
                Ok(())
            }
        }
    }

    /// 重新套用（重做）
    fn replay(&self, document: &mut Document) -> EditResult<()> {
        match self {
            Action::Insert { position, word } => {
                document.insert_at(word.clone(), *position);
                Ok(())
            }
            Action::Delete { position, .. } => document.delete_at(*position).map(drop),
        }
    }
}

pub struct History {
    undo_stack: VecDeque<Action>,
    redo_stack: Vec<Action>,
    max_undo: usize,
}

impl History {
    pub fn new(max_undo: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            max_undo: max_undo.max(1),
        }
    }

    pub fn record_insert(&mut self, word: Word, position: usize) {
        self.record(Action::Insert { position, word });
    }

    pub fn record_delete(&mut self, word: Word, position: usize) {
        self.record(Action::Delete { position, word });
    }

    fn record(&mut self, action: Action) {
        self.push_undo(action);
        if !self.redo_stack.is_empty() {
            log::debug!("new edit discards {} redo entries", self.redo_stack.len());
        }
        self.redo_stack.clear();
    }

    // 滿了就先丟掉最舊的一筆
    fn push_undo(&mut self, action: Action) {
        if self.undo_stack.len() >= self.max_undo {
            if let Some(evicted) = self.undo_stack.pop_front() {
                log::debug!("undo history full, evicting {:?}", evicted);
            }
        }
        self.undo_stack.push_back(action);
    }

    /// 撤銷最近一次編輯，回傳被撤銷的動作
    pub fn undo(&mut self, document: &mut Document) -> EditResult<Action> {
        let action = self
            .undo_stack
            .pop_back()
            .ok_or(EditError::EmptyHistory(StackKind::Undo))?;

        if let Err(e) = action.revert(document) {
            self.undo_stack.push_back(action);
            return Err(e);
        }

        // 推入重做堆疊不會淘汰任何項目
        self.redo_stack.push(action.clone());
        Ok(action)
    }

    /// 重做最近一次撤銷，推回撤銷堆疊時可能淘汰最舊的項目
    pub fn redo(&mut self, document: &mut Document) -> EditResult<Action> {
        let action = self
            .redo_stack
            .pop()
            .ok_or(EditError::EmptyHistory(StackKind::Redo))?;

        if let Err(e) = action.replay(document) {
            self.redo_stack.push(action);
            return Err(e);
        }

        self.push_undo(action.clone());
        Ok(action)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn max_undo(&self) -> usize {
        self.max_undo
    }

    /// 最新的撤銷項目在前
    pub fn undo_entries(&self) -> impl Iterator<Item = &Action> {
        self.undo_stack.iter().rev()
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_UNDO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn w(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn insert(doc: &mut Document, history: &mut History, s: &str, position: usize) {
        let at = doc.insert_at(w(s), position);
        history.record_insert(w(s), at);
    }

    #[test]
    fn test_undo_redo_scenario() {
        let mut doc = Document::new();
        let mut history = History::default();

        insert(&mut doc, &mut history, "a", 1);
        insert(&mut doc, &mut history, "b", 2);
        insert(&mut doc, &mut history, "c", 3);
        assert_eq!(doc.to_string(), "a b c");

        history.undo(&mut doc).unwrap();
        assert_eq!(doc.to_string(), "a b");
        assert_eq!(history.redo_len(), 1);

        history.undo(&mut doc).unwrap();
        assert_eq!(doc.to_string(), "a");

        history.redo(&mut doc).unwrap();
        assert_eq!(doc.to_string(), "a b");

        insert(&mut doc, &mut history, "x", 1);
        assert_eq!(doc.to_string(), "x a b");
        assert!(matches!(
            history.redo(&mut doc),
            Err(EditError::EmptyHistory(StackKind::Redo))
        ));
        assert_eq!(doc.to_string(), "x a b");
    }

    #[test]
    fn test_undo_delete_restores_word_in_place() {
        let mut doc = Document::new();
        let mut history = History::default();
        for (i, s) in ["a", "b", "c"].iter().enumerate() {
            insert(&mut doc, &mut history, s, i + 1);
        }

        let removed = doc.delete_at(2).unwrap();
        history.record_delete(removed, 2);
        assert_eq!(doc.to_string(), "a c");

        let action = history.undo(&mut doc).unwrap();
        assert_eq!(action, Action::Delete { position: 2, word: w("b") });
        assert_eq!(doc.to_string(), "a b c");

        history.redo(&mut doc).unwrap();
        assert_eq!(doc.to_string(), "a c");
    }

    #[test]
    fn test_round_trip_within_capacity() {
        let mut doc = Document::new();
        let mut history = History::new(5);
        insert(&mut doc, &mut history, "base", 1);
        let words = ["q", "w", "e", "r"];
        for (i, s) in words.iter().enumerate() {
            insert(&mut doc, &mut history, s, i % 2 + 1);
        }
        let after = doc.clone();

        for _ in 0..words.len() {
            history.undo(&mut doc).unwrap();
        }
        assert_eq!(doc.to_string(), "base");
        for _ in 0..words.len() {
            history.redo(&mut doc).unwrap();
        }
        assert_eq!(doc, after);
    }

    #[test]
    fn test_bounded_eviction_loses_oldest_edits() {
        let mut doc = Document::new();
        let mut history = History::new(5);
        let words = ["1", "2", "3", "4", "5", "6", "7"];
        for (i, s) in words.iter().enumerate() {
            insert(&mut doc, &mut history, s, i + 1);
        }
        assert_eq!(history.undo_len(), 5);

        for _ in 0..5 {
            history.undo(&mut doc).unwrap();
        }
        // 前兩筆編輯已被淘汰，無法再撤銷
        assert_eq!(doc.to_string(), "1 2");
        assert!(history.undo(&mut doc).unwrap_err().is_empty_history());
        assert_eq!(doc.to_string(), "1 2");
    }

    #[test]
    fn test_oldest_entry_is_the_one_evicted() {
        let mut doc = Document::new();
        let mut history = History::new(2);
        insert(&mut doc, &mut history, "a", 1);
        insert(&mut doc, &mut history, "b", 2);
        insert(&mut doc, &mut history, "c", 3);

        let positions: Vec<usize> = history.undo_entries().map(Action::position).collect();
        assert_eq!(positions, vec![3, 2]);
    }

    #[test]
    fn test_redo_invalidated_by_new_edit() {
        let mut doc = Document::new();
        let mut history = History::default();
        insert(&mut doc, &mut history, "a", 1);
        insert(&mut doc, &mut history, "b", 2);
        history.undo(&mut doc).unwrap();
        assert!(history.can_redo());

        let removed = doc.delete_at(1).unwrap();
        history.record_delete(removed, 1);
        assert!(!history.can_redo());
        assert!(history.redo(&mut doc).is_err());
    }

    #[test]
    fn test_empty_history_is_noop() {
        let mut doc = Document::new();
        doc.append(w("keep"));
        let mut history = History::default();

        assert!(matches!(
            history.undo(&mut doc),
            Err(EditError::EmptyHistory(StackKind::Undo))
        ));
        assert!(matches!(
            history.redo(&mut doc),
            Err(EditError::EmptyHistory(StackKind::Redo))
        ));
        assert_eq!(doc.to_string(), "keep");
    }

    #[test]
    fn test_failed_revert_keeps_action_on_undo_stack() {
        let mut doc = Document::new();
        let mut history = History::default();
        // 歷史指向一個已不存在的位置
        history.record_insert(w("ghost"), 4);

        assert!(matches!(
            history.undo(&mut doc),
            Err(EditError::InvalidPosition { position: 4, len: 0 })
        ));
        assert_eq!(history.undo_len(), 1);
        assert_eq!(history.redo_len(), 0);
    }

    #[test]
    fn test_undo_redo_oscillation_stays_bounded() {
        let mut doc = Document::new();
        let mut history = History::new(3);
        for (i, s) in ["a", "b", "c"].iter().enumerate() {
            insert(&mut doc, &mut history, s, i + 1);
        }
        // 撤銷數 + 重做數不會超過上限，所以這裡只驗證上限，觀察不到重做時的淘汰
        for _ in 0..10 {
            history.undo(&mut doc).unwrap();
            history.redo(&mut doc).unwrap();
            assert!(history.undo_len() <= history.max_undo());
        }
        assert_eq!(doc.to_string(), "a b c");
    }

    #[test]
    fn test_clear_empties_both_stacks() {
        let mut doc = Document::new();
        let mut history = History::default();
        insert(&mut doc, &mut history, "a", 1);
        insert(&mut doc, &mut history, "b", 2);
        history.undo(&mut doc).unwrap();

        history.clear();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_zero_capacity_is_raised_to_one() {
        let history = History::new(0);
        assert_eq!(history.max_undo(), 1);
    }
}
