use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // 編輯
    Insert { position: usize, word: String },
    Append(String),
    Delete(usize),

    // 撤銷/重做
    Undo,
    Redo,

    // 文件操作，`None` 表示需要詢問檔名
    Save(Option<PathBuf>),
    Load(Option<PathBuf>),

    // 需要對話框補齊參數的編輯
    PromptInsert,
    PromptDelete,

    // 顯示
    Show,
    Status,
    ClearMessage,

    Quit,
}

impl Command {
    /// 會改變文件內容或歷史的命令
    pub fn changes_document(&self) -> bool {
        matches!(
            self,
            Command::Insert { .. }
                | Command::Append(_)
                | Command::Delete(_)
                | Command::Undo
                | Command::Redo
                | Command::Load(_)
        )
    }
}
