// 純文字存取：以空白分隔的單字

use std::fs;
use std::path::Path;

use super::document::Word;
use crate::error::{EditError, EditResult};

/// 檢測文件編碼，基於 BOM
fn detect_encoding(bytes: &[u8]) -> (&'static encoding_rs::Encoding, usize) {
    if bytes.starts_with(&[0xEF, 0xBB, 0xBF]) {
        (encoding_rs::UTF_8, 3)
    } else if bytes.starts_with(&[0xFF, 0xFE]) {
        (encoding_rs::UTF_16LE, 2)
    } else if bytes.starts_with(&[0xFE, 0xFF]) {
        (encoding_rs::UTF_16BE, 2)
    } else {
        // 無 BOM，預設 UTF-8
        (encoding_rs::UTF_8, 0)
    }
}

/// 讀取並驗證所有單字；任何一個不合法就整批失敗
pub fn read_words(path: &Path, max_word_len: Option<usize>) -> EditResult<Vec<Word>> {
    let bytes = fs::read(path).map_err(|source| EditError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let (encoding, bom_length) = detect_encoding(&bytes);
    let (decoded, had_errors) = encoding.decode_without_bom_handling(&bytes[bom_length..]);
    if had_errors {
        log::warn!("Encoding errors detected in file: {}", path.display());
    }

    decoded
        .split_whitespace()
        .map(|token| Word::with_limit(token, max_word_len))
        .collect()
}

pub fn write_words<'a>(path: &Path, words: impl IntoIterator<Item = &'a Word>) -> EditResult<()> {
    let mut contents = words
        .into_iter()
        .map(Word::as_str)
        .collect::<Vec<_>>()
        .join(" ");
    contents.push('\n');

    fs::write(path, contents).map_err(|source| EditError::Io {
        path: path.to_path_buf(),
        source,
    })
}
