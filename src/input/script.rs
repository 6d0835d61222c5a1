// 批次模式：每行一個命令

use anyhow::{anyhow, bail, Context, Result};
use std::path::PathBuf;

use super::handler::Command;

/// 解析位置；負數視為 0（插入時等同最前面）
fn parse_position(token: Option<&str>) -> Result<usize> {
    let token = token.ok_or_else(|| anyhow!("missing position"))?;
    let value: i64 = token
        .parse()
        .with_context(|| format!("invalid position: {token}"))?;
    Ok(usize::try_from(value).unwrap_or(0))
}

fn parse_word(token: Option<&str>) -> Result<String> {
    token
        .map(str::to_string)
        .ok_or_else(|| anyhow!("missing word"))
}

/// 空行與 `#` 開頭的註解回傳 `None`
pub fn parse_line(line: &str) -> Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut parts = line.split_whitespace();
    let Some(name) = parts.next() else {
        return Ok(None);
    };

    let command = match name.to_ascii_lowercase().as_str() {
        "insert" | "i" => {
            let position = parse_position(parts.next())?;
            let word = parse_word(parts.next())?;
            Command::Insert { position, word }
        }
        "append" | "a" => Command::Append(parse_word(parts.next())?),
        "delete" | "d" => Command::Delete(parse_position(parts.next())?),
        "undo" | "u" => Command::Undo,
        "redo" | "r" => Command::Redo,
        "save" | "s" => Command::Save(parts.next().map(PathBuf::from)),
        "load" | "l" => {
            let name = parts.next().ok_or_else(|| anyhow!("missing file name"))?;
            Command::Load(Some(PathBuf::from(name)))
        }
        "show" => Command::Show,
        "status" => Command::Status,
        "quit" | "exit" | "q" => Command::Quit,
        other => bail!("unknown command: {other}"),
    };

    if let Some(extra) = parts.next() {
        bail!("unexpected argument: {extra}");
    }

    Ok(Some(command))
}
