// 對話框模組 - 狀態列上方的輸入框與確認框

use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind},
    execute, queue,
    style::{self, Color},
    terminal::{self, ClearType},
};
use std::io::{self, Write};

use crate::utils::char_width;

/// 在指定行畫一條填滿寬度的色條，回傳實際顯示的寬度
fn draw_bar(text: &str, row: u16, cols: u16, bg: Color, fg: Color) -> Result<usize> {
    let mut stdout = io::stdout();
    let cols = cols as usize;

    // 依視覺寬度截斷，避免切在多位元組字元中間
    let mut shown = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let w = char_width(ch);
        if width + w > cols {
            break;
        }
        shown.push(ch);
        width += w;
    }

    queue!(
        stdout,
        cursor::MoveTo(0, row),
        terminal::Clear(ClearType::CurrentLine),
        style::SetBackgroundColor(bg),
        style::SetForegroundColor(fg),
        style::Print(&shown),
        style::Print(" ".repeat(cols - width)),
        style::ResetColor,
    )?;
    stdout.flush()?;
    Ok(width)
}

/// 只回傳 Press/Repeat 的按鍵碼
fn next_key() -> Result<KeyCode> {
    loop {
        if let Event::Key(key_event) = event::read()? {
            if key_event.kind == KeyEventKind::Press || key_event.kind == KeyEventKind::Repeat {
                return Ok(key_event.code);
            }
        }
    }
}

/// 顯示輸入對話框並獲取用戶輸入，Esc 取消時回傳 `None`
pub fn prompt(prompt_text: &str, terminal_size: (u16, u16)) -> Result<Option<String>> {
    let mut input = String::new();
    let (cols, rows) = terminal_size;
    let dialog_row = rows.saturating_sub(2);

    loop {
        let display = format!(" {} {}", prompt_text, input);
        let width = draw_bar(&display, dialog_row, cols, Color::DarkBlue, Color::White)?;
        let cursor_x = width.min(cols.saturating_sub(1) as usize) as u16;
        execute!(io::stdout(), cursor::MoveTo(cursor_x, dialog_row), cursor::Show)?;

        match next_key()? {
            KeyCode::Enter => return Ok(Some(input)),
            KeyCode::Esc => return Ok(None),
            KeyCode::Char(c) => input.push(c),
            KeyCode::Backspace => {
                input.pop();
            }
            _ => {}
        }
    }
}

/// 顯示確認對話框
pub fn confirm(message: &str, terminal_size: (u16, u16)) -> Result<bool> {
    let (cols, rows) = terminal_size;
    let dialog_row = rows.saturating_sub(2);
    let display = format!(" {} (y/n)", message);

    loop {
        draw_bar(&display, dialog_row, cols, Color::DarkYellow, Color::Black)?;

        match next_key()? {
            KeyCode::Char('y') | KeyCode::Char('Y') => return Ok(true),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => return Ok(false),
            _ => {}
        }
    }
}
