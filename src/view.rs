use crate::buffer::{Status, WordBuffer};
use crate::terminal::Terminal;
use crate::utils::{visual_width, LineWrapper};
use anyhow::Result;
use crossterm::{
    cursor, queue,
    style::{self, Attribute, Color},
    terminal::{self, ClearType},
};
use std::io::{self, Write};

const RULE: &str = "----------------------------------";

pub fn status_line(status: &Status) -> String {
    format!(
        "WORDS: {} | UNDO: {}/{}",
        status.word_count, status.undo_count, status.undo_capacity
    )
}

/// 以純文字輸出文件區塊（批次模式使用）
pub fn render_plain<W: Write>(out: &mut W, buffer: &WordBuffer, show_status: bool) -> io::Result<()> {
    writeln!(out, "{RULE}")?;
    writeln!(out, "DOCUMENT:")?;
    writeln!(out, "{}", buffer.document())?;
    writeln!(out, "{RULE}")?;
    if show_status {
        writeln!(out, "{}", status_line(&buffer.status()))?;
    }
    Ok(())
}

pub struct View {
    pub offset_row: usize, // 視窗頂部顯示的行號
    pub show_status: bool,
    pub screen_rows: usize,
    pub screen_cols: usize,
    wrapper: LineWrapper,
}

impl View {
    pub fn new(terminal: &Terminal, show_status: bool) -> Self {
        let (cols, rows) = terminal.size();
        Self {
            offset_row: 0,
            show_status,
            // 減去訊息列與狀態列
            screen_rows: rows.saturating_sub(2) as usize,
            screen_cols: cols as usize,
            wrapper: LineWrapper::new(cols as usize),
        }
    }

    pub fn update_size(&mut self, terminal: &Terminal) {
        let (cols, rows) = terminal.size();
        self.screen_rows = rows.saturating_sub(2) as usize;
        self.screen_cols = cols as usize;
        self.wrapper.set_max_width(self.screen_cols);
    }

    /// 最後一行永遠可見
    fn scroll_to_end(&mut self, line_count: usize) {
        self.offset_row = line_count.saturating_sub(self.screen_rows);
    }

    pub fn render(&mut self, buffer: &WordBuffer, message: Option<&str>) -> Result<()> {
        let mut stdout = io::stdout();
        let lines = self
            .wrapper
            .wrap_words(buffer.document().iter().map(|w| w.as_str()));
        self.scroll_to_end(lines.len());

        queue!(stdout, cursor::Hide)?;

        for screen_row in 0..self.screen_rows {
            queue!(
                stdout,
                cursor::MoveTo(0, screen_row as u16),
                terminal::Clear(ClearType::CurrentLine)
            )?;
            match lines.get(self.offset_row + screen_row) {
                Some(line) => queue!(stdout, style::Print(line))?,
                None => queue!(
                    stdout,
                    style::SetForegroundColor(Color::DarkGrey),
                    style::Print("~"),
                    style::ResetColor
                )?,
            }
        }

        // 訊息列
        let message_row = self.screen_rows as u16;
        let message = message.unwrap_or("^Z undo  ^Y redo  i insert  d delete  s save  l load  Esc quit");
        queue!(
            stdout,
            cursor::MoveTo(0, message_row),
            terminal::Clear(ClearType::CurrentLine),
            style::Print(self.fit(message))
        )?;

        self.render_status_bar(&mut stdout, buffer, message_row + 1)?;

        stdout.flush()?;
        Ok(())
    }

    fn render_status_bar<W: Write>(&self, out: &mut W, buffer: &WordBuffer, row: u16) -> Result<()> {
        let modified = if buffer.is_modified() { " [+]" } else { "" };
        let left = format!(" {}{}", buffer.file_name(), modified);
        let right = if self.show_status {
            let status = buffer.status();
            format!("{} | REDO: {} ", status_line(&status), status.redo_count)
        } else {
            String::new()
        };

        let used = visual_width(&left) + visual_width(&right);
        let padding = self.screen_cols.saturating_sub(used);
        let bar = self.fit(&format!("{}{}{}", left, " ".repeat(padding), right));

        queue!(
            out,
            cursor::MoveTo(0, row),
            terminal::Clear(ClearType::CurrentLine),
            style::SetAttribute(Attribute::Reverse),
            style::Print(bar),
            style::SetAttribute(Attribute::Reset)
        )?;
        Ok(())
    }

    // 截斷到螢幕寬度
    fn fit(&self, text: &str) -> String {
        let mut out = String::new();
        let mut width = 0;
        for ch in text.chars() {
            let w = crate::utils::char_width(ch);
            if width + w > self.screen_cols {
                break;
            }
            out.push(ch);
            width += w;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_plain_layout() {
        let mut buffer = WordBuffer::default();
        buffer.seed("a b c").unwrap();

        let mut out = Vec::new();
        render_plain(&mut out, &buffer, true).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            format!("{RULE}\nDOCUMENT:\na b c\n{RULE}\nWORDS: 3 | UNDO: 3/5\n")
        );
    }

    #[test]
    fn test_render_plain_without_status() {
        let buffer = WordBuffer::default();
        let mut out = Vec::new();
        render_plain(&mut out, &buffer, false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(!text.contains("WORDS"));
        assert!(text.contains("DOCUMENT:\n\n"));
    }
}
