use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{self, ClearType},
};
use std::io::{self, Write};

/// 編輯器關心的終端事件
#[derive(Debug, Clone, Copy)]
pub enum TerminalEvent {
    Key(KeyEvent),
    Resize(u16, u16),
}

pub struct Terminal {
    size: (u16, u16),
}

impl Terminal {
    pub fn new() -> Result<Self> {
        let size = terminal::size()?;
        Ok(Self { size })
    }

    pub fn enter_raw_mode() -> Result<()> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), terminal::EnterAlternateScreen)?;
        Ok(())
    }

    pub fn exit_raw_mode() -> Result<()> {
        execute!(io::stdout(), terminal::LeaveAlternateScreen)?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    pub fn clear_screen() -> Result<()> {
        execute!(io::stdout(), terminal::Clear(ClearType::All))?;
        Ok(())
    }

    pub fn size(&self) -> (u16, u16) {
        self.size
    }

    pub fn set_size(&mut self, cols: u16, rows: u16) {
        self.size = (cols, rows);
    }

    pub fn flush() -> Result<()> {
        io::stdout().flush()?;
        Ok(())
    }

    pub fn read_event() -> Result<TerminalEvent> {
        loop {
            match event::read()? {
                // 只處理 Press 和 Repeat，避免 Windows 上重複觸發
                Event::Key(key_event)
                    if key_event.kind == KeyEventKind::Press
                        || key_event.kind == KeyEventKind::Repeat =>
                {
                    return Ok(TerminalEvent::Key(key_event));
                }
                Event::Resize(cols, rows) => return Ok(TerminalEvent::Resize(cols, rows)),
                // 忽略其他事件（鼠標、貼上等）
                _ => {}
            }
        }
    }

    pub fn show_cursor() -> Result<()> {
        execute!(io::stdout(), cursor::Show)?;
        Ok(())
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = Self::exit_raw_mode();
        let _ = Self::show_cursor();
    }
}
