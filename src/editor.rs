use crate::buffer::{Action, WordBuffer};
use crate::config::Config;
use crate::dialog;
use crate::error::EditError;
use crate::input::{handle_key_event, parse_line, Command};
use crate::terminal::{Terminal, TerminalEvent};
use crate::view::{self, View};
use anyhow::Result;
use std::io::{BufRead, Write};

pub struct Editor {
    buffer: WordBuffer,
    show_status: bool,
    should_quit: bool,
    message: Option<String>,
    quit_times: u8, // 追蹤連續按離開鍵的次數
}

fn describe_undo(action: &Action) -> String {
    let verb = match action {
        Action::Insert { .. } => "removed",
        Action::Delete { .. } => "restored",
    };
    format!("Undo: {} '{}' at {}", verb, action.word(), action.position())
}

fn describe_redo(action: &Action) -> String {
    let verb = match action {
        Action::Insert { .. } => "inserted",
        Action::Delete { .. } => "deleted",
    };
    format!("Redo: {} '{}' at {}", verb, action.word(), action.position())
}

fn describe_error(error: &EditError) -> String {
    format!("{}.", error)
}

impl Editor {
    pub fn new(buffer: WordBuffer, config: &Config) -> Self {
        Self {
            buffer,
            show_status: config.show_status,
            should_quit: false,
            message: None,
            quit_times: 0,
        }
    }

    pub fn buffer(&self) -> &WordBuffer {
        &self.buffer
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// 執行一個已具備所有參數的命令；失敗只會留下訊息，不會中斷工作階段
    pub fn execute(&mut self, command: Command) {
        // 任何非 Quit 的命令都重置 quit_times
        if !matches!(command, Command::Quit) {
            self.quit_times = 0;
        }

        self.message = match command {
            Command::Insert { position, word } => Some(match self.buffer.insert(&word, position) {
                Ok(at) => format!("Inserted '{}' at {}", word, at),
                Err(e) => describe_error(&e),
            }),
            Command::Append(word) => Some(match self.buffer.append(&word) {
                Ok(at) => format!("Inserted '{}' at {}", word, at),
                Err(e) => describe_error(&e),
            }),
            Command::Delete(position) => Some(match self.buffer.delete(position) {
                Ok(word) => format!("Deleted '{}' from {}", word, position),
                Err(e) => describe_error(&e),
            }),

            // 撤銷/重做
            Command::Undo => Some(match self.buffer.undo() {
                Ok(action) => describe_undo(&action),
                Err(e) => describe_error(&e),
            }),
            Command::Redo => Some(match self.buffer.redo() {
                Ok(action) => describe_redo(&action),
                Err(e) => describe_error(&e),
            }),

            // 文件操作
            Command::Save(path) => {
                let result = match path {
                    Some(path) => self.buffer.save_to(&path),
                    None => self.buffer.save(),
                };
                Some(match result {
                    Ok(()) => "File saved successfully.".to_string(),
                    Err(e) => format!("Cannot save file: {}", describe_error(&e)),
                })
            }
            Command::Load(path) => Some(match path {
                Some(path) => match self.buffer.load(&path) {
                    Ok(_) => "File loaded. Undo history cleared.".to_string(),
                    Err(e) => format!("Cannot open file: {}", describe_error(&e)),
                },
                None => describe_error(&EditError::NoFilePath),
            }),

            Command::Status => Some(view::status_line(&self.buffer.status())),
            Command::Show | Command::ClearMessage => None,
            Command::PromptInsert | Command::PromptDelete => {
                log::debug!("prompt command reached execute without input");
                None
            }

            Command::Quit => {
                if self.buffer.is_modified() && self.quit_times == 0 {
                    // 第一次按離開鍵，顯示警告
                    self.quit_times = 1;
                    Some("Unsaved changes! Press Esc again to quit, or s to save".to_string())
                } else {
                    self.should_quit = true;
                    Some("Exiting editor.".to_string())
                }
            }
        };

        if let Some(message) = &self.message {
            log::debug!("{}", message);
        }
    }

    /// 工作階段結束：清空文件與歷史
    fn finish(&mut self) {
        self.buffer.clear();
        log::debug!("session ended");
    }

    /// 批次模式：逐行讀取命令並輸出結果
    pub fn run_script<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> Result<()> {
        view::render_plain(&mut out, &self.buffer, self.show_status)?;

        for raw in input.split(b'\n') {
            // 無效的 UTF-8 只影響這一行
            let Ok(line) = String::from_utf8(raw?) else {
                writeln!(out, "Error: line is not valid UTF-8")?;
                continue;
            };
            let command = match parse_line(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) => {
                    writeln!(out, "Error: {:#}", e)?;
                    continue;
                }
            };

            let redraw = command.changes_document() || command == Command::Show;
            if command == Command::Quit {
                // 批次模式不需要二次確認
                self.quit_times = 1;
            }
            self.execute(command);

            if let Some(message) = &self.message {
                writeln!(out, "{}", message)?;
            }
            if redraw {
                view::render_plain(&mut out, &self.buffer, self.show_status)?;
            }
            if self.should_quit {
                break;
            }
        }

        self.finish();
        out.flush()?;
        Ok(())
    }

    /// 互動模式
    pub fn run(&mut self, ask_for_seed: bool) -> Result<()> {
        let mut terminal = Terminal::new()?;
        let mut view = View::new(&terminal, self.show_status);

        Terminal::enter_raw_mode()?;
        Terminal::clear_screen()?;

        if ask_for_seed {
            self.ask_for_seed(&terminal)?;
        }

        while !self.should_quit {
            view.render(&self.buffer, self.message.as_deref())?;

            let key_event = match Terminal::read_event()? {
                TerminalEvent::Key(key_event) => key_event,
                TerminalEvent::Resize(cols, rows) => {
                    terminal.set_size(cols, rows);
                    view.update_size(&terminal);
                    Terminal::clear_screen()?;
                    continue;
                }
            };

            if let Some(command) = handle_key_event(key_event) {
                if let Some(command) = self.resolve(command, &terminal)? {
                    self.execute(command);
                }
            }
        }

        self.finish();
        Terminal::show_cursor()?;
        Terminal::exit_raw_mode()?;
        Terminal::flush()?;
        Ok(())
    }

    fn ask_for_seed(&mut self, terminal: &Terminal) -> Result<()> {
        if let Some(line) = dialog::prompt("Type text, then press ENTER:", terminal.size())? {
            self.message = Some(match self.buffer.seed(&line) {
                Ok(count) => format!("{} words entered", count),
                Err(e) => describe_error(&e),
            });
        }
        Ok(())
    }

    /// 用對話框補齊需要參數的命令；使用者取消時回傳 `None`
    fn resolve(&mut self, command: Command, terminal: &Terminal) -> Result<Option<Command>> {
        let size = terminal.size();
        let resolved = match command {
            Command::PromptInsert => {
                let Some(input) = dialog::prompt("Insert (position word):", size)? else {
                    return Ok(None);
                };
                let mut parts = input.split_whitespace();
                match (parts.next(), parts.next()) {
                    (Some(word), None) => Some(Command::Append(word.to_string())),
                    _ => self.parse_prompt(&format!("insert {}", input)),
                }
            }
            Command::PromptDelete => {
                let Some(input) = dialog::prompt("Delete position:", size)? else {
                    return Ok(None);
                };
                self.parse_prompt(&format!("delete {}", input))
            }
            Command::Save(None) if self.buffer.file_path().is_none() => {
                dialog::prompt("Enter file name to save:", size)?
                    .filter(|name| !name.trim().is_empty())
                    .map(|name| Command::Save(Some(name.trim().into())))
            }
            Command::Load(None) => {
                if self.buffer.is_modified()
                    && !dialog::confirm("Discard unsaved changes?", size)?
                {
                    return Ok(None);
                }
                dialog::prompt("Enter file name to load:", size)?
                    .filter(|name| !name.trim().is_empty())
                    .map(|name| Command::Load(Some(name.trim().into())))
            }
            other => Some(other),
        };
        Ok(resolved)
    }

    fn parse_prompt(&mut self, line: &str) -> Option<Command> {
        match parse_line(line) {
            Ok(command) => command,
            Err(e) => {
                self.message = Some(format!("Error: {:#}", e));
                None
            }
        }
    }
}
