use anyhow::{Context, Result};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use wordedit::{utils, Config, Editor, WordBuffer};

const HELP: &str = "\
wordedit - A minimalist console word processor with undo/redo

USAGE:
  wordedit [OPTIONS] [FILE]

ARGS:
  <FILE>                   File to load at startup (history starts empty)

OPTIONS:
  --text <WORDS>           Seed the document with these words (undoable)
  --max-undo <N>           Undo history size [default: 5]
  --max-word-len <N>       Maximum characters per word [default: 49]
  --unlimited-words        Do not limit word length
  --no-status              Hide the word/undo counters
  --batch                  Read commands from stdin instead of the keyboard
  --debug                  Enable debug logging
  -h, --help               Print help
  -V, --version            Print version

KEYS (interactive):
  Ctrl+Z   Undo            Ctrl+Y   Redo
  i        Insert a word   d        Delete a word
  s        Save            l        Load
  c        Clear message   Esc      Exit (press twice if modified)

BATCH COMMANDS:
  insert <pos> <word> | append <word> | delete <pos>
  undo | redo | save [file] | load <file> | show | status | quit
";

struct Args {
    file: Option<PathBuf>,
    text: Option<String>,
    batch: bool,
    debug: bool,
    config: Config,
}

fn parse_args() -> Result<Option<Args>> {
    let mut pargs = pico_args::Arguments::from_env();

    if pargs.contains(["-h", "--help"]) {
        print!("{}", HELP);
        return Ok(None);
    }
    if pargs.contains(["-V", "--version"]) {
        println!("wordedit {}", env!("CARGO_PKG_VERSION"));
        return Ok(None);
    }

    let mut config = Config::new();
    if let Some(max_undo) = pargs.opt_value_from_str("--max-undo")? {
        config.max_undo = max_undo;
    }
    if let Some(max_word_len) = pargs.opt_value_from_str("--max-word-len")? {
        config.max_word_len = Some(max_word_len);
    }
    if pargs.contains("--unlimited-words") {
        config.max_word_len = None;
    }
    if pargs.contains("--no-status") {
        config.show_status = false;
    }
    config.validate()?;

    let args = Args {
        text: pargs.opt_value_from_str("--text")?,
        batch: pargs.contains("--batch"),
        debug: pargs.contains("--debug"),
        file: pargs.opt_free_from_str()?,
        config,
    };

    let remaining = pargs.finish();
    if !remaining.is_empty() {
        anyhow::bail!("unexpected arguments: {:?}", remaining);
    }

    Ok(Some(args))
}

fn main() -> Result<()> {
    let Some(args) = parse_args()? else {
        return Ok(());
    };

    // 初始化日誌
    utils::init_logger(args.debug);

    let mut buffer = match &args.file {
        Some(path) => WordBuffer::from_file(path, &args.config)
            .with_context(|| format!("Failed to open {}", path.display()))?,
        None => WordBuffer::new(&args.config),
    };
    if let Some(text) = &args.text {
        buffer.seed(text).context("Invalid --text")?;
    }

    let mut editor = Editor::new(buffer, &args.config);

    if args.batch || !io::stdin().is_terminal() {
        let stdin = io::stdin();
        return editor.run_script(stdin.lock(), io::stdout().lock());
    }

    // 設置 panic hook 以確保終端正常恢復
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            io::stdout(),
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::cursor::Show
        );
        original_hook(panic_info);
    }));

    let ask_for_seed = args.file.is_none() && args.text.is_none();
    editor.run(ask_for_seed)
}
