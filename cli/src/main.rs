//! Termline demo — an interactive console in the terminal.
//!
//! Runs the console model full-screen: type at the prompt, recall history
//! with Up/Down, cycle completions with Tab, and watch a background thread
//! interleave severity-tagged output above the prompt while you edit.
//!
//! # Keys
//!
//! ```text
//! Enter       submit the line
//! Up/Down     recall history
//! Tab         cycle completions
//! Ctrl-C/X/V  copy / cut / paste (internal clipboard)
//! Ctrl-Q      quit
//! ```
//!
//! Set `TERMLINE_LOG` (an env-filter directive) to write tracing output to
//! `termline.log`; stdout belongs to the TUI.

use std::io;
use std::sync::Mutex;
use std::time::Duration;

use crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyCode,
    KeyEvent, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::prelude::*;
use ratatui::Terminal;
use tracing_subscriber::EnvFilter;

use termline_core::console::{Console, KeyInput};
use termline_core::reconcile::Reconciler;
use termline_core::viewmodel::{ConsoleMessage, ConsoleViewModel, Severity};
use termline_tui::keys;
use termline_tui::theme::Theme;
use termline_tui::widget::ConsoleView;


fn main() {
    init_logging();

    let mut app = match DemoApp::new() {
        Ok(app) => app,
        Err(e) => {
            eprintln!("termline: failed to start: {}", e);
            std::process::exit(1);
        }
    };
    if let Err(e) = app.run() {
        drop(app);
        eprintln!("termline: {}", e);
        std::process::exit(1);
    }
}


/// Route tracing to a file when `TERMLINE_LOG` is set. The terminal owns
/// stdout, so there is nowhere else for log lines to go.
fn init_logging() {
    if std::env::var("TERMLINE_LOG").is_err() {
        return;
    }
    let Ok(file) = std::fs::File::create("termline.log") else {
        return;
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_env("TERMLINE_LOG"))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
}


// ---------------------------------------------------------------------------
// Demo application
// ---------------------------------------------------------------------------

/// The demo runner.
///
/// Manages terminal raw mode, the alternate screen, the console model, the
/// message store, and a host-side clipboard for the cut/copy/paste chords.
struct DemoApp {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    console: Console<ConsoleMessage>,
    viewmodel: ConsoleViewModel,
    theme: Theme,
    clipboard: String,
    tick_rate: Duration,
}


impl DemoApp {
    /// Create the demo, entering raw mode and the alternate screen, and
    /// start the background producer thread.
    fn new() -> Result<Self, io::Error> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        let reconciler = Reconciler::new()
            .with_color(Box::new(|msg: &ConsoleMessage| msg.color_tag()));
        let console = Console::new("> ", reconciler)
            .with_completions(Box::new(|| completion_candidates()));

        let viewmodel = ConsoleViewModel::new(500);
        spawn_producer(&viewmodel);

        let mut app = DemoApp {
            terminal,
            console,
            viewmodel,
            theme: Theme::default(),
            clipboard: String::new(),
            tick_rate: Duration::from_millis(100),
        };
        let writer = app.viewmodel.writer();
        writer.write_line("termline demo. Type `help` for commands, Ctrl-Q to quit.");
        app.sync_items();
        Ok(app)
    }

    /// Run the event loop until quit is requested.
    fn run(&mut self) -> Result<(), io::Error> {
        loop {
            self.sync_items();

            let console = &self.console;
            let theme = &self.theme;
            self.terminal.draw(|frame| {
                ConsoleView::new(console, theme)
                    .title("termline")
                    .margin(1)
                    .render(frame, frame.area());
            })?;

            if !event::poll(self.tick_rate)? {
                continue;
            }
            match event::read()? {
                Event::Key(key_event) => {
                    if is_quit(&key_event) {
                        break;
                    }
                    self.handle_key(&key_event);
                }
                Event::Paste(text) => self.console.paste(&text),
                _ => {}
            }
        }
        self.shutdown()
    }

    // -------------------------------------------------------------------
    // Input
    // -------------------------------------------------------------------

    fn handle_key(&mut self, key_event: &KeyEvent) {
        let Some((key, mods)) = keys::translate(key_event) else {
            return;
        };
        let outcome = self.console.handle_key(key, mods);
        if let Some(line) = outcome.submitted {
            self.run_command(&line);
            return;
        }
        if outcome.handled || !mods.ctrl {
            return;
        }
        // Declined Ctrl chords fall through to the host clipboard.
        match key {
            KeyInput::Char('c') | KeyInput::Char('C') => {
                if let Some(text) = self.console.copy_selection() {
                    self.clipboard = text;
                }
            }
            KeyInput::Char('x') | KeyInput::Char('X') => {
                if let Some(text) = self.console.cut_selection() {
                    self.clipboard = text;
                }
            }
            KeyInput::Char('v') | KeyInput::Char('V') => {
                let text = self.clipboard.clone();
                self.console.paste(&text);
            }
            _ => {}
        }
    }

    // -------------------------------------------------------------------
    // Commands
    // -------------------------------------------------------------------

    fn run_command(&mut self, line: &str) {
        match builtin(line) {
            Builtin::Nothing => {}
            Builtin::Clear => {
                let delta = self.viewmodel.clear();
                self.console.apply_items(&delta);
            }
            Builtin::Help => {
                self.viewmodel.writer().write_lines([
                    "commands:",
                    "  clear   wipe the scrollback",
                    "  help    this text",
                    "anything else is echoed back",
                ]);
            }
            Builtin::Echo => {
                let writer = self.viewmodel.writer();
                writer.write_line(format!("> {}", line));
                writer.write_with_severity(format!("echo: {}", line), Severity::Debug);
            }
        }
    }

    /// Drain queued messages into the console.
    fn sync_items(&mut self) {
        for delta in self.viewmodel.drain() {
            self.console.apply_items(&delta);
        }
    }

    // -------------------------------------------------------------------
    // Shutdown
    // -------------------------------------------------------------------

    /// Restore the terminal to its normal state.
    fn shutdown(&mut self) -> Result<(), io::Error> {
        terminal::disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            DisableBracketedPaste,
            LeaveAlternateScreen
        )?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}


impl Drop for DemoApp {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            DisableBracketedPaste,
            LeaveAlternateScreen
        );
    }
}


// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn is_quit(key_event: &KeyEvent) -> bool {
    key_event.code == KeyCode::Char('q')
        && key_event.modifiers.contains(KeyModifiers::CONTROL)
}

/// What a submitted line asks the demo to do.
#[derive(Debug, PartialEq, Eq)]
enum Builtin {
    Nothing,
    Clear,
    Help,
    Echo,
}

fn builtin(line: &str) -> Builtin {
    match line.trim() {
        "" => Builtin::Nothing,
        "clear" => Builtin::Clear,
        "help" => Builtin::Help,
        _ => Builtin::Echo,
    }
}

fn completion_candidates() -> Vec<String> {
    vec!["clear".to_string(), "help".to_string()]
}

/// Emit a periodic stream of severity-tagged lines from another thread to
/// show cross-thread writes landing above the prompt.
fn spawn_producer(viewmodel: &ConsoleViewModel) {
    let writer = viewmodel.writer();
    std::thread::spawn(move || {
        let severities = [
            Severity::Info,
            Severity::Debug,
            Severity::Warning,
            Severity::Error,
        ];
        for i in 0u64.. {
            std::thread::sleep(Duration::from_secs(3));
            let severity = severities[(i as usize) % severities.len()];
            writer.write_with_severity(
                format!("[producer] background message #{}", i),
                severity,
            );
        }
    });
}
