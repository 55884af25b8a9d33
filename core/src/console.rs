//! The console controller — routes key input and collection deltas through
//! the boundary policy into the buffer, history ring, and completion cycler.
//!
//! There is no underlying editing widget to fall through to: every permitted
//! edit is applied here, and every denied key is reported handled with no
//! mutation. Submission is a result value on [`KeyOutcome`], fired at most
//! once per Enter. All collaborators are passed in at construction.

use std::fmt;

use crate::buffer::TextBuffer;
use crate::completion::CompletionCycler;
use crate::history::{HistoryRing, NavDirection};
use crate::policy::{self, Decision, PolicyCtx};
use crate::reconcile::{ItemsDelta, Reconciler};

// ---------------------------------------------------------------------------
// Key model
// ---------------------------------------------------------------------------

/// A key delivered to the console. Clipboard and select-all chords arrive
/// as plain characters plus the Ctrl flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Char(char),
    Left,
    Right,
    Up,
    Down,
    Backspace,
    Delete,
    Enter,
    Tab,
    Escape,
    PageUp,
    PageDown,
    Home,
    End,
}

/// Modifier state accompanying a key press.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
}

impl Modifiers {
    pub fn none() -> Self {
        Modifiers { ctrl: false }
    }

    pub fn ctrl() -> Self {
        Modifiers { ctrl: true }
    }
}

/// What happened to a key press.
///
/// `handled == false` means the console declined to intercept: the host may
/// run its own behavior (clipboard operation, scrolling, shortcut).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyOutcome {
    pub handled: bool,
    /// The submitted line, present exactly when this key completed one.
    pub submitted: Option<String>,
}

impl KeyOutcome {
    fn handled() -> Self {
        KeyOutcome {
            handled: true,
            submitted: None,
        }
    }

    fn pass() -> Self {
        KeyOutcome {
            handled: false,
            submitted: None,
        }
    }

    fn submitted(line: String) -> Self {
        KeyOutcome {
            handled: true,
            submitted: Some(line),
        }
    }
}

// ---------------------------------------------------------------------------
// Console
// ---------------------------------------------------------------------------

pub type CompletionSource = Box<dyn Fn() -> Vec<String>>;

/// The read/write console: a scrollback of reconciled items above a single
/// editable prompt line.
pub struct Console<T> {
    buffer: TextBuffer,
    ring: HistoryRing,
    cycler: CompletionCycler,
    reconciler: Reconciler<T>,
    completions: Option<CompletionSource>,
    /// Mirror of the current editable text; holds the submitted line
    /// between an Enter and the next mutation.
    line: String,
}

impl<T: fmt::Display> Console<T> {
    pub fn new(prompt: impl Into<String>, reconciler: Reconciler<T>) -> Self {
        Console {
            buffer: TextBuffer::new(prompt),
            ring: HistoryRing::new(),
            cycler: CompletionCycler::new(),
            reconciler,
            completions: None,
            line: String::new(),
        }
    }

    /// Wire the lazily-pulled autocompletion source.
    pub fn with_completions(mut self, source: CompletionSource) -> Self {
        self.completions = Some(source);
        self
    }

    // -- accessors ----------------------------------------------------------

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn history(&self) -> &HistoryRing {
        &self.ring
    }

    /// The bound line value: the current editable text, or the submitted
    /// line in the window between an Enter and the next mutation.
    pub fn line(&self) -> &str {
        &self.line
    }

    pub fn prompt(&self) -> &str {
        self.buffer.prompt()
    }

    pub fn set_prompt(&mut self, prompt: &str) {
        self.buffer.set_prompt(prompt);
    }

    /// Host-driven caret placement (mouse click). Positioning is read-only
    /// and safe anywhere in the document; edits remain policy-gated.
    pub fn set_caret(&mut self, pos: usize) {
        self.buffer.set_caret(pos);
    }

    /// Host-driven selection (mouse drag), anchor to caret in either order.
    pub fn select(&mut self, anchor: usize, caret: usize) {
        self.buffer.select(anchor, caret);
    }

    fn policy_ctx(&self) -> PolicyCtx {
        PolicyCtx {
            caret: self.buffer.caret(),
            selection_start: self.buffer.selection_start(),
            boundary_end: self.buffer.boundary_end(),
        }
    }

    // -- key dispatch -------------------------------------------------------

    /// Process one key press. Never panics or propagates an error: every
    /// failure mode is contained within the handling of this single key.
    pub fn handle_key(&mut self, key: KeyInput, mods: Modifiers) -> KeyOutcome {
        if key != KeyInput::Tab {
            self.cycler.reset_episode();
        }
        let outcome = match key {
            KeyInput::Char(c) => self.handle_char(c, mods.ctrl),
            KeyInput::Left => self.handle_left(),
            KeyInput::Right => {
                self.buffer.move_caret_right();
                KeyOutcome::handled()
            }
            KeyInput::Up => self.handle_recall(NavDirection::Up),
            KeyInput::Down => self.handle_recall(NavDirection::Down),
            KeyInput::Backspace => self.handle_backspace(),
            KeyInput::Delete => self.handle_delete(),
            KeyInput::Enter => self.handle_enter(),
            KeyInput::Tab => self.handle_tab(),
            KeyInput::Escape => {
                self.buffer.clear_editable_region();
                KeyOutcome::handled()
            }
            // No scroll semantics in-control; the host view owns paging.
            KeyInput::PageUp | KeyInput::PageDown => KeyOutcome::handled(),
            KeyInput::Home => {
                let boundary = self.buffer.boundary_end();
                if self.buffer.caret() >= boundary {
                    self.buffer.set_caret(boundary);
                } else {
                    self.buffer.set_caret(0);
                }
                KeyOutcome::handled()
            }
            KeyInput::End => {
                self.buffer.move_caret_to_end();
                KeyOutcome::handled()
            }
        };
        self.sync_line(&outcome);
        outcome
    }

    fn handle_char(&mut self, c: char, ctrl: bool) -> KeyOutcome {
        let ctx = self.policy_ctx();
        match c.to_ascii_lowercase() {
            'a' if ctrl => {
                self.buffer.select_all();
                KeyOutcome::handled()
            }
            // Ctrl+C only reads the selection; always let the host copy.
            'c' if ctrl => KeyOutcome::pass(),
            'x' | 'v' if ctrl => match policy::cut_or_paste(ctx) {
                Decision::Deny => KeyOutcome::handled(),
                Decision::Allow => KeyOutcome::pass(),
            },
            'x' | 'v' => match policy::cut_or_paste(ctx) {
                Decision::Deny => KeyOutcome::handled(),
                Decision::Allow => self.insert_char(c),
            },
            _ if ctrl => KeyOutcome::pass(),
            _ => match policy::insert(ctx) {
                Decision::Deny => KeyOutcome::handled(),
                Decision::Allow => self.insert_char(c),
            },
        }
    }

    fn insert_char(&mut self, c: char) -> KeyOutcome {
        if self.buffer.selection_in_editable() {
            if let Some((start, end)) = self.buffer.selection_range() {
                self.buffer.delete_editable_range(start, end);
            }
        }
        let mut tmp = [0u8; 4];
        self.buffer.insert_live_text(c.encode_utf8(&mut tmp));
        KeyOutcome::handled()
    }

    fn handle_left(&mut self) -> KeyOutcome {
        match policy::left(self.policy_ctx()) {
            Decision::Deny => KeyOutcome::handled(),
            Decision::Allow => {
                self.buffer.move_caret_left();
                KeyOutcome::handled()
            }
        }
    }

    fn handle_backspace(&mut self) -> KeyOutcome {
        match policy::backspace(self.policy_ctx()) {
            Decision::Deny => KeyOutcome::handled(),
            Decision::Allow => {
                if self.buffer.selection_in_editable() {
                    if let Some((start, end)) = self.buffer.selection_range() {
                        self.buffer.delete_editable_range(start, end);
                        return KeyOutcome::handled();
                    }
                }
                self.buffer.backspace_at_caret();
                KeyOutcome::handled()
            }
        }
    }

    fn handle_delete(&mut self) -> KeyOutcome {
        match policy::forward_delete(self.policy_ctx()) {
            Decision::Deny => KeyOutcome::handled(),
            Decision::Allow => {
                if self.buffer.selection_in_editable() {
                    if let Some((start, end)) = self.buffer.selection_range() {
                        self.buffer.delete_editable_range(start, end);
                        return KeyOutcome::handled();
                    }
                }
                self.buffer.delete_at_caret();
                KeyOutcome::handled()
            }
        }
    }

    fn handle_recall(&mut self, direction: NavDirection) -> KeyOutcome {
        if !policy::history_recall(self.policy_ctx()).is_allowed() {
            // Caret is parked in history; leave the key to the host.
            return KeyOutcome::pass();
        }
        match self.ring.recall(direction) {
            None => KeyOutcome::handled(),
            Some(line) => {
                self.buffer.clear_editable_region();
                self.buffer.append_live_run(&line);
                KeyOutcome::handled()
            }
        }
    }

    fn handle_enter(&mut self) -> KeyOutcome {
        let line = self.buffer.aggregate_editable_text();
        self.buffer.clear_editable_region();
        self.buffer.mark_submitted(&line);
        self.ring.push(line.clone());
        self.buffer.move_caret_to_end();
        KeyOutcome::submitted(line)
    }

    fn handle_tab(&mut self) -> KeyOutcome {
        let completions = &self.completions;
        self.cycler.ensure_candidates(|| {
            completions.as_ref().map(|pull| pull()).unwrap_or_default()
        });
        if let Some(candidate) = self.cycler.next() {
            self.buffer.clear_editable_region();
            self.buffer.append_live_run(&candidate);
        }
        KeyOutcome::handled()
    }

    fn sync_line(&mut self, outcome: &KeyOutcome) {
        match &outcome.submitted {
            Some(line) => self.line = line.clone(),
            None => self.line = self.buffer.aggregate_editable_text(),
        }
    }

    // -- clipboard hooks ----------------------------------------------------

    /// The rendered text of the current selection, for the host clipboard.
    pub fn copy_selection(&self) -> Option<String> {
        let (start, end) = self.buffer.selection_range()?;
        let text = self.buffer.text_range(start, end);
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// Remove and return the selection, only when it lies entirely inside
    /// the editable region.
    pub fn cut_selection(&mut self) -> Option<String> {
        if !self.buffer.selection_in_editable() {
            return None;
        }
        let (start, end) = self.buffer.selection_range()?;
        let text = self.buffer.text_range(start, end);
        self.buffer.delete_editable_range(start, end);
        self.line = self.buffer.aggregate_editable_text();
        Some(text)
    }

    /// Insert pasted text: replace an all-editable selection and advance
    /// the caret past the insertion, otherwise append at the editable tail.
    pub fn paste(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if self.buffer.selection_in_editable() {
            if let Some((start, end)) = self.buffer.selection_range() {
                self.buffer.delete_editable_range(start, end);
            }
            self.buffer.insert_live_text(text);
        } else {
            self.buffer.append_live_run(text);
        }
        self.line = self.buffer.aggregate_editable_text();
    }

    // -- bound items --------------------------------------------------------

    /// Apply one collection delta through the reconciler.
    pub fn apply_items(&mut self, delta: &ItemsDelta<T>) {
        self.reconciler.apply(&mut self.buffer, delta);
        self.line = self.buffer.aggregate_editable_text();
    }

    /// Initial binding of an item source: an empty snapshot clears the
    /// history, a non-empty one replaces it.
    pub fn bind_items(&mut self, snapshot: Vec<T>) {
        if snapshot.is_empty() {
            self.buffer.clear_history();
            self.buffer.move_caret_to_end();
        } else {
            self.reconciler.apply(&mut self.buffer, &ItemsDelta::Reset(snapshot));
        }
        self.line = self.buffer.aggregate_editable_text();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
