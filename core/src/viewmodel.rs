//! Console view-model — severity-tagged output sinks over a bounded item
//! store, with a channel for background-thread writers.
//!
//! Producers hold a cloneable [`ConsoleWriter`] and push messages from any
//! thread; the owner thread calls [`ConsoleViewModel::drain`] to move queued
//! messages into the store and obtain the collection deltas to feed the
//! console. The core performs no marshalling of its own — delivering deltas
//! on the owner thread is exactly this type's contract.

use std::fmt;
use std::sync::mpsc::{channel, Receiver, Sender};

use serde::{Deserialize, Serialize};

use crate::buffer::ColorTag;
use crate::reconcile::ItemsDelta;

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// Severity of a console message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Debug,
    Info,
    Warning,
    Error,
}

impl Severity {
    /// Short label for display in headers and logs.
    pub fn label(&self) -> &str {
        match self {
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warning => "warn",
            Severity::Error => "error",
        }
    }

    /// The color tag a line of this severity carries.
    pub fn color_tag(&self) -> ColorTag {
        match self {
            Severity::Debug => ColorTag::Debug,
            Severity::Info => ColorTag::Info,
            Severity::Warning => ColorTag::Warning,
            Severity::Error => ColorTag::Error,
        }
    }
}

// ---------------------------------------------------------------------------
// ConsoleMessage
// ---------------------------------------------------------------------------

/// One severity-tagged line in the console's item store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsoleMessage {
    pub text: String,
    pub severity: Severity,
}

impl ConsoleMessage {
    pub fn new(text: impl Into<String>, severity: Severity) -> Self {
        ConsoleMessage {
            text: text.into(),
            severity,
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(text, Severity::Info)
    }

    pub fn color_tag(&self) -> ColorTag {
        self.severity.color_tag()
    }
}

impl fmt::Display for ConsoleMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

// ---------------------------------------------------------------------------
// ConsoleWriter
// ---------------------------------------------------------------------------

/// A cloneable, thread-safe sink for console output.
#[derive(Clone)]
pub struct ConsoleWriter {
    tx: Sender<ConsoleMessage>,
}

impl ConsoleWriter {
    /// Write a line at Info severity.
    pub fn write_line(&self, text: impl Into<String>) {
        let _ = self.tx.send(ConsoleMessage::info(text));
    }

    /// Write a line with an explicit severity.
    pub fn write_with_severity(&self, text: impl Into<String>, severity: Severity) {
        let _ = self.tx.send(ConsoleMessage::new(text, severity));
    }

    /// Write multiple lines at Info severity.
    pub fn write_lines<I, S>(&self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for line in lines {
            self.write_line(line);
        }
    }

    /// Format an error from `source` as a Severity::Error line.
    pub fn write_error(&self, source: &str, error: &dyn std::error::Error) {
        self.write_with_severity(format!("{} error: {}", source, error), Severity::Error);
    }
}

// ---------------------------------------------------------------------------
// ConsoleViewModel
// ---------------------------------------------------------------------------

/// The bounded, ordered store of console messages, with its intake queue.
///
/// When the store grows past `max_count`, the oldest 10% (at least one) are
/// evicted and surfaced as Remove deltas. History (submitted lines) is not
/// capped; only the displayed items are.
pub struct ConsoleViewModel {
    items: Vec<ConsoleMessage>,
    max_count: usize,
    tx: Sender<ConsoleMessage>,
    rx: Receiver<ConsoleMessage>,
}

impl ConsoleViewModel {
    pub fn new(max_count: usize) -> Self {
        let (tx, rx) = channel();
        ConsoleViewModel {
            items: Vec::new(),
            max_count: max_count.max(1),
            tx,
            rx,
        }
    }

    /// A writer usable from any thread.
    pub fn writer(&self) -> ConsoleWriter {
        ConsoleWriter {
            tx: self.tx.clone(),
        }
    }

    pub fn items(&self) -> &[ConsoleMessage] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Move queued messages into the store and return the deltas to apply,
    /// in order: one Add for the new batch, then Removes for any eviction.
    ///
    /// Must be called on the thread that owns the console.
    pub fn drain(&mut self) -> Vec<ItemsDelta<ConsoleMessage>> {
        let added: Vec<ConsoleMessage> = self.rx.try_iter().collect();
        if added.is_empty() {
            return Vec::new();
        }
        self.items.extend(added.iter().cloned());
        let mut deltas = vec![ItemsDelta::Add(added)];
        while self.items.len() > self.max_count {
            let n = (self.max_count / 10).max(1).min(self.items.len());
            let evicted: Vec<ConsoleMessage> = self.items.drain(..n).collect();
            deltas.push(ItemsDelta::Remove(evicted));
        }
        deltas
    }

    /// Empty the store. Returns the Reset delta to apply.
    pub fn clear(&mut self) -> ItemsDelta<ConsoleMessage> {
        self.items.clear();
        ItemsDelta::Reset(Vec::new())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
