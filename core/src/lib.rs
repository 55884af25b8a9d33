//! Termline — a read/write console model with a protected output region.
//!
//! The buffer holds rendered history above a prompt and a live edit after
//! it; an integer policy layer decides which keys may mutate which region.
//! This crate is UI-toolkit agnostic: it never draws and never reads
//! events. Hosts feed it translated key input and bound-collection deltas,
//! and render its segments however they like.
//!
//! # Modules
//!
//! - [`buffer`] — Segmented text buffer, caret, selection, prompt boundary
//! - [`completion`] — Tab-completion cycling over per-episode snapshots
//! - [`console`] — The controller: key dispatch, submission, clipboard hooks
//! - [`history`] — Rotating ring of submitted lines
//! - [`policy`] — Boundary-enforcement decisions as pure integer tests
//! - [`reconcile`] — Bound-collection deltas applied into the buffer
//! - [`viewmodel`] — Severity-tagged message store with thread-safe writers

pub mod buffer;
pub mod completion;
pub mod console;
pub mod history;
pub mod policy;
pub mod reconcile;
pub mod viewmodel;

pub use buffer::{ColorTag, DisplaySegment, SegmentOrigin, TextBuffer};
pub use completion::CompletionCycler;
pub use console::{Console, KeyInput, KeyOutcome, Modifiers};
pub use history::{HistoryRing, NavDirection};
pub use reconcile::{ItemsDelta, ProjectionError, Reconciler};
pub use viewmodel::{ConsoleMessage, ConsoleViewModel, ConsoleWriter, Severity};
