//! The console text buffer — an ordered sequence of display segments with a
//! single prompt marker separating protected history from the editable tail.
//!
//! The buffer owns the caret and selection as absolute character offsets into
//! the flattened document, so every boundary decision reduces to an integer
//! comparison against [`TextBuffer::boundary_end`]. History segments are
//! immutable once inserted; only the prompt marker's text and the live-edit
//! tail ever change in place.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ColorTag
// ---------------------------------------------------------------------------

/// An opaque color tag carried by each display segment.
///
/// The core never interprets these; a rendering adapter maps them to real
/// colors through its theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorTag {
    /// The widget's default foreground.
    Default,
    Debug,
    Info,
    Warning,
    Error,
}

impl Default for ColorTag {
    fn default() -> Self {
        ColorTag::Default
    }
}

// ---------------------------------------------------------------------------
// DisplaySegment
// ---------------------------------------------------------------------------

/// Where a segment came from, which also decides whether it may be mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentOrigin {
    /// A rendered bound item (one text run per item).
    HistoryItem,
    /// The line break following a history run. Contributes one character
    /// (`\n`) to document offsets.
    LineBreak,
    /// The prompt marker. Exactly one exists per buffer.
    PromptMarker,
    /// A run in the editable region after the prompt marker.
    LiveEdit,
}

/// One run of displayed text.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplaySegment {
    pub text: String,
    pub origin: SegmentOrigin,
    pub color: ColorTag,
}

impl DisplaySegment {
    pub fn history(text: impl Into<String>, color: ColorTag) -> Self {
        DisplaySegment {
            text: text.into(),
            origin: SegmentOrigin::HistoryItem,
            color,
        }
    }

    pub fn line_break() -> Self {
        DisplaySegment {
            text: "\n".to_string(),
            origin: SegmentOrigin::LineBreak,
            color: ColorTag::Default,
        }
    }

    pub fn prompt(text: impl Into<String>) -> Self {
        DisplaySegment {
            text: text.into(),
            origin: SegmentOrigin::PromptMarker,
            color: ColorTag::Default,
        }
    }

    pub fn live(text: impl Into<String>) -> Self {
        DisplaySegment {
            text: text.into(),
            origin: SegmentOrigin::LiveEdit,
            color: ColorTag::Default,
        }
    }

    /// Length of this segment in characters (not bytes).
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

// ---------------------------------------------------------------------------
// TextBuffer
// ---------------------------------------------------------------------------

/// The console document: history runs, one prompt marker, and the live-edit
/// tail, plus the caret and optional selection anchor.
///
/// Invariants:
/// - exactly one `PromptMarker` segment exists, at `prompt_index`;
/// - every segment after `prompt_index` is a `LiveEdit` run;
/// - concatenating the live runs yields the in-progress line exactly once.
#[derive(Debug)]
pub struct TextBuffer {
    segments: Vec<DisplaySegment>,
    prompt_index: usize,
    /// Caret as an absolute char offset into the flattened document.
    caret: usize,
    /// Selection anchor; the selection spans anchor..caret in either order.
    selection_anchor: Option<usize>,
    /// The line handed out by the most recent submission.
    last_submitted: String,
}

fn char_count(s: &str) -> usize {
    s.chars().count()
}

impl TextBuffer {
    /// Create a buffer holding only the prompt marker and an empty live run,
    /// caret at document end.
    pub fn new(prompt: impl Into<String>) -> Self {
        let segments = vec![DisplaySegment::prompt(prompt), DisplaySegment::live("")];
        let mut buf = TextBuffer {
            segments,
            prompt_index: 0,
            caret: 0,
            selection_anchor: None,
            last_submitted: String::new(),
        };
        buf.caret = buf.doc_len();
        buf
    }

    // -- offsets ------------------------------------------------------------

    /// Total document length in characters.
    pub fn doc_len(&self) -> usize {
        self.segments.iter().map(DisplaySegment::char_len).sum()
    }

    /// Char offset of the end of the prompt marker. Everything at or after
    /// this offset is the editable region.
    pub fn boundary_end(&self) -> usize {
        self.segments[..=self.prompt_index]
            .iter()
            .map(DisplaySegment::char_len)
            .sum()
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    /// Place the caret, clamped to the document. Collapses the selection.
    pub fn set_caret(&mut self, pos: usize) {
        self.caret = pos.min(self.doc_len());
        self.selection_anchor = None;
    }

    pub fn move_caret_left(&mut self) {
        self.caret = self.caret.saturating_sub(1);
        self.selection_anchor = None;
    }

    pub fn move_caret_right(&mut self) {
        self.caret = (self.caret + 1).min(self.doc_len());
        self.selection_anchor = None;
    }

    pub fn move_caret_to_end(&mut self) {
        self.caret = self.doc_len();
        self.selection_anchor = None;
    }

    // -- selection ----------------------------------------------------------

    /// Anchor a selection at `anchor` with the caret at `caret`.
    pub fn select(&mut self, anchor: usize, caret: usize) {
        let len = self.doc_len();
        self.selection_anchor = Some(anchor.min(len));
        self.caret = caret.min(len);
    }

    /// Select the whole document, history included.
    pub fn select_all(&mut self) {
        self.selection_anchor = Some(0);
        self.caret = self.doc_len();
    }

    pub fn clear_selection(&mut self) {
        self.selection_anchor = None;
    }

    /// The normalized selection range (start <= end), if a selection exists
    /// and is non-empty.
    pub fn selection_range(&self) -> Option<(usize, usize)> {
        let anchor = self.selection_anchor?;
        if anchor == self.caret {
            return None;
        }
        Some((anchor.min(self.caret), anchor.max(self.caret)))
    }

    /// The selection start used by the boundary policy: the lower end of the
    /// selection, or the caret itself when nothing is selected.
    pub fn selection_start(&self) -> usize {
        self.selection_range()
            .map(|(start, _)| start)
            .unwrap_or(self.caret)
    }

    /// Whether the current selection lies entirely inside the editable
    /// region. False when there is no selection.
    pub fn selection_in_editable(&self) -> bool {
        match self.selection_range() {
            Some((start, _)) => start >= self.boundary_end(),
            None => false,
        }
    }

    /// The flattened text of the given char range.
    pub fn text_range(&self, start: usize, end: usize) -> String {
        let full: String = self.segments.iter().map(|s| s.text.as_str()).collect();
        full.chars().skip(start).take(end.saturating_sub(start)).collect()
    }

    // -- editable region ----------------------------------------------------

    /// Concatenate every live run after the prompt marker.
    pub fn aggregate_editable_text(&self) -> String {
        self.segments[self.prompt_index + 1..]
            .iter()
            .map(|s| s.text.as_str())
            .collect()
    }

    /// Remove everything after the prompt marker, leaving an empty editable
    /// region. The caret is clamped into the remaining document.
    pub fn clear_editable_region(&mut self) {
        self.segments.truncate(self.prompt_index + 1);
        self.segments.push(DisplaySegment::live(""));
        let len = self.doc_len();
        self.caret = self.caret.min(len);
        self.selection_anchor = None;
    }

    /// Clear the editable region and fill it with `text`, caret at end.
    pub fn replace_editable_region(&mut self, text: &str) {
        self.segments.truncate(self.prompt_index + 1);
        self.segments.push(DisplaySegment::live(text));
        self.caret = self.doc_len();
        self.selection_anchor = None;
    }

    /// Append a live run at the editable tail, caret at document end.
    pub fn append_live_run(&mut self, text: &str) {
        self.segments.push(DisplaySegment::live(text));
        self.caret = self.doc_len();
        self.selection_anchor = None;
    }

    /// Insert text into the live region at the caret.
    ///
    /// The caller must have checked the boundary policy: the caret is
    /// expected to sit at or after `boundary_end`.
    pub fn insert_live_text(&mut self, text: &str) {
        let boundary = self.boundary_end();
        debug_assert!(self.caret >= boundary);
        let rel = self.caret - boundary;
        let mut live: Vec<char> = self.aggregate_editable_text().chars().collect();
        let rel = rel.min(live.len());
        live.splice(rel..rel, text.chars());
        let live: String = live.into_iter().collect();
        self.segments.truncate(self.prompt_index + 1);
        self.segments.push(DisplaySegment::live(live));
        self.caret = boundary + rel + char_count(text);
        self.selection_anchor = None;
    }

    /// Delete the character before the caret. Caller pre-checks the policy
    /// (caret strictly after `boundary_end`).
    pub fn backspace_at_caret(&mut self) {
        let boundary = self.boundary_end();
        let rel = self.caret.saturating_sub(boundary);
        if rel == 0 {
            return;
        }
        let mut live: Vec<char> = self.aggregate_editable_text().chars().collect();
        if rel <= live.len() {
            live.remove(rel - 1);
            self.rewrite_live(live);
            self.caret -= 1;
        }
    }

    /// Delete the character at the caret (forward delete). Caller pre-checks
    /// the policy (caret at or after `boundary_end`).
    pub fn delete_at_caret(&mut self) {
        let boundary = self.boundary_end();
        if self.caret < boundary {
            return;
        }
        let rel = self.caret - boundary;
        let mut live: Vec<char> = self.aggregate_editable_text().chars().collect();
        if rel < live.len() {
            live.remove(rel);
            self.rewrite_live(live);
        }
    }

    /// Delete an absolute char range that lies entirely inside the editable
    /// region, leaving the caret at the start of the range.
    pub fn delete_editable_range(&mut self, start: usize, end: usize) {
        let boundary = self.boundary_end();
        if start < boundary || end < start {
            return;
        }
        let mut live: Vec<char> = self.aggregate_editable_text().chars().collect();
        let rel_start = (start - boundary).min(live.len());
        let rel_end = (end - boundary).min(live.len());
        live.drain(rel_start..rel_end);
        self.rewrite_live(live);
        self.caret = start;
        self.selection_anchor = None;
    }

    fn rewrite_live(&mut self, live: Vec<char>) {
        let live: String = live.into_iter().collect();
        self.segments.truncate(self.prompt_index + 1);
        self.segments.push(DisplaySegment::live(live));
        self.selection_anchor = None;
    }

    // -- history region -----------------------------------------------------

    /// Append rendered history lines, preserving the in-progress edit.
    ///
    /// Captures the live text, drops the marker and live runs, appends one
    /// run + line-break pair per entry, then re-inserts the marker and the
    /// captured edit. Caret moves to document end.
    pub fn append_history_lines(&mut self, lines: &[(String, ColorTag)]) {
        let command = self.aggregate_editable_text();
        let prompt = self.segments[self.prompt_index].text.clone();
        self.segments.truncate(self.prompt_index);
        for (text, color) in lines {
            self.segments.push(DisplaySegment::history(text.clone(), *color));
            self.segments.push(DisplaySegment::line_break());
        }
        self.prompt_index = self.segments.len();
        self.segments.push(DisplaySegment::prompt(prompt));
        self.segments.push(DisplaySegment::live(command));
        self.caret = self.doc_len();
        self.selection_anchor = None;
    }

    /// Remove the first history run whose text equals `text`, along with its
    /// trailing line break. Returns whether a run was removed.
    ///
    /// The caret stays on the same logical position: offsets after the
    /// removed span shift left by the removed length.
    pub fn remove_history_line(&mut self, text: &str) -> bool {
        let mut offset = 0usize;
        for i in 0..self.prompt_index {
            let seg = &self.segments[i];
            if seg.origin == SegmentOrigin::HistoryItem && seg.text == text {
                let mut removed_len = seg.char_len();
                let mut removed_count = 1;
                if self
                    .segments
                    .get(i + 1)
                    .map(|s| s.origin == SegmentOrigin::LineBreak)
                    .unwrap_or(false)
                {
                    removed_len += 1;
                    removed_count = 2;
                }
                self.segments.drain(i..i + removed_count);
                self.prompt_index -= removed_count;
                self.caret = shift_left(self.caret, offset, removed_len);
                self.selection_anchor = self
                    .selection_anchor
                    .map(|a| shift_left(a, offset, removed_len));
                return true;
            }
            offset += seg.char_len();
        }
        false
    }

    /// Discard all history segments, keeping the prompt marker and the
    /// in-progress edit.
    pub fn clear_history(&mut self) {
        let removed: usize = self.segments[..self.prompt_index]
            .iter()
            .map(DisplaySegment::char_len)
            .sum();
        self.segments.drain(..self.prompt_index);
        self.prompt_index = 0;
        self.caret = shift_left(self.caret, 0, removed);
        self.selection_anchor = self.selection_anchor.map(|a| shift_left(a, 0, removed));
    }

    // -- prompt -------------------------------------------------------------

    pub fn prompt(&self) -> &str {
        &self.segments[self.prompt_index].text
    }

    /// Replace the prompt marker's text in place. Caret and selection
    /// offsets in the editable region shift by the length delta.
    pub fn set_prompt(&mut self, text: &str) {
        let boundary = self.boundary_end();
        let old_len = self.segments[self.prompt_index].char_len();
        let new_len = char_count(text);
        self.segments[self.prompt_index].text = text.to_string();
        if self.caret >= boundary {
            self.caret = self.caret - old_len + new_len;
        }
        if let Some(anchor) = self.selection_anchor {
            if anchor >= boundary {
                self.selection_anchor = Some(anchor - old_len + new_len);
            }
        }
    }

    // -- submission ---------------------------------------------------------

    /// Record the line yielded by the most recent submission.
    pub fn mark_submitted(&mut self, line: &str) {
        self.last_submitted = line.to_string();
    }

    pub fn last_submitted(&self) -> &str {
        &self.last_submitted
    }

    // -- rendering support --------------------------------------------------

    pub fn segments(&self) -> &[DisplaySegment] {
        &self.segments
    }

    pub fn prompt_index(&self) -> usize {
        self.prompt_index
    }

    /// Split the document into display lines: one per history item, plus the
    /// final prompt + live line. Each line is a list of (text, color) runs;
    /// line-break segments are consumed as separators.
    pub fn display_lines(&self) -> Vec<Vec<(&str, ColorTag)>> {
        let mut lines = Vec::new();
        let mut current: Vec<(&str, ColorTag)> = Vec::new();
        for seg in &self.segments {
            if seg.origin == SegmentOrigin::LineBreak {
                lines.push(std::mem::take(&mut current));
            } else {
                current.push((seg.text.as_str(), seg.color));
            }
        }
        lines.push(current);
        lines
    }

    /// The caret's display position as (line, column) in character cells.
    pub fn caret_line_col(&self) -> (usize, usize) {
        let mut offset = 0usize;
        let mut row = 0usize;
        let mut line_start = 0usize;
        for seg in &self.segments {
            let len = seg.char_len();
            if seg.origin == SegmentOrigin::LineBreak && offset + len <= self.caret {
                row += 1;
                line_start = offset + len;
            }
            offset += len;
        }
        (row, self.caret - line_start)
    }
}

fn shift_left(pos: usize, removed_at: usize, removed_len: usize) -> usize {
    if pos <= removed_at {
        pos
    } else if pos >= removed_at + removed_len {
        pos - removed_len
    } else {
        removed_at
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn buf() -> TextBuffer {
        TextBuffer::new("> ")
    }

    #[test]
    fn new_buffer_has_prompt_and_empty_live() {
        let b = buf();
        assert_eq!(b.prompt(), "> ");
        assert_eq!(b.aggregate_editable_text(), "");
        assert_eq!(b.boundary_end(), 2);
        assert_eq!(b.caret(), 2);
    }

    #[test]
    fn insert_live_text_at_tail() {
        let mut b = buf();
        b.insert_live_text("hi");
        assert_eq!(b.aggregate_editable_text(), "hi");
        assert_eq!(b.caret(), 4);
    }

    #[test]
    fn insert_live_text_mid_line() {
        let mut b = buf();
        b.insert_live_text("ac");
        b.move_caret_left();
        b.insert_live_text("b");
        assert_eq!(b.aggregate_editable_text(), "abc");
        assert_eq!(b.caret(), b.boundary_end() + 2);
    }

    #[test]
    fn backspace_removes_before_caret() {
        let mut b = buf();
        b.insert_live_text("abc");
        b.backspace_at_caret();
        assert_eq!(b.aggregate_editable_text(), "ab");
        assert_eq!(b.caret(), b.boundary_end() + 2);
    }

    #[test]
    fn backspace_at_boundary_is_noop() {
        let mut b = buf();
        b.insert_live_text("a");
        b.set_caret(b.boundary_end());
        b.backspace_at_caret();
        assert_eq!(b.aggregate_editable_text(), "a");
    }

    #[test]
    fn delete_at_caret_forward() {
        let mut b = buf();
        b.insert_live_text("abc");
        b.set_caret(b.boundary_end());
        b.delete_at_caret();
        assert_eq!(b.aggregate_editable_text(), "bc");
        assert_eq!(b.caret(), b.boundary_end());
    }

    #[test]
    fn delete_at_document_end_is_noop() {
        let mut b = buf();
        b.insert_live_text("a");
        b.delete_at_caret();
        assert_eq!(b.aggregate_editable_text(), "a");
    }

    #[test]
    fn clear_editable_region_leaves_prompt() {
        let mut b = buf();
        b.insert_live_text("stuff");
        b.clear_editable_region();
        assert_eq!(b.aggregate_editable_text(), "");
        assert_eq!(b.prompt(), "> ");
        assert_eq!(b.caret(), b.boundary_end());
    }

    #[test]
    fn replace_editable_region() {
        let mut b = buf();
        b.insert_live_text("old");
        b.replace_editable_region("new text");
        assert_eq!(b.aggregate_editable_text(), "new text");
        assert_eq!(b.caret(), b.doc_len());
    }

    #[test]
    fn aggregate_concatenates_multiple_live_runs() {
        let mut b = buf();
        b.append_live_run("foo");
        b.append_live_run("bar");
        assert_eq!(b.aggregate_editable_text(), "foobar");
    }

    #[test]
    fn append_history_preserves_in_flight_edit() {
        let mut b = buf();
        b.insert_live_text("hel");
        b.append_history_lines(&[("X".to_string(), ColorTag::Default)]);
        assert_eq!(b.aggregate_editable_text(), "hel");
        assert_eq!(b.display_lines().len(), 2);
        assert_eq!(b.display_lines()[0][0].0, "X");
        assert_eq!(b.caret(), b.doc_len());
    }

    #[test]
    fn append_history_keeps_single_prompt_marker() {
        let mut b = buf();
        b.append_history_lines(&[("a".to_string(), ColorTag::Default)]);
        b.append_history_lines(&[("b".to_string(), ColorTag::Default)]);
        let markers = b
            .segments()
            .iter()
            .filter(|s| s.origin == SegmentOrigin::PromptMarker)
            .count();
        assert_eq!(markers, 1);
        assert_eq!(b.prompt_index(), 4);
    }

    #[test]
    fn remove_history_line_first_match_only() {
        let mut b = buf();
        b.append_history_lines(&[
            ("dup".to_string(), ColorTag::Default),
            ("dup".to_string(), ColorTag::Info),
        ]);
        assert!(b.remove_history_line("dup"));
        let lines = b.display_lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0][0], ("dup", ColorTag::Info));
    }

    #[test]
    fn remove_history_line_removes_trailing_break() {
        let mut b = buf();
        b.append_history_lines(&[("one".to_string(), ColorTag::Default)]);
        let before = b.segments().len();
        assert!(b.remove_history_line("one"));
        assert_eq!(b.segments().len(), before - 2);
    }

    #[test]
    fn remove_history_line_missing_returns_false() {
        let mut b = buf();
        b.append_history_lines(&[("one".to_string(), ColorTag::Default)]);
        assert!(!b.remove_history_line("two"));
    }

    #[test]
    fn remove_history_keeps_caret_on_logical_position() {
        let mut b = buf();
        b.insert_live_text("edit");
        b.append_history_lines(&[("aaaa".to_string(), ColorTag::Default)]);
        let caret_before = b.caret();
        b.remove_history_line("aaaa");
        // "aaaa\n" is 5 chars before the caret.
        assert_eq!(b.caret(), caret_before - 5);
        assert_eq!(b.aggregate_editable_text(), "edit");
    }

    #[test]
    fn clear_history_keeps_edit() {
        let mut b = buf();
        b.insert_live_text("keep");
        b.append_history_lines(&[
            ("a".to_string(), ColorTag::Default),
            ("b".to_string(), ColorTag::Default),
        ]);
        b.clear_history();
        assert_eq!(b.aggregate_editable_text(), "keep");
        assert_eq!(b.display_lines().len(), 1);
        assert_eq!(b.prompt_index(), 0);
    }

    #[test]
    fn set_prompt_shifts_caret() {
        let mut b = buf();
        b.insert_live_text("abc");
        let caret = b.caret();
        b.set_prompt(">>> ");
        assert_eq!(b.prompt(), ">>> ");
        assert_eq!(b.caret(), caret + 2);
        assert_eq!(b.aggregate_editable_text(), "abc");
    }

    #[test]
    fn set_prompt_shorter_shifts_back() {
        let mut b = buf();
        b.insert_live_text("abc");
        let caret = b.caret();
        b.set_prompt(">");
        assert_eq!(b.caret(), caret - 1);
    }

    #[test]
    fn selection_range_normalizes() {
        let mut b = buf();
        b.insert_live_text("hello");
        b.select(b.doc_len(), b.boundary_end());
        assert_eq!(
            b.selection_range(),
            Some((b.boundary_end(), b.boundary_end() + 5))
        );
    }

    #[test]
    fn selection_start_without_selection_is_caret() {
        let mut b = buf();
        b.insert_live_text("abc");
        assert_eq!(b.selection_start(), b.caret());
    }

    #[test]
    fn select_all_spans_document() {
        let mut b = buf();
        b.append_history_lines(&[("x".to_string(), ColorTag::Default)]);
        b.select_all();
        assert_eq!(b.selection_range(), Some((0, b.doc_len())));
    }

    #[test]
    fn selection_in_editable_rejects_cross_boundary() {
        let mut b = buf();
        b.append_history_lines(&[("x".to_string(), ColorTag::Default)]);
        b.insert_live_text("abc");
        b.select(0, b.doc_len());
        assert!(!b.selection_in_editable());
        b.select(b.boundary_end(), b.doc_len());
        assert!(b.selection_in_editable());
    }

    #[test]
    fn text_range_flattens_breaks() {
        let mut b = buf();
        b.append_history_lines(&[("ab".to_string(), ColorTag::Default)]);
        assert_eq!(b.text_range(0, 3), "ab\n");
    }

    #[test]
    fn delete_editable_range_collapses_caret() {
        let mut b = buf();
        b.insert_live_text("hello");
        let start = b.boundary_end() + 1;
        let end = b.boundary_end() + 4;
        b.delete_editable_range(start, end);
        assert_eq!(b.aggregate_editable_text(), "ho");
        assert_eq!(b.caret(), start);
    }

    #[test]
    fn display_lines_final_line_has_prompt_and_live() {
        let mut b = buf();
        b.insert_live_text("cmd");
        b.append_history_lines(&[("out".to_string(), ColorTag::Error)]);
        let lines = b.display_lines();
        assert_eq!(lines[0], vec![("out", ColorTag::Error)]);
        assert_eq!(lines[1][0], ("> ", ColorTag::Default));
        assert_eq!(lines[1][1], ("cmd", ColorTag::Default));
    }

    #[test]
    fn caret_line_col_on_live_line() {
        let mut b = buf();
        b.append_history_lines(&[("out".to_string(), ColorTag::Default)]);
        b.insert_live_text("ab");
        let (row, col) = b.caret_line_col();
        assert_eq!(row, 1);
        assert_eq!(col, 4); // "> " + "ab"
    }

    #[test]
    fn caret_line_col_in_history() {
        let mut b = buf();
        b.append_history_lines(&[("out".to_string(), ColorTag::Default)]);
        b.set_caret(1);
        assert_eq!(b.caret_line_col(), (0, 1));
    }

    #[test]
    fn unicode_offsets_are_char_based() {
        let mut b = buf();
        b.insert_live_text("héllo");
        assert_eq!(b.caret(), b.boundary_end() + 5);
        b.backspace_at_caret();
        b.backspace_at_caret();
        b.backspace_at_caret();
        b.backspace_at_caret();
        assert_eq!(b.aggregate_editable_text(), "h");
    }

    #[test]
    fn mark_submitted_is_frozen() {
        let mut b = buf();
        b.insert_live_text("run it");
        let line = b.aggregate_editable_text();
        b.mark_submitted(&line);
        b.clear_editable_region();
        assert_eq!(b.last_submitted(), "run it");
    }
}
