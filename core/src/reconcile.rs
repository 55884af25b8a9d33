//! Reconciliation — applies bound-collection deltas into the buffer's
//! history segments while preserving the in-progress edit.
//!
//! Items are opaque; the reconciler renders each through a configured
//! projection closure (resolved once at configuration time, never per-item
//! reflection) and falls back to the item's `Display` rendering when the
//! projection fails, so one bad item never loses the rest of the batch.

use std::fmt;

use tracing::{trace, warn};

use crate::buffer::{ColorTag, TextBuffer};

// ---------------------------------------------------------------------------
// ItemsDelta
// ---------------------------------------------------------------------------

/// A change delta against the externally bound ordered collection.
///
/// The set is closed: there is no "unknown kind" branch anywhere downstream.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemsDelta<T> {
    /// Items appended to the collection.
    Add(Vec<T>),
    /// Items removed from the collection, identified by rendered text.
    Remove(Vec<T>),
    /// Remove `old`, then add `new`, in that order.
    Replace { old: Vec<T>, new: Vec<T> },
    /// The collection was replaced wholesale; rebuild from this snapshot.
    Reset(Vec<T>),
    /// A reorder notification. Ignored — display order is arrival order.
    Move,
}

// ---------------------------------------------------------------------------
// ProjectionError
// ---------------------------------------------------------------------------

/// Failure to project an item to display text.
#[derive(Debug)]
pub enum ProjectionError {
    /// The configured display field does not exist on this item.
    FieldNotFound(String),
    /// The projection itself rejected the item.
    Invalid(String),
}

impl fmt::Display for ProjectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectionError::FieldNotFound(name) => {
                write!(f, "display field not found: {}", name)
            }
            ProjectionError::Invalid(msg) => write!(f, "projection failed: {}", msg),
        }
    }
}

impl std::error::Error for ProjectionError {}

// ---------------------------------------------------------------------------
// Reconciler
// ---------------------------------------------------------------------------

pub type DisplayFn<T> = Box<dyn Fn(&T) -> Result<String, ProjectionError>>;
pub type ColorFn<T> = Box<dyn Fn(&T) -> ColorTag>;

/// Applies [`ItemsDelta`]s to a [`TextBuffer`], one atomic pass per delta.
///
/// Identity for removal is rendered-text equality with first-match wins;
/// colliding item texts are a documented hazard for callers.
pub struct Reconciler<T> {
    display: Option<DisplayFn<T>>,
    color: Option<ColorFn<T>>,
}

impl<T: fmt::Display> Default for Reconciler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Display> Reconciler<T> {
    /// A reconciler using `Display` rendering and the default color tag.
    pub fn new() -> Self {
        Reconciler {
            display: None,
            color: None,
        }
    }

    /// Configure a display projection. On per-item failure the reconciler
    /// logs and falls back to the item's `Display` rendering.
    pub fn with_display(mut self, f: DisplayFn<T>) -> Self {
        self.display = Some(f);
        self
    }

    /// Configure a line-color projection; unset means the default tag.
    pub fn with_color(mut self, f: ColorFn<T>) -> Self {
        self.color = Some(f);
        self
    }

    /// Render one item: projection (with fallback), first line only.
    pub fn render(&self, item: &T) -> String {
        let text = match &self.display {
            Some(project) => match project(item) {
                Ok(text) => text,
                Err(err) => {
                    warn!(%err, "item projection failed, falling back to Display");
                    item.to_string()
                }
            },
            None => item.to_string(),
        };
        first_line(&text).to_string()
    }

    fn color_of(&self, item: &T) -> ColorTag {
        match &self.color {
            Some(color) => color(item),
            None => ColorTag::Default,
        }
    }

    fn render_pairs(&self, items: &[T]) -> Vec<(String, ColorTag)> {
        items
            .iter()
            .map(|item| (self.render(item), self.color_of(item)))
            .collect()
    }

    /// Apply one delta. Add and Reset leave the caret at document end;
    /// Remove leaves it on the same logical position.
    pub fn apply(&self, buffer: &mut TextBuffer, delta: &ItemsDelta<T>) {
        match delta {
            ItemsDelta::Add(items) => {
                buffer.append_history_lines(&self.render_pairs(items));
            }
            ItemsDelta::Remove(items) => {
                for item in items {
                    let text = self.render(item);
                    if !buffer.remove_history_line(&text) {
                        trace!(text = %text, "remove delta had no matching history run");
                    }
                }
            }
            ItemsDelta::Replace { old, new } => {
                for item in old {
                    buffer.remove_history_line(&self.render(item));
                }
                buffer.append_history_lines(&self.render_pairs(new));
            }
            ItemsDelta::Reset(items) => {
                buffer.clear_history();
                if items.is_empty() {
                    buffer.move_caret_to_end();
                } else {
                    buffer.append_history_lines(&self.render_pairs(items));
                }
            }
            ItemsDelta::Move => {}
        }
    }
}

/// The first line of a projected text; multi-line items are truncated
/// (a documented limitation inherited from the display model).
fn first_line(text: &str) -> &str {
    let end = text.find(['\n', '\r']).unwrap_or(text.len());
    &text[..end]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::TextBuffer;

    fn history_texts(buffer: &TextBuffer) -> Vec<String> {
        let lines = buffer.display_lines();
        lines[..lines.len() - 1]
            .iter()
            .map(|line| line.iter().map(|(t, _)| *t).collect::<String>())
            .collect()
    }

    #[test]
    fn add_appends_history_and_keeps_edit() {
        let mut buffer = TextBuffer::new("> ");
        buffer.insert_live_text("hel");
        let r: Reconciler<String> = Reconciler::new();
        r.apply(&mut buffer, &ItemsDelta::Add(vec!["X".to_string()]));
        assert_eq!(history_texts(&buffer), vec!["X"]);
        assert_eq!(buffer.aggregate_editable_text(), "hel");
        assert_eq!(buffer.caret(), buffer.doc_len());
    }

    #[test]
    fn remove_is_first_match_by_rendered_text() {
        let mut buffer = TextBuffer::new("> ");
        let r: Reconciler<String> = Reconciler::new();
        r.apply(
            &mut buffer,
            &ItemsDelta::Add(vec!["dup".to_string(), "dup".to_string()]),
        );
        r.apply(&mut buffer, &ItemsDelta::Remove(vec!["dup".to_string()]));
        assert_eq!(history_texts(&buffer), vec!["dup"]);
    }

    #[test]
    fn remove_missing_text_is_ignored() {
        let mut buffer = TextBuffer::new("> ");
        let r: Reconciler<String> = Reconciler::new();
        r.apply(&mut buffer, &ItemsDelta::Add(vec!["a".to_string()]));
        r.apply(&mut buffer, &ItemsDelta::Remove(vec!["zz".to_string()]));
        assert_eq!(history_texts(&buffer), vec!["a"]);
    }

    #[test]
    fn replace_removes_then_adds() {
        let mut buffer = TextBuffer::new("> ");
        let r: Reconciler<String> = Reconciler::new();
        r.apply(&mut buffer, &ItemsDelta::Add(vec!["old".to_string()]));
        r.apply(
            &mut buffer,
            &ItemsDelta::Replace {
                old: vec!["old".to_string()],
                new: vec!["new".to_string()],
            },
        );
        assert_eq!(history_texts(&buffer), vec!["new"]);
    }

    #[test]
    fn reset_rebuilds_and_preserves_edit() {
        let mut buffer = TextBuffer::new("> ");
        buffer.insert_live_text("typing");
        let r: Reconciler<String> = Reconciler::new();
        r.apply(&mut buffer, &ItemsDelta::Add(vec!["gone".to_string()]));
        r.apply(
            &mut buffer,
            &ItemsDelta::Reset(vec!["fresh".to_string(), "rows".to_string()]),
        );
        assert_eq!(history_texts(&buffer), vec!["fresh", "rows"]);
        assert_eq!(buffer.aggregate_editable_text(), "typing");
    }

    #[test]
    fn reset_empty_clears_history() {
        let mut buffer = TextBuffer::new("> ");
        let r: Reconciler<String> = Reconciler::new();
        r.apply(&mut buffer, &ItemsDelta::Add(vec!["a".to_string()]));
        r.apply(&mut buffer, &ItemsDelta::Reset(Vec::new()));
        assert!(history_texts(&buffer).is_empty());
        assert_eq!(buffer.caret(), buffer.doc_len());
    }

    #[test]
    fn reset_empty_unparks_caret_from_history() {
        let mut buffer = TextBuffer::new("> ");
        let r: Reconciler<String> = Reconciler::new();
        r.apply(&mut buffer, &ItemsDelta::Add(vec!["row".to_string()]));
        buffer.set_caret(1);
        r.apply(&mut buffer, &ItemsDelta::Reset(Vec::new()));
        assert_eq!(buffer.caret(), buffer.doc_len());
    }

    #[test]
    fn move_is_a_no_op() {
        let mut buffer = TextBuffer::new("> ");
        let r: Reconciler<String> = Reconciler::new();
        r.apply(&mut buffer, &ItemsDelta::Add(vec!["a".to_string()]));
        let before = buffer.segments().to_vec();
        r.apply(&mut buffer, &ItemsDelta::Move);
        assert_eq!(buffer.segments(), &before[..]);
    }

    #[test]
    fn multi_line_items_truncate_to_first_line() {
        let mut buffer = TextBuffer::new("> ");
        let r: Reconciler<String> = Reconciler::new();
        r.apply(
            &mut buffer,
            &ItemsDelta::Add(vec!["first\nsecond".to_string(), "a\r\nb".to_string()]),
        );
        assert_eq!(history_texts(&buffer), vec!["first", "a"]);
    }

    #[test]
    fn failing_projection_falls_back_per_item() {
        let mut buffer = TextBuffer::new("> ");
        let r: Reconciler<String> = Reconciler::new().with_display(Box::new(|item: &String| {
            if item == "bad" {
                Err(ProjectionError::FieldNotFound("text".to_string()))
            } else {
                Ok(format!("[{}]", item))
            }
        }));
        r.apply(
            &mut buffer,
            &ItemsDelta::Add(vec!["ok".to_string(), "bad".to_string(), "ok2".to_string()]),
        );
        // The bad item degrades to its Display text; the batch survives.
        assert_eq!(history_texts(&buffer), vec!["[ok]", "bad", "[ok2]"]);
    }

    #[test]
    fn color_projection_tags_runs() {
        let mut buffer = TextBuffer::new("> ");
        let r: Reconciler<String> =
            Reconciler::new().with_color(Box::new(|_: &String| ColorTag::Error));
        r.apply(&mut buffer, &ItemsDelta::Add(vec!["boom".to_string()]));
        assert_eq!(buffer.display_lines()[0][0].1, ColorTag::Error);
    }

    #[test]
    fn remove_leaves_caret_in_edit() {
        let mut buffer = TextBuffer::new("> ");
        buffer.insert_live_text("cmd");
        let r: Reconciler<String> = Reconciler::new();
        r.apply(&mut buffer, &ItemsDelta::Add(vec!["row".to_string()]));
        buffer.set_caret(buffer.boundary_end() + 1);
        let rel_before = buffer.caret() - buffer.boundary_end();
        r.apply(&mut buffer, &ItemsDelta::Remove(vec!["row".to_string()]));
        assert_eq!(buffer.caret() - buffer.boundary_end(), rel_before);
    }

    #[test]
    fn projection_error_display() {
        let err = ProjectionError::FieldNotFound("value".to_string());
        assert_eq!(err.to_string(), "display field not found: value");
    }
}
