//! Prompt boundary policy — pure allow/deny decisions for every key family.
//!
//! Every rule is a comparison of the caret and selection-start offsets
//! against the boundary offset (end of the prompt marker). No rule inspects
//! buffer contents, so each decision is O(1).
//!
//! `Deny` means the key must be reported handled with no buffer mutation;
//! `Allow` means the controller may apply the edit (or, for clipboard
//! chords, let the host perform the clipboard operation).

// ---------------------------------------------------------------------------
// PolicyCtx / Decision
// ---------------------------------------------------------------------------

/// The three offsets every decision is made from.
#[derive(Debug, Clone, Copy)]
pub struct PolicyCtx {
    /// Caret offset in the flattened document.
    pub caret: usize,
    /// Lower end of the selection, or the caret when nothing is selected.
    pub selection_start: usize,
    /// Offset of the end of the prompt marker.
    pub boundary_end: usize,
}

/// Outcome of a policy check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny,
}

impl Decision {
    pub fn is_allowed(self) -> bool {
        self == Decision::Allow
    }
}

fn deny_if(cond: bool) -> Decision {
    if cond {
        Decision::Deny
    } else {
        Decision::Allow
    }
}

// ---------------------------------------------------------------------------
// Per-key rules
// ---------------------------------------------------------------------------

/// Backspace may not erase the prompt glyph or anything before it: denied
/// at the boundary and anywhere left of it.
pub fn backspace(ctx: PolicyCtx) -> Decision {
    deny_if(ctx.caret <= ctx.boundary_end)
}

/// Left arrow is swallowed exactly at the boundary; travel further left
/// (caret already inside history) is read-only and permitted.
pub fn left(ctx: PolicyCtx) -> Decision {
    deny_if(ctx.caret == ctx.boundary_end)
}

/// Forward delete is denied strictly before the boundary, so the first
/// editable character can still be deleted from the boundary itself.
pub fn forward_delete(ctx: PolicyCtx) -> Decision {
    deny_if(ctx.caret < ctx.boundary_end)
}

/// Printable keys and paste: denied when the caret sits in the protected
/// region or the selection reaches back before the caret.
pub fn insert(ctx: PolicyCtx) -> Decision {
    deny_if(ctx.caret < ctx.boundary_end || ctx.selection_start < ctx.caret)
}

/// Cut and paste chords: same test as [`insert`], applied whether or not a
/// modifier is held — the destructive variants may never touch history.
pub fn cut_or_paste(ctx: PolicyCtx) -> Decision {
    deny_if(ctx.caret < ctx.boundary_end || ctx.selection_start < ctx.caret)
}

/// History recall (Up/Down): only the live line may be replaced, so recall
/// is denied while the caret sits inside protected history.
pub fn history_recall(ctx: PolicyCtx) -> Decision {
    deny_if(ctx.caret < ctx.boundary_end)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
