//! Autocompletion cycling — a stateful cursor over a per-episode snapshot.
//!
//! An episode is a run of consecutive cycling-key presses. The candidate
//! snapshot is pulled lazily on the first press of an episode and held fixed
//! until any other key resets it, so a live-updating candidate source is
//! re-read between episodes but never mid-cycle.

/// Cycles through a snapshot of completion candidates.
///
/// The cursor index survives an episode reset and wraps to zero on use when
/// it runs past the snapshot length.
#[derive(Debug, Default)]
pub struct CompletionCycler {
    candidates: Vec<String>,
    cursor: usize,
}

impl CompletionCycler {
    pub fn new() -> Self {
        CompletionCycler {
            candidates: Vec::new(),
            cursor: 0,
        }
    }

    /// Pull a fresh snapshot if the current episode has none yet.
    pub fn ensure_candidates<F>(&mut self, pull: F)
    where
        F: FnOnce() -> Vec<String>,
    {
        if self.candidates.is_empty() {
            self.candidates = pull();
        }
    }

    /// The next candidate in cycle order, or `None` when the snapshot is
    /// empty. Advances the cursor with wraparound.
    pub fn next(&mut self) -> Option<String> {
        if self.candidates.is_empty() {
            return None;
        }
        if self.cursor >= self.candidates.len() {
            self.cursor = 0;
        }
        let candidate = self.candidates[self.cursor].clone();
        self.cursor += 1;
        Some(candidate)
    }

    /// End the episode: drop the snapshot so the next cycling key pulls a
    /// fresh one. The cursor is left alone.
    pub fn reset_episode(&mut self) {
        self.candidates.clear();
    }

    pub fn has_candidates(&self) -> bool {
        !self.candidates.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates() -> Vec<String> {
        vec!["foo".to_string(), "bar".to_string()]
    }

    #[test]
    fn cycles_in_order_with_wraparound() {
        let mut c = CompletionCycler::new();
        c.ensure_candidates(candidates);
        assert_eq!(c.next().as_deref(), Some("foo"));
        assert_eq!(c.next().as_deref(), Some("bar"));
        assert_eq!(c.next().as_deref(), Some("foo"));
    }

    #[test]
    fn empty_source_yields_none() {
        let mut c = CompletionCycler::new();
        c.ensure_candidates(Vec::new);
        assert_eq!(c.next(), None);
    }

    #[test]
    fn snapshot_held_fixed_within_episode() {
        let mut c = CompletionCycler::new();
        c.ensure_candidates(candidates);
        // A second pull within the episode must not replace the snapshot.
        c.ensure_candidates(|| vec!["other".to_string()]);
        assert_eq!(c.next().as_deref(), Some("foo"));
    }

    #[test]
    fn reset_episode_repulls() {
        let mut c = CompletionCycler::new();
        c.ensure_candidates(candidates);
        c.next();
        c.reset_episode();
        assert!(!c.has_candidates());
        c.ensure_candidates(|| vec!["fresh".to_string()]);
        assert_eq!(c.next().as_deref(), Some("fresh"));
    }

    #[test]
    fn cursor_survives_reset_and_wraps_on_use() {
        let mut c = CompletionCycler::new();
        c.ensure_candidates(candidates);
        c.next();
        c.next(); // cursor now 2
        c.reset_episode();
        c.ensure_candidates(|| vec!["only".to_string()]);
        // Cursor 2 is past the new snapshot; it wraps to the front.
        assert_eq!(c.next().as_deref(), Some("only"));
    }
}
