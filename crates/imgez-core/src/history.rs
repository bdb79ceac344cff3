//! Undo history of committed image states.
//!
//! The stack is an ordered, append-only sequence of immutable snapshots.
//! Entry 0 is always the image as it was loaded; the last entry is what the
//! editor shows. Undo pops the last entry, reset truncates back to entry 0.
//!
//! The stack can be capped. When a push exceeds the cap, the oldest entry
//! *after* the original is evicted so that a reset can still reach the
//! loaded image.

use thiserror::Error;

use crate::buffer::ImageState;

/// Smallest cap that still leaves room for the original plus one edit.
const MIN_CAPPED_DEPTH: usize = 2;

/// Undo was requested with only the original entry left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Nothing to undo: already at the original image")]
pub struct EmptyHistoryError;

/// A committed image state and its position in the edit sequence.
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    /// Monotonic sequence index, never reused within one stack.
    pub seq: u64,
    /// The saved image state.
    pub state: ImageState,
}

/// Ordered record of image states enabling undo and reset.
#[derive(Debug, Clone)]
pub struct HistoryStack {
    entries: Vec<HistoryEntry>,
    next_seq: u64,
    max_depth: Option<usize>,
}

impl HistoryStack {
    /// Create a stack holding only the original state.
    ///
    /// `max_depth` of `None` or `Some(0)` means unbounded; any other cap is
    /// raised to at least two entries.
    pub fn new(original: ImageState, max_depth: Option<usize>) -> Self {
        let max_depth = max_depth
            .filter(|&depth| depth > 0)
            .map(|depth| depth.max(MIN_CAPPED_DEPTH));
        Self {
            entries: vec![HistoryEntry {
                seq: 0,
                state: original,
            }],
            next_seq: 1,
            max_depth,
        }
    }

    /// Append a state; it becomes the new top.
    pub fn push(&mut self, state: ImageState) {
        self.entries.push(HistoryEntry {
            seq: self.next_seq,
            state,
        });
        self.next_seq += 1;

        if let Some(max) = self.max_depth {
            while self.entries.len() > max {
                let evicted = self.entries.remove(1);
                log::debug!("history cap {max} reached, dropped entry #{}", evicted.seq);
            }
        }
    }

    /// Pop the top entry and return the new top.
    ///
    /// # Errors
    ///
    /// `EmptyHistoryError` if and only if exactly one entry remains.
    pub fn undo(&mut self) -> Result<&ImageState, EmptyHistoryError> {
        if self.entries.len() <= 1 {
            return Err(EmptyHistoryError);
        }
        self.entries.pop();
        Ok(self.current())
    }

    /// Truncate to the original entry and return it.
    pub fn reset_to_original(&mut self) -> &ImageState {
        self.entries.truncate(1);
        self.current()
    }

    /// The top-of-history state.
    pub fn current(&self) -> &ImageState {
        &self.top().state
    }

    /// The state the stack was created with.
    pub fn original(&self) -> &ImageState {
        &self.entries[0].state
    }

    pub fn top(&self) -> &HistoryEntry {
        // The constructor seeds one entry and nothing removes index 0
        &self.entries[self.entries.len() - 1]
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: a stack holds at least the original entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        self.entries.len() > 1
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Op {
        Push,
        Undo,
        Reset,
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![Just(Op::Push), Just(Op::Undo), Just(Op::Reset)]
    }

    proptest! {
        /// Property: EmptyHistoryError is produced iff exactly one entry remains,
        /// and the original entry survives any sequence of operations.
        #[test]
        fn prop_undo_errors_iff_single_entry(
            ops in proptest::collection::vec(op_strategy(), 0..40),
            cap in proptest::option::of(0usize..6),
        ) {
            let original = ImageState::new(1, 1, vec![9, 9, 9, 255]);
            let mut history = HistoryStack::new(original.clone(), cap);

            for op in ops {
                match op {
                    Op::Push => history.push(ImageState::new(2, 1, vec![1; 8])),
                    Op::Undo => {
                        let before = history.len();
                        let result = history.undo().map(|_| ());
                        prop_assert_eq!(result.is_err(), before == 1);
                    }
                    Op::Reset => {
                        history.reset_to_original();
                    }
                }
                prop_assert!(history.len() >= 1);
                prop_assert!(history.original().same_pixels(&original));
            }
        }
    }
}
