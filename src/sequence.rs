//! Shuffle sequencing for randomized slide order
//!
//! Maintains an ordered buffer of pending slide indices implementing a
//! non-repeating random visitation order.

use rand::seq::SliceRandom;
use rand::thread_rng;
use std::collections::VecDeque;

/// Upper bound on non-repeat redraws before falling back to sequential
/// advance. Unreachable while the buffer invariants hold; guards against a
/// slide count changing underneath a draw.
const MAX_DRAW_ATTEMPTS: usize = 16;

/// Pending-index buffer for shuffle mode
///
/// While enabled, holds a run of random permutations of `[0, slide_count)`
/// and serves them front to back, topping the buffer up before it can run
/// dry. Consecutive draws never repeat the slide currently showing.
#[derive(Debug, Clone, Default)]
pub struct ShuffleSequence {
    /// Pending indices (front = next to serve)
    pending: VecDeque<usize>,

    /// Whether shuffle mode is active
    enabled: bool,
}

impl ShuffleSequence {
    /// Create a disabled sequence
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether shuffle mode is active
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Number of buffered indices
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Enable shuffle mode, seeding a fresh permutation
    ///
    /// No-op if already enabled.
    pub fn enable(&mut self, slide_count: usize) {
        if self.enabled {
            return;
        }
        self.enabled = true;
        self.pending = permutation(slide_count).into();
    }

    /// Disable shuffle mode, discarding the buffered order
    ///
    /// No-op if already disabled.
    pub fn disable(&mut self) {
        if !self.enabled {
            return;
        }
        self.enabled = false;
        self.pending.clear();
    }

    /// Draw the next slide index
    ///
    /// Serves from the front of the buffer, rebuilding it whenever it is
    /// empty or holds an index out of range for the current count (the
    /// collection may have shrunk), and appending a fresh permutation once
    /// fewer than `slide_count` indices remain. Redraws until the result
    /// differs from `current`.
    ///
    /// Callers bypass shuffle entirely for two or fewer slides; with three
    /// or more, every permutation contains a value unequal to `current`, so
    /// the attempt cap only trips if the count changes mid-draw. On
    /// exhaustion the draw falls back to sequential advance.
    pub fn draw(&mut self, current: usize, slide_count: usize) -> usize {
        debug_assert!(slide_count > 2, "shuffle needs more than two slides");

        for _ in 0..MAX_DRAW_ATTEMPTS {
            let index = match self.pending.pop_front() {
                Some(index) if index < slide_count => index,
                // Empty or stale: rebuild and redraw
                _ => {
                    self.pending = permutation(slide_count).into();
                    continue;
                }
            };

            // Top up before the buffer can run dry
            if self.pending.len() < slide_count {
                self.pending.extend(permutation(slide_count));
            }

            if index != current {
                return index;
            }
        }

        tracing::warn!(
            "shuffle draw cap hit at slide {}, advancing sequentially",
            current
        );
        (current + 1) % slide_count
    }
}

/// Uniformly random permutation of `[0, count)`
///
/// Fisher-Yates over a freshly collected index vector; never touches
/// shared state.
fn permutation(count: usize) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..count).collect();
    indices.shuffle(&mut thread_rng());
    indices
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn permutation_covers_all_indices() {
        let indices = permutation(8);
        assert_eq!(indices.len(), 8);

        let unique: HashSet<usize> = indices.iter().copied().collect();
        assert_eq!(unique.len(), 8);
        assert!(indices.iter().all(|&index| index < 8));
    }

    #[test]
    fn enable_seeds_full_permutation() {
        let mut sequence = ShuffleSequence::new();
        assert!(!sequence.is_enabled());

        sequence.enable(5);
        assert!(sequence.is_enabled());
        assert_eq!(sequence.pending_len(), 5);
    }

    #[test]
    fn enable_is_idempotent() {
        let mut sequence = ShuffleSequence::new();
        sequence.enable(5);

        // Drawing shrinks and refills the buffer; a second enable must not
        // reseed it
        sequence.draw(0, 5);
        let len = sequence.pending_len();
        sequence.enable(5);
        assert_eq!(sequence.pending_len(), len);
    }

    #[test]
    fn disable_discards_buffer() {
        let mut sequence = ShuffleSequence::new();
        sequence.enable(5);
        sequence.disable();

        assert!(!sequence.is_enabled());
        assert_eq!(sequence.pending_len(), 0);

        // Disabling again is a no-op
        sequence.disable();
        assert!(!sequence.is_enabled());
    }

    #[test]
    fn draw_never_repeats_current() {
        let mut sequence = ShuffleSequence::new();
        sequence.enable(5);

        let mut current = 2;
        for _ in 0..500 {
            let next = sequence.draw(current, 5);
            assert_ne!(next, current);
            assert!(next < 5);
            current = next;
        }
    }

    #[test]
    fn draw_refills_before_exhaustion() {
        let mut sequence = ShuffleSequence::new();
        sequence.enable(4);

        let mut current = 0;
        for _ in 0..100 {
            current = sequence.draw(current, 4);
            assert!(
                sequence.pending_len() >= 4,
                "buffer dropped below slide count: {}",
                sequence.pending_len()
            );
        }
    }

    #[test]
    fn draw_rebuilds_when_count_shrinks() {
        let mut sequence = ShuffleSequence::new();
        sequence.enable(10);

        // Collection shrank from 10 to 4; stale indices must never escape
        let mut current = 0;
        for _ in 0..50 {
            current = sequence.draw(current, 4);
            assert!(current < 4);
        }
    }

    #[test]
    fn reenable_serves_fresh_indices() {
        let mut sequence = ShuffleSequence::new();
        sequence.enable(6);
        let mut current = 0;
        for _ in 0..20 {
            current = sequence.draw(current, 6);
        }

        sequence.disable();
        sequence.enable(3);

        let next = sequence.draw(0, 3);
        assert!(next < 3);
        assert_ne!(next, 0);
    }
}
