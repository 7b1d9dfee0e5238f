//! Merge module - slides and merges a single line toward its start
//!
//! A line is read in the direction of the move after rotation, so index 0 is
//! the edge tiles slide toward. The pass is:
//!
//! 1. compact: drop empty cells, keep the order of the rest
//! 2. merge: scan left to right, fold equal neighbours into one doubled tile and
//!    skip past both, so a tile takes part in at most one merge per move
//! 3. pad: refill the tail with empty cells
//!
//! Compaction uses a stack-allocated `ArrayVec`, so the pass never allocates.
//! Equal tiles too large to double stay apart, so a hand-made grid can never
//! overflow a cell or lose tiles.

use arrayvec::ArrayVec;

use crate::types::Cell;

/// Result of merging one line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineMerge<const N: usize> {
    pub line: [Cell; N],
    /// Sum of the tiles produced by merges in this line
    pub score: u64,
    pub changed: bool,
}

/// Slide a line toward index 0, merging equal pairs once each
pub fn merge_line<const N: usize>(line: [Cell; N]) -> LineMerge<N> {
    let compact: ArrayVec<Cell, N> = line.iter().copied().filter(|&v| v != 0).collect();

    let mut out = [0; N];
    let mut score = 0u64;
    let mut write = 0;
    let mut read = 0;
    while read < compact.len() {
        let value = compact[read];
        let merged = if read + 1 < compact.len() && compact[read + 1] == value {
            value.checked_mul(2)
        } else {
            None
        };
        if let Some(merged) = merged {
            out[write] = merged;
            score = score.saturating_add(merged as u64);
            read += 2;
        } else {
            out[write] = value;
            read += 1;
        }
        write += 1;
    }

    LineMerge {
        line: out,
        score,
        changed: out != line,
    }
}
