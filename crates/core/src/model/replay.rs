use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::Snapshot;

#[derive(Debug, Error)]
#[error("replay contains no snapshots")]
pub struct EmptyReplay;

/// An ordered, atomically-loaded sequence of snapshots plus the cursor the
/// navigation controls move.
///
/// The cursor is the only mutable piece; snapshots are immutable once
/// loaded. Navigation clamps at both ends, so the cursor always satisfies
/// `0 <= current < len`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Replay {
    snapshots: Vec<Snapshot>,
    current: usize,
}

impl Replay {
    /// Build a replay positioned on the first snapshot. Rejects an empty
    /// list — callers keep whatever replay they already hold on failure.
    pub fn new(snapshots: Vec<Snapshot>) -> Result<Self, EmptyReplay> {
        if snapshots.is_empty() {
            return Err(EmptyReplay);
        }
        Ok(Self {
            snapshots,
            current: 0,
        })
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Zero-based cursor position.
    pub fn position(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> &Snapshot {
        // The constructor guarantees a non-empty list and navigation clamps,
        // so the cursor is always in range.
        &self.snapshots[self.current]
    }

    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Step forward. Returns whether the cursor moved; a no-op at the end.
    pub fn next(&mut self) -> bool {
        if self.at_end() {
            return false;
        }
        self.current += 1;
        true
    }

    /// Step backward. Returns whether the cursor moved; a no-op at the start.
    pub fn previous(&mut self) -> bool {
        if self.at_start() {
            return false;
        }
        self.current -= 1;
        true
    }

    pub fn at_start(&self) -> bool {
        self.current == 0
    }

    pub fn at_end(&self) -> bool {
        self.current + 1 >= self.snapshots.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::HexMap;

    fn snapshot(moves_left: i64) -> Snapshot {
        Snapshot {
            map: HexMap {
                radius: 1,
                cells: Vec::new(),
                treasure_appeared: false,
                treasure_value: String::new(),
                moves_left,
            },
            players: Vec::new(),
        }
    }

    fn replay(n: usize) -> Replay {
        Replay::new((0..n).map(|i| snapshot(i as i64)).collect()).expect("non-empty replay")
    }

    #[test]
    fn rejects_empty() {
        assert!(Replay::new(Vec::new()).is_err());
    }

    #[test]
    fn starts_at_first_snapshot() {
        let r = replay(3);
        assert_eq!(r.position(), 0);
        assert!(r.at_start());
        assert!(!r.at_end());
    }

    #[test]
    fn previous_clamps_at_start() {
        let mut r = replay(3);
        assert!(!r.previous());
        assert_eq!(r.position(), 0);
    }

    #[test]
    fn next_clamps_at_end() {
        let mut r = replay(2);
        assert!(r.next());
        assert!(r.at_end());
        assert!(!r.next());
        assert_eq!(r.position(), 1);
    }

    #[test]
    fn n_minus_one_steps_reach_the_end() {
        let mut r = replay(5);
        let mut steps = 0;
        while r.next() {
            steps += 1;
        }
        assert_eq!(steps, 4);
        assert_eq!(r.position(), 4);
        assert!(r.at_end());
    }

    #[test]
    fn single_snapshot_is_both_boundaries() {
        let mut r = replay(1);
        assert!(r.at_start());
        assert!(r.at_end());
        assert!(!r.next());
        assert!(!r.previous());
    }

    #[test]
    fn current_follows_cursor() {
        let mut r = replay(3);
        assert_eq!(r.current().map.moves_left, 0);
        r.next();
        assert_eq!(r.current().map.moves_left, 1);
        r.previous();
        assert_eq!(r.current().map.moves_left, 0);
    }
}
