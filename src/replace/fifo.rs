use crate::{config::MAX_FRAMES, frames::FrameSet, reference::Page};

use super::{AccessResult, Replace};

/// Evicts in insertion order. The pointer moves on every load and never on a
/// hit, so later hits do not protect a page.
#[derive(Debug, Clone)]
pub struct Fifo {
    next: usize,
    capacity: usize,
}

impl Fifo {
    pub fn new(capacity: usize) -> Self {
        debug_assert!((1..=MAX_FRAMES).contains(&capacity));
        Fifo { next: 0, capacity }
    }
}

impl Replace for Fifo {
    fn access(&mut self, slot: usize, _page: Page, result: AccessResult) {
        if result == AccessResult::Miss {
            debug_assert_eq!(slot, self.next);
            self.next = (slot + 1) % self.capacity;
        }
    }

    fn victim(&self, _frames: &FrameSet, _upcoming: &[Page]) -> usize {
        self.next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_wraps_and_ignores_hits() {
        let mut fifo = Fifo::new(2);
        let mut frames = FrameSet::new(2);
        fifo.access(frames.insert(1), 1, AccessResult::Miss);
        fifo.access(frames.insert(2), 2, AccessResult::Miss);
        assert_eq!(fifo.victim(&frames, &[]), 0);

        fifo.access(0, 1, AccessResult::Hit);
        assert_eq!(fifo.victim(&frames, &[]), 0);

        frames.replace(0, 3);
        fifo.access(0, 3, AccessResult::Miss);
        assert_eq!(fifo.victim(&frames, &[]), 1);
    }
}
