use crate::{config::MAX_FRAMES, frames::FrameSet, reference::Page};

use super::{AccessResult, Replace};

/// Least recently used, tracked as steps elapsed since each slot was last
/// referenced.
#[derive(Debug, Clone)]
pub struct Lru {
    age: [u32; MAX_FRAMES],
    capacity: usize,
}

impl Lru {
    pub fn new(capacity: usize) -> Self {
        debug_assert!((1..=MAX_FRAMES).contains(&capacity));
        Lru {
            age: [0; MAX_FRAMES],
            capacity,
        }
    }

    pub fn age(&self, slot: usize) -> u32 {
        self.age[slot]
    }
}

impl Replace for Lru {
    fn access(&mut self, slot: usize, _page: Page, _result: AccessResult) {
        self.age[..self.capacity]
            .iter_mut()
            .for_each(|a| *a = a.saturating_add(1));
        self.age[slot] = 1;
    }

    fn victim(&self, _frames: &FrameSet, _upcoming: &[Page]) -> usize {
        // Strictly greater, so the first oldest slot wins ties.
        let mut oldest = 0;
        for slot in 1..self.capacity {
            if self.age[slot] > self.age[oldest] {
                oldest = slot;
            }
        }
        oldest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ages_reset_on_reference() {
        let mut lru = Lru::new(3);
        lru.access(0, 1, AccessResult::Miss);
        lru.access(1, 2, AccessResult::Miss);
        lru.access(2, 3, AccessResult::Miss);
        assert_eq!((lru.age(0), lru.age(1), lru.age(2)), (3, 2, 1));

        lru.access(0, 1, AccessResult::Hit);
        assert_eq!((lru.age(0), lru.age(1), lru.age(2)), (1, 3, 2));
        assert_eq!(lru.victim(&FrameSet::new(3), &[]), 1);
    }

    #[test]
    fn first_slot_wins_ties() {
        let lru = Lru::new(4);
        assert_eq!(lru.victim(&FrameSet::new(4), &[]), 0);
    }
}
