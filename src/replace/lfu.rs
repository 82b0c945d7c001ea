use crate::{config::MAX_PAGE, frames::FrameSet, reference::Page};

use super::{AccessResult, Replace};

/// Least frequently used. Counts are kept per page rather than per slot and
/// survive eviction, so a returning page resumes its old count.
#[derive(Debug, Clone)]
pub struct Lfu {
    count: [u32; MAX_PAGE as usize + 1],
}

impl Lfu {
    pub fn new() -> Self {
        Lfu {
            count: [0; MAX_PAGE as usize + 1],
        }
    }

    pub fn count(&self, page: Page) -> u32 {
        self.count[page as usize]
    }
}

impl Default for Lfu {
    fn default() -> Self {
        Self::new()
    }
}

impl Replace for Lfu {
    fn access(&mut self, _slot: usize, page: Page, _result: AccessResult) {
        self.count[page as usize] += 1;
    }

    fn victim(&self, frames: &FrameSet, _upcoming: &[Page]) -> usize {
        // (slot, count); strictly smaller, so the first least used slot wins.
        let mut least: Option<(usize, u32)> = None;
        for (slot, page) in frames.pages() {
            let count = self.count(page);
            if least.map_or(true, |(_, min)| count < min) {
                least = Some((slot, count));
            }
        }
        least.map_or(0, |(slot, _)| slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evicts_least_counted_first_on_ties() {
        let mut lfu = Lfu::new();
        let mut frames = FrameSet::new(3);
        for page in [1, 2, 3] {
            let slot = frames.insert(page);
            lfu.access(slot, page, AccessResult::Miss);
        }
        assert_eq!(lfu.victim(&frames, &[]), 0);

        lfu.access(0, 1, AccessResult::Hit);
        assert_eq!(lfu.victim(&frames, &[]), 1);
    }

    #[test]
    fn counts_survive_eviction() {
        let mut lfu = Lfu::new();
        let mut frames = FrameSet::new(1);
        lfu.access(frames.insert(4), 4, AccessResult::Miss);
        lfu.access(0, 4, AccessResult::Hit);
        frames.replace(0, 6);
        lfu.access(0, 6, AccessResult::Miss);
        frames.replace(0, 4);
        lfu.access(0, 4, AccessResult::Miss);
        assert_eq!(lfu.count(4), 3);
        assert_eq!(lfu.count(6), 1);
    }
}
