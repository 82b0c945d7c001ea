use crate::{frames::FrameSet, reference::Page};

use super::{AccessResult, Replace};

/// Bélády's optimal policy: evict the page whose next use lies farthest in
/// the future. Needs no state beyond the lookahead.
#[derive(Debug, Clone, Default)]
pub struct Opt;

impl Replace for Opt {
    fn access(&mut self, _slot: usize, _page: Page, _result: AccessResult) {}

    fn victim(&self, frames: &FrameSet, upcoming: &[Page]) -> usize {
        // (slot, distance to next use)
        let mut farthest: Option<(usize, usize)> = None;
        for (slot, page) in frames.pages() {
            let Some(distance) = upcoming.iter().position(|&p| p == page) else {
                // Never used again, first such slot wins.
                return slot;
            };
            if farthest.map_or(true, |(_, best)| distance > best) {
                farthest = Some((slot, distance));
            }
        }
        farthest.map_or(0, |(slot, _)| slot)
    }
}
