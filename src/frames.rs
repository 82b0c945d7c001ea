use crate::{config::MAX_FRAMES, reference::Page};

/// Fixed pool of physical frames. Slots fill in index order and are never
/// emptied once used, so the occupied slots are always `0..len`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSet {
    slots: [Option<Page>; MAX_FRAMES],
    capacity: usize,
    len: usize,
}

impl FrameSet {
    pub fn new(capacity: usize) -> Self {
        assert!((1..=MAX_FRAMES).contains(&capacity));
        FrameSet {
            slots: [None; MAX_FRAMES],
            capacity,
            len: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity
    }

    pub fn contains(&self, page: Page) -> bool {
        self.slot_of(page).is_some()
    }

    pub fn slot_of(&self, page: Page) -> Option<usize> {
        self.occupied().iter().position(|&p| p == Some(page))
    }

    pub fn get(&self, slot: usize) -> Option<Page> {
        self.occupied().get(slot).copied().flatten()
    }

    /// Occupied slots in index order.
    pub fn pages(&self) -> impl Iterator<Item = (usize, Page)> + '_ {
        self.occupied()
            .iter()
            .enumerate()
            .filter_map(|(slot, p)| p.map(|p| (slot, p)))
    }

    /// Places `page` in the first unused slot. The caller checks `contains`
    /// beforehand.
    pub fn insert(&mut self, page: Page) -> usize {
        assert!(!self.is_full(), "insert into a full frame set");
        debug_assert!(!self.contains(page));
        let slot = self.len;
        self.slots[slot] = Some(page);
        self.len += 1;
        slot
    }

    /// Overwrites an occupied slot and returns the page it held.
    pub fn replace(&mut self, slot: usize, page: Page) -> Page {
        debug_assert!(!self.contains(page));
        self.slots[..self.len][slot]
            .replace(page)
            .expect("occupied slots always hold a page")
    }

    /// Contents of every slot, `None` where unused.
    pub fn snapshot(&self) -> Vec<Option<Page>> {
        self.slots[..self.capacity].to_vec()
    }

    fn occupied(&self) -> &[Option<Page>] {
        &self.slots[..self.len]
    }
}
