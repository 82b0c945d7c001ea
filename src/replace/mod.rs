pub mod fifo;
pub mod lfu;
pub mod lru;
pub mod opt;

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{error::ValidationError, frames::FrameSet, reference::Page};

use self::{fifo::Fifo, lfu::Lfu, lru::Lru, opt::Opt};

/// Bookkeeping and victim selection for one eviction discipline.
pub trait Replace {
    /// Records a reference to `page`, now held in `slot`. Called once per step
    /// after any insertion or replacement has been applied.
    fn access(&mut self, slot: usize, page: Page, result: AccessResult);

    /// Picks the slot to evict. Only called when `frames` is full.
    /// `upcoming` holds the references after the current one.
    fn victim(&self, frames: &FrameSet, upcoming: &[Page]) -> usize;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessResult {
    Hit,
    Miss,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    Fifo,
    Opt,
    Lru,
    Lfu,
}

impl Policy {
    pub const ALL: [Policy; 4] = [Policy::Fifo, Policy::Opt, Policy::Lru, Policy::Lfu];

    /// Fresh state for a run over `capacity` frames.
    pub fn new_state(self, capacity: usize) -> EvictionState {
        match self {
            Policy::Fifo => EvictionState::Fifo(Fifo::new(capacity)),
            Policy::Opt => EvictionState::Opt(Opt),
            Policy::Lru => EvictionState::Lru(Lru::new(capacity)),
            Policy::Lfu => EvictionState::Lfu(Lfu::new()),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Policy::Fifo => "FIFO",
            Policy::Opt => "OPT",
            Policy::Lru => "LRU",
            Policy::Lfu => "LFU",
        };
        f.write_str(name)
    }
}

impl FromStr for Policy {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fifo" => Ok(Policy::Fifo),
            "opt" => Ok(Policy::Opt),
            "lru" => Ok(Policy::Lru),
            "lfu" => Ok(Policy::Lfu),
            _ => Err(ValidationError::UnknownPolicy { name: s.to_owned() }),
        }
    }
}

#[derive(Debug, Clone)]
pub enum EvictionState {
    Fifo(Fifo),
    Opt(Opt),
    Lru(Lru),
    Lfu(Lfu),
}

impl Replace for EvictionState {
    fn access(&mut self, slot: usize, page: Page, result: AccessResult) {
        match self {
            EvictionState::Fifo(s) => s.access(slot, page, result),
            EvictionState::Opt(s) => s.access(slot, page, result),
            EvictionState::Lru(s) => s.access(slot, page, result),
            EvictionState::Lfu(s) => s.access(slot, page, result),
        }
    }

    fn victim(&self, frames: &FrameSet, upcoming: &[Page]) -> usize {
        match self {
            EvictionState::Fifo(s) => s.victim(frames, upcoming),
            EvictionState::Opt(s) => s.victim(frames, upcoming),
            EvictionState::Lru(s) => s.victim(frames, upcoming),
            EvictionState::Lfu(s) => s.victim(frames, upcoming),
        }
    }
}
