use serde::Serialize;

use crate::{replace::Policy, trace::Trace};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunStats {
    pub policy: Policy,
    pub frames: usize,
    pub references: usize,
    pub faults: usize,
    pub hits: usize,
    pub evictions: usize,
    pub fault_rate: f64,
}

impl RunStats {
    pub fn new(policy: Policy, frames: usize, trace: &Trace) -> Self {
        let references = trace.len();
        let faults = trace.fault_count();
        let fault_rate = if references == 0 {
            0.0
        } else {
            faults as f64 / references as f64
        };
        RunStats {
            policy,
            frames,
            references,
            faults,
            hits: trace.hit_count(),
            evictions: trace.victims().count(),
            fault_rate,
        }
    }
}
