use log::{debug, info, trace};

use crate::{
    config::{MAX_FRAMES, MIN_FRAMES},
    error::{Error, Result, ValidationError},
    frames::FrameSet,
    reference::ReferenceString,
    replace::{AccessResult, EvictionState, Policy, Replace},
    stats::RunStats,
    trace::{Step, Trace, TraceBuilder, TraceTable},
};

/// One run of a policy over a reference string. Advances a single reference
/// per `step` call and owns all of its state, so a new policy or frame count
/// means a new `Simulation`.
#[derive(Debug, Clone)]
pub struct Simulation {
    reference: ReferenceString,
    policy: Policy,
    frames: FrameSet,
    state: EvictionState,
    trace: Trace,
}

impl Simulation {
    pub fn new(
        reference: ReferenceString,
        frame_count: usize,
        policy: Policy,
    ) -> std::result::Result<Self, ValidationError> {
        if !(MIN_FRAMES..=MAX_FRAMES).contains(&frame_count) {
            return Err(ValidationError::FrameCountOutOfRange {
                frames: frame_count,
            });
        }
        if reference.is_empty() {
            return Err(ValidationError::EmptyReferenceString);
        }
        Ok(Simulation {
            reference,
            policy,
            frames: FrameSet::new(frame_count),
            state: policy.new_state(frame_count),
            trace: Trace::new(),
        })
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    pub fn frame_count(&self) -> usize {
        self.frames.capacity()
    }

    pub fn reference(&self) -> &ReferenceString {
        &self.reference
    }

    /// Index of the next reference to process.
    pub fn position(&self) -> usize {
        self.trace.len()
    }

    pub fn has_next(&self) -> bool {
        self.position() < self.reference.len()
    }

    pub fn fault_count(&self) -> usize {
        self.trace.fault_count()
    }

    pub fn steps(&self) -> &[Step] {
        self.trace.steps()
    }

    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    pub fn into_trace(self) -> Trace {
        self.trace
    }

    /// Processes the next reference.
    pub fn step(&mut self) -> Result<&Step> {
        let position = self.position();
        let page = self.reference.get(position).ok_or(Error::OutOfRange {
            position,
            len: self.reference.len(),
        })?;

        let (slot, result, victim) = if let Some(slot) = self.frames.slot_of(page) {
            trace!("{} hit page {page} in slot {slot} at {position}", self.policy);
            (slot, AccessResult::Hit, None)
        } else if !self.frames.is_full() {
            let slot = self.frames.insert(page);
            trace!("{} loaded page {page} into slot {slot} at {position}", self.policy);
            (slot, AccessResult::Miss, None)
        } else {
            let slot = self
                .state
                .victim(&self.frames, self.reference.suffix_after(position));
            debug_assert!(slot < self.frames.len());
            let evicted = self.frames.replace(slot, page);
            debug!(
                "{} evicted page {evicted} from slot {slot} for page {page} at {position}",
                self.policy
            );
            (slot, AccessResult::Miss, Some(evicted))
        };
        self.state.access(slot, page, result);

        let fault = result == AccessResult::Miss;
        let faults = self.trace.fault_count() + usize::from(fault);
        if position + 1 == self.reference.len() {
            info!(
                "{} with {} frames finished: {faults} faults over {} references",
                self.policy,
                self.frame_count(),
                self.reference.len()
            );
        }
        Ok(self.trace.push(Step {
            position,
            page,
            fault,
            victim,
            frames: self.frames.snapshot(),
            faults,
        }))
    }

    /// Steps through every remaining reference.
    pub fn run_to_end(&mut self) -> Result<&Trace> {
        while self.has_next() {
            self.step()?;
        }
        Ok(&self.trace)
    }

    /// Table of the steps taken so far.
    pub fn render(&self) -> TraceTable {
        let mut builder = TraceBuilder::new(&self.reference, self.frame_count());
        for step in self.trace.steps() {
            builder.push(step);
        }
        builder.build()
    }

    pub fn stats(&self) -> RunStats {
        RunStats::new(self.policy, self.frame_count(), &self.trace)
    }
}

/// Runs `policy` over the whole reference string.
pub fn simulate(reference: &ReferenceString, frame_count: usize, policy: Policy) -> Result<Trace> {
    let mut sim = Simulation::new(reference.clone(), frame_count, policy)?;
    sim.run_to_end()?;
    Ok(sim.into_trace())
}

/// Runs every policy over the same reference string, in `Policy::ALL` order.
pub fn compare(reference: &ReferenceString, frame_count: usize) -> Result<Vec<RunStats>> {
    Policy::ALL
        .iter()
        .map(|&policy| {
            let trace = simulate(reference, frame_count, policy)?;
            Ok(RunStats::new(policy, frame_count, &trace))
        })
        .collect()
}
