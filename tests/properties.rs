use std::collections::HashSet;

use page_sim::{simulate, Page, Policy, ReferenceString, Simulation};
use proptest::prelude::*;

fn policy() -> impl Strategy<Value = Policy> {
    prop::sample::select(Policy::ALL.to_vec())
}

fn reference() -> impl Strategy<Value = ReferenceString> {
    prop::collection::vec(0u8..=9, 1..60)
        .prop_map(|pages| ReferenceString::from_pages(&pages).unwrap())
}

proptest! {
    #[test]
    fn faults_match_absent_pages(refs in reference(), frames in 1usize..=8, policy in policy()) {
        let mut sim = Simulation::new(refs, frames, policy).unwrap();
        let mut resident: Vec<Option<Page>> = vec![None; frames];
        let mut expected = 0;
        while sim.has_next() {
            let step = sim.step().unwrap();
            let absent = !resident.contains(&Some(step.page));
            prop_assert_eq!(step.fault, absent);
            if absent {
                expected += 1;
            }
            if step.victim.is_some() {
                prop_assert!(absent);
                prop_assert!(!step.frames.contains(&step.victim));
            }
            prop_assert!(step.frames.contains(&Some(step.page)));
            resident = step.frames.clone();
        }
        prop_assert_eq!(sim.fault_count(), expected);
    }

    #[test]
    fn frames_hold_distinct_pages_and_fill_first(
        refs in reference(),
        frames in 1usize..=8,
        policy in policy(),
    ) {
        let trace = simulate(&refs, frames, policy).unwrap();
        let mut seen = HashSet::new();
        for step in trace.steps() {
            seen.insert(step.page);
            let held: Vec<Page> = step.frames.iter().flatten().copied().collect();
            let distinct: HashSet<_> = held.iter().collect();
            prop_assert_eq!(step.frames.len(), frames);
            prop_assert_eq!(distinct.len(), held.len());
            prop_assert_eq!(held.len(), frames.min(seen.len()));
            // Slots are used in index order.
            let used = step.frames.iter().take_while(|p| p.is_some()).count();
            prop_assert_eq!(used, held.len());
            if held.len() < frames {
                prop_assert!(step.victim.is_none());
            }
        }
    }

    #[test]
    fn opt_is_optimal(refs in reference(), frames in 1usize..=8) {
        let opt = simulate(&refs, frames, Policy::Opt).unwrap().fault_count();
        for policy in [Policy::Fifo, Policy::Lru, Policy::Lfu] {
            let other = simulate(&refs, frames, policy).unwrap().fault_count();
            prop_assert!(opt <= other, "OPT {} > {} {}", opt, policy, other);
        }
    }

    #[test]
    fn runs_are_repeatable(refs in reference(), frames in 1usize..=8, policy in policy()) {
        let first = simulate(&refs, frames, policy).unwrap();
        let second = simulate(&refs, frames, policy).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn validation_accepts_only_page_range(token in "-?[0-9]{1,3}|[a-z]{1,3}") {
        let parsed = ReferenceString::parse([token.as_str()]);
        match token.parse::<i64>() {
            Ok(v) if (0..=9).contains(&v) => prop_assert!(parsed.is_ok()),
            _ => prop_assert!(parsed.is_err()),
        }
    }
}
