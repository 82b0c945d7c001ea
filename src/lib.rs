//! Step-by-step page replacement simulator.
//!
//! A [`Simulation`] replays a [`ReferenceString`] of page numbers against a
//! fixed number of frames under one [`Policy`] (FIFO, OPT, LRU or LFU),
//! producing one [`Step`] per reference and a [`TraceTable`] for display.
//!
//! ```
//! use page_sim::{Policy, ReferenceString, Simulation};
//!
//! let refs = ReferenceString::parse_line("1 2 3 4 1 2 5 1 2 3 4 5").unwrap();
//! let mut sim = Simulation::new(refs, 3, Policy::Fifo).unwrap();
//! while sim.has_next() {
//!     let step = sim.step().unwrap();
//!     if let Some(victim) = step.victim {
//!         println!("evicted {victim}");
//!     }
//! }
//! assert_eq!(sim.fault_count(), 9);
//! print!("{}", sim.render());
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod frames;
pub mod reference;
pub mod replace;
pub mod stats;
pub mod trace;

pub use config::RunConfig;
pub use engine::{compare, simulate, Simulation};
pub use error::{Error, Result, ValidationError};
pub use frames::FrameSet;
pub use reference::{Page, ReferenceString};
pub use replace::Policy;
pub use stats::RunStats;
pub use trace::{Step, Trace, TraceTable};
