use serde::Deserialize;

use crate::{
    engine::Simulation,
    error::{Result, ValidationError},
    reference::{Page, ReferenceString},
    replace::Policy,
};

pub const MIN_PAGE: Page = 0;
pub const MAX_PAGE: Page = 9;
pub const MIN_FRAMES: usize = 1;
pub const MAX_FRAMES: usize = 8;

/// A batch of runs read from JSON, e.g.
/// `{"frames": 3, "reference": [1, 2, 3], "policies": ["fifo", "lru"]}` or
/// `{"frames": 4, "generate": 20, "seed": 7}`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    frames: usize,
    #[serde(default = "all_policies")]
    policies: Vec<Policy>,
    #[serde(default)]
    reference: Option<Vec<i64>>,
    #[serde(default)]
    generate: Option<i64>,
    #[serde(default)]
    seed: Option<u64>,
}

fn all_policies() -> Vec<Policy> {
    Policy::ALL.to_vec()
}

impl RunConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// An explicit reference wins over `generate`. Neither yields an empty
    /// string, which `Simulation::new` rejects.
    pub fn to_reference(&self) -> std::result::Result<ReferenceString, ValidationError> {
        match (&self.reference, self.generate) {
            (Some(pages), _) => ReferenceString::parse(pages.iter().map(|p| p.to_string())),
            (None, Some(length)) => match self.seed {
                Some(seed) => ReferenceString::generate_seeded(length, seed),
                None => ReferenceString::generate(length, &mut fastrand::Rng::new()),
            },
            (None, None) => Ok(ReferenceString::default()),
        }
    }

    /// One fresh simulation per listed policy, all over the same reference
    /// string.
    pub fn to_simulations(self) -> std::result::Result<Vec<Simulation>, ValidationError> {
        let reference = self.to_reference()?;
        self.policies
            .iter()
            .map(|&policy| Simulation::new(reference.clone(), self.frames, policy))
            .collect()
    }
}
