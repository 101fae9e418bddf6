//! Estate layouts loaded from JSON files.

use anyhow::{Context, Result};
use estate_core::{Plot, Tree};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A plot and the trees planted on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstateLayout {
    pub length: u32,
    pub width: u32,
    #[serde(default)]
    pub trees: Vec<Tree>,
}

impl EstateLayout {
    /// The 6x3 reference estate with five trees.
    pub fn sample() -> Self {
        Self {
            length: 6,
            width: 3,
            trees: vec![
                Tree::new(3, 1, 10),
                Tree::new(6, 2, 5),
                Tree::new(4, 2, 7),
                Tree::new(3, 2, 15),
                Tree::new(5, 3, 30),
            ],
        }
    }

    pub fn plot(&self) -> Plot {
        Plot::new(self.length, self.width)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("invalid estate layout JSON")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_json(&json)
    }

    /// Load from `path`, or fall back to the sample layout.
    pub fn load_or_sample(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::sample()),
        }
    }
}
