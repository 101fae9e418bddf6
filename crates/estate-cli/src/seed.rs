//! Planting a layout onto a server, with failures tallied.

use anyhow::Result;
use estate_core::Tree;
use std::future::Future;

/// Outcome of planting every tree of a layout.
#[derive(Debug, Default)]
pub struct SeedReport {
    pub planted: Vec<Tree>,
    pub failed: Vec<(Tree, String)>,
}

impl SeedReport {
    /// Error out when any tree was rejected.
    pub fn ensure_complete(&self) -> Result<()> {
        if self.failed.is_empty() {
            return Ok(());
        }
        let cells: Vec<String> = self
            .failed
            .iter()
            .map(|(tree, _)| format!("({}, {})", tree.x, tree.y))
            .collect();
        anyhow::bail!(
            "{} of {} trees failed to plant: {}",
            self.failed.len(),
            self.planted.len() + self.failed.len(),
            cells.join(", ")
        )
    }
}

/// Plant each tree in order, continuing past failures.
pub async fn plant_all<F, Fut>(trees: &[Tree], mut plant: F) -> SeedReport
where
    F: FnMut(Tree) -> Fut,
    Fut: Future<Output = Result<()>>,
{
    let mut report = SeedReport::default();
    for tree in trees {
        match plant(*tree).await {
            Ok(()) => {
                println!("Planted ({}, {}) height {}", tree.x, tree.y, tree.height);
                report.planted.push(*tree);
            }
            Err(e) => {
                eprintln!("Failed to plant ({}, {}): {:#}", tree.x, tree.y, e);
                report.failed.push((*tree, e.to_string()));
            }
        }
    }
    report
}
