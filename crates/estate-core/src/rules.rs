//! Estate sizing rules and flight constants.

use crate::error::EstateError;
use crate::models::{Plot, Tree};
use std::collections::HashSet;

/// Configuration for estate validation and flight accounting.
#[derive(Debug, Clone)]
pub struct EstateRules {
    /// Sub-plots per grid cell in the sizing rule
    pub plots_per_cell: u64,
    /// Maximum `length * width * plots_per_cell`
    pub max_estate_size: u64,
    /// Minimum tree height in meters
    pub min_tree_height: u32,
    /// Maximum tree height in meters
    pub max_tree_height: u32,
    /// Horizontal distance flown per cell advanced
    pub cell_spacing_m: u64,
    /// Clearance kept above tree tops and added on takeoff/landing
    pub ground_clearance_m: u64,
}

impl Default for EstateRules {
    fn default() -> Self {
        Self {
            plots_per_cell: 100,
            max_estate_size: 50_000,
            min_tree_height: 1,
            max_tree_height: 30,
            cell_spacing_m: 10,
            ground_clearance_m: 1,
        }
    }
}

impl EstateRules {
    /// Reject zero-sized plots.
    pub fn validate_dimensions(&self, plot: &Plot) -> Result<(), EstateError> {
        if plot.length == 0 || plot.width == 0 {
            return Err(EstateError::InvalidDimensions {
                length: plot.length,
                width: plot.width,
            });
        }
        Ok(())
    }

    /// Creation-time check: dimensions plus the sub-plot size limit.
    pub fn validate_new_estate(&self, plot: &Plot) -> Result<(), EstateError> {
        self.validate_dimensions(plot)?;
        let size = plot.length as u64 * plot.width as u64 * self.plots_per_cell;
        if size > self.max_estate_size {
            return Err(EstateError::EstateTooLarge {
                size,
                max: self.max_estate_size,
            });
        }
        Ok(())
    }

    /// Check a single tree against the plot bounds and height range.
    pub fn validate_tree(&self, plot: &Plot, tree: &Tree) -> Result<(), EstateError> {
        if !plot.contains(tree.x, tree.y) {
            return Err(EstateError::TreeOutOfBounds {
                x: tree.x,
                y: tree.y,
                length: plot.length,
                width: plot.width,
            });
        }
        if !(self.min_tree_height..=self.max_tree_height).contains(&tree.height) {
            return Err(EstateError::InvalidHeight {
                height: tree.height,
                min: self.min_tree_height,
                max: self.max_tree_height,
            });
        }
        Ok(())
    }

    /// Check a whole tree set, including coordinate uniqueness.
    pub fn validate_trees(&self, plot: &Plot, trees: &[Tree]) -> Result<(), EstateError> {
        let mut seen = HashSet::with_capacity(trees.len());
        for tree in trees {
            self.validate_tree(plot, tree)?;
            if !seen.insert((tree.x, tree.y)) {
                return Err(EstateError::DuplicateTree {
                    x: tree.x,
                    y: tree.y,
                });
            }
        }
        Ok(())
    }
}
