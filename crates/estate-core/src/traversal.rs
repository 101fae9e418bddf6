//! Serpentine plot traversal and tree overlay.
//!
//! The traversal order is the single source of truth for which cell the
//! drone visits next. Odd rows run west to east, even rows east to west, so
//! every row ends next to where the following row starts.

use crate::models::{Cell, Plot, Tree};
use std::collections::HashMap;

/// Every cell of the plot in boustrophedon order, all heights 0.
pub fn generate_coordinates(plot: &Plot) -> Vec<Cell> {
    let mut cells = Vec::with_capacity(plot.cell_count());
    for y in 1..=plot.width {
        if y % 2 == 1 {
            cells.extend((1..=plot.length).map(|x| Cell::empty(x, y)));
        } else {
            cells.extend((1..=plot.length).rev().map(|x| Cell::empty(x, y)));
        }
    }
    cells
}

/// Copy tree heights onto the cells sharing their coordinate.
///
/// Coordinates are assumed unique; callers validate that upstream.
pub fn overlay_trees(mut cells: Vec<Cell>, trees: &[Tree]) -> Vec<Cell> {
    let heights: HashMap<(u32, u32), u32> =
        trees.iter().map(|t| ((t.x, t.y), t.height)).collect();

    for cell in &mut cells {
        if let Some(&height) = heights.get(&(cell.x, cell.y)) {
            cell.height = height;
        }
    }
    cells
}

/// Drop the run of empty cells after the last tree.
pub fn trim_trailing_empty(mut cells: Vec<Cell>) -> Vec<Cell> {
    let keep = cells
        .iter()
        .rposition(Cell::has_tree)
        .map_or(0, |last| last + 1);
    cells.truncate(keep);
    cells
}
