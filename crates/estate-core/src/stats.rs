//! Tree height statistics.

use crate::models::{Tree, TreeStats};

/// Count, extremes and median of tree heights.
///
/// An estate without trees reports all zeros.
pub fn compute_stats(trees: &[Tree]) -> TreeStats {
    let heights: Vec<u32> = trees.iter().map(|t| t.height).collect();

    TreeStats {
        count: heights.len(),
        max: heights.iter().copied().max().unwrap_or(0),
        min: heights.iter().copied().min().unwrap_or(0),
        median: median_height(heights),
    }
}

/// Median of the given heights, truncating the mean of the two middle
/// values for an even count. Returns 0 for no heights.
pub fn median_height(mut heights: Vec<u32>) -> u32 {
    heights.sort_unstable();
    let n = heights.len();
    match n {
        0 => 0,
        _ if n % 2 == 1 => heights[n / 2],
        _ => (heights[n / 2 - 1] + heights[n / 2]) / 2,
    }
}
