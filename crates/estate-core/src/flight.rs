//! Flight distance accounting over a planned traversal.
//!
//! The drone advances one cell spacing per visited cell. Vertical travel is
//! only charged on cells holding a tree: the first tree costs a climb from
//! the ground to just above its top, each later tree costs the difference
//! between consecutive tree tops, and the final tree adds the descent back
//! to the ground.

use crate::error::EstateError;
use crate::models::{Cell, FlightResult, Plot, Tree};
use crate::rules::EstateRules;
use crate::traversal::{generate_coordinates, overlay_trees, trim_trailing_empty};

/// A visited cell with cumulative distances flown up to and including it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlightStep {
    pub cell: Cell,
    pub horizontal_m: u64,
    pub vertical_m: u64,
}

impl FlightStep {
    pub fn total_m(&self) -> u64 {
        self.horizontal_m + self.vertical_m
    }
}

/// Iterator yielding one [`FlightStep`] per cell of a route.
#[derive(Debug, Clone)]
pub struct FlightSteps<'a> {
    route: &'a [Cell],
    next: usize,
    horizontal_m: u64,
    vertical_m: u64,
    last_height: u64,
    cell_spacing_m: u64,
    clearance_m: u64,
}

impl Iterator for FlightSteps<'_> {
    type Item = FlightStep;

    fn next(&mut self) -> Option<FlightStep> {
        let cell = *self.route.get(self.next)?;
        self.next += 1;
        self.horizontal_m += self.cell_spacing_m;

        if cell.has_tree() {
            let height = u64::from(cell.height);
            if self.last_height == 0 {
                self.vertical_m += self.clearance_m + height;
            } else {
                self.vertical_m += self.last_height.abs_diff(height);
            }
            self.last_height = height;

            if self.next == self.route.len() {
                self.vertical_m += self.clearance_m + height;
            }
        }

        Some(FlightStep {
            cell,
            horizontal_m: self.horizontal_m,
            vertical_m: self.vertical_m,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.route.len() - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for FlightSteps<'_> {}

/// Walk a route from ground level, yielding cumulative distances.
pub fn flight_steps<'a>(route: &'a [Cell], rules: &EstateRules) -> FlightSteps<'a> {
    FlightSteps {
        route,
        next: 0,
        horizontal_m: 0,
        vertical_m: 0,
        last_height: 0,
        cell_spacing_m: rules.cell_spacing_m,
        clearance_m: rules.ground_clearance_m,
    }
}

/// Total distance for a route, stopping early once `max_distance` is reached.
///
/// `None` and `Some(0)` both mean no budget. When the budget is hit the
/// reported distance is the budget itself and the rest point is the cell
/// where it ran out.
pub fn account_flight(
    route: &[Cell],
    max_distance: Option<u64>,
    rules: &EstateRules,
) -> FlightResult {
    let budget = max_distance.filter(|&d| d > 0);
    let mut total_m = 0;

    for step in flight_steps(route, rules) {
        total_m = step.total_m();
        if let Some(budget) = budget {
            if total_m >= budget {
                return FlightResult::exhausted(budget, &step.cell);
            }
        }
    }

    FlightResult::completed(total_m)
}

/// Plan the inspection flight for a plot and its trees.
pub fn plan_flight(
    plot: &Plot,
    trees: &[Tree],
    max_distance: Option<u64>,
) -> Result<FlightResult, EstateError> {
    plan_flight_with_rules(plot, trees, max_distance, &EstateRules::default())
}

/// Plan the inspection flight using configured rules.
///
/// Rejects zero-sized plots, out-of-bounds or out-of-range trees and
/// duplicate coordinates instead of correcting them.
pub fn plan_flight_with_rules(
    plot: &Plot,
    trees: &[Tree],
    max_distance: Option<u64>,
    rules: &EstateRules,
) -> Result<FlightResult, EstateError> {
    rules.validate_dimensions(plot)?;
    rules.validate_trees(plot, trees)?;

    let cells = overlay_trees(generate_coordinates(plot), trees);
    let route = trim_trailing_empty(cells);

    Ok(account_flight(&route, max_distance, rules))
}
