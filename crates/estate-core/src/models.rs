//! Core data models for estate flight planning.

use serde::{Deserialize, Serialize};

/// Rectangular plot dimensions, measured in grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plot {
    /// Extent along the x axis (east-west)
    pub length: u32,
    /// Extent along the y axis (north-south)
    pub width: u32,
}

impl Plot {
    pub fn new(length: u32, width: u32) -> Self {
        Self { length, width }
    }

    /// Number of grid cells covered by the plot.
    pub fn cell_count(&self) -> usize {
        self.length as usize * self.width as usize
    }

    /// Whether `(x, y)` lies inside the plot (1-based, inclusive).
    pub fn contains(&self, x: u32, y: u32) -> bool {
        (1..=self.length).contains(&x) && (1..=self.width).contains(&y)
    }
}

/// A registered estate: a plot with an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Estate {
    pub id: String,
    pub length: u32,
    pub width: u32,
}

impl Estate {
    pub fn plot(&self) -> Plot {
        Plot::new(self.length, self.width)
    }
}

/// A tree planted on a plot cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tree {
    pub x: u32,
    pub y: u32,
    /// Height in meters
    pub height: u32,
}

impl Tree {
    pub fn new(x: u32, y: u32, height: u32) -> Self {
        Self { x, y, height }
    }
}

/// One cell of the traversal. A height of 0 means no tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub x: u32,
    pub y: u32,
    pub height: u32,
}

impl Cell {
    pub fn empty(x: u32, y: u32) -> Self {
        Self { x, y, height: 0 }
    }

    pub fn has_tree(&self) -> bool {
        self.height > 0
    }
}

/// Cell where the drone ran out of distance budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestPoint {
    pub x: u32,
    pub y: u32,
}

/// Outcome of a flight plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightResult {
    /// Total distance in meters, clipped to the budget when one was hit
    pub distance: u64,
    /// Present only when the walk stopped on the budget
    #[serde(rename = "rest", default, skip_serializing_if = "Option::is_none")]
    pub rest_point: Option<RestPoint>,
}

impl FlightResult {
    pub fn completed(distance: u64) -> Self {
        Self {
            distance,
            rest_point: None,
        }
    }

    pub fn exhausted(budget: u64, cell: &Cell) -> Self {
        Self {
            distance: budget,
            rest_point: Some(RestPoint {
                x: cell.x,
                y: cell.y,
            }),
        }
    }
}

/// Aggregate tree height statistics for an estate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeStats {
    pub count: usize,
    pub max: u32,
    pub min: u32,
    pub median: u32,
}
