use serde::{Deserialize, Serialize};

/// A single point handed to the scatter chart.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
    /// Mark radius in pixels
    pub size: f64,
}

impl PlotPoint {
    pub const fn new(x: f64, y: f64, size: f64) -> Self {
        Self { x, y, size }
    }

    pub fn mark(&self) -> Mark {
        Mark {
            position: [self.x, self.y],
            diameter: self.size * 2.0,
        }
    }
}

/// Render-ready form of a [`PlotPoint`]: chart coordinates plus symbol diameter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mark {
    pub position: [f64; 2],
    pub diameter: f64,
}

/// One mark per point, in input order.
pub fn marks(points: &[PlotPoint]) -> Vec<Mark> {
    points.iter().map(PlotPoint::mark).collect()
}

/// Points shown on the chart when the page first loads.
pub fn initial_points() -> Vec<PlotPoint> {
    vec![PlotPoint::new(1.0, 0.0, 5.0), PlotPoint::new(3.0, 4.0, 2.0)]
}
