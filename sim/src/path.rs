//! Bounded trajectory traces.
//!
//! Every body drags one of these behind it. The trace is bounded both by a
//! point count and by cumulative arclength, so a fast body and a slow body
//! leave trails of comparable visual weight. The same points feed the
//! swept-area readout for Kepler's second law.

use euclid::default::Point2D;
use std::collections::VecDeque;

/// Default cap on the number of stored points.
pub const MAX_PATH_POINTS: usize = 2000;
/// Default cap on the cumulative arclength of the trace, in model units.
pub const PATH_DISTANCE_LIMIT: f64 = 1000.0;

/// An insertion-ordered run of positions with both bounds enforced on append.
#[derive(Debug, Clone)]
pub struct PathTrace {
    points: VecDeque<Point2D<f64>>,
    /// Cumulative length of the tracked segments.
    distance: f64,
    max_points: usize,
    max_distance: f64,
}

impl PathTrace {
    pub fn new() -> Self {
        Self::with_limits(MAX_PATH_POINTS, PATH_DISTANCE_LIMIT)
    }

    /// Rendering backends with tighter vertex budgets can shrink the limits.
    pub fn with_limits(max_points: usize, max_distance: f64) -> Self {
        PathTrace {
            points: VecDeque::new(),
            distance: 0.0,
            max_points,
            max_distance,
        }
    }

    /// Start the trace over with `point` recorded twice, so a two-point
    /// polyline always exists even before the body has moved.
    pub fn seed(&mut self, point: Point2D<f64>) {
        self.clear();
        self.points.push_back(point);
        self.points.push_back(point);
    }

    /// Append the body's current position. A point equal to the last recorded
    /// one is a no-op, so a motionless body never grows its trace. After the
    /// append, oldest points are evicted until both bounds hold again.
    pub fn add_point(&mut self, point: Point2D<f64>) {
        if self.points.back() == Some(&point) {
            return;
        }
        self.points.push_back(point);

        // The segment out of the seed duplicate is degenerate and stays
        // untracked, matching what gets subtracted on the first eviction.
        let len = self.points.len();
        if len > 2 {
            self.distance += (point - self.points[len - 2]).length();
        }

        while (self.distance > self.max_distance || self.points.len() > self.max_points)
            && self.points.len() > 2
        {
            self.distance -= (self.points[1] - self.points[0]).length();
            self.points.pop_front();
        }
    }

    /// Empty the trace and forget the accumulated arclength.
    pub fn clear(&mut self) {
        self.points.clear();
        self.distance = 0.0;
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point2D<f64>> {
        self.points.iter()
    }

    pub fn last(&self) -> Option<Point2D<f64>> {
        self.points.back().copied()
    }

    /// Area swept about `focus`: the sum of the triangles spanned by
    /// consecutive point pairs. Reading the trace pairwise like this is what
    /// the "equal areas in equal times" demonstration consumes.
    pub fn swept_area(&self, focus: Point2D<f64>) -> f64 {
        let mut area = 0.0;
        for (p, q) in self.points.iter().zip(self.points.iter().skip(1)) {
            let u = *p - focus;
            let v = *q - focus;
            area += 0.5 * (u.x * v.y - u.y * v.x).abs();
        }
        area
    }
}

impl Default for PathTrace {
    fn default() -> Self {
        Self::new()
    }
}
