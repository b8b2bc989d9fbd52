//! Bounded position history drawn behind each body

use std::collections::VecDeque;

use super::states::NVec3;

#[derive(Debug, Clone)]
pub struct Trail {
    points: VecDeque<NVec3>,
    max_points: usize,
    min_distance: f64, // scene units between consecutive points
}

impl Trail {
    pub const MAX_POINTS: usize = 2500;
    pub const MIN_DISTANCE: f64 = 0.1;

    pub fn new(start: NVec3) -> Self {
        Self::with_capacity(start, Self::MAX_POINTS)
    }

    pub fn with_capacity(start: NVec3, max_points: usize) -> Self {
        let max_points = max_points.max(1);
        let mut points = VecDeque::with_capacity(max_points);
        points.push_back(start);
        Self {
            points,
            max_points,
            min_distance: Self::MIN_DISTANCE,
        }
    }

    /// Record `point` unless it is too close to the last one.
    /// Once full, the oldest point is dropped.
    pub fn add_point(&mut self, point: NVec3) {
        if let Some(last) = self.points.back() {
            if (point - last).norm() < self.min_distance {
                return;
            }
        }
        if self.points.len() == self.max_points {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    pub fn points(&self) -> impl Iterator<Item = &NVec3> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
