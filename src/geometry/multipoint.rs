use crate::geo_traits::{Dimension, MultiPointTrait};
use crate::geometry::Point;

#[derive(Debug, Clone, PartialEq)]
pub struct MultiPoint {
    points: Vec<Point>,
    dim: Dimension,
}

impl MultiPoint {
    pub fn new(points: Vec<Point>, dim: Dimension) -> Self {
        debug_assert!(points.iter().all(|p| p.dimension() == dim));
        Self { points, dim }
    }

    pub fn empty(dim: Dimension) -> Self {
        Self {
            points: Vec::new(),
            dim,
        }
    }

    pub fn dimension(&self) -> Dimension {
        self.dim
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl MultiPointTrait for MultiPoint {
    type T = f64;
    type ItemType<'a> = Point where Self: 'a;

    fn dim(&self) -> Dimension {
        self.dim
    }

    fn num_points(&self) -> usize {
        self.points.len()
    }

    unsafe fn point_unchecked(&self, i: usize) -> Self::ItemType<'_> {
        self.points[i]
    }
}

impl MultiPointTrait for &MultiPoint {
    type T = f64;
    type ItemType<'a> = Point where Self: 'a;

    fn dim(&self) -> Dimension {
        self.dim
    }

    fn num_points(&self) -> usize {
        self.points.len()
    }

    unsafe fn point_unchecked(&self, i: usize) -> Self::ItemType<'_> {
        self.points[i]
    }
}
