use crate::geo_traits::{Dimension, PointTrait};
use crate::geometry::Coord;

/// A point, possibly empty.
///
/// An empty point has a declared dimension but no coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    coord: Option<Coord>,
    dim: Dimension,
}

impl Point {
    pub fn new(coord: Coord) -> Self {
        Self {
            dim: coord.dimension(),
            coord: Some(coord),
        }
    }

    pub fn empty(dim: Dimension) -> Self {
        Self { coord: None, dim }
    }

    pub fn dimension(&self) -> Dimension {
        self.dim
    }

    pub fn is_empty(&self) -> bool {
        self.coord.is_none()
    }
}

impl PointTrait for Point {
    type T = f64;
    type CoordType<'a> = Coord where Self: 'a;

    fn dim(&self) -> Dimension {
        self.dim
    }

    fn coord(&self) -> Option<Self::CoordType<'_>> {
        self.coord
    }
}

impl PointTrait for &Point {
    type T = f64;
    type CoordType<'a> = Coord where Self: 'a;

    fn dim(&self) -> Dimension {
        self.dim
    }

    fn coord(&self) -> Option<Self::CoordType<'_>> {
        self.coord
    }
}
