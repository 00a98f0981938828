use geo::CoordNum;

use crate::geo_traits::{CoordTrait, Dimension};

/// A trait for accessing data from a generic Point.
pub trait PointTrait {
    type T: CoordNum;
    type CoordType<'a>: 'a + CoordTrait<T = Self::T>
    where
        Self: 'a;

    /// Native dimension of this point.
    fn dim(&self) -> Dimension;

    /// The coordinate of this point, or `None` if the point is empty.
    fn coord(&self) -> Option<Self::CoordType<'_>>;
}

impl<T: CoordNum> PointTrait for geo::Point<T> {
    type T = T;
    type CoordType<'a> = geo::Coord<T> where Self: 'a;

    fn dim(&self) -> Dimension {
        Dimension::XY
    }

    fn coord(&self) -> Option<Self::CoordType<'_>> {
        Some(self.0)
    }
}

impl<T: CoordNum> PointTrait for &geo::Point<T> {
    type T = T;
    type CoordType<'a> = geo::Coord<T> where Self: 'a;

    fn dim(&self) -> Dimension {
        Dimension::XY
    }

    fn coord(&self) -> Option<Self::CoordType<'_>> {
        Some(self.0)
    }
}
