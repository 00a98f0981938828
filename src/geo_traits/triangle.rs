use std::marker::PhantomData;

use geo::CoordNum;

use crate::geo_traits::{CoordTrait, Dimension};

/// A trait for accessing data from a generic Triangle.
pub trait TriangleTrait {
    type T: CoordNum;
    type CoordType<'a>: 'a + CoordTrait<T = Self::T>
    where
        Self: 'a;

    /// Native dimension of this triangle.
    fn dim(&self) -> Dimension;

    /// The first corner of this Triangle.
    fn first(&self) -> Self::CoordType<'_>;

    /// The second corner of this Triangle.
    fn second(&self) -> Self::CoordType<'_>;

    /// The third corner of this Triangle.
    fn third(&self) -> Self::CoordType<'_>;
}

impl<T: CoordNum> TriangleTrait for geo::Triangle<T> {
    type T = T;
    type CoordType<'a> = geo::Coord<T> where Self: 'a;

    fn dim(&self) -> Dimension {
        Dimension::XY
    }

    fn first(&self) -> Self::CoordType<'_> {
        self.0
    }

    fn second(&self) -> Self::CoordType<'_> {
        self.1
    }

    fn third(&self) -> Self::CoordType<'_> {
        self.2
    }
}

impl<T: CoordNum> TriangleTrait for &geo::Triangle<T> {
    type T = T;
    type CoordType<'a> = geo::Coord<T> where Self: 'a;

    fn dim(&self) -> Dimension {
        Dimension::XY
    }

    fn first(&self) -> Self::CoordType<'_> {
        self.0
    }

    fn second(&self) -> Self::CoordType<'_> {
        self.1
    }

    fn third(&self) -> Self::CoordType<'_> {
        self.2
    }
}

/// Placeholder for [`GeometryTrait`](crate::geo_traits::GeometryTrait)
/// implementors whose model has no triangle type. Cannot be constructed.
pub enum UnimplementedTriangle<T: CoordNum> {
    _Never(std::convert::Infallible, PhantomData<T>),
}

impl<T: CoordNum> TriangleTrait for UnimplementedTriangle<T> {
    type T = T;
    type CoordType<'a> = geo::Coord<T> where Self: 'a;

    fn dim(&self) -> Dimension {
        match self {
            Self::_Never(never, _) => match *never {},
        }
    }

    fn first(&self) -> Self::CoordType<'_> {
        match self {
            Self::_Never(never, _) => match *never {},
        }
    }

    fn second(&self) -> Self::CoordType<'_> {
        match self {
            Self::_Never(never, _) => match *never {},
        }
    }

    fn third(&self) -> Self::CoordType<'_> {
        match self {
            Self::_Never(never, _) => match *never {},
        }
    }
}
