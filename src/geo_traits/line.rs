use std::marker::PhantomData;

use geo::CoordNum;

use crate::geo_traits::{CoordTrait, Dimension};

/// A trait for accessing data from a generic Line, a segment between two
/// coordinates.
pub trait LineTrait {
    type T: CoordNum;
    type CoordType<'a>: 'a + CoordTrait<T = Self::T>
    where
        Self: 'a;

    /// Native dimension of this line.
    fn dim(&self) -> Dimension;

    /// The start coordinate of this Line.
    fn start(&self) -> Self::CoordType<'_>;

    /// The end coordinate of this Line.
    fn end(&self) -> Self::CoordType<'_>;
}

impl<T: CoordNum> LineTrait for geo::Line<T> {
    type T = T;
    type CoordType<'a> = geo::Coord<T> where Self: 'a;

    fn dim(&self) -> Dimension {
        Dimension::XY
    }

    fn start(&self) -> Self::CoordType<'_> {
        self.start
    }

    fn end(&self) -> Self::CoordType<'_> {
        self.end
    }
}

impl<T: CoordNum> LineTrait for &geo::Line<T> {
    type T = T;
    type CoordType<'a> = geo::Coord<T> where Self: 'a;

    fn dim(&self) -> Dimension {
        Dimension::XY
    }

    fn start(&self) -> Self::CoordType<'_> {
        self.start
    }

    fn end(&self) -> Self::CoordType<'_> {
        self.end
    }
}

/// Placeholder for [`GeometryTrait`](crate::geo_traits::GeometryTrait)
/// implementors whose model has no line type. Cannot be constructed.
pub enum UnimplementedLine<T: CoordNum> {
    _Never(std::convert::Infallible, PhantomData<T>),
}

impl<T: CoordNum> LineTrait for UnimplementedLine<T> {
    type T = T;
    type CoordType<'a> = geo::Coord<T> where Self: 'a;

    fn dim(&self) -> Dimension {
        match self {
            Self::_Never(never, _) => match *never {},
        }
    }

    fn start(&self) -> Self::CoordType<'_> {
        match self {
            Self::_Never(never, _) => match *never {},
        }
    }

    fn end(&self) -> Self::CoordType<'_> {
        match self {
            Self::_Never(never, _) => match *never {},
        }
    }
}
