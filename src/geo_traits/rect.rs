use std::marker::PhantomData;

use geo::CoordNum;

use crate::geo_traits::{CoordTrait, Dimension};

/// A trait for accessing data from a generic Rect, an axis-aligned bounding
/// rectangle.
pub trait RectTrait {
    type T: CoordNum;
    type CoordType<'a>: 'a + CoordTrait<T = Self::T>
    where
        Self: 'a;

    /// Native dimension of this rect.
    fn dim(&self) -> Dimension;

    /// The lower coordinate of this Rect.
    fn lower(&self) -> Self::CoordType<'_>;

    /// The upper coordinate of this Rect.
    fn upper(&self) -> Self::CoordType<'_>;
}

impl<T: CoordNum> RectTrait for geo::Rect<T> {
    type T = T;
    type CoordType<'a> = geo::Coord<T> where Self: 'a;

    fn dim(&self) -> Dimension {
        Dimension::XY
    }

    fn lower(&self) -> Self::CoordType<'_> {
        self.min()
    }

    fn upper(&self) -> Self::CoordType<'_> {
        self.max()
    }
}

impl<T: CoordNum> RectTrait for &geo::Rect<T> {
    type T = T;
    type CoordType<'a> = geo::Coord<T> where Self: 'a;

    fn dim(&self) -> Dimension {
        Dimension::XY
    }

    fn lower(&self) -> Self::CoordType<'_> {
        self.min()
    }

    fn upper(&self) -> Self::CoordType<'_> {
        self.max()
    }
}

/// Placeholder for [`GeometryTrait`](crate::geo_traits::GeometryTrait)
/// implementors whose model has no rect type. Cannot be constructed.
pub enum UnimplementedRect<T: CoordNum> {
    _Never(std::convert::Infallible, PhantomData<T>),
}

impl<T: CoordNum> RectTrait for UnimplementedRect<T> {
    type T = T;
    type CoordType<'a> = geo::Coord<T> where Self: 'a;

    fn dim(&self) -> Dimension {
        match self {
            Self::_Never(never, _) => match *never {},
        }
    }

    fn lower(&self) -> Self::CoordType<'_> {
        match self {
            Self::_Never(never, _) => match *never {},
        }
    }

    fn upper(&self) -> Self::CoordType<'_> {
        match self {
            Self::_Never(never, _) => match *never {},
        }
    }
}
