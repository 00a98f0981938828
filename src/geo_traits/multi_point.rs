use geo::CoordNum;

use crate::geo_traits::{Dimension, PointTrait};

/// A trait for accessing data from a generic MultiPoint.
pub trait MultiPointTrait {
    type T: CoordNum;
    type ItemType<'a>: 'a + PointTrait<T = Self::T>
    where
        Self: 'a;

    /// Native dimension of this multi point.
    fn dim(&self) -> Dimension;

    /// The number of points in this MultiPoint.
    fn num_points(&self) -> usize;

    /// Access the point at slot `i` in this MultiPoint.
    ///
    /// # Safety
    ///
    /// Accessing an index out of bounds is UB for some implementations and a
    /// panic for others.
    unsafe fn point_unchecked(&self, i: usize) -> Self::ItemType<'_>;

    /// Access the point at slot `i`, or `None` if out of bounds.
    fn point(&self, i: usize) -> Option<Self::ItemType<'_>> {
        if i < self.num_points() {
            Some(unsafe { self.point_unchecked(i) })
        } else {
            None
        }
    }

    /// An iterator over the points in this MultiPoint.
    fn points(&self) -> impl DoubleEndedIterator + ExactSizeIterator<Item = Self::ItemType<'_>> {
        (0..self.num_points()).map(|i| unsafe { self.point_unchecked(i) })
    }
}

impl<T: CoordNum> MultiPointTrait for geo::MultiPoint<T> {
    type T = T;
    type ItemType<'a> = geo::Point<T> where Self: 'a;

    fn dim(&self) -> Dimension {
        Dimension::XY
    }

    fn num_points(&self) -> usize {
        self.0.len()
    }

    unsafe fn point_unchecked(&self, i: usize) -> Self::ItemType<'_> {
        self.0[i]
    }
}

impl<T: CoordNum> MultiPointTrait for &geo::MultiPoint<T> {
    type T = T;
    type ItemType<'a> = geo::Point<T> where Self: 'a;

    fn dim(&self) -> Dimension {
        Dimension::XY
    }

    fn num_points(&self) -> usize {
        self.0.len()
    }

    unsafe fn point_unchecked(&self, i: usize) -> Self::ItemType<'_> {
        self.0[i]
    }
}
