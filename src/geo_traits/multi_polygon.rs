use geo::CoordNum;

use crate::geo_traits::{Dimension, PolygonTrait};

/// A trait for accessing data from a generic MultiPolygon.
pub trait MultiPolygonTrait {
    type T: CoordNum;
    type ItemType<'a>: 'a + PolygonTrait<T = Self::T>
    where
        Self: 'a;

    /// Native dimension of this multi polygon.
    fn dim(&self) -> Dimension;

    /// The number of polygons in this MultiPolygon.
    fn num_polygons(&self) -> usize;

    /// Access the polygon at slot `i` in this MultiPolygon.
    ///
    /// # Safety
    ///
    /// Accessing an index out of bounds is UB for some implementations and a
    /// panic for others.
    unsafe fn polygon_unchecked(&self, i: usize) -> Self::ItemType<'_>;

    /// Access the polygon at slot `i`, or `None` if out of bounds.
    fn polygon(&self, i: usize) -> Option<Self::ItemType<'_>> {
        if i < self.num_polygons() {
            Some(unsafe { self.polygon_unchecked(i) })
        } else {
            None
        }
    }

    /// An iterator over the polygons in this MultiPolygon.
    fn polygons(&self) -> impl DoubleEndedIterator + ExactSizeIterator<Item = Self::ItemType<'_>> {
        (0..self.num_polygons()).map(|i| unsafe { self.polygon_unchecked(i) })
    }
}

impl<T: CoordNum> MultiPolygonTrait for geo::MultiPolygon<T> {
    type T = T;
    type ItemType<'a> = &'a geo::Polygon<T> where Self: 'a;

    fn dim(&self) -> Dimension {
        Dimension::XY
    }

    fn num_polygons(&self) -> usize {
        self.0.len()
    }

    unsafe fn polygon_unchecked(&self, i: usize) -> Self::ItemType<'_> {
        &self.0[i]
    }
}

impl<T: CoordNum> MultiPolygonTrait for &geo::MultiPolygon<T> {
    type T = T;
    type ItemType<'a> = &'a geo::Polygon<T> where Self: 'a;

    fn dim(&self) -> Dimension {
        Dimension::XY
    }

    fn num_polygons(&self) -> usize {
        self.0.len()
    }

    unsafe fn polygon_unchecked(&self, i: usize) -> Self::ItemType<'_> {
        &self.0[i]
    }
}
