use geo::CoordNum;

use crate::geo_traits::{Dimension, LineStringTrait};

/// A trait for accessing data from a generic Polygon.
///
/// Ring 0 is the exterior; rings 1.. are interiors. Ring closure is not
/// enforced at this level.
pub trait PolygonTrait {
    type T: CoordNum;
    type RingType<'a>: 'a + LineStringTrait<T = Self::T>
    where
        Self: 'a;

    /// Native dimension of this polygon.
    fn dim(&self) -> Dimension;

    /// The exterior ring, or `None` if the polygon is empty.
    fn exterior(&self) -> Option<Self::RingType<'_>>;

    /// The number of interior rings in this Polygon.
    fn num_interiors(&self) -> usize;

    /// Access the interior ring at slot `i` in this Polygon.
    ///
    /// # Safety
    ///
    /// Accessing an index out of bounds is UB for some implementations and a
    /// panic for others.
    unsafe fn interior_unchecked(&self, i: usize) -> Self::RingType<'_>;

    /// Access the interior ring at slot `i`, or `None` if out of bounds.
    fn interior(&self, i: usize) -> Option<Self::RingType<'_>> {
        if i < self.num_interiors() {
            Some(unsafe { self.interior_unchecked(i) })
        } else {
            None
        }
    }

    /// An iterator over the interior rings in this Polygon.
    fn interiors(&self) -> impl DoubleEndedIterator + ExactSizeIterator<Item = Self::RingType<'_>> {
        (0..self.num_interiors()).map(|i| unsafe { self.interior_unchecked(i) })
    }
}

impl<T: CoordNum> PolygonTrait for geo::Polygon<T> {
    type T = T;
    type RingType<'a> = &'a geo::LineString<T> where Self: 'a;

    fn dim(&self) -> Dimension {
        Dimension::XY
    }

    fn exterior(&self) -> Option<Self::RingType<'_>> {
        let ext = geo::Polygon::exterior(self);
        if ext.0.is_empty() {
            None
        } else {
            Some(ext)
        }
    }

    fn num_interiors(&self) -> usize {
        geo::Polygon::interiors(self).len()
    }

    unsafe fn interior_unchecked(&self, i: usize) -> Self::RingType<'_> {
        &geo::Polygon::interiors(self)[i]
    }
}

impl<T: CoordNum> PolygonTrait for &geo::Polygon<T> {
    type T = T;
    type RingType<'a> = &'a geo::LineString<T> where Self: 'a;

    fn dim(&self) -> Dimension {
        Dimension::XY
    }

    fn exterior(&self) -> Option<Self::RingType<'_>> {
        let ext = geo::Polygon::exterior(*self);
        if ext.0.is_empty() {
            None
        } else {
            Some(ext)
        }
    }

    fn num_interiors(&self) -> usize {
        geo::Polygon::interiors(*self).len()
    }

    unsafe fn interior_unchecked(&self, i: usize) -> Self::RingType<'_> {
        &geo::Polygon::interiors(*self)[i]
    }
}
