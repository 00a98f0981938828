use geo::CoordNum;

use crate::geo_traits::{CoordTrait, Dimension};

/// A trait for accessing data from a generic LineString.
pub trait LineStringTrait {
    type T: CoordNum;
    type ItemType<'a>: 'a + CoordTrait<T = Self::T>
    where
        Self: 'a;

    /// Native dimension of this line string.
    fn dim(&self) -> Dimension;

    /// The number of coords in this LineString.
    fn num_coords(&self) -> usize;

    /// Access the coord at slot `i` in this LineString.
    ///
    /// # Safety
    ///
    /// Accessing an index out of bounds is UB for some implementations and a
    /// panic for others.
    unsafe fn coord_unchecked(&self, i: usize) -> Self::ItemType<'_>;

    /// Access the coord at slot `i`, or `None` if out of bounds.
    fn coord(&self, i: usize) -> Option<Self::ItemType<'_>> {
        if i < self.num_coords() {
            Some(unsafe { self.coord_unchecked(i) })
        } else {
            None
        }
    }

    /// An iterator over the coords in this LineString.
    fn coords(&self) -> impl DoubleEndedIterator + ExactSizeIterator<Item = Self::ItemType<'_>> {
        (0..self.num_coords()).map(|i| unsafe { self.coord_unchecked(i) })
    }
}

impl<T: CoordNum> LineStringTrait for geo::LineString<T> {
    type T = T;
    type ItemType<'a> = geo::Coord<T> where Self: 'a;

    fn dim(&self) -> Dimension {
        Dimension::XY
    }

    fn num_coords(&self) -> usize {
        self.0.len()
    }

    unsafe fn coord_unchecked(&self, i: usize) -> Self::ItemType<'_> {
        self.0[i]
    }
}

impl<T: CoordNum> LineStringTrait for &geo::LineString<T> {
    type T = T;
    type ItemType<'a> = geo::Coord<T> where Self: 'a;

    fn dim(&self) -> Dimension {
        Dimension::XY
    }

    fn num_coords(&self) -> usize {
        self.0.len()
    }

    unsafe fn coord_unchecked(&self, i: usize) -> Self::ItemType<'_> {
        self.0[i]
    }
}
