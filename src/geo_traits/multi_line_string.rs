use geo::CoordNum;

use crate::geo_traits::{Dimension, LineStringTrait};

/// A trait for accessing data from a generic MultiLineString.
pub trait MultiLineStringTrait {
    type T: CoordNum;
    type ItemType<'a>: 'a + LineStringTrait<T = Self::T>
    where
        Self: 'a;

    /// Native dimension of this multi line string.
    fn dim(&self) -> Dimension;

    /// The number of lines in this MultiLineString.
    fn num_lines(&self) -> usize;

    /// Access the line at slot `i` in this MultiLineString.
    ///
    /// # Safety
    ///
    /// Accessing an index out of bounds is UB for some implementations and a
    /// panic for others.
    unsafe fn line_unchecked(&self, i: usize) -> Self::ItemType<'_>;

    /// Access the line at slot `i`, or `None` if out of bounds.
    fn line(&self, i: usize) -> Option<Self::ItemType<'_>> {
        if i < self.num_lines() {
            Some(unsafe { self.line_unchecked(i) })
        } else {
            None
        }
    }

    /// An iterator over the lines in this MultiLineString.
    fn lines(&self) -> impl DoubleEndedIterator + ExactSizeIterator<Item = Self::ItemType<'_>> {
        (0..self.num_lines()).map(|i| unsafe { self.line_unchecked(i) })
    }
}

impl<T: CoordNum> MultiLineStringTrait for geo::MultiLineString<T> {
    type T = T;
    type ItemType<'a> = &'a geo::LineString<T> where Self: 'a;

    fn dim(&self) -> Dimension {
        Dimension::XY
    }

    fn num_lines(&self) -> usize {
        self.0.len()
    }

    unsafe fn line_unchecked(&self, i: usize) -> Self::ItemType<'_> {
        &self.0[i]
    }
}

impl<T: CoordNum> MultiLineStringTrait for &geo::MultiLineString<T> {
    type T = T;
    type ItemType<'a> = &'a geo::LineString<T> where Self: 'a;

    fn dim(&self) -> Dimension {
        Dimension::XY
    }

    fn num_lines(&self) -> usize {
        self.0.len()
    }

    unsafe fn line_unchecked(&self, i: usize) -> Self::ItemType<'_> {
        &self.0[i]
    }
}
