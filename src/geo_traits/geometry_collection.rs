use geo::CoordNum;

use crate::geo_traits::{Dimension, GeometryTrait};

/// A trait for accessing data from a generic GeometryCollection.
pub trait GeometryCollectionTrait {
    type T: CoordNum;
    type ItemType<'a>: 'a + GeometryTrait<T = Self::T>
    where
        Self: 'a;

    /// Native dimension of this geometry collection.
    fn dim(&self) -> Dimension;

    /// The number of geometries in this GeometryCollection.
    fn num_geometries(&self) -> usize;

    /// Access the geometry at slot `i` in this GeometryCollection.
    ///
    /// # Safety
    ///
    /// Accessing an index out of bounds is UB for some implementations and a
    /// panic for others.
    unsafe fn geometry_unchecked(&self, i: usize) -> Self::ItemType<'_>;

    /// Access the geometry at slot `i`, or `None` if out of bounds.
    fn geometry(&self, i: usize) -> Option<Self::ItemType<'_>> {
        if i < self.num_geometries() {
            Some(unsafe { self.geometry_unchecked(i) })
        } else {
            None
        }
    }

    /// An iterator over the geometries in this GeometryCollection.
    fn geometries(&self) -> impl DoubleEndedIterator + ExactSizeIterator<Item = Self::ItemType<'_>> {
        (0..self.num_geometries()).map(|i| unsafe { self.geometry_unchecked(i) })
    }
}

impl<T: CoordNum> GeometryCollectionTrait for geo::GeometryCollection<T> {
    type T = T;
    type ItemType<'a> = &'a geo::Geometry<T> where Self: 'a;

    fn dim(&self) -> Dimension {
        Dimension::XY
    }

    fn num_geometries(&self) -> usize {
        self.0.len()
    }

    unsafe fn geometry_unchecked(&self, i: usize) -> Self::ItemType<'_> {
        &self.0[i]
    }
}

impl<T: CoordNum> GeometryCollectionTrait for &geo::GeometryCollection<T> {
    type T = T;
    type ItemType<'a> = &'a geo::Geometry<T> where Self: 'a;

    fn dim(&self) -> Dimension {
        Dimension::XY
    }

    fn num_geometries(&self) -> usize {
        self.0.len()
    }

    unsafe fn geometry_unchecked(&self, i: usize) -> Self::ItemType<'_> {
        &self.0[i]
    }
}
