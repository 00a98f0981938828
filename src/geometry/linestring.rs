use crate::geo_traits::{Dimension, LineStringTrait};
use crate::geometry::Coord;

/// An ordered sequence of coordinates, all of the same dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct LineString {
    coords: Vec<Coord>,
    dim: Dimension,
}

impl LineString {
    pub fn new(coords: Vec<Coord>, dim: Dimension) -> Self {
        debug_assert!(coords.iter().all(|c| c.dimension() == dim));
        Self { coords, dim }
    }

    pub fn empty(dim: Dimension) -> Self {
        Self {
            coords: Vec::new(),
            dim,
        }
    }

    pub fn dimension(&self) -> Dimension {
        self.dim
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    pub fn as_slice(&self) -> &[Coord] {
        &self.coords
    }
}

impl LineStringTrait for LineString {
    type T = f64;
    type ItemType<'a> = Coord where Self: 'a;

    fn dim(&self) -> Dimension {
        self.dim
    }

    fn num_coords(&self) -> usize {
        self.coords.len()
    }

    unsafe fn coord_unchecked(&self, i: usize) -> Self::ItemType<'_> {
        self.coords[i]
    }
}

impl LineStringTrait for &LineString {
    type T = f64;
    type ItemType<'a> = Coord where Self: 'a;

    fn dim(&self) -> Dimension {
        self.dim
    }

    fn num_coords(&self) -> usize {
        self.coords.len()
    }

    unsafe fn coord_unchecked(&self, i: usize) -> Self::ItemType<'_> {
        self.coords[i]
    }
}
