use crate::geo_traits::{Dimension, GeometryCollectionTrait};
use crate::geometry::Geometry;

/// A heterogeneous collection of geometries sharing one dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryCollection {
    geometries: Vec<Geometry>,
    dim: Dimension,
}

impl GeometryCollection {
    pub fn new(geometries: Vec<Geometry>, dim: Dimension) -> Self {
        debug_assert!(geometries.iter().all(|g| g.dimension() == dim));
        Self { geometries, dim }
    }

    pub fn empty(dim: Dimension) -> Self {
        Self {
            geometries: Vec::new(),
            dim,
        }
    }

    pub fn dimension(&self) -> Dimension {
        self.dim
    }

    pub fn is_empty(&self) -> bool {
        self.geometries.is_empty()
    }
}

impl GeometryCollectionTrait for GeometryCollection {
    type T = f64;
    type ItemType<'a> = &'a Geometry where Self: 'a;

    fn dim(&self) -> Dimension {
        self.dim
    }

    fn num_geometries(&self) -> usize {
        self.geometries.len()
    }

    unsafe fn geometry_unchecked(&self, i: usize) -> Self::ItemType<'_> {
        &self.geometries[i]
    }
}

impl GeometryCollectionTrait for &GeometryCollection {
    type T = f64;
    type ItemType<'a> = &'a Geometry where Self: 'a;

    fn dim(&self) -> Dimension {
        self.dim
    }

    fn num_geometries(&self) -> usize {
        self.geometries.len()
    }

    unsafe fn geometry_unchecked(&self, i: usize) -> Self::ItemType<'_> {
        &self.geometries[i]
    }
}
