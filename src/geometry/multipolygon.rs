use crate::geo_traits::{Dimension, MultiPolygonTrait};
use crate::geometry::Polygon;

#[derive(Debug, Clone, PartialEq)]
pub struct MultiPolygon {
    polygons: Vec<Polygon>,
    dim: Dimension,
}

impl MultiPolygon {
    pub fn new(polygons: Vec<Polygon>, dim: Dimension) -> Self {
        debug_assert!(polygons.iter().all(|p| p.dimension() == dim));
        Self { polygons, dim }
    }

    pub fn empty(dim: Dimension) -> Self {
        Self {
            polygons: Vec::new(),
            dim,
        }
    }

    pub fn dimension(&self) -> Dimension {
        self.dim
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }
}

impl MultiPolygonTrait for MultiPolygon {
    type T = f64;
    type ItemType<'a> = &'a Polygon where Self: 'a;

    fn dim(&self) -> Dimension {
        self.dim
    }

    fn num_polygons(&self) -> usize {
        self.polygons.len()
    }

    unsafe fn polygon_unchecked(&self, i: usize) -> Self::ItemType<'_> {
        &self.polygons[i]
    }
}

impl MultiPolygonTrait for &MultiPolygon {
    type T = f64;
    type ItemType<'a> = &'a Polygon where Self: 'a;

    fn dim(&self) -> Dimension {
        self.dim
    }

    fn num_polygons(&self) -> usize {
        self.polygons.len()
    }

    unsafe fn polygon_unchecked(&self, i: usize) -> Self::ItemType<'_> {
        &self.polygons[i]
    }
}
