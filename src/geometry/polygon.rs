use crate::geo_traits::{Dimension, PolygonTrait};
use crate::geometry::LineString;

/// A polygon: ring 0 is the outer boundary, rings 1.. are holes.
///
/// Ring closure and winding order are not validated; rings round-trip
/// verbatim through the codecs.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    rings: Vec<LineString>,
    dim: Dimension,
}

impl Polygon {
    pub fn new(rings: Vec<LineString>, dim: Dimension) -> Self {
        debug_assert!(rings.iter().all(|r| r.dimension() == dim));
        Self { rings, dim }
    }

    pub fn empty(dim: Dimension) -> Self {
        Self {
            rings: Vec::new(),
            dim,
        }
    }

    pub fn dimension(&self) -> Dimension {
        self.dim
    }

    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    pub fn rings(&self) -> &[LineString] {
        &self.rings
    }
}

impl PolygonTrait for Polygon {
    type T = f64;
    type RingType<'a> = &'a LineString where Self: 'a;

    fn dim(&self) -> Dimension {
        self.dim
    }

    fn exterior(&self) -> Option<Self::RingType<'_>> {
        self.rings.first()
    }

    fn num_interiors(&self) -> usize {
        self.rings.len().saturating_sub(1)
    }

    unsafe fn interior_unchecked(&self, i: usize) -> Self::RingType<'_> {
        &self.rings[i + 1]
    }
}

impl PolygonTrait for &Polygon {
    type T = f64;
    type RingType<'a> = &'a LineString where Self: 'a;

    fn dim(&self) -> Dimension {
        self.dim
    }

    fn exterior(&self) -> Option<Self::RingType<'_>> {
        self.rings.first()
    }

    fn num_interiors(&self) -> usize {
        self.rings.len().saturating_sub(1)
    }

    unsafe fn interior_unchecked(&self, i: usize) -> Self::RingType<'_> {
        &self.rings[i + 1]
    }
}
