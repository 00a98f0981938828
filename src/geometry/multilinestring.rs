use crate::geo_traits::{Dimension, MultiLineStringTrait};
use crate::geometry::LineString;

#[derive(Debug, Clone, PartialEq)]
pub struct MultiLineString {
    line_strings: Vec<LineString>,
    dim: Dimension,
}

impl MultiLineString {
    pub fn new(line_strings: Vec<LineString>, dim: Dimension) -> Self {
        debug_assert!(line_strings.iter().all(|l| l.dimension() == dim));
        Self { line_strings, dim }
    }

    pub fn empty(dim: Dimension) -> Self {
        Self {
            line_strings: Vec::new(),
            dim,
        }
    }

    pub fn dimension(&self) -> Dimension {
        self.dim
    }

    pub fn is_empty(&self) -> bool {
        self.line_strings.is_empty()
    }
}

impl MultiLineStringTrait for MultiLineString {
    type T = f64;
    type ItemType<'a> = &'a LineString where Self: 'a;

    fn dim(&self) -> Dimension {
        self.dim
    }

    fn num_lines(&self) -> usize {
        self.line_strings.len()
    }

    unsafe fn line_unchecked(&self, i: usize) -> Self::ItemType<'_> {
        &self.line_strings[i]
    }
}

impl MultiLineStringTrait for &MultiLineString {
    type T = f64;
    type ItemType<'a> = &'a LineString where Self: 'a;

    fn dim(&self) -> Dimension {
        self.dim
    }

    fn num_lines(&self) -> usize {
        self.line_strings.len()
    }

    unsafe fn line_unchecked(&self, i: usize) -> Self::ItemType<'_> {
        &self.line_strings[i]
    }
}
