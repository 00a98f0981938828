use crate::geo_traits::Dimension;
use crate::geometry::GeometryCollection;

use super::linestring::ls0;
use super::multipoint::mp0;
use super::point::{p0, p1};

pub(crate) fn gc0() -> GeometryCollection {
    GeometryCollection::new(vec![p0().into(), ls0().into()], Dimension::XY)
}

/// A collection holding another collection, exercising the recursive paths
/// of both codecs.
pub(crate) fn gc_nested() -> GeometryCollection {
    let inner = GeometryCollection::new(vec![p1().into(), ls0().into()], Dimension::XY);
    GeometryCollection::new(vec![mp0().into(), inner.into()], Dimension::XY)
}
