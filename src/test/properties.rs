use crate::geo_traits::Dimension;
use crate::geometry::{
    Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Polygon,
};

use super::geometrycollection::{gc0, gc_nested};
use super::linestring::{ls0, ls0_xym, ls0_xyz};
use super::multilinestring::{mls0, mls0_xyzm};
use super::multipoint::{mp0, mp0_xyz};
use super::multipolygon::{mpoly0, mpoly0_xym};
use super::point::{p0, p0_xyzm, p1, p2};
use super::polygon::{poly0, poly1, poly1_xyz};

/// One geometry of every kind, dimension mix and emptiness the codecs
/// distinguish.
pub(crate) fn all_fixtures() -> Vec<Geometry> {
    vec![
        p0().into(),
        p1().into(),
        p2().into(),
        p0_xyzm().into(),
        ls0().into(),
        ls0_xyz().into(),
        ls0_xym().into(),
        LineString::empty(Dimension::XY).into(),
        poly0().into(),
        poly1().into(),
        poly1_xyz().into(),
        Polygon::empty(Dimension::XY).into(),
        mp0().into(),
        mp0_xyz().into(),
        MultiPoint::empty(Dimension::XY).into(),
        mls0().into(),
        mls0_xyzm().into(),
        MultiLineString::empty(Dimension::XY).into(),
        mpoly0().into(),
        mpoly0_xym().into(),
        MultiPolygon::empty(Dimension::XY).into(),
        gc0().into(),
        gc_nested().into(),
        GeometryCollection::empty(Dimension::XY).into(),
    ]
}
