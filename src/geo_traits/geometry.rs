use geo::CoordNum;

use crate::geo_traits::{
    Dimension, GeometryCollectionTrait, LineStringTrait, LineTrait, MultiLineStringTrait,
    MultiPointTrait, MultiPolygonTrait, PointTrait, PolygonTrait, RectTrait, TriangleTrait,
};

/// A trait for accessing data from a generic Geometry.
pub trait GeometryTrait {
    type T: CoordNum;
    type PointType<'a>: 'a + PointTrait<T = Self::T>
    where
        Self: 'a;
    type LineStringType<'a>: 'a + LineStringTrait<T = Self::T>
    where
        Self: 'a;
    type PolygonType<'a>: 'a + PolygonTrait<T = Self::T>
    where
        Self: 'a;
    type MultiPointType<'a>: 'a + MultiPointTrait<T = Self::T>
    where
        Self: 'a;
    type MultiLineStringType<'a>: 'a + MultiLineStringTrait<T = Self::T>
    where
        Self: 'a;
    type MultiPolygonType<'a>: 'a + MultiPolygonTrait<T = Self::T>
    where
        Self: 'a;
    type GeometryCollectionType<'a>: 'a + GeometryCollectionTrait<T = Self::T>
    where
        Self: 'a;
    type LineType<'a>: 'a + LineTrait<T = Self::T>
    where
        Self: 'a;
    type RectType<'a>: 'a + RectTrait<T = Self::T>
    where
        Self: 'a;
    type TriangleType<'a>: 'a + TriangleTrait<T = Self::T>
    where
        Self: 'a;

    /// Native dimension of this geometry.
    fn dim(&self) -> Dimension;

    /// Cast this geometry to a [`GeometryType`] enum for downcasting.
    fn as_type(
        &self,
    ) -> GeometryType<
        '_,
        Self::PointType<'_>,
        Self::LineStringType<'_>,
        Self::PolygonType<'_>,
        Self::MultiPointType<'_>,
        Self::MultiLineStringType<'_>,
        Self::MultiPolygonType<'_>,
        Self::GeometryCollectionType<'_>,
        Self::LineType<'_>,
        Self::RectType<'_>,
        Self::TriangleType<'_>,
    >;
}

/// An enumeration of all geometry kinds a [`GeometryTrait`] object can
/// resolve to. The line, rect and triangle kinds exist only in the `geo`
/// model; the codecs write them as the equivalent line string or polygon.
#[derive(Debug)]
pub enum GeometryType<'a, P, L, Y, MP, ML, MY, GC, LN, R, TR>
where
    P: PointTrait,
    L: LineStringTrait,
    Y: PolygonTrait,
    MP: MultiPointTrait,
    ML: MultiLineStringTrait,
    MY: MultiPolygonTrait,
    GC: GeometryCollectionTrait,
    LN: LineTrait,
    R: RectTrait,
    TR: TriangleTrait,
{
    Point(&'a P),
    LineString(&'a L),
    Polygon(&'a Y),
    MultiPoint(&'a MP),
    MultiLineString(&'a ML),
    MultiPolygon(&'a MY),
    GeometryCollection(&'a GC),
    Line(&'a LN),
    Rect(&'a R),
    Triangle(&'a TR),
}

impl<T: CoordNum> GeometryTrait for geo::Geometry<T> {
    type T = T;
    type PointType<'a> = geo::Point<T> where Self: 'a;
    type LineStringType<'a> = geo::LineString<T> where Self: 'a;
    type PolygonType<'a> = geo::Polygon<T> where Self: 'a;
    type MultiPointType<'a> = geo::MultiPoint<T> where Self: 'a;
    type MultiLineStringType<'a> = geo::MultiLineString<T> where Self: 'a;
    type MultiPolygonType<'a> = geo::MultiPolygon<T> where Self: 'a;
    type GeometryCollectionType<'a> = geo::GeometryCollection<T> where Self: 'a;
    type LineType<'a> = geo::Line<T> where Self: 'a;
    type RectType<'a> = geo::Rect<T> where Self: 'a;
    type TriangleType<'a> = geo::Triangle<T> where Self: 'a;

    fn dim(&self) -> Dimension {
        Dimension::XY
    }

    fn as_type(
        &self,
    ) -> GeometryType<
        '_,
        geo::Point<T>,
        geo::LineString<T>,
        geo::Polygon<T>,
        geo::MultiPoint<T>,
        geo::MultiLineString<T>,
        geo::MultiPolygon<T>,
        geo::GeometryCollection<T>,
        geo::Line<T>,
        geo::Rect<T>,
        geo::Triangle<T>,
    > {
        match self {
            geo::Geometry::Point(g) => GeometryType::Point(g),
            geo::Geometry::LineString(g) => GeometryType::LineString(g),
            geo::Geometry::Polygon(g) => GeometryType::Polygon(g),
            geo::Geometry::MultiPoint(g) => GeometryType::MultiPoint(g),
            geo::Geometry::MultiLineString(g) => GeometryType::MultiLineString(g),
            geo::Geometry::MultiPolygon(g) => GeometryType::MultiPolygon(g),
            geo::Geometry::GeometryCollection(g) => GeometryType::GeometryCollection(g),
            geo::Geometry::Line(g) => GeometryType::Line(g),
            geo::Geometry::Rect(g) => GeometryType::Rect(g),
            geo::Geometry::Triangle(g) => GeometryType::Triangle(g),
        }
    }
}

impl<T: CoordNum> GeometryTrait for &geo::Geometry<T> {
    type T = T;
    type PointType<'a> = geo::Point<T> where Self: 'a;
    type LineStringType<'a> = geo::LineString<T> where Self: 'a;
    type PolygonType<'a> = geo::Polygon<T> where Self: 'a;
    type MultiPointType<'a> = geo::MultiPoint<T> where Self: 'a;
    type MultiLineStringType<'a> = geo::MultiLineString<T> where Self: 'a;
    type MultiPolygonType<'a> = geo::MultiPolygon<T> where Self: 'a;
    type GeometryCollectionType<'a> = geo::GeometryCollection<T> where Self: 'a;
    type LineType<'a> = geo::Line<T> where Self: 'a;
    type RectType<'a> = geo::Rect<T> where Self: 'a;
    type TriangleType<'a> = geo::Triangle<T> where Self: 'a;

    fn dim(&self) -> Dimension {
        Dimension::XY
    }

    fn as_type(
        &self,
    ) -> GeometryType<
        '_,
        geo::Point<T>,
        geo::LineString<T>,
        geo::Polygon<T>,
        geo::MultiPoint<T>,
        geo::MultiLineString<T>,
        geo::MultiPolygon<T>,
        geo::GeometryCollection<T>,
        geo::Line<T>,
        geo::Rect<T>,
        geo::Triangle<T>,
    > {
        match self {
            geo::Geometry::Point(g) => GeometryType::Point(g),
            geo::Geometry::LineString(g) => GeometryType::LineString(g),
            geo::Geometry::Polygon(g) => GeometryType::Polygon(g),
            geo::Geometry::MultiPoint(g) => GeometryType::MultiPoint(g),
            geo::Geometry::MultiLineString(g) => GeometryType::MultiLineString(g),
            geo::Geometry::MultiPolygon(g) => GeometryType::MultiPolygon(g),
            geo::Geometry::GeometryCollection(g) => GeometryType::GeometryCollection(g),
            geo::Geometry::Line(g) => GeometryType::Line(g),
            geo::Geometry::Rect(g) => GeometryType::Rect(g),
            geo::Geometry::Triangle(g) => GeometryType::Triangle(g),
        }
    }
}
