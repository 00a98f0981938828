use std::fmt;

use enum_as_inner::EnumAsInner;
use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::geo_traits::{
    CoordTrait, Dimension, GeometryTrait, GeometryType, LineTrait, RectTrait, TriangleTrait,
    UnimplementedLine, UnimplementedRect, UnimplementedTriangle,
};
use crate::geometry::{
    Coord, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point,
    Polygon,
};

/// The seven geometry kinds, numbered as on the wire (WKB base codes and
/// TWKB kind nibbles).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum GeometryKind {
    Point = 1,
    LineString = 2,
    Polygon = 3,
    MultiPoint = 4,
    MultiLineString = 5,
    MultiPolygon = 6,
    GeometryCollection = 7,
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GeometryKind::Point => "Point",
            GeometryKind::LineString => "LineString",
            GeometryKind::Polygon => "Polygon",
            GeometryKind::MultiPoint => "MultiPoint",
            GeometryKind::MultiLineString => "MultiLineString",
            GeometryKind::MultiPolygon => "MultiPolygon",
            GeometryKind::GeometryCollection => "GeometryCollection",
        };
        write!(f, "{name}")
    }
}

/// An owned geometry of any kind.
#[derive(Debug, Clone, PartialEq, EnumAsInner)]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
    Polygon(Polygon),
    MultiPoint(MultiPoint),
    MultiLineString(MultiLineString),
    MultiPolygon(MultiPolygon),
    GeometryCollection(GeometryCollection),
}

impl Geometry {
    pub fn kind(&self) -> GeometryKind {
        match self {
            Geometry::Point(_) => GeometryKind::Point,
            Geometry::LineString(_) => GeometryKind::LineString,
            Geometry::Polygon(_) => GeometryKind::Polygon,
            Geometry::MultiPoint(_) => GeometryKind::MultiPoint,
            Geometry::MultiLineString(_) => GeometryKind::MultiLineString,
            Geometry::MultiPolygon(_) => GeometryKind::MultiPolygon,
            Geometry::GeometryCollection(_) => GeometryKind::GeometryCollection,
        }
    }

    pub fn dimension(&self) -> Dimension {
        match self {
            Geometry::Point(g) => g.dimension(),
            Geometry::LineString(g) => g.dimension(),
            Geometry::Polygon(g) => g.dimension(),
            Geometry::MultiPoint(g) => g.dimension(),
            Geometry::MultiLineString(g) => g.dimension(),
            Geometry::MultiPolygon(g) => g.dimension(),
            Geometry::GeometryCollection(g) => g.dimension(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Geometry::Point(g) => g.is_empty(),
            Geometry::LineString(g) => g.is_empty(),
            Geometry::Polygon(g) => g.is_empty(),
            Geometry::MultiPoint(g) => g.is_empty(),
            Geometry::MultiLineString(g) => g.is_empty(),
            Geometry::MultiPolygon(g) => g.is_empty(),
            Geometry::GeometryCollection(g) => g.is_empty(),
        }
    }
}

macro_rules! impl_from {
    ($geometry_type:ident) => {
        impl From<$geometry_type> for Geometry {
            fn from(value: $geometry_type) -> Self {
                Geometry::$geometry_type(value)
            }
        }
    };
}

impl_from!(Point);
impl_from!(LineString);
impl_from!(Polygon);
impl_from!(MultiPoint);
impl_from!(MultiLineString);
impl_from!(MultiPolygon);
impl_from!(GeometryCollection);

impl GeometryTrait for Geometry {
    type T = f64;
    type PointType<'a> = Point where Self: 'a;
    type LineStringType<'a> = LineString where Self: 'a;
    type PolygonType<'a> = Polygon where Self: 'a;
    type MultiPointType<'a> = MultiPoint where Self: 'a;
    type MultiLineStringType<'a> = MultiLineString where Self: 'a;
    type MultiPolygonType<'a> = MultiPolygon where Self: 'a;
    type GeometryCollectionType<'a> = GeometryCollection where Self: 'a;
    type LineType<'a> = UnimplementedLine<f64> where Self: 'a;
    type RectType<'a> = UnimplementedRect<f64> where Self: 'a;
    type TriangleType<'a> = UnimplementedTriangle<f64> where Self: 'a;

    fn dim(&self) -> Dimension {
        self.dimension()
    }

    fn as_type(
        &self,
    ) -> GeometryType<
        '_,
        Point,
        LineString,
        Polygon,
        MultiPoint,
        MultiLineString,
        MultiPolygon,
        GeometryCollection,
        UnimplementedLine<f64>,
        UnimplementedRect<f64>,
        UnimplementedTriangle<f64>,
    > {
        match self {
            Geometry::Point(g) => GeometryType::Point(g),
            Geometry::LineString(g) => GeometryType::LineString(g),
            Geometry::Polygon(g) => GeometryType::Polygon(g),
            Geometry::MultiPoint(g) => GeometryType::MultiPoint(g),
            Geometry::MultiLineString(g) => GeometryType::MultiLineString(g),
            Geometry::MultiPolygon(g) => GeometryType::MultiPolygon(g),
            Geometry::GeometryCollection(g) => GeometryType::GeometryCollection(g),
        }
    }
}

impl GeometryTrait for &Geometry {
    type T = f64;
    type PointType<'a> = Point where Self: 'a;
    type LineStringType<'a> = LineString where Self: 'a;
    type PolygonType<'a> = Polygon where Self: 'a;
    type MultiPointType<'a> = MultiPoint where Self: 'a;
    type MultiLineStringType<'a> = MultiLineString where Self: 'a;
    type MultiPolygonType<'a> = MultiPolygon where Self: 'a;
    type GeometryCollectionType<'a> = GeometryCollection where Self: 'a;
    type LineType<'a> = UnimplementedLine<f64> where Self: 'a;
    type RectType<'a> = UnimplementedRect<f64> where Self: 'a;
    type TriangleType<'a> = UnimplementedTriangle<f64> where Self: 'a;

    fn dim(&self) -> Dimension {
        self.dimension()
    }

    fn as_type(
        &self,
    ) -> GeometryType<
        '_,
        Point,
        LineString,
        Polygon,
        MultiPoint,
        MultiLineString,
        MultiPolygon,
        GeometryCollection,
        UnimplementedLine<f64>,
        UnimplementedRect<f64>,
        UnimplementedTriangle<f64>,
    > {
        match self {
            Geometry::Point(g) => GeometryType::Point(g),
            Geometry::LineString(g) => GeometryType::LineString(g),
            Geometry::Polygon(g) => GeometryType::Polygon(g),
            Geometry::MultiPoint(g) => GeometryType::MultiPoint(g),
            Geometry::MultiLineString(g) => GeometryType::MultiLineString(g),
            Geometry::MultiPolygon(g) => GeometryType::MultiPolygon(g),
            Geometry::GeometryCollection(g) => GeometryType::GeometryCollection(g),
        }
    }
}

// Specialized implementations on each concrete geometry type, so every model
// type can be passed where a generic geometry is accepted.

macro_rules! impl_specialization {
    ($geometry_type:ident) => {
        impl GeometryTrait for $geometry_type {
            type T = f64;
            type PointType<'a> = Point where Self: 'a;
            type LineStringType<'a> = LineString where Self: 'a;
            type PolygonType<'a> = Polygon where Self: 'a;
            type MultiPointType<'a> = MultiPoint where Self: 'a;
            type MultiLineStringType<'a> = MultiLineString where Self: 'a;
            type MultiPolygonType<'a> = MultiPolygon where Self: 'a;
            type GeometryCollectionType<'a> = GeometryCollection where Self: 'a;
            type LineType<'a> = UnimplementedLine<f64> where Self: 'a;
            type RectType<'a> = UnimplementedRect<f64> where Self: 'a;
            type TriangleType<'a> = UnimplementedTriangle<f64> where Self: 'a;

            fn dim(&self) -> Dimension {
                self.dimension()
            }

            fn as_type(
                &self,
            ) -> GeometryType<
                '_,
                Point,
                LineString,
                Polygon,
                MultiPoint,
                MultiLineString,
                MultiPolygon,
                GeometryCollection,
                UnimplementedLine<f64>,
                UnimplementedRect<f64>,
                UnimplementedTriangle<f64>,
            > {
                GeometryType::$geometry_type(self)
            }
        }

        impl GeometryTrait for &$geometry_type {
            type T = f64;
            type PointType<'a> = Point where Self: 'a;
            type LineStringType<'a> = LineString where Self: 'a;
            type PolygonType<'a> = Polygon where Self: 'a;
            type MultiPointType<'a> = MultiPoint where Self: 'a;
            type MultiLineStringType<'a> = MultiLineString where Self: 'a;
            type MultiPolygonType<'a> = MultiPolygon where Self: 'a;
            type GeometryCollectionType<'a> = GeometryCollection where Self: 'a;
            type LineType<'a> = UnimplementedLine<f64> where Self: 'a;
            type RectType<'a> = UnimplementedRect<f64> where Self: 'a;
            type TriangleType<'a> = UnimplementedTriangle<f64> where Self: 'a;

            fn dim(&self) -> Dimension {
                self.dimension()
            }

            fn as_type(
                &self,
            ) -> GeometryType<
                '_,
                Point,
                LineString,
                Polygon,
                MultiPoint,
                MultiLineString,
                MultiPolygon,
                GeometryCollection,
                UnimplementedLine<f64>,
                UnimplementedRect<f64>,
                UnimplementedTriangle<f64>,
            > {
                GeometryType::$geometry_type(self)
            }
        }
    };
}

impl_specialization!(Point);
impl_specialization!(LineString);
impl_specialization!(Polygon);
impl_specialization!(MultiPoint);
impl_specialization!(MultiLineString);
impl_specialization!(MultiPolygon);
impl_specialization!(GeometryCollection);

// The `geo` model has segment, rectangle and triangle kinds without a wire
// code of their own; the writers encode them through these equivalents.

fn corner(coord: &impl CoordTrait<T = f64>, dim: Dimension) -> Coord {
    let mut out = Coord::xy(coord.x(), coord.y());
    if dim.has_z() {
        out.z = coord.nth(2);
    }
    if dim.has_m() {
        out.m = coord.nth(dim.size() - 1);
    }
    out
}

pub(crate) fn line_string_from_line(line: &impl LineTrait<T = f64>) -> LineString {
    let dim = line.dim();
    LineString::new(
        vec![corner(&line.start(), dim), corner(&line.end(), dim)],
        dim,
    )
}

pub(crate) fn polygon_from_rect(rect: &impl RectTrait<T = f64>) -> Polygon {
    let (lx, ly) = rect.lower().x_y();
    let (ux, uy) = rect.upper().x_y();
    let ring = vec![
        Coord::xy(lx, ly),
        Coord::xy(ux, ly),
        Coord::xy(ux, uy),
        Coord::xy(lx, uy),
        Coord::xy(lx, ly),
    ];
    Polygon::new(vec![LineString::new(ring, Dimension::XY)], Dimension::XY)
}

pub(crate) fn polygon_from_triangle(triangle: &impl TriangleTrait<T = f64>) -> Polygon {
    let dim = triangle.dim();
    let first = corner(&triangle.first(), dim);
    let ring = vec![
        first,
        corner(&triangle.second(), dim),
        corner(&triangle.third(), dim),
        first,
    ];
    Polygon::new(vec![LineString::new(ring, dim)], dim)
}
