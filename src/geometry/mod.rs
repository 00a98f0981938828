//! The owned geometry model the codecs decode into and encode from.
//!
//! Every value carries its [`Dimension`](crate::geo_traits::Dimension); a
//! point can be empty at the coordinate level, the other kinds are empty when
//! they hold no items.

pub use coord::Coord;
pub(crate) use geometry::{line_string_from_line, polygon_from_rect, polygon_from_triangle};
pub use geometry::{Geometry, GeometryKind};
pub use geometrycollection::GeometryCollection;
pub use linestring::LineString;
pub use multilinestring::MultiLineString;
pub use multipoint::MultiPoint;
pub use multipolygon::MultiPolygon;
pub use point::Point;
pub use polygon::Polygon;

mod coord;
#[allow(clippy::module_inception)]
mod geometry;
mod geometrycollection;
mod linestring;
mod multilinestring;
mod multipoint;
mod multipolygon;
mod point;
mod polygon;
