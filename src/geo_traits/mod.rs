//! Geometry access traits the codecs are written against.
//!
//! One generic code path per codec concept replaces per-kind, per-dimension
//! and per-byte-order entry points. The traits use GAT item types so both the
//! owned model in [`crate::geometry`] and `geo` 2-D types plug in without
//! copying.

pub use coord::CoordTrait;
pub use dimension::Dimension;
pub use geometry::{GeometryTrait, GeometryType};
pub use geometry_collection::GeometryCollectionTrait;
pub use line::{LineTrait, UnimplementedLine};
pub use line_string::LineStringTrait;
pub use multi_line_string::MultiLineStringTrait;
pub use multi_point::MultiPointTrait;
pub use multi_polygon::MultiPolygonTrait;
pub use point::PointTrait;
pub use polygon::PolygonTrait;
pub use rect::{RectTrait, UnimplementedRect};
pub use triangle::{TriangleTrait, UnimplementedTriangle};

mod coord;
mod dimension;
mod geometry;
mod geometry_collection;
mod line;
mod line_string;
mod multi_line_string;
mod multi_point;
mod multi_polygon;
mod point;
mod polygon;
mod rect;
mod triangle;
