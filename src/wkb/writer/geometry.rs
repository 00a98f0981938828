use std::io::Write;

use crate::error::{WkbError, WkbResult};
use crate::geo_traits::{GeometryTrait, GeometryType};
use crate::geometry::{line_string_from_line, polygon_from_rect, polygon_from_triangle};
use crate::wkb::writer::{
    geometry_collection_wkb_size, line_string_wkb_size, multi_line_string_wkb_size,
    multi_point_wkb_size, multi_polygon_wkb_size, point_wkb_size, polygon_wkb_size,
    write_geometry_collection_as_wkb, write_line_string_as_wkb, write_multi_line_string_as_wkb,
    write_multi_point_as_wkb, write_multi_polygon_as_wkb, write_point_as_wkb, write_polygon_as_wkb,
    WkbWriteOptions,
};

/// The number of bytes this geometry occupies as a WKB record.
pub fn geometry_wkb_size(geom: &impl GeometryTrait<T = f64>, options: &WkbWriteOptions) -> usize {
    use GeometryType::*;
    match geom.as_type() {
        Point(g) => point_wkb_size(g, options),
        LineString(g) => line_string_wkb_size(g, options),
        Polygon(g) => polygon_wkb_size(g, options),
        MultiPoint(g) => multi_point_wkb_size(g, options),
        MultiLineString(g) => multi_line_string_wkb_size(g, options),
        MultiPolygon(g) => multi_polygon_wkb_size(g, options),
        GeometryCollection(g) => geometry_collection_wkb_size(g, options),
        Line(g) => line_string_wkb_size(&line_string_from_line(g), options),
        Rect(g) => polygon_wkb_size(&polygon_from_rect(g), options),
        Triangle(g) => polygon_wkb_size(&polygon_from_triangle(g), options),
    }
}

/// Write a geometry of any kind to a Writer.
pub fn write_geometry_as_wkb<W: Write>(
    mut writer: W,
    geom: &impl GeometryTrait<T = f64>,
    options: &WkbWriteOptions,
) -> WkbResult<()> {
    use GeometryType::*;
    match geom.as_type() {
        Point(g) => write_point_as_wkb(&mut writer, g, options),
        LineString(g) => write_line_string_as_wkb(&mut writer, g, options),
        Polygon(g) => write_polygon_as_wkb(&mut writer, g, options),
        MultiPoint(g) => write_multi_point_as_wkb(&mut writer, g, options),
        MultiLineString(g) => write_multi_line_string_as_wkb(&mut writer, g, options),
        MultiPolygon(g) => write_multi_polygon_as_wkb(&mut writer, g, options),
        GeometryCollection(g) => write_geometry_collection_as_wkb(&mut writer, g, options),
        Line(g) => write_line_string_as_wkb(&mut writer, &line_string_from_line(g), options),
        Rect(g) => write_polygon_as_wkb(&mut writer, &polygon_from_rect(g), options),
        Triangle(g) => write_polygon_as_wkb(&mut writer, &polygon_from_triangle(g), options),
    }
}

/// Encode a geometry into a freshly allocated, exactly sized buffer.
pub fn to_wkb(geom: &impl GeometryTrait<T = f64>, options: &WkbWriteOptions) -> WkbResult<Vec<u8>> {
    let mut buf = Vec::with_capacity(geometry_wkb_size(geom, options));
    write_geometry_as_wkb(&mut buf, geom, options)?;
    Ok(buf)
}

/// Encode a geometry into a caller-provided slice, returning the number of
/// bytes written.
///
/// The exact record size is computed first; a short destination is rejected
/// with [`WkbError::BufferTooSmall`] before any byte is written.
pub fn write_geometry_to_slice(
    out: &mut [u8],
    geom: &impl GeometryTrait<T = f64>,
    options: &WkbWriteOptions,
) -> WkbResult<usize> {
    let needed = geometry_wkb_size(geom, options);
    if out.len() < needed {
        return Err(WkbError::BufferTooSmall {
            needed,
            available: out.len(),
        });
    }
    let mut slice = &mut out[..needed];
    write_geometry_as_wkb(&mut slice, geom, options)?;
    Ok(needed)
}
