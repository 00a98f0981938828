//! Parse TWKB buffers into [geometries](crate::geometry).

use crate::error::{WkbError, WkbResult};
use crate::geo_traits::Dimension;
use crate::geometry::{
    Coord, Geometry, GeometryCollection, GeometryKind, LineString, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon,
};
use crate::twkb::header::TwkbHeader;
use crate::twkb::varint::{read_varint, unzigzag};
use crate::twkb::{descale, DeltaState};
use crate::util::ByteCursor;

/// Per-axis bounds decoded from a record's bounding box, mapped back to
/// ordinate units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Envelope {
    pub x: (f64, f64),
    pub y: (f64, f64),
    pub z: Option<(f64, f64)>,
    pub m: Option<(f64, f64)>,
}

/// One fully decoded TWKB record, including the optional header extras a
/// plain geometry cannot carry.
#[derive(Debug, Clone, PartialEq)]
pub struct TwkbRecord {
    pub geometry: Geometry,
    /// Present when the record carried a bounding box.
    pub envelope: Option<Envelope>,
    /// Present when the record carried an id list.
    pub ids: Option<Vec<i64>>,
    pub bytes_read: usize,
}

fn read_envelope(cursor: &mut ByteCursor, header: &TwkbHeader) -> WkbResult<Envelope> {
    let precisions = header.precisions();
    let mut lower = [0f64; 4];
    let mut upper = [0f64; 4];
    for n in 0..header.dim.size() {
        let min = unzigzag(read_varint(cursor)?);
        let range = unzigzag(read_varint(cursor)?);
        lower[n] = descale(min, precisions[n]);
        upper[n] = descale(min.wrapping_add(range), precisions[n]);
    }
    let third = (lower[2], upper[2]);
    Ok(Envelope {
        x: (lower[0], upper[0]),
        y: (lower[1], upper[1]),
        z: header.dim.has_z().then_some(third),
        m: match header.dim {
            Dimension::XY | Dimension::XYZ => None,
            Dimension::XYM => Some(third),
            Dimension::XYZM => Some((lower[3], upper[3])),
        },
    })
}

fn read_coord(
    cursor: &mut ByteCursor,
    header: &TwkbHeader,
    state: &mut DeltaState,
) -> WkbResult<Coord> {
    let precisions = header.precisions();
    let mut values = [0f64; 4];
    for n in 0..header.dim.size() {
        let delta = unzigzag(read_varint(cursor)?);
        values[n] = descale(state.apply(n, delta), precisions[n]);
    }
    Ok(match header.dim {
        Dimension::XY => Coord::xy(values[0], values[1]),
        Dimension::XYZ => Coord::xyz(values[0], values[1], values[2]),
        Dimension::XYM => Coord::xym(values[0], values[1], values[2]),
        Dimension::XYZM => Coord::xyzm(values[0], values[1], values[2], values[3]),
    })
}

/// A coordinate run: count varint plus delta-encoded coordinates.
fn read_coord_seq(
    cursor: &mut ByteCursor,
    header: &TwkbHeader,
    state: &mut DeltaState,
) -> WkbResult<Vec<Coord>> {
    let count = read_varint(cursor)?;
    // every ordinate takes at least one byte
    cursor.ensure(count.saturating_mul(header.dim.size() as u64))?;
    let count = count as usize;
    let mut coords = Vec::with_capacity(count);
    for _ in 0..count {
        coords.push(read_coord(cursor, header, state)?);
    }
    Ok(coords)
}

/// Member count of a multi geometry or collection, followed by the id list
/// when the header announces one. Ids are zigzag deltas against the
/// previous id, starting from zero.
fn read_members(cursor: &mut ByteCursor, header: &TwkbHeader) -> WkbResult<(usize, Option<Vec<i64>>)> {
    let count = read_varint(cursor)?;
    cursor.ensure(count)?;
    let count = count as usize;
    let ids = if header.has_ids {
        let mut ids = Vec::with_capacity(count);
        let mut prev = 0i64;
        for _ in 0..count {
            prev = prev.wrapping_add(unzigzag(read_varint(cursor)?));
            ids.push(prev);
        }
        Some(ids)
    } else {
        None
    };
    Ok((count, ids))
}

fn empty_geometry(header: &TwkbHeader) -> Geometry {
    match header.kind {
        GeometryKind::Point => Point::empty(header.dim).into(),
        GeometryKind::LineString => LineString::empty(header.dim).into(),
        GeometryKind::Polygon => Polygon::empty(header.dim).into(),
        GeometryKind::MultiPoint => MultiPoint::empty(header.dim).into(),
        GeometryKind::MultiLineString => MultiLineString::empty(header.dim).into(),
        GeometryKind::MultiPolygon => MultiPolygon::empty(header.dim).into(),
        GeometryKind::GeometryCollection => GeometryCollection::empty(header.dim).into(),
    }
}

fn read_value(
    cursor: &mut ByteCursor,
    header: &TwkbHeader,
) -> WkbResult<(Geometry, Option<Vec<i64>>)> {
    let mut state = DeltaState::default();
    if header.has_ids && !matches!(
        header.kind,
        GeometryKind::MultiPoint
            | GeometryKind::MultiLineString
            | GeometryKind::MultiPolygon
            | GeometryKind::GeometryCollection
    ) {
        return Err(WkbError::General(
            "id lists apply to multi geometries and collections".to_string(),
        ));
    }
    match header.kind {
        GeometryKind::Point => {
            let coord = read_coord(cursor, header, &mut state)?;
            Ok((Point::new(coord).into(), None))
        }
        GeometryKind::LineString => {
            let coords = read_coord_seq(cursor, header, &mut state)?;
            Ok((LineString::new(coords, header.dim).into(), None))
        }
        GeometryKind::Polygon => {
            let num_rings = read_varint(cursor)?;
            cursor.ensure(num_rings)?;
            let mut rings = Vec::with_capacity(num_rings as usize);
            for _ in 0..num_rings {
                let coords = read_coord_seq(cursor, header, &mut state)?;
                rings.push(LineString::new(coords, header.dim));
            }
            Ok((Polygon::new(rings, header.dim).into(), None))
        }
        GeometryKind::MultiPoint => {
            let (count, ids) = read_members(cursor, header)?;
            cursor.ensure((count as u64).saturating_mul(header.dim.size() as u64))?;
            let mut points = Vec::with_capacity(count);
            for _ in 0..count {
                points.push(Point::new(read_coord(cursor, header, &mut state)?));
            }
            Ok((MultiPoint::new(points, header.dim).into(), ids))
        }
        GeometryKind::MultiLineString => {
            let (count, ids) = read_members(cursor, header)?;
            let mut line_strings = Vec::with_capacity(count);
            for _ in 0..count {
                let coords = read_coord_seq(cursor, header, &mut state)?;
                line_strings.push(LineString::new(coords, header.dim));
            }
            Ok((MultiLineString::new(line_strings, header.dim).into(), ids))
        }
        GeometryKind::MultiPolygon => {
            let (count, ids) = read_members(cursor, header)?;
            let mut polygons = Vec::with_capacity(count);
            for _ in 0..count {
                let num_rings = read_varint(cursor)?;
                cursor.ensure(num_rings)?;
                let mut rings = Vec::with_capacity(num_rings as usize);
                for _ in 0..num_rings {
                    let coords = read_coord_seq(cursor, header, &mut state)?;
                    rings.push(LineString::new(coords, header.dim));
                }
                polygons.push(Polygon::new(rings, header.dim));
            }
            Ok((MultiPolygon::new(polygons, header.dim).into(), ids))
        }
        GeometryKind::GeometryCollection => {
            let (count, ids) = read_members(cursor, header)?;
            let mut geometries = Vec::with_capacity(count);
            for _ in 0..count {
                let member = TwkbHeader::read(cursor)?;
                if member.dim != header.dim {
                    return Err(WkbError::General(format!(
                        "collection member dimension {} does not match container dimension {}",
                        member.dim, header.dim
                    )));
                }
                // member extras do not surface; only the top-level record's
                // envelope and ids are reported
                let (geometry, _, _) = read_record_body(cursor, &member)?;
                geometries.push(geometry);
            }
            Ok((GeometryCollection::new(geometries, header.dim).into(), ids))
        }
    }
}

/// Everything after the header: optional size varint, optional bounding
/// box, then the value. A size that does not match the bytes actually
/// consumed is reported as corruption.
fn read_record_body(
    cursor: &mut ByteCursor,
    header: &TwkbHeader,
) -> WkbResult<(Geometry, Option<Envelope>, Option<Vec<i64>>)> {
    let size = if header.has_size {
        let size = read_varint(cursor)?;
        cursor.ensure(size)?;
        Some(size)
    } else {
        None
    };
    let payload_start = cursor.position();

    let envelope = if header.has_bbox && !header.is_empty {
        Some(read_envelope(cursor, header)?)
    } else {
        None
    };
    let (geometry, ids) = if header.is_empty {
        (empty_geometry(header), None)
    } else {
        read_value(cursor, header)?
    };

    if let Some(size) = size {
        let consumed = (cursor.position() - payload_start) as u64;
        if consumed != size {
            return Err(WkbError::General(format!(
                "size header claims {size} payload bytes but the record used {consumed}"
            )));
        }
    }
    Ok((geometry, envelope, ids))
}

fn read_expected(buf: &[u8], expected: GeometryKind) -> WkbResult<(Geometry, usize)> {
    let mut cursor = ByteCursor::new(buf);
    let header = TwkbHeader::read(&mut cursor)?;
    if header.kind != expected {
        return Err(WkbError::ShapeMismatch {
            expected,
            found: header.kind,
        });
    }
    let (geometry, _, _) = read_record_body(&mut cursor, &header)?;
    Ok((geometry, cursor.position()))
}

/// Parse one TWKB record of any kind, reporting its envelope and id list
/// alongside the geometry. Trailing bytes past the record are left unread.
pub fn read_record(buf: &[u8]) -> WkbResult<TwkbRecord> {
    let mut cursor = ByteCursor::new(buf);
    let header = TwkbHeader::read(&mut cursor)?;
    let (geometry, envelope, ids) = read_record_body(&mut cursor, &header)?;
    Ok(TwkbRecord {
        geometry,
        envelope,
        ids,
        bytes_read: cursor.position(),
    })
}

/// Parse one TWKB record of any kind, returning the geometry and the number
/// of bytes consumed.
pub fn read_geometry(buf: &[u8]) -> WkbResult<(Geometry, usize)> {
    let record = read_record(buf)?;
    Ok((record.geometry, record.bytes_read))
}

/// Parse a TWKB Point record.
pub fn read_point(buf: &[u8]) -> WkbResult<(Point, usize)> {
    match read_expected(buf, GeometryKind::Point)? {
        (Geometry::Point(geom), bytes_read) => Ok((geom, bytes_read)),
        _ => unreachable!(),
    }
}

/// Parse a TWKB LineString record.
pub fn read_line_string(buf: &[u8]) -> WkbResult<(LineString, usize)> {
    match read_expected(buf, GeometryKind::LineString)? {
        (Geometry::LineString(geom), bytes_read) => Ok((geom, bytes_read)),
        _ => unreachable!(),
    }
}

/// Parse a TWKB Polygon record.
pub fn read_polygon(buf: &[u8]) -> WkbResult<(Polygon, usize)> {
    match read_expected(buf, GeometryKind::Polygon)? {
        (Geometry::Polygon(geom), bytes_read) => Ok((geom, bytes_read)),
        _ => unreachable!(),
    }
}

/// Parse a TWKB MultiPoint record.
pub fn read_multi_point(buf: &[u8]) -> WkbResult<(MultiPoint, usize)> {
    match read_expected(buf, GeometryKind::MultiPoint)? {
        (Geometry::MultiPoint(geom), bytes_read) => Ok((geom, bytes_read)),
        _ => unreachable!(),
    }
}

/// Parse a TWKB MultiLineString record.
pub fn read_multi_line_string(buf: &[u8]) -> WkbResult<(MultiLineString, usize)> {
    match read_expected(buf, GeometryKind::MultiLineString)? {
        (Geometry::MultiLineString(geom), bytes_read) => Ok((geom, bytes_read)),
        _ => unreachable!(),
    }
}

/// Parse a TWKB MultiPolygon record.
pub fn read_multi_polygon(buf: &[u8]) -> WkbResult<(MultiPolygon, usize)> {
    match read_expected(buf, GeometryKind::MultiPolygon)? {
        (Geometry::MultiPolygon(geom), bytes_read) => Ok((geom, bytes_read)),
        _ => unreachable!(),
    }
}

/// Parse a TWKB GeometryCollection record.
pub fn read_geometry_collection(buf: &[u8]) -> WkbResult<(GeometryCollection, usize)> {
    match read_expected(buf, GeometryKind::GeometryCollection)? {
        (Geometry::GeometryCollection(geom), bytes_read) => Ok((geom, bytes_read)),
        _ => unreachable!(),
    }
}
