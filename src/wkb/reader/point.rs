use crate::error::{WkbError, WkbResult};
use crate::geometry::{GeometryKind, Point};
use crate::util::ByteCursor;
use crate::wkb::reader::{read_coord, read_header, WkbHeader};

pub(crate) fn read_point_body(cursor: &mut ByteCursor, header: &WkbHeader) -> WkbResult<Point> {
    let coord = read_coord(cursor, header.byte_order, header.dim)?;
    // All-NaN ordinates encode POINT EMPTY
    let is_empty = coord.x.is_nan()
        && coord.y.is_nan()
        && coord.z.map_or(true, f64::is_nan)
        && coord.m.map_or(true, f64::is_nan);
    if is_empty {
        Ok(Point::empty(header.dim))
    } else {
        Ok(Point::new(coord))
    }
}

/// Parse a WKB or EWKB point record, returning the value and the number of
/// bytes consumed.
pub fn read_point(buf: &[u8]) -> WkbResult<(Point, usize)> {
    let mut cursor = ByteCursor::new(buf);
    let header = read_header(&mut cursor)?;
    if header.kind != GeometryKind::Point {
        return Err(WkbError::ShapeMismatch {
            expected: GeometryKind::Point,
            found: header.kind,
        });
    }
    let point = read_point_body(&mut cursor, &header)?;
    Ok((point, cursor.position()))
}
