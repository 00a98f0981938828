use crate::error::{WkbError, WkbResult};
use crate::geometry::{GeometryKind, MultiPolygon};
use crate::util::ByteCursor;
use crate::wkb::reader::polygon::read_polygon_body;
use crate::wkb::reader::{ensure_count, read_child_header, read_header, WkbHeader};

pub(crate) fn read_multi_polygon_body(
    cursor: &mut ByteCursor,
    header: &WkbHeader,
) -> WkbResult<MultiPolygon> {
    let num_polygons = cursor.read_u32(header.byte_order)? as usize;
    // each member is at least a 5-byte header plus its own ring count
    ensure_count(cursor, num_polygons, 9)?;
    let mut polygons = Vec::with_capacity(num_polygons);
    for _ in 0..num_polygons {
        let child = read_child_header(cursor, GeometryKind::Polygon, header.dim)?;
        polygons.push(read_polygon_body(cursor, &child)?);
    }
    Ok(MultiPolygon::new(polygons, header.dim))
}

/// Parse a WKB or EWKB multi polygon record, returning the value and the
/// number of bytes consumed.
pub fn read_multi_polygon(buf: &[u8]) -> WkbResult<(MultiPolygon, usize)> {
    let mut cursor = ByteCursor::new(buf);
    let header = read_header(&mut cursor)?;
    if header.kind != GeometryKind::MultiPolygon {
        return Err(WkbError::ShapeMismatch {
            expected: GeometryKind::MultiPolygon,
            found: header.kind,
        });
    }
    let multi_polygon = read_multi_polygon_body(&mut cursor, &header)?;
    Ok((multi_polygon, cursor.position()))
}
