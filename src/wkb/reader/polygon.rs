use crate::error::{WkbError, WkbResult};
use crate::geometry::{GeometryKind, LineString, Polygon};
use crate::util::ByteCursor;
use crate::wkb::reader::{ensure_count, read_coord, read_header, WkbHeader};

fn read_ring(cursor: &mut ByteCursor, header: &WkbHeader) -> WkbResult<LineString> {
    let num_coords = cursor.read_u32(header.byte_order)? as usize;
    ensure_count(cursor, num_coords, header.dim.size() * 8)?;
    let mut coords = Vec::with_capacity(num_coords);
    for _ in 0..num_coords {
        coords.push(read_coord(cursor, header.byte_order, header.dim)?);
    }
    Ok(LineString::new(coords, header.dim))
}

pub(crate) fn read_polygon_body(cursor: &mut ByteCursor, header: &WkbHeader) -> WkbResult<Polygon> {
    let num_rings = cursor.read_u32(header.byte_order)? as usize;
    // each ring is at least its own 4-byte count
    ensure_count(cursor, num_rings, 4)?;
    let mut rings = Vec::with_capacity(num_rings);
    for _ in 0..num_rings {
        rings.push(read_ring(cursor, header)?);
    }
    Ok(Polygon::new(rings, header.dim))
}

/// Parse a WKB or EWKB polygon record, returning the value and the number of
/// bytes consumed.
pub fn read_polygon(buf: &[u8]) -> WkbResult<(Polygon, usize)> {
    let mut cursor = ByteCursor::new(buf);
    let header = read_header(&mut cursor)?;
    if header.kind != GeometryKind::Polygon {
        return Err(WkbError::ShapeMismatch {
            expected: GeometryKind::Polygon,
            found: header.kind,
        });
    }
    let polygon = read_polygon_body(&mut cursor, &header)?;
    Ok((polygon, cursor.position()))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geo_traits::Dimension;
    use crate::test::polygon::{poly0, poly1, poly1_xyz};
    use crate::wkb::writer::{write_polygon_as_wkb, WkbWriteOptions};

    #[test]
    fn round_trip_with_holes() {
        for geom in [poly0(), poly1(), poly1_xyz()] {
            let mut buf = Vec::new();
            write_polygon_as_wkb(&mut buf, &geom, &WkbWriteOptions::default()).unwrap();
            let (back, consumed) = read_polygon(&buf).unwrap();
            assert_eq!(back, geom);
            assert_eq!(consumed, buf.len());
        }
    }

    #[test]
    fn empty_polygon_round_trips() {
        let geom = Polygon::empty(Dimension::XY);
        let mut buf = Vec::new();
        write_polygon_as_wkb(&mut buf, &geom, &WkbWriteOptions::default()).unwrap();
        let (back, _) = read_polygon(&buf).unwrap();
        assert!(back.is_empty());
    }

    #[test]
    fn unclosed_rings_pass_through() {
        use crate::geometry::Coord;

        // closure is a caller concern, not a codec concern
        let ring = LineString::new(
            vec![
                Coord::xy(0.0, 0.0),
                Coord::xy(4.0, 0.0),
                Coord::xy(4.0, 4.0),
            ],
            Dimension::XY,
        );
        let geom = Polygon::new(vec![ring], Dimension::XY);
        let mut buf = Vec::new();
        write_polygon_as_wkb(&mut buf, &geom, &WkbWriteOptions::default()).unwrap();
        let (back, _) = read_polygon(&buf).unwrap();
        assert_eq!(back.rings(), geom.rings());
    }
}
