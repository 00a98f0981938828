use crate::error::{WkbError, WkbResult};
use crate::geometry::{GeometryKind, MultiPoint};
use crate::util::ByteCursor;
use crate::wkb::reader::point::read_point_body;
use crate::wkb::reader::{ensure_count, read_child_header, read_header, WkbHeader};

pub(crate) fn read_multi_point_body(
    cursor: &mut ByteCursor,
    header: &WkbHeader,
) -> WkbResult<MultiPoint> {
    let num_points = cursor.read_u32(header.byte_order)? as usize;
    // each member is at least a 5-byte header plus its ordinates
    ensure_count(cursor, num_points, 5 + header.dim.size() * 8)?;
    let mut points = Vec::with_capacity(num_points);
    for _ in 0..num_points {
        let child = read_child_header(cursor, GeometryKind::Point, header.dim)?;
        points.push(read_point_body(cursor, &child)?);
    }
    Ok(MultiPoint::new(points, header.dim))
}

/// Parse a WKB or EWKB multi point record, returning the value and the
/// number of bytes consumed.
pub fn read_multi_point(buf: &[u8]) -> WkbResult<(MultiPoint, usize)> {
    let mut cursor = ByteCursor::new(buf);
    let header = read_header(&mut cursor)?;
    if header.kind != GeometryKind::MultiPoint {
        return Err(WkbError::ShapeMismatch {
            expected: GeometryKind::MultiPoint,
            found: header.kind,
        });
    }
    let multi_point = read_multi_point_body(&mut cursor, &header)?;
    Ok((multi_point, cursor.position()))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::multipoint::{mp0, mp0_xyz};
    use crate::wkb::writer::{write_multi_point_as_wkb, WkbWriteOptions};

    #[test]
    fn round_trip() {
        for geom in [mp0(), mp0_xyz()] {
            let mut buf = Vec::new();
            write_multi_point_as_wkb(&mut buf, &geom, &WkbWriteOptions::default()).unwrap();
            let (back, consumed) = read_multi_point(&buf).unwrap();
            assert_eq!(back, geom);
            assert_eq!(consumed, buf.len());
        }
    }

    #[test]
    fn wrong_member_kind_is_rejected() {
        // multi point wrapping a one-coordinate line string record
        let buf = hex::decode(concat!(
            "010400000001000000",
            "010200000001000000000000000000f03f0000000000000040"
        ))
        .unwrap();
        assert!(matches!(
            read_multi_point(&buf).unwrap_err(),
            WkbError::ShapeMismatch { .. }
        ));
    }
}
