use crate::error::{WkbError, WkbResult};
use crate::geometry::{GeometryKind, LineString};
use crate::util::ByteCursor;
use crate::wkb::reader::{ensure_count, read_coord, read_header, WkbHeader};

pub(crate) fn read_line_string_body(
    cursor: &mut ByteCursor,
    header: &WkbHeader,
) -> WkbResult<LineString> {
    let num_coords = cursor.read_u32(header.byte_order)? as usize;
    ensure_count(cursor, num_coords, header.dim.size() * 8)?;
    let mut coords = Vec::with_capacity(num_coords);
    for _ in 0..num_coords {
        coords.push(read_coord(cursor, header.byte_order, header.dim)?);
    }
    Ok(LineString::new(coords, header.dim))
}

/// Parse a WKB or EWKB line string record, returning the value and the
/// number of bytes consumed.
pub fn read_line_string(buf: &[u8]) -> WkbResult<(LineString, usize)> {
    let mut cursor = ByteCursor::new(buf);
    let header = read_header(&mut cursor)?;
    if header.kind != GeometryKind::LineString {
        return Err(WkbError::ShapeMismatch {
            expected: GeometryKind::LineString,
            found: header.kind,
        });
    }
    let line = read_line_string_body(&mut cursor, &header)?;
    Ok((line, cursor.position()))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::linestring::{ls0, ls0_xym, ls0_xyz};
    use crate::wkb::writer::{write_line_string_as_wkb, WkbFlavor, WkbWriteOptions};
    use crate::wkb::Endianness;

    #[test]
    fn round_trip_all_dimensions() {
        for byte_order in [Endianness::BigEndian, Endianness::LittleEndian] {
            for flavor in [WkbFlavor::Iso, WkbFlavor::Ewkb { srid: Some(3857) }] {
                for geom in [ls0(), ls0_xyz(), ls0_xym()] {
                    let options = WkbWriteOptions { byte_order, flavor };
                    let mut buf = Vec::new();
                    write_line_string_as_wkb(&mut buf, &geom, &options).unwrap();
                    let (back, consumed) = read_line_string(&buf).unwrap();
                    assert_eq!(back, geom);
                    assert_eq!(consumed, buf.len());
                }
            }
        }
    }

    #[test]
    fn absurd_count_is_rejected_before_allocation() {
        // count claims u32::MAX coordinates with an empty body
        let buf = hex::decode("0102000000ffffffff").unwrap();
        assert!(matches!(
            read_line_string(&buf).unwrap_err(),
            WkbError::InsufficientData { .. }
        ));
    }
}
