use crate::error::{WkbError, WkbResult};
use crate::geometry::{GeometryKind, MultiLineString};
use crate::util::ByteCursor;
use crate::wkb::reader::linestring::read_line_string_body;
use crate::wkb::reader::{ensure_count, read_child_header, read_header, WkbHeader};

pub(crate) fn read_multi_line_string_body(
    cursor: &mut ByteCursor,
    header: &WkbHeader,
) -> WkbResult<MultiLineString> {
    let num_lines = cursor.read_u32(header.byte_order)? as usize;
    // each member is at least a 5-byte header plus its own count
    ensure_count(cursor, num_lines, 9)?;
    let mut line_strings = Vec::with_capacity(num_lines);
    for _ in 0..num_lines {
        let child = read_child_header(cursor, GeometryKind::LineString, header.dim)?;
        line_strings.push(read_line_string_body(cursor, &child)?);
    }
    Ok(MultiLineString::new(line_strings, header.dim))
}

/// Parse a WKB or EWKB multi line string record, returning the value and the
/// number of bytes consumed.
pub fn read_multi_line_string(buf: &[u8]) -> WkbResult<(MultiLineString, usize)> {
    let mut cursor = ByteCursor::new(buf);
    let header = read_header(&mut cursor)?;
    if header.kind != GeometryKind::MultiLineString {
        return Err(WkbError::ShapeMismatch {
            expected: GeometryKind::MultiLineString,
            found: header.kind,
        });
    }
    let multi_line_string = read_multi_line_string_body(&mut cursor, &header)?;
    Ok((multi_line_string, cursor.position()))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::multilinestring::{mls0, mls0_xyzm};
    use crate::wkb::writer::{write_multi_line_string_as_wkb, WkbWriteOptions};

    #[test]
    fn round_trip() {
        for geom in [mls0(), mls0_xyzm()] {
            let mut buf = Vec::new();
            write_multi_line_string_as_wkb(&mut buf, &geom, &WkbWriteOptions::default()).unwrap();
            let (back, consumed) = read_multi_line_string(&buf).unwrap();
            assert_eq!(back, geom);
            assert_eq!(consumed, buf.len());
        }
    }

    #[test]
    fn mixed_member_dimension_is_rejected() {
        // 2-D container holding a 3-D (Z) empty line string
        let buf = hex::decode(concat!("010500000001000000", "01ea03000000000000")).unwrap();
        assert!(matches!(
            read_multi_line_string(&buf).unwrap_err(),
            WkbError::General(_)
        ));
    }
}
