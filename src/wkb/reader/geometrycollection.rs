use crate::error::{WkbError, WkbResult};
use crate::geometry::{GeometryCollection, GeometryKind};
use crate::util::ByteCursor;
use crate::wkb::reader::geometry::read_geometry_inner;
use crate::wkb::reader::{ensure_count, read_header, WkbHeader};

pub(crate) fn read_geometry_collection_body(
    cursor: &mut ByteCursor,
    header: &WkbHeader,
) -> WkbResult<GeometryCollection> {
    let num_geometries = cursor.read_u32(header.byte_order)? as usize;
    // each member is at least a 5-byte header plus a count or coordinate
    ensure_count(cursor, num_geometries, 9)?;
    let mut geometries = Vec::with_capacity(num_geometries);
    for _ in 0..num_geometries {
        let item = read_geometry_inner(cursor)?;
        if item.dimension() != header.dim {
            return Err(WkbError::General(format!(
                "nested record dimension {} differs from container dimension {}",
                item.dimension(),
                header.dim
            )));
        }
        geometries.push(item);
    }
    Ok(GeometryCollection::new(geometries, header.dim))
}

/// Parse a WKB or EWKB geometry collection record, returning the value and
/// the number of bytes consumed.
pub fn read_geometry_collection(buf: &[u8]) -> WkbResult<(GeometryCollection, usize)> {
    let mut cursor = ByteCursor::new(buf);
    let header = read_header(&mut cursor)?;
    if header.kind != GeometryKind::GeometryCollection {
        return Err(WkbError::ShapeMismatch {
            expected: GeometryKind::GeometryCollection,
            found: header.kind,
        });
    }
    let collection = read_geometry_collection_body(&mut cursor, &header)?;
    Ok((collection, cursor.position()))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geo_traits::Dimension;
    use crate::test::geometrycollection::{gc0, gc_nested};
    use crate::wkb::writer::{write_geometry_collection_as_wkb, WkbWriteOptions};

    #[test]
    fn round_trip_heterogeneous() {
        for geom in [gc0(), gc_nested()] {
            let mut buf = Vec::new();
            write_geometry_collection_as_wkb(&mut buf, &geom, &WkbWriteOptions::default()).unwrap();
            let (back, consumed) = read_geometry_collection(&buf).unwrap();
            assert_eq!(back, geom);
            assert_eq!(consumed, buf.len());
        }
    }

    #[test]
    fn empty_collection_round_trips() {
        let geom = GeometryCollection::empty(Dimension::XY);
        let mut buf = Vec::new();
        write_geometry_collection_as_wkb(&mut buf, &geom, &WkbWriteOptions::default()).unwrap();
        let (back, _) = read_geometry_collection(&buf).unwrap();
        assert!(back.is_empty());
    }
}
