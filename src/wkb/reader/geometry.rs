use crate::error::WkbResult;
use crate::geometry::{Geometry, GeometryKind};
use crate::util::ByteCursor;
use crate::wkb::reader::geometrycollection::read_geometry_collection_body;
use crate::wkb::reader::linestring::read_line_string_body;
use crate::wkb::reader::multilinestring::read_multi_line_string_body;
use crate::wkb::reader::multipoint::read_multi_point_body;
use crate::wkb::reader::multipolygon::read_multi_polygon_body;
use crate::wkb::reader::point::read_point_body;
use crate::wkb::reader::polygon::read_polygon_body;
use crate::wkb::reader::{read_header, WkbHeader};

pub(crate) fn read_geometry_body(
    cursor: &mut ByteCursor,
    header: &WkbHeader,
) -> WkbResult<Geometry> {
    let geometry = match header.kind {
        GeometryKind::Point => Geometry::Point(read_point_body(cursor, header)?),
        GeometryKind::LineString => Geometry::LineString(read_line_string_body(cursor, header)?),
        GeometryKind::Polygon => Geometry::Polygon(read_polygon_body(cursor, header)?),
        GeometryKind::MultiPoint => Geometry::MultiPoint(read_multi_point_body(cursor, header)?),
        GeometryKind::MultiLineString => {
            Geometry::MultiLineString(read_multi_line_string_body(cursor, header)?)
        }
        GeometryKind::MultiPolygon => {
            Geometry::MultiPolygon(read_multi_polygon_body(cursor, header)?)
        }
        GeometryKind::GeometryCollection => {
            Geometry::GeometryCollection(read_geometry_collection_body(cursor, header)?)
        }
    };
    Ok(geometry)
}

pub(crate) fn read_geometry_inner(cursor: &mut ByteCursor) -> WkbResult<Geometry> {
    let header = read_header(cursor)?;
    read_geometry_body(cursor, &header)
}

/// Parse one WKB or EWKB record of any kind, returning the geometry and the
/// number of bytes consumed.
///
/// ISO and EWKB type words are auto-detected; an EWKB SRID is parsed and
/// discarded. Use [`read_geometry_srid`] to observe it.
pub fn read_geometry(buf: &[u8]) -> WkbResult<(Geometry, usize)> {
    let mut cursor = ByteCursor::new(buf);
    let geometry = read_geometry_inner(&mut cursor)?;
    Ok((geometry, cursor.position()))
}

/// Like [`read_geometry`], additionally surfacing the EWKB SRID when the
/// record carries one.
pub fn read_geometry_srid(buf: &[u8]) -> WkbResult<(Geometry, Option<i32>, usize)> {
    let mut cursor = ByteCursor::new(buf);
    let header = read_header(&mut cursor)?;
    let geometry = read_geometry_body(&mut cursor, &header)?;
    Ok((geometry, header.srid, cursor.position()))
}

/// Decode only the header of a record and report its SRID, if any.
pub fn read_srid(buf: &[u8]) -> WkbResult<Option<i32>> {
    let mut cursor = ByteCursor::new(buf);
    Ok(read_header(&mut cursor)?.srid)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::WkbError;
    use crate::test::properties::all_fixtures;
    use crate::wkb::writer::{to_wkb, WkbFlavor, WkbWriteOptions};
    use crate::wkb::Endianness;

    #[test]
    fn round_trip_every_kind_and_flavor() {
        for geom in all_fixtures() {
            for byte_order in [Endianness::BigEndian, Endianness::LittleEndian] {
                for flavor in [
                    WkbFlavor::Iso,
                    WkbFlavor::Ewkb { srid: None },
                    WkbFlavor::Ewkb { srid: Some(4326) },
                ] {
                    let options = WkbWriteOptions { byte_order, flavor };
                    let buf = to_wkb(&geom, &options).unwrap();
                    let (back, consumed) = read_geometry(&buf).unwrap();
                    assert_eq!(back, geom);
                    assert_eq!(consumed, buf.len());
                }
            }
        }
    }

    #[test]
    fn srid_is_surfaced_from_the_outermost_record() {
        for geom in all_fixtures() {
            let options = WkbWriteOptions {
                byte_order: Endianness::LittleEndian,
                flavor: WkbFlavor::Ewkb { srid: Some(31370) },
            };
            let buf = to_wkb(&geom, &options).unwrap();
            let (back, srid, _) = read_geometry_srid(&buf).unwrap();
            assert_eq!(back, geom);
            assert_eq!(srid, Some(31370));
            assert_eq!(read_srid(&buf).unwrap(), Some(31370));
        }
    }

    #[test]
    fn iso_records_have_no_srid() {
        let buf = to_wkb(
            &crate::test::point::p0(),
            &WkbWriteOptions::default(),
        )
        .unwrap();
        assert_eq!(read_srid(&buf).unwrap(), None);
    }

    #[test]
    fn trailing_bytes_are_left_unread() {
        let mut buf = to_wkb(&crate::test::point::p0(), &WkbWriteOptions::default()).unwrap();
        let record_len = buf.len();
        buf.extend_from_slice(&[0xDE, 0xAD]);
        let (_, consumed) = read_geometry(&buf).unwrap();
        assert_eq!(consumed, record_len);
    }

    #[test]
    fn unknown_discriminators_are_rejected() {
        // marker byte 2
        assert!(matches!(
            read_geometry(&hex::decode("0201000000").unwrap()).unwrap_err(),
            WkbError::General(_)
        ));
        // untyped code 0
        assert!(matches!(
            read_geometry(&hex::decode("0100000000").unwrap()).unwrap_err(),
            WkbError::General(_)
        ));
        // unknown code 8
        assert!(matches!(
            read_geometry(&hex::decode("0108000000").unwrap()).unwrap_err(),
            WkbError::General(_)
        ));
    }
}
