use std::io::Write;

use crate::error::WkbResult;
use crate::geo_traits::LineStringTrait;
use crate::geometry::GeometryKind;
use crate::wkb::writer::{count_u32, write_coord, write_header, write_u32, WkbWriteOptions};

/// The number of bytes this line string occupies as a WKB record.
pub fn line_string_wkb_size(
    geom: &impl LineStringTrait<T = f64>,
    options: &WkbWriteOptions,
) -> usize {
    options.header_size() + 4 + geom.num_coords() * geom.dim().size() * 8
}

/// Write a LineString geometry to a Writer.
pub fn write_line_string_as_wkb<W: Write>(
    mut writer: W,
    geom: &impl LineStringTrait<T = f64>,
    options: &WkbWriteOptions,
) -> WkbResult<()> {
    let dim = geom.dim();
    write_header(&mut writer, GeometryKind::LineString, dim, options)?;
    write_u32(&mut writer, count_u32(geom.num_coords())?, options.byte_order)?;
    for coord in geom.coords() {
        write_coord(&mut writer, &coord, dim, options.byte_order)?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geo_traits::Dimension;
    use crate::geometry::LineString;
    use crate::test::linestring::{ls0, ls0_xyz};

    #[test]
    fn size_matches_output() {
        let options = WkbWriteOptions::default();
        let mut buf = Vec::new();
        write_line_string_as_wkb(&mut buf, &ls0(), &options).unwrap();
        assert_eq!(buf.len(), line_string_wkb_size(&ls0(), &options));

        let mut buf = Vec::new();
        write_line_string_as_wkb(&mut buf, &ls0_xyz(), &options).unwrap();
        assert_eq!(buf.len(), line_string_wkb_size(&ls0_xyz(), &options));
    }

    #[test]
    fn known_bytes_le() {
        // SELECT ST_AsBinary('LINESTRING(1 2,3 4)'::geometry)
        let geom = ls0();
        let mut buf = Vec::new();
        write_line_string_as_wkb(&mut buf, &geom, &WkbWriteOptions::default()).unwrap();
        assert_eq!(
            buf,
            hex::decode(
                "010200000002000000000000000000f03f000000000000004000000000000008400000000000001040"
            )
            .unwrap()
        );
    }

    #[test]
    fn empty_line_string_is_zero_count() {
        let geom = LineString::empty(Dimension::XY);
        let mut buf = Vec::new();
        write_line_string_as_wkb(&mut buf, &geom, &WkbWriteOptions::default()).unwrap();
        assert_eq!(buf, hex::decode("010200000000000000").unwrap());
    }
}
