use std::io::Write;

use crate::error::WkbResult;
use crate::geo_traits::MultiPointTrait;
use crate::geometry::GeometryKind;
use crate::wkb::writer::{
    count_u32, point_wkb_size, write_header, write_point_as_wkb, write_u32, WkbWriteOptions,
};

/// The number of bytes this multi point occupies as a WKB record.
pub fn multi_point_wkb_size(
    geom: &impl MultiPointTrait<T = f64>,
    options: &WkbWriteOptions,
) -> usize {
    let child = options.child();
    let mut size = options.header_size() + 4;
    for point in geom.points() {
        size += point_wkb_size(&point, &child);
    }
    size
}

/// Write a MultiPoint geometry to a Writer.
///
/// Each member is a complete point record with its own marker and type word.
pub fn write_multi_point_as_wkb<W: Write>(
    mut writer: W,
    geom: &impl MultiPointTrait<T = f64>,
    options: &WkbWriteOptions,
) -> WkbResult<()> {
    write_header(&mut writer, GeometryKind::MultiPoint, geom.dim(), options)?;
    write_u32(&mut writer, count_u32(geom.num_points())?, options.byte_order)?;
    let child = options.child();
    for point in geom.points() {
        write_point_as_wkb(&mut writer, &point, &child)?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::multipoint::mp0;

    #[test]
    fn known_bytes_le() {
        // SELECT ST_AsBinary('MULTIPOINT(1 2,3 4)'::geometry)
        let mut buf = Vec::new();
        write_multi_point_as_wkb(&mut buf, &mp0(), &WkbWriteOptions::default()).unwrap();
        assert_eq!(
            buf,
            hex::decode(concat!(
                "010400000002000000",
                "0101000000000000000000f03f0000000000000040",
                "010100000000000000000008400000000000001040"
            ))
            .unwrap()
        );
        assert_eq!(
            buf.len(),
            multi_point_wkb_size(&mp0(), &WkbWriteOptions::default())
        );
    }
}
