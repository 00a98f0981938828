use std::io::Write;

use crate::error::WkbResult;
use crate::geo_traits::PointTrait;
use crate::geometry::GeometryKind;
use crate::wkb::writer::{write_coord, write_f64, write_header, WkbWriteOptions};

/// The number of bytes this point occupies as a WKB record.
pub fn point_wkb_size(geom: &impl PointTrait<T = f64>, options: &WkbWriteOptions) -> usize {
    options.header_size() + geom.dim().size() * 8
}

/// Write a Point geometry to a Writer.
///
/// An empty point is written with every ordinate NaN (the PostGIS
/// convention); the record length never depends on emptiness.
pub fn write_point_as_wkb<W: Write>(
    mut writer: W,
    geom: &impl PointTrait<T = f64>,
    options: &WkbWriteOptions,
) -> WkbResult<()> {
    let dim = geom.dim();
    write_header(&mut writer, GeometryKind::Point, dim, options)?;
    match geom.coord() {
        Some(coord) => write_coord(&mut writer, &coord, dim, options.byte_order)?,
        None => {
            for _ in 0..dim.size() {
                write_f64(&mut writer, f64::NAN, options.byte_order)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::point::{p0, p0_xyzm, p2};
    use crate::wkb::writer::WkbFlavor;
    use crate::wkb::Endianness;

    #[test]
    fn known_bytes_le() {
        // POINT (1 2), little endian, 21 bytes
        let mut buf = Vec::new();
        write_point_as_wkb(&mut buf, &p0(), &WkbWriteOptions::default()).unwrap();
        assert_eq!(buf.len(), 21);
        assert_eq!(
            buf,
            hex::decode("0101000000000000000000f03f0000000000000040").unwrap()
        );
    }

    #[test]
    fn known_bytes_be() {
        let options = WkbWriteOptions {
            byte_order: Endianness::BigEndian,
            flavor: WkbFlavor::Iso,
        };
        let mut buf = Vec::new();
        write_point_as_wkb(&mut buf, &p0(), &options).unwrap();
        assert_eq!(
            buf,
            hex::decode("00000000013ff00000000000004000000000000000").unwrap()
        );
    }

    #[test]
    fn ewkb_srid_header() {
        // SELECT ST_AsEWKB('SRID=4326;POINT(1 2)'::geometry)
        let options = WkbWriteOptions {
            byte_order: Endianness::LittleEndian,
            flavor: WkbFlavor::Ewkb { srid: Some(4326) },
        };
        let mut buf = Vec::new();
        write_point_as_wkb(&mut buf, &p0(), &options).unwrap();
        assert_eq!(
            buf,
            hex::decode("0101000020e6100000000000000000f03f0000000000000040").unwrap()
        );
        assert_eq!(buf.len(), point_wkb_size(&p0(), &options));
    }

    #[test]
    fn zm_sizes() {
        assert_eq!(point_wkb_size(&p0(), &WkbWriteOptions::default()), 21);
        assert_eq!(point_wkb_size(&p0_xyzm(), &WkbWriteOptions::default()), 37);
        assert_eq!(point_wkb_size(&p2(), &WkbWriteOptions::default()), 21);
    }
}
