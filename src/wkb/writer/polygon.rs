use std::io::Write;

use crate::error::WkbResult;
use crate::geo_traits::{Dimension, LineStringTrait, PolygonTrait};
use crate::geometry::GeometryKind;
use crate::wkb::writer::{count_u32, write_coord, write_header, write_u32, WkbWriteOptions};
use crate::wkb::Endianness;

fn ring_wkb_size(ring: &impl LineStringTrait<T = f64>, dim: Dimension) -> usize {
    4 + ring.num_coords() * dim.size() * 8
}

/// A ring is a bare count plus coordinates, with no nested record header.
pub(crate) fn write_ring<W: Write>(
    writer: &mut W,
    ring: &impl LineStringTrait<T = f64>,
    dim: Dimension,
    byte_order: Endianness,
) -> WkbResult<()> {
    write_u32(writer, count_u32(ring.num_coords())?, byte_order)?;
    for coord in ring.coords() {
        write_coord(writer, &coord, dim, byte_order)?;
    }
    Ok(())
}

/// The number of bytes this polygon occupies as a WKB record.
pub fn polygon_wkb_size(geom: &impl PolygonTrait<T = f64>, options: &WkbWriteOptions) -> usize {
    let dim = geom.dim();
    let mut size = options.header_size() + 4;
    if let Some(ext) = geom.exterior() {
        size += ring_wkb_size(&ext, dim);
    }
    for ring in geom.interiors() {
        size += ring_wkb_size(&ring, dim);
    }
    size
}

/// Write a Polygon geometry to a Writer.
///
/// Rings are transcoded as given; closure is not validated or synthesized.
pub fn write_polygon_as_wkb<W: Write>(
    mut writer: W,
    geom: &impl PolygonTrait<T = f64>,
    options: &WkbWriteOptions,
) -> WkbResult<()> {
    let dim = geom.dim();
    write_header(&mut writer, GeometryKind::Polygon, dim, options)?;
    let num_rings = match geom.exterior() {
        Some(_) => 1 + geom.num_interiors(),
        None => 0,
    };
    write_u32(&mut writer, count_u32(num_rings)?, options.byte_order)?;
    if let Some(ext) = geom.exterior() {
        write_ring(&mut writer, &ext, dim, options.byte_order)?;
    }
    for ring in geom.interiors() {
        write_ring(&mut writer, &ring, dim, options.byte_order)?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::Polygon;
    use crate::test::polygon::{poly0, poly1};

    #[test]
    fn size_matches_output() {
        let options = WkbWriteOptions::default();
        for geom in [poly0(), poly1()] {
            let mut buf = Vec::new();
            write_polygon_as_wkb(&mut buf, &geom, &options).unwrap();
            assert_eq!(buf.len(), polygon_wkb_size(&geom, &options));
        }
    }

    #[test]
    fn empty_polygon_is_zero_rings() {
        let geom = Polygon::empty(Dimension::XY);
        let mut buf = Vec::new();
        write_polygon_as_wkb(&mut buf, &geom, &WkbWriteOptions::default()).unwrap();
        assert_eq!(buf, hex::decode("010300000000000000").unwrap());
    }
}
