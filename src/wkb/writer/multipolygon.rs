use std::io::Write;

use crate::error::WkbResult;
use crate::geo_traits::MultiPolygonTrait;
use crate::geometry::GeometryKind;
use crate::wkb::writer::{
    count_u32, polygon_wkb_size, write_header, write_polygon_as_wkb, write_u32, WkbWriteOptions,
};

/// The number of bytes this multi polygon occupies as a WKB record.
pub fn multi_polygon_wkb_size(
    geom: &impl MultiPolygonTrait<T = f64>,
    options: &WkbWriteOptions,
) -> usize {
    let child = options.child();
    let mut size = options.header_size() + 4;
    for polygon in geom.polygons() {
        size += polygon_wkb_size(&polygon, &child);
    }
    size
}

/// Write a MultiPolygon geometry to a Writer.
pub fn write_multi_polygon_as_wkb<W: Write>(
    mut writer: W,
    geom: &impl MultiPolygonTrait<T = f64>,
    options: &WkbWriteOptions,
) -> WkbResult<()> {
    write_header(&mut writer, GeometryKind::MultiPolygon, geom.dim(), options)?;
    write_u32(
        &mut writer,
        count_u32(geom.num_polygons())?,
        options.byte_order,
    )?;
    let child = options.child();
    for polygon in geom.polygons() {
        write_polygon_as_wkb(&mut writer, &polygon, &child)?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::multipolygon::mpoly0;

    #[test]
    fn size_matches_output() {
        let options = WkbWriteOptions::default();
        let mut buf = Vec::new();
        write_multi_polygon_as_wkb(&mut buf, &mpoly0(), &options).unwrap();
        assert_eq!(buf.len(), multi_polygon_wkb_size(&mpoly0(), &options));
    }
}
