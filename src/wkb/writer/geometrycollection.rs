use std::io::Write;

use crate::error::WkbResult;
use crate::geo_traits::GeometryCollectionTrait;
use crate::geometry::GeometryKind;
use crate::wkb::writer::{
    count_u32, geometry_wkb_size, write_geometry_as_wkb, write_header, write_u32, WkbWriteOptions,
};

/// The number of bytes this geometry collection occupies as a WKB record.
pub fn geometry_collection_wkb_size(
    geom: &impl GeometryCollectionTrait<T = f64>,
    options: &WkbWriteOptions,
) -> usize {
    let child = options.child();
    let mut size = options.header_size() + 4;
    for item in geom.geometries() {
        size += geometry_wkb_size(&item, &child);
    }
    size
}

/// Write a GeometryCollection to a Writer.
///
/// Each member is a complete, self-contained record.
pub fn write_geometry_collection_as_wkb<W: Write>(
    mut writer: W,
    geom: &impl GeometryCollectionTrait<T = f64>,
    options: &WkbWriteOptions,
) -> WkbResult<()> {
    write_header(
        &mut writer,
        GeometryKind::GeometryCollection,
        geom.dim(),
        options,
    )?;
    write_u32(
        &mut writer,
        count_u32(geom.num_geometries())?,
        options.byte_order,
    )?;
    let child = options.child();
    for item in geom.geometries() {
        // The dyn sink caps monomorphization depth for collections nested in
        // collections (E0275 otherwise).
        write_geometry_as_wkb(&mut writer as &mut dyn Write, &item, &child)?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geo_traits::Dimension;
    use crate::geometry::GeometryCollection;
    use crate::test::geometrycollection::gc0;

    #[test]
    fn size_matches_output() {
        let options = WkbWriteOptions::default();
        let mut buf = Vec::new();
        write_geometry_collection_as_wkb(&mut buf, &gc0(), &options).unwrap();
        assert_eq!(buf.len(), geometry_collection_wkb_size(&gc0(), &options));
    }

    #[test]
    fn empty_collection_is_zero_count() {
        let geom = GeometryCollection::empty(Dimension::XY);
        let mut buf = Vec::new();
        write_geometry_collection_as_wkb(&mut buf, &geom, &WkbWriteOptions::default()).unwrap();
        assert_eq!(buf, hex::decode("010700000000000000").unwrap());
    }
}
