use std::io::Write;

use crate::error::WkbResult;
use crate::geo_traits::MultiLineStringTrait;
use crate::geometry::GeometryKind;
use crate::wkb::writer::{
    count_u32, line_string_wkb_size, write_header, write_line_string_as_wkb, write_u32,
    WkbWriteOptions,
};

/// The number of bytes this multi line string occupies as a WKB record.
pub fn multi_line_string_wkb_size(
    geom: &impl MultiLineStringTrait<T = f64>,
    options: &WkbWriteOptions,
) -> usize {
    let child = options.child();
    let mut size = options.header_size() + 4;
    for line in geom.lines() {
        size += line_string_wkb_size(&line, &child);
    }
    size
}

/// Write a MultiLineString geometry to a Writer.
pub fn write_multi_line_string_as_wkb<W: Write>(
    mut writer: W,
    geom: &impl MultiLineStringTrait<T = f64>,
    options: &WkbWriteOptions,
) -> WkbResult<()> {
    write_header(
        &mut writer,
        GeometryKind::MultiLineString,
        geom.dim(),
        options,
    )?;
    write_u32(&mut writer, count_u32(geom.num_lines())?, options.byte_order)?;
    let child = options.child();
    for line in geom.lines() {
        write_line_string_as_wkb(&mut writer, &line, &child)?;
    }
    Ok(())
}
