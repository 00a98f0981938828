//! Parse WKB and EWKB records into owned geometries.
//!
//! Parsing is eager: one pass over the input builds the value and reports the
//! number of bytes consumed, so records can be read back to back from a
//! larger buffer.

pub use geometry::{read_geometry, read_geometry_srid, read_srid};
pub use geometrycollection::read_geometry_collection;
pub use linestring::read_line_string;
pub use multilinestring::read_multi_line_string;
pub use multipoint::read_multi_point;
pub use multipolygon::read_multi_polygon;
pub use point::read_point;
pub use polygon::read_polygon;

mod geometry;
mod geometrycollection;
mod linestring;
mod multilinestring;
mod multipoint;
mod multipolygon;
mod point;
mod polygon;

use crate::error::{WkbError, WkbResult};
use crate::geo_traits::Dimension;
use crate::geometry::{Coord, GeometryKind};
use crate::util::ByteCursor;
use crate::wkb::common::{EWKB_FLAG_MASK, EWKB_M_FLAG, EWKB_SRID_FLAG, EWKB_Z_FLAG};
use crate::wkb::{Endianness, WkbType};

/// The decoded front matter of one record: marker byte, type word and, for
/// EWKB, the optional SRID.
#[derive(Debug, Clone, Copy)]
pub(crate) struct WkbHeader {
    pub byte_order: Endianness,
    pub kind: GeometryKind,
    pub dim: Dimension,
    pub srid: Option<i32>,
}

/// ISO and EWKB type words are distinguished by the high flag bits; a word
/// without any flag set is read as an ISO code.
pub(crate) fn read_header(cursor: &mut ByteCursor) -> WkbResult<WkbHeader> {
    let marker = cursor.read_u8()?;
    let byte_order = Endianness::try_from(marker)
        .map_err(|_| WkbError::General(format!("invalid byte order marker {marker:#04x}")))?;
    let code = cursor.read_u32(byte_order)?;
    if code & EWKB_FLAG_MASK != 0 {
        let base = code & !EWKB_FLAG_MASK;
        let kind = u8::try_from(base)
            .ok()
            .and_then(|b| GeometryKind::try_from(b).ok())
            .ok_or_else(|| WkbError::General(format!("unsupported geometry type code {base}")))?;
        let dim = Dimension::from_zm(code & EWKB_Z_FLAG != 0, code & EWKB_M_FLAG != 0);
        let srid = if code & EWKB_SRID_FLAG != 0 {
            Some(cursor.read_i32(byte_order)?)
        } else {
            None
        };
        Ok(WkbHeader {
            byte_order,
            kind,
            dim,
            srid,
        })
    } else {
        let wkb_type = WkbType::try_from(code)
            .map_err(|_| WkbError::General(format!("unsupported geometry type code {code}")))?;
        Ok(WkbHeader {
            byte_order,
            kind: wkb_type.kind(),
            dim: wkb_type.dimension(),
            srid: None,
        })
    }
}

/// Read the header of a nested record and check it against the container.
pub(crate) fn read_child_header(
    cursor: &mut ByteCursor,
    expected: GeometryKind,
    parent_dim: Dimension,
) -> WkbResult<WkbHeader> {
    let header = read_header(cursor)?;
    if header.kind != expected {
        return Err(WkbError::ShapeMismatch {
            expected,
            found: header.kind,
        });
    }
    if header.dim != parent_dim {
        return Err(WkbError::General(format!(
            "nested record dimension {} differs from container dimension {}",
            header.dim, parent_dim
        )));
    }
    Ok(header)
}

/// Read one coordinate's ordinates in X, Y, Z, M order.
pub(crate) fn read_coord(
    cursor: &mut ByteCursor,
    byte_order: Endianness,
    dim: Dimension,
) -> WkbResult<Coord> {
    let x = cursor.read_f64(byte_order)?;
    let y = cursor.read_f64(byte_order)?;
    let z = if dim.has_z() {
        Some(cursor.read_f64(byte_order)?)
    } else {
        None
    };
    let m = if dim.has_m() {
        Some(cursor.read_f64(byte_order)?)
    } else {
        None
    };
    Ok(Coord { x, y, z, m })
}

/// Guard a declared element count against the bytes actually remaining, so a
/// corrupt count can't drive a huge allocation.
pub(crate) fn ensure_count(
    cursor: &ByteCursor,
    count: usize,
    min_item_size: usize,
) -> WkbResult<()> {
    cursor.ensure(count as u64 * min_item_size as u64)
}
