//! Write geometries to WKB and EWKB records.

pub use geometry::{geometry_wkb_size, to_wkb, write_geometry_as_wkb, write_geometry_to_slice};
pub use geometrycollection::{geometry_collection_wkb_size, write_geometry_collection_as_wkb};
pub use linestring::{line_string_wkb_size, write_line_string_as_wkb};
pub use multilinestring::{multi_line_string_wkb_size, write_multi_line_string_as_wkb};
pub use multipoint::{multi_point_wkb_size, write_multi_point_as_wkb};
pub use multipolygon::{multi_polygon_wkb_size, write_multi_polygon_as_wkb};
pub use point::{point_wkb_size, write_point_as_wkb};
pub use polygon::{polygon_wkb_size, write_polygon_as_wkb};

mod geometry;
mod geometrycollection;
mod linestring;
mod multilinestring;
mod multipoint;
mod multipolygon;
mod point;
mod polygon;

use std::io::Write;

use byteorder::{BigEndian, LittleEndian, WriteBytesExt};

use crate::error::{WkbError, WkbResult};
use crate::geo_traits::{CoordTrait, Dimension};
use crate::geometry::GeometryKind;
use crate::wkb::common::{EWKB_M_FLAG, EWKB_SRID_FLAG, EWKB_Z_FLAG};
use crate::wkb::{Endianness, WkbType};

/// Which header layout a record is written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WkbFlavor {
    /// ISO WKB: kind and dimension combined into one type code.
    Iso,
    /// PostGIS-extended WKB: dimension flag bits and an optional SRID.
    Ewkb { srid: Option<i32> },
}

/// Options for writing WKB and EWKB records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WkbWriteOptions {
    pub byte_order: Endianness,
    pub flavor: WkbFlavor,
}

impl Default for WkbWriteOptions {
    fn default() -> Self {
        Self {
            byte_order: Endianness::LittleEndian,
            flavor: WkbFlavor::Iso,
        }
    }
}

impl WkbWriteOptions {
    /// Options for records nested inside this one. The SRID belongs to the
    /// outermost record only.
    pub(crate) fn child(&self) -> Self {
        match self.flavor {
            WkbFlavor::Iso => *self,
            WkbFlavor::Ewkb { .. } => Self {
                byte_order: self.byte_order,
                flavor: WkbFlavor::Ewkb { srid: None },
            },
        }
    }

    /// Marker byte + type word + optional SRID.
    pub(crate) fn header_size(&self) -> usize {
        match self.flavor {
            WkbFlavor::Ewkb { srid: Some(_) } => 9,
            _ => 5,
        }
    }
}

pub(crate) fn write_u32<W: Write>(
    writer: &mut W,
    value: u32,
    byte_order: Endianness,
) -> WkbResult<()> {
    match byte_order {
        Endianness::BigEndian => writer.write_u32::<BigEndian>(value)?,
        Endianness::LittleEndian => writer.write_u32::<LittleEndian>(value)?,
    }
    Ok(())
}

pub(crate) fn write_i32<W: Write>(
    writer: &mut W,
    value: i32,
    byte_order: Endianness,
) -> WkbResult<()> {
    write_u32(writer, value as u32, byte_order)
}

pub(crate) fn write_f64<W: Write>(
    writer: &mut W,
    value: f64,
    byte_order: Endianness,
) -> WkbResult<()> {
    match byte_order {
        Endianness::BigEndian => writer.write_f64::<BigEndian>(value)?,
        Endianness::LittleEndian => writer.write_f64::<LittleEndian>(value)?,
    }
    Ok(())
}

/// Write the marker byte, the type word and, for EWKB with an SRID, the SRID.
pub(crate) fn write_header<W: Write>(
    writer: &mut W,
    kind: GeometryKind,
    dim: Dimension,
    options: &WkbWriteOptions,
) -> WkbResult<()> {
    writer.write_u8(options.byte_order.into())?;
    let code = match options.flavor {
        WkbFlavor::Iso => WkbType::from_parts(kind, dim).into(),
        WkbFlavor::Ewkb { srid } => {
            let mut code = u8::from(kind) as u32;
            if dim.has_z() {
                code |= EWKB_Z_FLAG;
            }
            if dim.has_m() {
                code |= EWKB_M_FLAG;
            }
            if srid.is_some() {
                code |= EWKB_SRID_FLAG;
            }
            code
        }
    };
    write_u32(writer, code, options.byte_order)?;
    if let WkbFlavor::Ewkb { srid: Some(srid) } = options.flavor {
        write_i32(writer, srid, options.byte_order)?;
    }
    Ok(())
}

/// Write the ordinates of one coordinate in X, Y, Z, M order.
pub(crate) fn write_coord<W: Write>(
    writer: &mut W,
    coord: &impl CoordTrait<T = f64>,
    dim: Dimension,
    byte_order: Endianness,
) -> WkbResult<()> {
    for n in 0..dim.size() {
        let value = coord.nth(n).ok_or_else(|| {
            WkbError::UnsupportedDimensionality(format!(
                "coordinate lacks ordinate {n} required by {dim}"
            ))
        })?;
        write_f64(writer, value, byte_order)?;
    }
    Ok(())
}

pub(crate) fn count_u32(len: usize) -> WkbResult<u32> {
    u32::try_from(len).map_err(|_| WkbError::General(format!("{len} items overflow a u32 count")))
}
