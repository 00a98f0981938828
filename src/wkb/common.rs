use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::geo_traits::Dimension;
use crate::geometry::GeometryKind;

/// Byte order of a WKB record, as encoded in the leading marker byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum Endianness {
    BigEndian = 0,
    LittleEndian = 1,
}

/// EWKB type-word flag: a Z ordinate per coordinate.
pub const EWKB_Z_FLAG: u32 = 0x8000_0000;
/// EWKB type-word flag: an M ordinate per coordinate.
pub const EWKB_M_FLAG: u32 = 0x4000_0000;
/// EWKB type-word flag: a 4-byte SRID follows the type word.
pub const EWKB_SRID_FLAG: u32 = 0x2000_0000;

pub(crate) const EWKB_FLAG_MASK: u32 = EWKB_Z_FLAG | EWKB_M_FLAG | EWKB_SRID_FLAG;

/// The ISO WKB geometry type codes: base kind 1-7 plus 1000 for Z, 2000 for
/// M and 3000 for ZM.
///
/// The untyped code 0 is never produced and is rejected on read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(u32)]
pub enum WkbType {
    Point = 1,
    LineString = 2,
    Polygon = 3,
    MultiPoint = 4,
    MultiLineString = 5,
    MultiPolygon = 6,
    GeometryCollection = 7,
    PointZ = 1001,
    LineStringZ = 1002,
    PolygonZ = 1003,
    MultiPointZ = 1004,
    MultiLineStringZ = 1005,
    MultiPolygonZ = 1006,
    GeometryCollectionZ = 1007,
    PointM = 2001,
    LineStringM = 2002,
    PolygonM = 2003,
    MultiPointM = 2004,
    MultiLineStringM = 2005,
    MultiPolygonM = 2006,
    GeometryCollectionM = 2007,
    PointZM = 3001,
    LineStringZM = 3002,
    PolygonZM = 3003,
    MultiPointZM = 3004,
    MultiLineStringZM = 3005,
    MultiPolygonZM = 3006,
    GeometryCollectionZM = 3007,
}

impl WkbType {
    /// The kind and dimension are recoverable arithmetically from any valid
    /// code.
    pub fn from_parts(kind: GeometryKind, dim: Dimension) -> Self {
        let offset = match dim {
            Dimension::XY => 0,
            Dimension::XYZ => 1000,
            Dimension::XYM => 2000,
            Dimension::XYZM => 3000,
        };
        match WkbType::try_from(u8::from(kind) as u32 + offset) {
            Ok(wkb_type) => wkb_type,
            Err(_) => unreachable!("all kind/dimension combinations have a code"),
        }
    }

    pub fn kind(&self) -> GeometryKind {
        let code = u32::from(*self);
        match GeometryKind::try_from((code % 1000) as u8) {
            Ok(kind) => kind,
            Err(_) => unreachable!("all codes have a base kind in 1..=7"),
        }
    }

    pub fn dimension(&self) -> Dimension {
        match u32::from(*self) / 1000 {
            0 => Dimension::XY,
            1 => Dimension::XYZ,
            2 => Dimension::XYM,
            3 => Dimension::XYZM,
            _ => unreachable!("all codes have a dimension offset in 0..=3"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn all_codes_round_trip_kind_and_dimension() {
        for dim in [
            Dimension::XY,
            Dimension::XYZ,
            Dimension::XYM,
            Dimension::XYZM,
        ] {
            for kind_code in 1u8..=7 {
                let kind = GeometryKind::try_from(kind_code).unwrap();
                let wkb_type = WkbType::from_parts(kind, dim);
                assert_eq!(wkb_type.kind(), kind);
                assert_eq!(wkb_type.dimension(), dim);
            }
        }
    }

    #[test]
    fn codes_are_arithmetic() {
        assert_eq!(u32::from(WkbType::Polygon), 3);
        assert_eq!(u32::from(WkbType::PolygonZ), 1003);
        assert_eq!(u32::from(WkbType::PolygonM), 2003);
        assert_eq!(u32::from(WkbType::PolygonZM), 3003);
    }

    #[test]
    fn untyped_and_unknown_codes_are_rejected() {
        assert!(WkbType::try_from(0u32).is_err());
        assert!(WkbType::try_from(8u32).is_err());
        assert!(WkbType::try_from(4001u32).is_err());
    }

    #[test]
    fn byte_order_markers() {
        assert_eq!(Endianness::try_from(0u8).unwrap(), Endianness::BigEndian);
        assert_eq!(Endianness::try_from(1u8).unwrap(), Endianness::LittleEndian);
        assert!(Endianness::try_from(2u8).is_err());
    }
}
