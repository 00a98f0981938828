use std::io::Write;

use crate::error::{WkbError, WkbResult};
use crate::geo_traits::Dimension;
use crate::geometry::GeometryKind;
use crate::util::ByteCursor;

// Metadata byte flags.
const BBOX_FLAG: u8 = 0x01;
const SIZE_FLAG: u8 = 0x02;
const IDLIST_FLAG: u8 = 0x04;
const EXT_PRECISION_FLAG: u8 = 0x08;
const EMPTY_FLAG: u8 = 0x10;
const HAS_Z_FLAG: u8 = 0x20;
const HAS_M_FLAG: u8 = 0x40;

/// 4-bit zigzag for the XY precision nibble of the type byte.
fn zigzag4(precision: i8) -> u8 {
    (((precision << 1) ^ (precision >> 7)) & 0x0f) as u8
}

fn unzigzag4(nibble: u8) -> i8 {
    ((nibble >> 1) as i8) ^ -((nibble & 1) as i8)
}

/// The decoded front matter of one TWKB record: type byte, metadata byte and
/// the optional extended-precision byte.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TwkbHeader {
    pub kind: GeometryKind,
    pub dim: Dimension,
    pub xy_precision: i8,
    pub z_precision: u8,
    pub m_precision: u8,
    pub has_bbox: bool,
    pub has_size: bool,
    pub has_ids: bool,
    pub is_empty: bool,
}

impl TwkbHeader {
    pub fn read(cursor: &mut ByteCursor) -> WkbResult<Self> {
        let type_byte = cursor.read_u8()?;
        let kind = GeometryKind::try_from(type_byte & 0x0f).map_err(|_| {
            WkbError::General(format!(
                "unsupported geometry kind {} in type byte",
                type_byte & 0x0f
            ))
        })?;
        let xy_precision = unzigzag4(type_byte >> 4);

        let meta = cursor.read_u8()?;
        let dim = Dimension::from_zm(meta & HAS_Z_FLAG != 0, meta & HAS_M_FLAG != 0);
        let (z_precision, m_precision) = if meta & EXT_PRECISION_FLAG != 0 {
            let ext = cursor.read_u8()?;
            (ext & 0x07, (ext >> 3) & 0x07)
        } else {
            (0, 0)
        };

        Ok(Self {
            kind,
            dim,
            xy_precision,
            z_precision,
            m_precision,
            has_bbox: meta & BBOX_FLAG != 0,
            has_size: meta & SIZE_FLAG != 0,
            has_ids: meta & IDLIST_FLAG != 0,
            is_empty: meta & EMPTY_FLAG != 0,
        })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> WkbResult<()> {
        let type_byte = u8::from(self.kind) | (zigzag4(self.xy_precision) << 4);

        let extended = self.dim.has_z() || self.dim.has_m();
        let mut meta = 0u8;
        if self.has_bbox {
            meta |= BBOX_FLAG;
        }
        if self.has_size {
            meta |= SIZE_FLAG;
        }
        if self.has_ids {
            meta |= IDLIST_FLAG;
        }
        if extended {
            meta |= EXT_PRECISION_FLAG;
        }
        if self.is_empty {
            meta |= EMPTY_FLAG;
        }
        if self.dim.has_z() {
            meta |= HAS_Z_FLAG;
        }
        if self.dim.has_m() {
            meta |= HAS_M_FLAG;
        }

        writer.write_all(&[type_byte, meta])?;
        if extended {
            writer.write_all(&[(self.z_precision & 0x07) | ((self.m_precision & 0x07) << 3)])?;
        }
        Ok(())
    }

    /// Per-axis precisions in storage order, absent axes skipped.
    pub fn precisions(&self) -> [i8; 4] {
        let third = if self.dim.has_z() {
            self.z_precision as i8
        } else {
            self.m_precision as i8
        };
        [
            self.xy_precision,
            self.xy_precision,
            third,
            self.m_precision as i8,
        ]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn precision_nibble_zigzag() {
        assert_eq!(zigzag4(0), 0);
        assert_eq!(zigzag4(7), 14);
        assert_eq!(zigzag4(-1), 1);
        assert_eq!(zigzag4(-7), 13);
        for precision in -7i8..=7 {
            assert_eq!(unzigzag4(zigzag4(precision)), precision);
        }
    }

    #[test]
    fn header_round_trip() {
        let header = TwkbHeader {
            kind: GeometryKind::MultiLineString,
            dim: Dimension::XYZM,
            xy_precision: -3,
            z_precision: 5,
            m_precision: 2,
            has_bbox: true,
            has_size: true,
            has_ids: true,
            is_empty: false,
        };
        let mut buf = Vec::new();
        header.write(&mut buf).unwrap();
        assert_eq!(buf.len(), 3);

        let mut cursor = ByteCursor::new(&buf);
        let back = TwkbHeader::read(&mut cursor).unwrap();
        assert_eq!(back.kind, header.kind);
        assert_eq!(back.dim, header.dim);
        assert_eq!(back.xy_precision, header.xy_precision);
        assert_eq!(back.z_precision, header.z_precision);
        assert_eq!(back.m_precision, header.m_precision);
        assert!(back.has_bbox && back.has_size && back.has_ids);
        assert!(!back.is_empty);
    }

    #[test]
    fn two_dimensional_header_is_two_bytes() {
        let header = TwkbHeader {
            kind: GeometryKind::Point,
            dim: Dimension::XY,
            xy_precision: 7,
            z_precision: 0,
            m_precision: 0,
            has_bbox: false,
            has_size: false,
            has_ids: false,
            is_empty: false,
        };
        let mut buf = Vec::new();
        header.write(&mut buf).unwrap();
        assert_eq!(buf, vec![0xE1, 0x00]);
    }

    #[test]
    fn kind_zero_is_rejected() {
        let mut cursor = ByteCursor::new(&[0x00, 0x00]);
        assert!(matches!(
            TwkbHeader::read(&mut cursor).unwrap_err(),
            WkbError::General(_)
        ));
    }
}
