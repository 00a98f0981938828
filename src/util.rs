use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::error::{WkbError, WkbResult};
use crate::wkb::Endianness;

/// A bounds-checked reading position over an input slice.
///
/// Every read maps running off the end to
/// [`WkbError::InsufficientData`] instead of panicking.
#[derive(Debug)]
pub(crate) struct ByteCursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Bytes consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Check that `needed` more bytes are available without consuming them.
    pub fn ensure(&self, needed: u64) -> WkbResult<()> {
        if needed > self.remaining() as u64 {
            return Err(WkbError::InsufficientData {
                needed: (needed - self.remaining() as u64) as usize,
                remaining: self.remaining(),
            });
        }
        Ok(())
    }

    pub fn read_u8(&mut self) -> WkbResult<u8> {
        self.ensure(1)?;
        let value = self.buf[self.pos];
        self.pos += 1;
        Ok(value)
    }

    pub fn read_u32(&mut self, byte_order: Endianness) -> WkbResult<u32> {
        self.ensure(4)?;
        let value = match byte_order {
            Endianness::BigEndian => BigEndian::read_u32(&self.buf[self.pos..]),
            Endianness::LittleEndian => LittleEndian::read_u32(&self.buf[self.pos..]),
        };
        self.pos += 4;
        Ok(value)
    }

    pub fn read_i32(&mut self, byte_order: Endianness) -> WkbResult<i32> {
        Ok(self.read_u32(byte_order)? as i32)
    }

    pub fn read_f64(&mut self, byte_order: Endianness) -> WkbResult<f64> {
        self.ensure(8)?;
        let value = match byte_order {
            Endianness::BigEndian => BigEndian::read_f64(&self.buf[self.pos..]),
            Endianness::LittleEndian => LittleEndian::read_f64(&self.buf[self.pos..]),
        };
        self.pos += 8;
        Ok(value)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn eof_reports_missing_bytes() {
        let mut cursor = ByteCursor::new(&[0u8; 3]);
        cursor.read_u8().unwrap();
        let err = cursor.read_u32(Endianness::LittleEndian).unwrap_err();
        match err {
            WkbError::InsufficientData { needed, remaining } => {
                assert_eq!(needed, 2);
                assert_eq!(remaining, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn reads_both_orders() {
        let buf = [0x00, 0x00, 0x00, 0x01, 0x01, 0x00, 0x00, 0x00];
        let mut cursor = ByteCursor::new(&buf);
        assert_eq!(cursor.read_u32(Endianness::BigEndian).unwrap(), 1);
        assert_eq!(cursor.read_u32(Endianness::LittleEndian).unwrap(), 1);
        assert_eq!(cursor.position(), 8);
        assert_eq!(cursor.remaining(), 0);
    }
}
