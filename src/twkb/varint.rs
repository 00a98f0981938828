use std::io::Write;

use crate::error::{WkbError, WkbResult};
use crate::util::ByteCursor;

/// Longest accepted varint encoding. Nine bytes cover 63 value bits, enough
/// for any zigzagged delta a sane precision can produce.
pub(crate) const MAX_VARINT_LEN: usize = 9;

/// LEB128-encode `value`: seven value bits per byte, low bits first, high
/// bit set on every byte but the last.
pub(crate) fn write_varint<W: Write>(writer: &mut W, mut value: u64) -> WkbResult<()> {
    loop {
        let byte = (value & 0x7f) as u8;
        value >>= 7;
        if value == 0 {
            writer.write_all(&[byte])?;
            return Ok(());
        }
        writer.write_all(&[byte | 0x80])?;
    }
}

/// Read an LEB128 varint, rejecting encodings that run past
/// [`MAX_VARINT_LEN`] bytes without terminating.
pub(crate) fn read_varint(cursor: &mut ByteCursor) -> WkbResult<u64> {
    let mut value = 0u64;
    for shift in 0..MAX_VARINT_LEN {
        let byte = cursor.read_u8()?;
        value |= ((byte & 0x7f) as u64) << (shift * 7);
        if byte & 0x80 == 0 {
            return Ok(value);
        }
    }
    Err(WkbError::MalformedVarint)
}

/// Map a signed value onto the unsigned varint domain, small magnitudes
/// first: 0, -1, 1, -2, 2, ...
pub(crate) fn zigzag(value: i64) -> u64 {
    ((value << 1) ^ (value >> 63)) as u64
}

pub(crate) fn unzigzag(value: u64) -> i64 {
    ((value >> 1) as i64) ^ -((value & 1) as i64)
}

#[cfg(test)]
mod test {
    use super::*;

    fn encoded_len(value: u64) -> usize {
        let mut buf = Vec::new();
        write_varint(&mut buf, value).unwrap();
        let mut cursor = ByteCursor::new(&buf);
        assert_eq!(read_varint(&mut cursor).unwrap(), value);
        buf.len()
    }

    #[test]
    fn boundary_lengths() {
        assert_eq!(encoded_len(0), 1);
        assert_eq!(encoded_len(127), 1);
        assert_eq!(encoded_len(128), 2);
        assert_eq!(encoded_len(1 << 35), 6);
        assert_eq!(encoded_len(zigzag(-1)), 1);
    }

    #[test]
    fn zigzag_small_magnitudes_first() {
        assert_eq!(zigzag(0), 0);
        assert_eq!(zigzag(-1), 1);
        assert_eq!(zigzag(1), 2);
        assert_eq!(zigzag(-2), 3);
        assert_eq!(zigzag(2), 4);
        for value in [0i64, 1, -1, 12345, -12345, i64::MIN / 4, i64::MAX / 4] {
            assert_eq!(unzigzag(zigzag(value)), value);
        }
    }

    #[test]
    fn unterminated_varint_is_malformed() {
        let buf = [0x80u8; 9];
        let mut cursor = ByteCursor::new(&buf);
        assert!(matches!(
            read_varint(&mut cursor).unwrap_err(),
            WkbError::MalformedVarint
        ));
    }

    #[test]
    fn truncated_varint_is_insufficient_data() {
        let buf = [0x80u8; 3];
        let mut cursor = ByteCursor::new(&buf);
        assert!(matches!(
            read_varint(&mut cursor).unwrap_err(),
            WkbError::InsufficientData { .. }
        ));
    }
}
