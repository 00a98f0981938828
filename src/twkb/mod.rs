//! The compact TWKB codec: varint counts, zigzag deltas and scaled integer
//! coordinates.
//!
//! Coordinates are multiplied by a per-axis power of ten, rounded half away
//! from zero, and stored as zigzag varints of the difference from the
//! previous coordinate on the same axis. The delta accumulator runs through
//! rings and multi members alike; only collection members restart it, since
//! they are complete records of their own.

pub use reader::{
    read_geometry, read_geometry_collection, read_line_string, read_multi_line_string,
    read_multi_point, read_multi_polygon, read_point, read_polygon, read_record, Envelope,
    TwkbRecord,
};
pub use writer::{
    to_twkb, write_geometry_as_twkb, write_geometry_collection_as_twkb, write_geometry_to_slice,
    write_line_string_as_twkb, write_multi_line_string_as_twkb, write_multi_point_as_twkb,
    write_multi_polygon_as_twkb, write_point_as_twkb, write_polygon_as_twkb, TwkbWriteOptions,
};

mod header;
pub mod reader;
mod varint;
pub mod writer;

use crate::error::{WkbError, WkbResult};

/// One running previous-value register per axis. Deltas on axis `n` are
/// always taken against the last value seen on axis `n`, wherever in the
/// record it occurred.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct DeltaState {
    prev: [i64; 4],
}

impl DeltaState {
    /// Advance axis `n` to `scaled` and return the delta to encode.
    fn advance(&mut self, n: usize, scaled: i64) -> i64 {
        let delta = scaled.wrapping_sub(self.prev[n]);
        self.prev[n] = scaled;
        delta
    }

    /// Apply a decoded delta to axis `n` and return the absolute value.
    fn apply(&mut self, n: usize, delta: i64) -> i64 {
        let scaled = self.prev[n].wrapping_add(delta);
        self.prev[n] = scaled;
        scaled
    }
}

/// Largest magnitude a scaled ordinate may take. The difference of any two
/// in-range values zigzags into 63 bits, the widest varint the reader
/// accepts.
pub(crate) const MAX_SCALED: i64 = (1 << 61) - 1;

/// Scale an ordinate for encoding, rejecting non-finite values and values
/// whose grid cell lies outside [`MAX_SCALED`].
pub(crate) fn scale_checked(value: f64, precision: i8) -> WkbResult<i64> {
    let scaled = scale(value, precision);
    if !value.is_finite() || scaled > MAX_SCALED || scaled < -MAX_SCALED {
        return Err(WkbError::General(format!(
            "ordinate {value} is out of range at precision {precision}"
        )));
    }
    Ok(scaled)
}

/// Scale an ordinate to the storage integer grid. Rounding is half away
/// from zero.
pub(crate) fn scale(value: f64, precision: i8) -> i64 {
    if precision >= 0 {
        (value * 10f64.powi(precision as i32)).round() as i64
    } else {
        (value / 10f64.powi(-(precision as i32))).round() as i64
    }
}

/// Map a storage integer back to an ordinate.
pub(crate) fn descale(value: i64, precision: i8) -> f64 {
    if precision >= 0 {
        value as f64 / 10f64.powi(precision as i32)
    } else {
        value as f64 * 10f64.powi(-(precision as i32))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rounding_is_half_away_from_zero() {
        assert_eq!(scale(0.5, 0), 1);
        assert_eq!(scale(-0.5, 0), -1);
        assert_eq!(scale(2.5, 0), 3);
        assert_eq!(scale(1.25, 1), 13);
    }

    #[test]
    fn negative_precision_scales_up() {
        assert_eq!(scale(12345.0, -2), 123);
        assert_eq!(descale(123, -2), 12300.0);
    }

    #[test]
    fn checked_scaling_bounds_the_grid() {
        assert_eq!(scale_checked(1e18, 0).unwrap(), 1_000_000_000_000_000_000);
        assert!(scale_checked(1e30, 0).is_err());
        assert!(scale_checked(1e12, 7).is_err());
        assert!(scale_checked(f64::NAN, 0).is_err());
        assert!(scale_checked(f64::INFINITY, 0).is_err());
    }

    #[test]
    fn accumulators_are_independent_per_axis() {
        let mut state = DeltaState::default();
        assert_eq!(state.advance(0, 10), 10);
        assert_eq!(state.advance(1, 100), 100);
        assert_eq!(state.advance(0, 15), 5);
        assert_eq!(state.advance(1, 90), -10);

        let mut decode = DeltaState::default();
        assert_eq!(decode.apply(0, 10), 10);
        assert_eq!(decode.apply(1, 100), 100);
        assert_eq!(decode.apply(0, 5), 15);
        assert_eq!(decode.apply(1, -10), 90);
    }
}
