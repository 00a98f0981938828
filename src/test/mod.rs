//! Shared geometry fixtures. Every coordinate sits on the integer grid so
//! the variable-precision codec round-trips them exactly at precision zero.

pub(crate) mod geometrycollection;
pub(crate) mod linestring;
pub(crate) mod multilinestring;
pub(crate) mod point;
pub(crate) mod polygon;
pub(crate) mod properties;
