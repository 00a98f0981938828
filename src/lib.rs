//! Encode and decode geometries as WKB, EWKB and TWKB.
//!
//! [`wkb`] covers the fixed-width ISO encoding and the PostGIS EWKB variant
//! with its flag bits and optional SRID; the reader tells the two apart on
//! its own. [`twkb`] covers the compact varint encoding with per-axis
//! precisions, delta-coded coordinates and optional bounding box, size and
//! id-list extras.
//!
//! Writers accept anything implementing the [`geo_traits`] access traits,
//! including the [`geo`] types; readers produce the owned types in
//! [`geometry`], which carry Z and M ordinates through both codecs.
//!
//! ```
//! use wkbkit::geometry::{Coord, Geometry, Point};
//! use wkbkit::wkb::{self, WkbWriteOptions};
//!
//! # fn main() -> wkbkit::WkbResult<()> {
//! let point: Geometry = Point::new(Coord::xy(1.0, 2.0)).into();
//! let buf = wkb::to_wkb(&point, &WkbWriteOptions::default())?;
//! let (back, bytes_read) = wkb::read_geometry(&buf)?;
//! assert_eq!(back, point);
//! assert_eq!(bytes_read, buf.len());
//! # Ok(())
//! # }
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub use error::{WkbError, WkbResult};

pub mod error;
pub mod geo_traits;
pub mod geometry;
#[cfg(test)]
pub(crate) mod test;
pub mod twkb;
mod util;
pub mod wkb;
