//! The fixed-width WKB codec and its EWKB extension.
//!
//! Every record is a 1-byte order marker, a 4-byte type word and a
//! fixed-width body of counts and IEEE-754 doubles. ISO WKB folds the
//! dimension into the type code (+1000 Z, +2000 M, +3000 ZM); EWKB flags it
//! in the high bits and may append an SRID to the header.

pub use common::{Endianness, WkbType, EWKB_M_FLAG, EWKB_SRID_FLAG, EWKB_Z_FLAG};
pub use reader::{
    read_geometry, read_geometry_collection, read_geometry_srid, read_line_string,
    read_multi_line_string, read_multi_point, read_multi_polygon, read_point, read_polygon,
    read_srid,
};
pub use writer::{
    geometry_collection_wkb_size, geometry_wkb_size, line_string_wkb_size,
    multi_line_string_wkb_size, multi_point_wkb_size, multi_polygon_wkb_size, point_wkb_size,
    polygon_wkb_size, to_wkb, write_geometry_as_wkb, write_geometry_collection_as_wkb,
    write_geometry_to_slice, write_line_string_as_wkb, write_multi_line_string_as_wkb,
    write_multi_point_as_wkb, write_multi_polygon_as_wkb, write_point_as_wkb,
    write_polygon_as_wkb, WkbFlavor, WkbWriteOptions,
};

mod common;
pub mod reader;
pub mod writer;
