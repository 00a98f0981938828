use crate::geo_traits::Dimension;
use crate::geometry::{Coord, LineString};

pub(crate) fn ls0() -> LineString {
    LineString::new(vec![Coord::xy(1., 2.), Coord::xy(3., 4.)], Dimension::XY)
}

pub(crate) fn ls0_xyz() -> LineString {
    LineString::new(
        vec![Coord::xyz(1., 2., 10.), Coord::xyz(3., 4., 11.)],
        Dimension::XYZ,
    )
}

pub(crate) fn ls0_xym() -> LineString {
    LineString::new(
        vec![Coord::xym(1., 2., 5.), Coord::xym(3., 4., 6.)],
        Dimension::XYM,
    )
}
