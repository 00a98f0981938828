use crate::geo_traits::Dimension;
use crate::geometry::{Coord, LineString, MultiLineString};

pub(crate) fn mls0() -> MultiLineString {
    MultiLineString::new(
        vec![
            LineString::new(vec![Coord::xy(0., 0.), Coord::xy(1., 1.)], Dimension::XY),
            LineString::new(
                vec![Coord::xy(10., 10.), Coord::xy(12., 10.)],
                Dimension::XY,
            ),
        ],
        Dimension::XY,
    )
}

pub(crate) fn mls0_xyzm() -> MultiLineString {
    MultiLineString::new(
        vec![
            LineString::new(
                vec![
                    Coord::xyzm(0., 0., 1., 100.),
                    Coord::xyzm(1., 1., 2., 101.),
                ],
                Dimension::XYZM,
            ),
            LineString::new(
                vec![
                    Coord::xyzm(10., 10., 3., 102.),
                    Coord::xyzm(12., 10., 4., 103.),
                ],
                Dimension::XYZM,
            ),
        ],
        Dimension::XYZM,
    )
}
