use crate::geo_traits::Dimension;
use crate::geometry::{Coord, Point};

pub(crate) fn p0() -> Point {
    Point::new(Coord::xy(1., 2.))
}

pub(crate) fn p1() -> Point {
    Point::new(Coord::xy(3., 4.))
}

pub(crate) fn p2() -> Point {
    Point::empty(Dimension::XY)
}

pub(crate) fn p0_xyzm() -> Point {
    Point::new(Coord::xyzm(1., 2., 10., 300.))
}
