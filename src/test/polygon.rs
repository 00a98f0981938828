use crate::geo_traits::Dimension;
use crate::geometry::{Coord, LineString, Polygon};

pub(crate) fn poly0() -> Polygon {
    let exterior = LineString::new(
        vec![
            Coord::xy(0., 0.),
            Coord::xy(4., 0.),
            Coord::xy(4., 4.),
            Coord::xy(0., 4.),
            Coord::xy(0., 0.),
        ],
        Dimension::XY,
    );
    Polygon::new(vec![exterior], Dimension::XY)
}

pub(crate) fn poly1() -> Polygon {
    let exterior = LineString::new(
        vec![
            Coord::xy(-10., -10.),
            Coord::xy(10., -10.),
            Coord::xy(10., 10.),
            Coord::xy(-10., 10.),
            Coord::xy(-10., -10.),
        ],
        Dimension::XY,
    );
    let hole = LineString::new(
        vec![
            Coord::xy(-1., -1.),
            Coord::xy(1., -1.),
            Coord::xy(1., 1.),
            Coord::xy(-1., 1.),
            Coord::xy(-1., -1.),
        ],
        Dimension::XY,
    );
    Polygon::new(vec![exterior, hole], Dimension::XY)
}

pub(crate) fn poly1_xyz() -> Polygon {
    let exterior = LineString::new(
        vec![
            Coord::xyz(-10., -10., 1.),
            Coord::xyz(10., -10., 2.),
            Coord::xyz(10., 10., 3.),
            Coord::xyz(-10., 10., 4.),
            Coord::xyz(-10., -10., 1.),
        ],
        Dimension::XYZ,
    );
    let hole = LineString::new(
        vec![
            Coord::xyz(-1., -1., 5.),
            Coord::xyz(1., -1., 6.),
            Coord::xyz(1., 1., 7.),
            Coord::xyz(-1., 1., 8.),
            Coord::xyz(-1., -1., 5.),
        ],
        Dimension::XYZ,
    );
    Polygon::new(vec![exterior, hole], Dimension::XYZ)
}
