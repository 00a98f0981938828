use crate::geo_traits::{CoordTrait, Dimension};

/// A single coordinate tuple with optional Z and M ordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coord {
    pub x: f64,
    pub y: f64,
    pub z: Option<f64>,
    pub m: Option<f64>,
}

impl Coord {
    pub fn xy(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            z: None,
            m: None,
        }
    }

    pub fn xyz(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z: Some(z),
            m: None,
        }
    }

    pub fn xym(x: f64, y: f64, m: f64) -> Self {
        Self {
            x,
            y,
            z: None,
            m: Some(m),
        }
    }

    pub fn xyzm(x: f64, y: f64, z: f64, m: f64) -> Self {
        Self {
            x,
            y,
            z: Some(z),
            m: Some(m),
        }
    }

    pub fn dimension(&self) -> Dimension {
        Dimension::from_zm(self.z.is_some(), self.m.is_some())
    }
}

impl CoordTrait for Coord {
    type T = f64;

    fn dim(&self) -> Dimension {
        self.dimension()
    }

    fn nth_unchecked(&self, n: usize) -> Self::T {
        ordinate(self, n)
    }

    fn x(&self) -> Self::T {
        self.x
    }

    fn y(&self) -> Self::T {
        self.y
    }
}

impl CoordTrait for &Coord {
    type T = f64;

    fn dim(&self) -> Dimension {
        self.dimension()
    }

    fn nth_unchecked(&self, n: usize) -> Self::T {
        ordinate(self, n)
    }

    fn x(&self) -> Self::T {
        self.x
    }

    fn y(&self) -> Self::T {
        self.y
    }
}

fn ordinate(coord: &Coord, n: usize) -> f64 {
    match n {
        0 => coord.x,
        1 => coord.y,
        2 => match (coord.z, coord.m) {
            (Some(z), _) => z,
            (None, Some(m)) => m,
            (None, None) => panic!("coord has no third ordinate"),
        },
        3 => match (coord.z, coord.m) {
            (Some(_), Some(m)) => m,
            _ => panic!("coord has no fourth ordinate"),
        },
        n => panic!("ordinate index {n} out of range"),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ordinate_order_skips_absent_axes() {
        let xym = Coord::xym(1.0, 2.0, 9.0);
        assert_eq!(xym.dimension(), Dimension::XYM);
        assert_eq!(xym.nth_unchecked(2), 9.0);

        let xyzm = Coord::xyzm(1.0, 2.0, 3.0, 9.0);
        assert_eq!(xyzm.nth_unchecked(2), 3.0);
        assert_eq!(xyzm.nth_unchecked(3), 9.0);
        assert_eq!(xyzm.nth(4), None);
    }
}
