use geo::CoordNum;

use crate::geo_traits::Dimension;

/// A trait for accessing data from a generic Coord.
pub trait CoordTrait {
    type T: CoordNum;

    /// Native dimension of the coordinate tuple.
    fn dim(&self) -> Dimension;

    /// Access the n'th (0-based) ordinate, in X, Y, Z, M order with absent
    /// axes skipped. May panic if `n >= self.dim().size()`.
    /// See also [`nth()`](Self::nth).
    fn nth_unchecked(&self, n: usize) -> Self::T;

    /// Access the n'th (0-based) ordinate, or `None` past the dimension.
    fn nth(&self, n: usize) -> Option<Self::T> {
        if n < self.dim().size() {
            Some(self.nth_unchecked(n))
        } else {
            None
        }
    }

    /// x component of this coord.
    fn x(&self) -> Self::T;

    /// y component of this coord.
    fn y(&self) -> Self::T;

    /// Returns a tuple that contains the x/horizontal & y/vertical component of the coord.
    fn x_y(&self) -> (Self::T, Self::T) {
        (self.x(), self.y())
    }
}

impl<T: CoordNum> CoordTrait for geo::Coord<T> {
    type T = T;

    fn dim(&self) -> Dimension {
        Dimension::XY
    }

    fn nth_unchecked(&self, n: usize) -> Self::T {
        match n {
            0 => self.x,
            1 => self.y,
            _ => panic!("Coord only supports 2 dimensions"),
        }
    }

    fn x(&self) -> Self::T {
        self.x
    }

    fn y(&self) -> Self::T {
        self.y
    }
}

impl<T: CoordNum> CoordTrait for &geo::Coord<T> {
    type T = T;

    fn dim(&self) -> Dimension {
        Dimension::XY
    }

    fn nth_unchecked(&self, n: usize) -> Self::T {
        match n {
            0 => self.x,
            1 => self.y,
            _ => panic!("Coord only supports 2 dimensions"),
        }
    }

    fn x(&self) -> Self::T {
        self.x
    }

    fn y(&self) -> Self::T {
        self.y
    }
}
