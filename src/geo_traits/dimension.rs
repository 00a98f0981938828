use std::fmt;

/// The dimension of a geometry: the ordinates each coordinate carries.
///
/// Ordinates are always stored and encoded in X, Y, Z, M order, with absent
/// axes skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    XY,
    XYZ,
    XYM,
    XYZM,
}

impl Dimension {
    /// The number of ordinates per coordinate.
    pub fn size(&self) -> usize {
        match self {
            Dimension::XY => 2,
            Dimension::XYZ | Dimension::XYM => 3,
            Dimension::XYZM => 4,
        }
    }

    pub fn has_z(&self) -> bool {
        matches!(self, Dimension::XYZ | Dimension::XYZM)
    }

    pub fn has_m(&self) -> bool {
        matches!(self, Dimension::XYM | Dimension::XYZM)
    }

    pub fn from_zm(has_z: bool, has_m: bool) -> Self {
        match (has_z, has_m) {
            (false, false) => Dimension::XY,
            (true, false) => Dimension::XYZ,
            (false, true) => Dimension::XYM,
            (true, true) => Dimension::XYZM,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::XY => write!(f, "XY"),
            Dimension::XYZ => write!(f, "XYZ"),
            Dimension::XYM => write!(f, "XYM"),
            Dimension::XYZM => write!(f, "XYZM"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn zm_round_trip() {
        for dim in [
            Dimension::XY,
            Dimension::XYZ,
            Dimension::XYM,
            Dimension::XYZM,
        ] {
            assert_eq!(Dimension::from_zm(dim.has_z(), dim.has_m()), dim);
        }
    }

    #[test]
    fn sizes() {
        assert_eq!(Dimension::XY.size(), 2);
        assert_eq!(Dimension::XYZ.size(), 3);
        assert_eq!(Dimension::XYM.size(), 3);
        assert_eq!(Dimension::XYZM.size(), 4);
    }
}
