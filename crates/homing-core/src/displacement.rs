//! Net integer displacement on the 2D grid.

use crate::directive::Directive;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Accumulated `(x, y)` offset from the origin.
///
/// Addition wraps on overflow so folding never panics; reaching the `i64`
/// limit would need more than 2^63 directives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Displacement {
    /// Horizontal offset. `Right` is positive.
    pub x: i64,
    /// Vertical offset. `Up` is positive.
    pub y: i64,
}

impl Displacement {
    /// The origin `(0, 0)`.
    pub const ORIGIN: Displacement = Displacement { x: 0, y: 0 };

    /// Create a displacement from its components.
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Returns `true` iff both components are exactly zero.
    pub fn is_origin(self) -> bool {
        self == Self::ORIGIN
    }

    /// Fold one directive's unit vector into this displacement.
    pub fn apply(&mut self, directive: Directive) {
        *self += directive.offset();
    }
}

impl Add for Displacement {
    type Output = Displacement;

    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x.wrapping_add(rhs.x),
            y: self.y.wrapping_add(rhs.y),
        }
    }
}

impl AddAssign for Displacement {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for Displacement {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ORIGIN, Add::add)
    }
}

impl<'a> Sum<&'a Displacement> for Displacement {
    fn sum<I: Iterator<Item = &'a Displacement>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl fmt::Display for Displacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
