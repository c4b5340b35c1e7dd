//! Various types shared by the loader, the engine and the reporter.

use derive_more::Display;
use std::ops::Add;

/// The vertex id type.
pub type VId = String;

/// The edge weight type.
pub type Weight = f64;

/// A distance estimate.
///
/// `Infinite` orders after every finite value, so the derived `PartialOrd`
/// is exactly the comparison used by relaxation.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Display)]
pub enum Distance {
    #[display(fmt = "{}", _0)]
    Finite(Weight),
    #[display(fmt = "inf")]
    Infinite,
}

impl Distance {
    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }
}

impl Default for Distance {
    fn default() -> Self {
        Distance::Infinite
    }
}

impl Add<Weight> for Distance {
    type Output = Distance;

    fn add(self, w: Weight) -> Distance {
        match self {
            Distance::Finite(d) => Distance::Finite(d + w),
            Distance::Infinite => Distance::Infinite,
        }
    }
}
