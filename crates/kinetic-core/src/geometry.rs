//! Integer geometry shared by the gesture engine and its hosts
//!
//! Positions and sizes are whole device units, the same granularity the
//! host's pointer events and paint routine work in.

use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

/// Scroll axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub const ALL: [Axis; 2] = [Axis::Horizontal, Axis::Vertical];
}

/// A point (or a delta) in device units
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Sum of the absolute components
    #[inline]
    pub fn manhattan_length(&self) -> u32 {
        self.x.unsigned_abs().saturating_add(self.y.unsigned_abs())
    }

    #[inline]
    pub fn get(&self, axis: Axis) -> i32 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    #[inline]
    pub fn set(&mut self, axis: Axis, value: i32) {
        match axis {
            Axis::Horizontal => self.x = value,
            Axis::Vertical => self.y = value,
        }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.x == 0 && self.y == 0
    }
}

// Point arithmetic saturates at the i32 range
impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        *self = *self + rhs;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Point) {
        *self = *self - rhs;
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(self.x.saturating_neg(), self.y.saturating_neg())
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A size in device units
///
/// Negative extents are representable (a host may hand us anything) but
/// every consumer treats them as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Extent along an axis, never negative
    #[inline]
    pub fn extent(&self, axis: Axis) -> i32 {
        match axis {
            Axis::Horizontal => self.width.max(0),
            Axis::Vertical => self.height.max(0),
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl std::str::FromStr for Size {
    type Err = crate::Error;

    /// Parse `WIDTHxHEIGHT`, e.g. `320x480`
    fn from_str(s: &str) -> crate::Result<Self> {
        let (w, h) = s
            .split_once(['x', 'X'])
            .ok_or_else(|| crate::Error::Other(format!("expected WIDTHxHEIGHT, got '{}'", s)))?;
        let width = w
            .trim()
            .parse()
            .map_err(|_| crate::Error::Other(format!("invalid width in '{}'", s)))?;
        let height = h
            .trim()
            .parse()
            .map_err(|_| crate::Error::Other(format!("invalid height in '{}'", s)))?;
        Ok(Size { width, height })
    }
}
