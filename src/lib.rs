//! Circle Quadtree.
//!
//! Indexes circles on a bounded integer plane so that the topmost circle (lowest `z`)
//! covering a point can be found without scanning every circle.
//!
//! # Contracts:
//! - `x` runs along the height of the plane, `y` along its width
//! - Circles that cross a partition boundary stay at the node whose midline they cross
//!
pub mod config;
pub mod quadtree;

pub use config::Config;
pub use quadtree::{Bounds, Node, Quadrant, Quadtree, Visitor};

use std::ops::{Add, AddAssign, Deref};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub struct Point(pub [i32; 2]);

impl AddAssign for Point {
    fn add_assign(&mut self, p: Self) {
        self.0[0] += p.0[0];
        self.0[1] += p.0[1];
    }
}

impl Deref for Point {
    type Target = [i32; 2];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Add for Point {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self([x, y])
    }

    pub fn x(&self) -> i32 {
        self.0[0]
    }

    pub fn y(&self) -> i32 {
        self.0[1]
    }

    /// Squared euclidean distance. Wide enough to never overflow for any pair of points.
    pub fn dist_sq(&self, rhs: &Self) -> i128 {
        let x = self[0] as i128 - rhs[0] as i128;
        let y = self[1] as i128 - rhs[1] as i128;
        x * x + y * y
    }
}

/// A paintable circle. Lower `z` is drawn on top.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Circle {
    pub center: Point,
    pub radius: i32,
    pub z: i32,
    pub id: String,
}

impl Circle {
    pub fn new(center: Point, radius: i32, z: i32, id: impl Into<String>) -> Self {
        Self {
            center,
            radius,
            z,
            id: id.into(),
        }
    }

    /// Points on the circumference are not covered.
    pub fn contains(&self, point: &Point) -> bool {
        let r = self.radius as i128;
        point.dist_sq(&self.center) < r * r
    }
}

/// Errors raised for malformed caller input
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Invalid bounds: height {height} and width {width} must be positive and fit the coordinate range")]
    InvalidBounds { height: i32, width: i32 },

    #[error("Circle `{id}` has a negative radius: {radius}")]
    NegativeRadius { id: String, radius: i32 },

    #[error("Circle `{id}` is centered at {center:?}, outside of the indexed plane")]
    OutOfBounds { id: String, center: Point },
}

pub type Result<T> = std::result::Result<T, Error>;
