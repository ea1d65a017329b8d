use std::ops::{Add, Mul, Sub};

use crate::consts::EPSILON;

/// A position or offset in map space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f32 {
        let d = other - self;
        (d.x * d.x + d.y * d.y).sqrt()
    }

    pub fn approx_eq(self, other: Point) -> bool {
        (self.x - other.x).abs() <= EPSILON && (self.y - other.y).abs() <= EPSILON
    }

    pub fn lerp(self, other: Point, t: f32) -> Point {
        Point::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Point {
    type Output = Point;
    fn mul(self, rhs: f32) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Axis-aligned rectangle, stored as its top-left corner and size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn min(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn max(&self) -> Point {
        Point::new(self.x + self.width, self.y + self.height)
    }
}

/// 2D affine transform `[a c e; b d f]`, mapping `(x, y)` to
/// `(a*x + c*y + e, b*x + d*y + f)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Affine {
    pub coeffs: [f32; 6],
}

impl Affine {
    pub const IDENTITY: Affine = Affine {
        coeffs: [1.0, 0.0, 0.0, 1.0, 0.0, 0.0],
    };

    pub fn translate(offset: Point) -> Self {
        Affine {
            coeffs: [1.0, 0.0, 0.0, 1.0, offset.x, offset.y],
        }
    }

    pub fn scale(s: f32) -> Self {
        Affine {
            coeffs: [s, 0.0, 0.0, s, 0.0, 0.0],
        }
    }

    /// Uniform scale that keeps `pivot` fixed.
    pub fn scale_about(s: f32, pivot: Point) -> Self {
        Affine::translate(pivot)
            .then_apply(Affine::scale(s))
            .then_apply(Affine::translate(Point::ZERO - pivot))
    }

    /// Compose so that `other` is applied first, then `self`.
    pub fn then_apply(self, other: Affine) -> Affine {
        let [a1, b1, c1, d1, e1, f1] = self.coeffs;
        let [a2, b2, c2, d2, e2, f2] = other.coeffs;
        Affine {
            coeffs: [
                a1 * a2 + c1 * b2,
                b1 * a2 + d1 * b2,
                a1 * c2 + c1 * d2,
                b1 * c2 + d1 * d2,
                a1 * e2 + c1 * f2 + e1,
                b1 * e2 + d1 * f2 + f1,
            ],
        }
    }

    pub fn apply(&self, p: Point) -> Point {
        let [a, b, c, d, e, f] = self.coeffs;
        Point::new(a * p.x + c * p.y + e, b * p.x + d * p.y + f)
    }

    pub fn determinant(&self) -> f32 {
        let [a, b, c, d, _, _] = self.coeffs;
        a * d - b * c
    }

    /// Inverse transform, or `None` when the matrix is singular.
    pub fn inverse(&self) -> Option<Affine> {
        let det = self.determinant();
        if det.abs() <= f32::EPSILON {
            return None;
        }
        let [a, b, c, d, e, f] = self.coeffs;
        let inv = 1.0 / det;
        Some(Affine {
            coeffs: [
                d * inv,
                -b * inv,
                -c * inv,
                a * inv,
                (c * f - d * e) * inv,
                (b * e - a * f) * inv,
            ],
        })
    }

    /// Uniform scale factor, assuming no rotation or shear.
    pub fn scale_factor(&self) -> f32 {
        self.coeffs[0]
    }
}

impl Default for Affine {
    fn default() -> Self {
        Affine::IDENTITY
    }
}
