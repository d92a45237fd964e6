use std::fmt;
use std::ops::{Add, AddAssign, Div, Index, IndexMut, Mul, Neg, Sub};

/// A 3 component vector backed by a single `[f32; 3]`.
///
/// The named accessors `x()`, `y()` and `z()` index into the same array that
/// `as_array` and `Index` expose, so both views always agree.
#[derive(Copy, Clone, Default, PartialEq)]
pub struct Vector3 {
    v: [f32; 3],
}

impl Vector3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Vector3 {
        Vector3 { v: [x, y, z] }
    }
    /// `(x, 0, 0)`
    pub const fn from_x(x: f32) -> Vector3 {
        Vector3::new(x, 0.0, 0.0)
    }
    /// `(x, y, 0)`
    pub const fn from_xy(x: f32, y: f32) -> Vector3 {
        Vector3::new(x, y, 0.0)
    }
    pub const ZERO: Vector3 = Vector3::new(0.0, 0.0, 0.0);
    pub const ONE: Vector3 = Vector3::new(1.0, 1.0, 1.0);
    pub const X: Vector3 = Vector3::new(1.0, 0.0, 0.0);
    pub const Y: Vector3 = Vector3::new(0.0, 1.0, 0.0);
    pub const Z: Vector3 = Vector3::new(0.0, 0.0, 1.0);
}

impl Vector3 {
    #[inline(always)]
    pub fn x(&self) -> f32 {
        self.v[0]
    }
    #[inline(always)]
    pub fn y(&self) -> f32 {
        self.v[1]
    }
    #[inline(always)]
    pub fn z(&self) -> f32 {
        self.v[2]
    }
    pub const fn as_array(&self) -> [f32; 3] {
        self.v
    }

    pub fn dot(&self, other: Vector3) -> f32 {
        self.x() * other.x() + self.y() * other.y() + self.z() * other.z()
    }

    /// Copies `other` into `self` and returns `self` so calls can be chained.
    pub fn assign(&mut self, other: Vector3) -> &mut Self {
        self.v = other.v;
        self
    }

    /// In place component-wise addition that returns `self` for chaining,
    /// e.g. `d.add_assign(b).add_assign(a)`.
    pub fn add_assign(&mut self, other: Vector3) -> &mut Self {
        self.v[0] += other.v[0];
        self.v[1] += other.v[1];
        self.v[2] += other.v[2];
        self
    }

    pub fn is_finite(&self) -> bool {
        self.v.iter().all(|c| c.is_finite())
    }
}

impl From<[f32; 3]> for Vector3 {
    fn from(other: [f32; 3]) -> Vector3 {
        Vector3 { v: other }
    }
}

impl From<Vector3> for [f32; 3] {
    fn from(v: Vector3) -> [f32; 3] {
        v.v
    }
}

impl Index<usize> for Vector3 {
    type Output = f32;
    fn index(&self, index: usize) -> &f32 {
        &self.v[index]
    }
}

impl IndexMut<usize> for Vector3 {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        &mut self.v[index]
    }
}

impl Add for Vector3 {
    type Output = Vector3;
    fn add(self, other: Vector3) -> Vector3 {
        Vector3::new(
            self.x() + other.x(),
            self.y() + other.y(),
            self.z() + other.z(),
        )
    }
}

impl AddAssign for Vector3 {
    fn add_assign(&mut self, other: Vector3) {
        Vector3::add_assign(self, other);
    }
}

impl Sub for Vector3 {
    type Output = Vector3;
    fn sub(self, other: Vector3) -> Vector3 {
        Vector3::new(
            self.x() - other.x(),
            self.y() - other.y(),
            self.z() - other.z(),
        )
    }
}

impl Neg for Vector3 {
    type Output = Vector3;
    fn neg(self) -> Vector3 {
        Vector3::new(-self.x(), -self.y(), -self.z())
    }
}

// scale
impl Mul<f32> for Vector3 {
    type Output = Vector3;
    fn mul(self, other: f32) -> Vector3 {
        Vector3::new(self.x() * other, self.y() * other, self.z() * other)
    }
}

impl Mul<Vector3> for f32 {
    type Output = Vector3;
    fn mul(self, other: Vector3) -> Vector3 {
        other * self
    }
}

// hadamard product, use `dot` for the scalar product
impl Mul for Vector3 {
    type Output = Vector3;
    fn mul(self, other: Vector3) -> Vector3 {
        Vector3::new(
            self.x() * other.x(),
            self.y() * other.y(),
            self.z() * other.z(),
        )
    }
}

/// Component-wise division. `other` must be non-zero, the result is not checked.
impl Div<f32> for Vector3 {
    type Output = Vector3;
    fn div(self, other: f32) -> Vector3 {
        Vector3::new(self.x() / other, self.y() / other, self.z() / other)
    }
}

impl fmt::Debug for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Vector3")
            .field(&self.x())
            .field(&self.y())
            .field(&self.z())
            .finish()
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x(), self.y(), self.z())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [Vector3; 4] = [
        Vector3::new(1.0, 2.0, 3.0),
        Vector3::new(-4.5, 0.25, 7.0),
        Vector3::new(0.0, -1.0, 0.5),
        Vector3::new(100.0, -0.125, -3.0),
    ];

    #[test]
    fn test_constructors() {
        assert_eq!(Vector3::default(), Vector3::ZERO);
        assert_eq!(Vector3::from_x(2.0), Vector3::new(2.0, 0.0, 0.0));
        assert_eq!(Vector3::from_xy(2.0, 3.0), Vector3::new(2.0, 3.0, 0.0));
        assert_eq!(Vector3::from([4.0, 5.0, 6.0]), Vector3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_named_and_indexed_views_agree() {
        let mut v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(v[0], v.x());
        assert_eq!(v[1], v.y());
        assert_eq!(v[2], v.z());
        v[2] = 9.0;
        assert_eq!(v.z(), 9.0);
        assert_eq!(v.as_array(), [1.0, 2.0, 9.0]);
    }

    #[test]
    fn test_assign_and_add_assign_chain() {
        let b = Vector3::new(1.0, 2.0, 3.0);
        let c = Vector3::new(4.0, 5.0, 6.0);
        let mut d = Vector3::ZERO;
        d.assign(c).add_assign(b);
        assert_eq!(d, Vector3::new(5.0, 7.0, 9.0));
        d.add_assign(b).add_assign(b);
        assert_eq!(d, Vector3::new(7.0, 11.0, 15.0));

        let mut e = c;
        e += b;
        assert_eq!(e, Vector3::new(5.0, 7.0, 9.0));
        // operands of the binary operators are untouched
        let sum = b + c;
        assert_eq!(sum, Vector3::new(5.0, 7.0, 9.0));
        assert_eq!(b, Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_add_commutes_and_sub_antisymmetric() {
        for a in SAMPLES {
            for b in SAMPLES {
                assert_eq!(a + b, b + a);
                assert_eq!(a - b, (b - a) * -1.0);
                assert_eq!(a - b, -(b - a));
            }
        }
    }

    #[test]
    fn test_dot() {
        for u in SAMPLES {
            assert!(u.dot(u) >= 0.0);
            for v in SAMPLES {
                assert_eq!(u.dot(v), v.dot(u));
            }
        }
        assert_eq!(
            Vector3::new(1.0, 2.0, 3.0).dot(Vector3::new(4.0, 5.0, 6.0)),
            32.0
        );
    }

    #[test]
    fn test_scale_uses_matching_components() {
        for v in SAMPLES {
            assert_eq!(v * 1.0, v);
        }
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(v * 2.0, Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * v, Vector3::new(2.0, 4.0, 6.0));
        // z must come from z, not from x
        assert_eq!((v * 0.5).z(), 1.5);
    }

    #[test]
    fn test_hadamard_and_divide() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        let w = Vector3::new(4.0, 5.0, 6.0);
        assert_eq!(v * w, Vector3::new(4.0, 10.0, 18.0));
        assert_eq!(w / 2.0, Vector3::new(2.0, 2.5, 3.0));
        assert!((w / 0.0).z().is_infinite());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Vector3::new(9.0, 12.0, 15.0)), "(9, 12, 15)");
    }
}
