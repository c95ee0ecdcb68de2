use approx::{AbsDiffEq, RelativeEq, UlpsEq};

/// A vector of the real 3-dimensional space.
///
/// `Vec3` is a `Copy` value type: assigning or passing a vector always produces an
/// independent copy, so in-place operations such as [`Vec3::scale`] and
/// [`Vec3::translate`] only ever touch a vector the caller holds exclusively.
///
/// Equality is exact coordinate-wise comparison. Use the [`approx`] traits for
/// comparisons with a tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    /// First coordinate.
    pub x: f64,
    /// Second coordinate.
    pub y: f64,
    /// Third coordinate.
    pub z: f64,
}

impl Vec3 {
    /// Zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// First standard basis vector `(1, 0, 0)`.
    pub const E1: Self = Self::new(1.0, 0.0, 0.0);

    /// Second standard basis vector `(0, 1, 0)`.
    pub const E2: Self = Self::new(0.0, 1.0, 0.0);

    /// Third standard basis vector `(0, 0, 1)`.
    pub const E3: Self = Self::new(0.0, 0.0, 1.0);

    /// The standard basis, in order.
    pub const BASIS: [Self; 3] = [Self::E1, Self::E2, Self::E3];

    /// Create a new vector from its coordinates.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Create a vector from an array.
    #[inline]
    pub fn from_array(arr: [f64; 3]) -> Self {
        let [x, y, z] = arr;
        Self { x, y, z }
    }

    /// Convert the vector to an array.
    #[inline]
    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Multiply all coordinates by `c` in place.
    ///
    /// Returns the vector itself so calls can be chained.
    ///
    /// ```rust
    /// use r3_algebra::Vec3;
    ///
    /// let mut v = Vec3::new(1.0, 2.0, 3.0);
    /// v.scale(2.0).translate(Vec3::E1);
    /// assert_eq!(v, Vec3::new(3.0, 4.0, 6.0));
    /// ```
    #[inline]
    pub fn scale(&mut self, c: f64) -> &mut Self {
        self.x *= c;
        self.y *= c;
        self.z *= c;
        self
    }

    /// Add the coordinates of `v` to this vector in place.
    ///
    /// Returns the vector itself so calls can be chained.
    #[inline]
    pub fn translate(&mut self, v: Self) -> &mut Self {
        self.x += v.x;
        self.y += v.y;
        self.z += v.z;
        self
    }

    /// Dot product between two vectors.
    ///
    /// Computed as `x * v.x + y * v.y + z * v.z`, in that order, so swapping the
    /// operands gives the same result bit for bit.
    ///
    /// `a.dot(a)` is positive for every nonzero `a` with normal-sized coordinates,
    /// but the squares underflow to `0` when all coordinates are below about
    /// `1e-162`, so a nonzero vector can have a zero dot product with itself.
    #[inline]
    pub fn dot(self, v: Self) -> f64 {
        self.x * v.x + self.y * v.y + self.z * v.z
    }

    /// Cross product between two vectors.
    #[inline]
    pub fn cross(self, v: Self) -> Self {
        Self {
            x: self.y * v.z - self.z * v.y,
            y: self.z * v.x - self.x * v.z,
            z: self.x * v.y - self.y * v.x,
        }
    }

    /// Squared Euclidean length, `self.dot(self)`.
    #[inline]
    pub fn length_squared(self) -> f64 {
        self.dot(self)
    }

    /// Euclidean length (magnitude) of the vector.
    #[inline]
    pub fn length(self) -> f64 {
        let v: glam::DVec3 = self.into();
        v.length()
    }
}

impl std::fmt::Display for Vec3 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "({:?}, {:?}, {:?})", self.x, self.y, self.z)
    }
}

// Conversions to and from the underlying glam type.
impl From<glam::DVec3> for Vec3 {
    #[inline]
    fn from(v: glam::DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vec3> for glam::DVec3 {
    #[inline]
    fn from(v: Vec3) -> Self {
        glam::DVec3::new(v.x, v.y, v.z)
    }
}

// Conversions to and from arrays.
impl From<[f64; 3]> for Vec3 {
    #[inline]
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Vec3> for [f64; 3] {
    #[inline]
    fn from(v: Vec3) -> Self {
        v.to_array()
    }
}

impl std::ops::Index<usize> for Vec3 {
    type Output = f64;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("index out of bounds: Vec3 has 3 coordinates but the index is {index}"),
        }
    }
}

impl std::ops::IndexMut<usize> for Vec3 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("index out of bounds: Vec3 has 3 coordinates but the index is {index}"),
        }
    }
}

impl AbsDiffEq for Vec3 {
    type Epsilon = <f64 as AbsDiffEq>::Epsilon;

    #[inline]
    fn default_epsilon() -> Self::Epsilon {
        <f64 as AbsDiffEq>::default_epsilon()
    }

    #[inline]
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for Vec3 {
    #[inline]
    fn default_max_relative() -> Self::Epsilon {
        <f64 as RelativeEq>::default_max_relative()
    }

    #[inline]
    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl UlpsEq for Vec3 {
    #[inline]
    fn default_max_ulps() -> u32 {
        <f64 as UlpsEq>::default_max_ulps()
    }

    #[inline]
    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

// Pure arithmetic, the operands are never modified.
impl std::ops::Add for Vec3 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        let mut w = self;
        w.translate(rhs);
        w
    }
}

impl std::ops::Sub for Vec3 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        let a: glam::DVec3 = self.into();
        let b: glam::DVec3 = rhs.into();
        Self::from(a - b)
    }
}

impl std::ops::Mul<f64> for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        let mut w = self;
        w.scale(rhs);
        w
    }
}

impl std::ops::Mul<Vec3> for f64 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Self::Output {
        rhs * self
    }
}

impl std::ops::Neg for Vec3 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        let a: glam::DVec3 = self.into();
        Self::from(-a)
    }
}

impl std::ops::AddAssign for Vec3 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.translate(rhs);
    }
}

impl std::ops::SubAssign for Vec3 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl std::ops::MulAssign<f64> for Vec3 {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        self.scale(rhs);
    }
}
