use crate::Vec3;

/// A linear transformation of the 3-dimensional space.
///
/// The map is defined by its action on the standard basis: `f1`, `f2` and `f3` are
/// the images of [`Vec3::E1`], [`Vec3::E2`] and [`Vec3::E3`]. The images are copied
/// in on construction and never change afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearMap {
    f1: Vec3,
    f2: Vec3,
    f3: Vec3,
}

impl LinearMap {
    /// The identity map.
    pub const IDENTITY: Self = Self::new(Vec3::E1, Vec3::E2, Vec3::E3);

    /// Create a linear map from the images of the standard basis vectors.
    ///
    /// # Arguments
    ///
    /// * `f1` - The image of `E1`.
    /// * `f2` - The image of `E2`.
    /// * `f3` - The image of `E3`.
    #[inline]
    pub const fn new(f1: Vec3, f2: Vec3, f3: Vec3) -> Self {
        Self { f1, f2, f3 }
    }

    /// The images of the standard basis vectors, in order.
    #[inline]
    pub fn images(&self) -> [Vec3; 3] {
        [self.f1, self.f2, self.f3]
    }

    /// The image of the `i`-th standard basis vector, or `None` if `i > 2`.
    #[inline]
    pub fn image(&self, i: usize) -> Option<Vec3> {
        self.images().get(i).copied()
    }

    /// Map an input vector `v` to a new vector `L(v)`.
    ///
    /// With `v = x*E1 + y*E2 + z*E3`, linearity gives
    /// `L(v) = x*L(E1) + y*L(E2) + z*L(E3) = x*f1 + y*f2 + z*f3`.
    ///
    /// # Arguments
    ///
    /// * `v` - The input vector.
    ///
    /// # Returns
    ///
    /// A new vector, neither `v` nor the map are modified.
    pub fn map(&self, v: Vec3) -> Vec3 {
        let mut w = self.f1 * v.x;
        w.translate(self.f2 * v.y).translate(self.f3 * v.z);
        w
    }

    /// Compose two maps, the result applies `other` first and then `self`.
    pub fn compose(&self, other: &LinearMap) -> LinearMap {
        LinearMap::new(
            self.map(other.f1),
            self.map(other.f2),
            self.map(other.f3),
        )
    }
}

impl Default for LinearMap {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl std::ops::Mul<Vec3> for LinearMap {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Self::Output {
        self.map(rhs)
    }
}

impl std::ops::Mul<LinearMap> for LinearMap {
    type Output = LinearMap;

    #[inline]
    fn mul(self, rhs: LinearMap) -> Self::Output {
        self.compose(&rhs)
    }
}

// The images are the columns of the matrix.
impl From<glam::DMat3> for LinearMap {
    #[inline]
    fn from(m: glam::DMat3) -> Self {
        Self::new(m.x_axis.into(), m.y_axis.into(), m.z_axis.into())
    }
}

impl From<LinearMap> for glam::DMat3 {
    #[inline]
    fn from(l: LinearMap) -> Self {
        glam::DMat3::from_cols(l.f1.into(), l.f2.into(), l.f3.into())
    }
}
