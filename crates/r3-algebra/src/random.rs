use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{AlgebraError, Vec3};

/// Generates random vectors with coordinates uniform in `[-scale, scale)`.
///
/// # Example
///
/// ```rust
/// use r3_algebra::RandomVec3;
///
/// let mut random = RandomVec3::from_seed(42, 10.0).unwrap();
/// let v = random.next_vec();
/// assert!(v.to_array().iter().all(|c| (-10.0..10.0).contains(c)));
/// ```
#[derive(Debug, Clone)]
pub struct RandomVec3<R: Rng> {
    rng: R,
    scale: f64,
}

impl<R: Rng> RandomVec3<R> {
    /// Create a generator drawing from `rng`.
    ///
    /// # Arguments
    ///
    /// * `rng` - The source of uniform samples.
    /// * `scale` - Half the width of the coordinate range, must be finite and positive.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::InvalidScale`] if `scale` is not a finite positive number.
    /// This is stricter than `scale > 0`: `NaN` and infinite scales are rejected too,
    /// since an infinite scale yields `NaN` coordinates.
    pub fn new(rng: R, scale: f64) -> Result<Self, AlgebraError> {
        if !(scale.is_finite() && scale > 0.0) {
            return Err(AlgebraError::InvalidScale(scale));
        }
        log::debug!("random vector generator with scale {scale}");
        Ok(Self { rng, scale })
    }

    /// The scale of the coordinates.
    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Draw a single coordinate in `[-scale, scale)`.
    ///
    /// For a subnormal scale the product can round up to `scale`, such draws are
    /// rejected and repeated.
    #[inline]
    pub fn next_coordinate(&mut self) -> f64 {
        loop {
            let u: f64 = self.rng.random();
            let c = (2.0 * u - 1.0) * self.scale;
            if c < self.scale {
                return c;
            }
        }
    }

    /// Draw a vector, coordinates are drawn in the order x, y, z.
    pub fn next_vec(&mut self) -> Vec3 {
        let x = self.next_coordinate();
        let y = self.next_coordinate();
        let z = self.next_coordinate();
        Vec3::new(x, y, z)
    }
}

impl RandomVec3<StdRng> {
    /// Create a reproducible generator seeded with `seed`.
    pub fn from_seed(seed: u64, scale: f64) -> Result<Self, AlgebraError> {
        log::trace!("seeding random vector generator with {seed}");
        Self::new(StdRng::seed_from_u64(seed), scale)
    }
}

impl<R: Rng> Iterator for RandomVec3<R> {
    type Item = Vec3;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_invalid_scale() {
        for scale in [0.0, -0.0, -1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let res = RandomVec3::from_seed(0, scale);
            assert!(matches!(res, Err(AlgebraError::InvalidScale(_))));
        }
        assert_eq!(
            RandomVec3::from_seed(0, -3.0).unwrap_err(),
            AlgebraError::InvalidScale(-3.0)
        );
    }

    #[test]
    fn test_random_domain() -> Result<(), AlgebraError> {
        let scale = 2.5;
        let random = RandomVec3::from_seed(7, scale)?;
        assert_eq!(random.scale(), scale);
        for v in random.take(1000) {
            for c in v.to_array() {
                assert!((-scale..scale).contains(&c), "{c} outside [-{scale}, {scale})");
            }
        }
        Ok(())
    }

    #[test]
    fn test_random_subnormal_scale_domain() -> Result<(), AlgebraError> {
        for scale in [f64::from_bits(1), f64::MIN_POSITIVE / 4.0] {
            let random = RandomVec3::from_seed(7, scale)?;
            let outside = random
                .take(100)
                .flat_map(|v| v.to_array())
                .filter(|c| !(-scale..scale).contains(c))
                .count();
            assert_eq!(outside, 0, "scale {scale:e}");
        }
        Ok(())
    }

    #[test]
    fn test_random_reproducible() -> Result<(), AlgebraError> {
        let a: Vec<Vec3> = RandomVec3::from_seed(123, 1e6)?.take(10).collect();
        let b: Vec<Vec3> = RandomVec3::from_seed(123, 1e6)?.take(10).collect();
        assert_eq!(a, b);
        Ok(())
    }

    #[test]
    fn test_random_with_custom_rng() -> Result<(), AlgebraError> {
        let mut random = RandomVec3::new(rand::rng(), 1.0)?;
        let v = random.next_vec();
        assert!(v.to_array().iter().all(|c| (-1.0..1.0).contains(c)));
        Ok(())
    }
}
