#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # r3-algebra
//!
//! Vectors of the real 3-dimensional space and the linear maps acting on them.
//!
//! - [`Vec3`]: a 3-tuple of `f64` with scaling, translation, dot and cross products.
//! - [`LinearMap`]: a linear transformation defined by the images of the standard basis.
//! - [`RandomVec3`]: a seeded generator of uniformly distributed vectors.
//!
//! ## Example
//!
//! ```rust
//! use r3_algebra::{LinearMap, Vec3};
//!
//! // a cyclic permutation of the axes
//! let l = LinearMap::new(Vec3::E2, Vec3::E3, Vec3::E1);
//! assert_eq!(l.map(Vec3::new(1.0, 2.0, 3.0)), Vec3::new(3.0, 1.0, 2.0));
//!
//! assert_eq!(Vec3::E1.cross(Vec3::E2), Vec3::E3);
//! ```

/// Error types for the algebra crate.
pub mod error;

/// Linear transformations of the 3-dimensional space.
pub mod linear_map;

/// Random vector generation.
pub mod random;

/// Vectors of the 3-dimensional space.
pub mod vector;

pub use error::AlgebraError;
pub use linear_map::LinearMap;
pub use random::RandomVec3;
pub use vector::Vec3;
