/// An error type for the algebra module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum AlgebraError {
    /// The scale of a random vector generator is not a finite positive number.
    #[error("scale must be positive: {0}")]
    InvalidScale(f64),
}
