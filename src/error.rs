//! Error types for enjambre operations.

use std::fmt;

/// Main error type for enjambre operations.
///
/// Every variant is a construction-time validation rejection; nothing in
/// the optimization loop itself is fallible, and objective-function panics
/// propagate uncaught.
///
/// # Examples
///
/// ```
/// use enjambre::error::EnjambreError;
///
/// let err = EnjambreError::InvalidBounds { lower: 5.0, upper: -5.0 };
/// assert!(err.to_string().contains("Invalid bounds"));
/// ```
#[derive(Debug)]
pub enum EnjambreError {
    /// Invalid hyperparameter value provided.
    InvalidHyperparameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// Search-space bounds do not form a proper interval.
    InvalidBounds {
        /// Lower endpoint provided
        lower: f64,
        /// Upper endpoint provided
        upper: f64,
    },
}

impl fmt::Display for EnjambreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnjambreError::InvalidHyperparameter {
                param,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid hyperparameter: {param} = {value}, expected {constraint}"
                )
            }
            EnjambreError::InvalidBounds { lower, upper } => {
                write!(
                    f,
                    "Invalid bounds: lower = {lower} must be strictly below upper = {upper}"
                )
            }
        }
    }
}

impl std::error::Error for EnjambreError {}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, EnjambreError>;
