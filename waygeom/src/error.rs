//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Error)]
pub enum WaygeomError {
    /// The geometry value holds a different shape than the requested one.
    #[error("invalid geometry type: {0}")]
    Conversion(String),
}
