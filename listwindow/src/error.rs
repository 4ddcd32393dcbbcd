use alloc::string::String;

use thiserror::Error;

/// An invalid item size specification.
///
/// These are caller configuration bugs: they are reported when the options are applied and
/// nothing is retried.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigurationError {
    /// A percentage size was given before the container size on the scroll axis is known.
    #[error("percentage item size {spec:?} needs a known container size")]
    MissingContainerSize { spec: String },

    /// A percentage size that does not end in `%`, or whose number does not parse or is
    /// negative.
    #[error("malformed percentage item size {spec:?} (expected e.g. \"25%\")")]
    MalformedPercent { spec: String },

    /// A fixed size that is negative or not finite.
    #[error("invalid fixed item size {size} (expected a finite size >= 0)")]
    InvalidFixedSize { size: f64 },
}

/// An item index outside `0..count`.
///
/// Indexes are never clamped: an out-of-range index is reported so off-by-one bugs in callers
/// stay visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("index {index} out of bounds for {count} items")]
pub struct IndexError {
    pub index: usize,
    pub count: usize,
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Index(#[from] IndexError),
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
