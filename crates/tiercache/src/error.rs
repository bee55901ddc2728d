//! Error types for tiercache

use std::fmt;

/// Result type alias for cache operations
pub type Result<T> = std::result::Result<T, Error>;

/// Outcomes a caller is expected to handle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Item can never fit in a tier, even after full eviction
    OversizedItem {
        /// Size of the rejected item
        size: usize,
        /// Maximum capacity of the tier
        max: usize,
    },

    /// An item with this id already occupies the tier
    DuplicateKey(u64),

    /// No item with this id in the tier
    CacheMiss(u64),

    /// Replacing the item would exceed the tier's capacity
    InsufficientCapacity {
        /// Units the replacement needs
        needed: usize,
        /// Units available once the old item is released
        available: usize,
    },

    /// Unknown eviction policy name
    InvalidPolicy(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::OversizedItem { size, max } => {
                write!(f, "Item too large: {} units (tier max {})", size, max)
            }
            Error::DuplicateKey(id) => write!(f, "Content {} already cached", id),
            Error::CacheMiss(id) => write!(f, "Cache miss for content {}", id),
            Error::InsufficientCapacity { needed, available } => write!(
                f,
                "Insufficient capacity: need {} units, {} available",
                needed, available
            ),
            Error::InvalidPolicy(name) => write!(f, "Invalid eviction policy: {}", name),
        }
    }
}

impl std::error::Error for Error {}
