//! Cacheable content

use std::fmt;

use crate::routing::{routing_key, TIER_COUNT};

/// One cacheable unit of content
///
/// `size` is what the item costs against a tier's capacity; it is supplied
/// by the caller and need not match `payload.len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentItem {
    id: u64,
    size: usize,
    header: String,
    payload: Vec<u8>,
}

impl ContentItem {
    /// Create a new content item
    pub fn new(id: u64, size: usize, header: impl Into<String>, payload: impl Into<Vec<u8>>) -> Self {
        Self {
            id,
            size,
            header: header.into(),
            payload: payload.into(),
        }
    }

    /// Content identifier
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Capacity units consumed by this item
    pub fn size(&self) -> usize {
        self.size
    }

    /// Routing header
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Opaque content
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Tier index this item routes to, recomputed from the header
    pub fn routing_key(&self) -> usize {
        routing_key(&self.header, TIER_COUNT)
    }
}

impl fmt::Display for ContentItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CONTENT ID: {} SIZE: {} HEADER: {} CONTENT: {}",
            self.id,
            self.size,
            self.header,
            String::from_utf8_lossy(&self.payload)
        )
    }
}
