//! # tiercache
//!
//! In-memory content cache split into three size-bounded tiers.
//!
//! ## Architecture
//! - **Routing**: an item's header picks its tier (code-point sum mod 3)
//! - **Tier**: arena-backed doubly-linked list, MRU at head, LRU at tail
//! - **Eviction**: per insert, `mru` drops the head, `lru` drops the tail
//! - **Promotion**: every successful lookup moves the entry to the head
//!
//! ```
//! use tiercache::{Cache, ContentItem, EvictionPolicy};
//!
//! let mut cache = Cache::new();
//! cache.insert(ContentItem::new(1, 120, "a", "first"), EvictionPolicy::Lru).unwrap();
//! let inserted = cache.insert(ContentItem::new(2, 100, "a", "second"), EvictionPolicy::Lru).unwrap();
//! assert_eq!(inserted.evicted.len(), 1);
//! ```

#![warn(missing_docs)]

mod cache;
mod error;
mod item;
mod list;
mod node;
mod policy;
mod routing;
mod stats;
mod sync;

pub use cache::{Cache, CacheConfig, DEFAULT_TIER_CAPACITY};
pub use error::{Error, Result};
pub use item::ContentItem;
pub use list::{CacheList, Inserted, Iter};
pub use policy::EvictionPolicy;
pub use routing::{routing_key, TIER_COUNT};
pub use stats::{CacheStats, StatsSnapshot};
pub use sync::SyncCache;
