//! SyncCache: a [`Cache`](crate::Cache) with one lock per tier
//!
//! Tiers share nothing but the routing function, so each tier gets its own
//! mutex and operations on different tiers never contend.

use parking_lot::Mutex;
use tracing::debug;

use crate::cache::CacheConfig;
use crate::error::{Error, Result};
use crate::item::ContentItem;
use crate::list::CacheList;
use crate::policy::EvictionPolicy;
use crate::routing::TIER_COUNT;
use crate::stats::CacheStats;

/// Thread-safe three-tier cache
///
/// Results cannot borrow through a lock guard, so lookups return a clone and
/// inserts return only the evicted entries.
#[derive(Debug)]
pub struct SyncCache {
    tiers: Vec<Mutex<CacheList>>,
    stats: Vec<CacheStats>,
    config: CacheConfig,
}

impl SyncCache {
    /// Create a cache with the default tier capacity
    pub fn new() -> Self {
        Self::with_config(CacheConfig::default())
    }

    /// Create a cache from `config`
    pub fn with_config(config: CacheConfig) -> Self {
        Self {
            tiers: (0..TIER_COUNT)
                .map(|_| Mutex::new(CacheList::new(config.tier_capacity)))
                .collect(),
            stats: (0..TIER_COUNT).map(|_| CacheStats::new()).collect(),
            config,
        }
    }

    /// Insert an item into its tier
    ///
    /// # Returns
    /// * `Result<Vec<ContentItem>>` - Entries evicted to make room
    pub fn insert(&self, item: ContentItem, policy: EvictionPolicy) -> Result<Vec<ContentItem>> {
        let tier = item.routing_key();

        let evicted = {
            let mut list = self.tiers[tier].lock();
            let inserted = list.put(item, policy)?;
            inserted.evicted
        };

        let stats = &self.stats[tier];
        stats.record_insert();
        stats.record_evictions(evicted.len());
        debug!(tier, evicted = evicted.len(), %policy, "inserted content");

        Ok(evicted)
    }

    /// Clone of the stored item with `item`'s id, promoting it on a hit
    pub fn lookup(&self, item: &ContentItem) -> Result<ContentItem> {
        let tier = item.routing_key();

        let found = self.tiers[tier].lock().get(item.id()).cloned();
        match found {
            Some(found) => {
                self.stats[tier].record_hit();
                Ok(found)
            }
            None => {
                self.stats[tier].record_miss();
                Err(Error::CacheMiss(item.id()))
            }
        }
    }

    /// Replace the stored item that shares `item`'s id
    pub fn update_content(&self, item: ContentItem) -> Result<()> {
        let tier = item.routing_key();

        let result = self.tiers[tier].lock().update(item.id(), item).map(|_| ());
        if let Err(Error::CacheMiss(_)) = result {
            self.stats[tier].record_miss();
        }
        result
    }

    /// Clear every tier and reset statistics
    ///
    /// Tiers are locked one at a time, not as a group.
    pub fn clear(&self) {
        for (tier, stats) in self.tiers.iter().zip(&self.stats) {
            tier.lock().clear();
            stats.reset();
        }
        debug!("cache cleared");
    }

    /// Run `f` against the locked tier at `index`
    pub fn with_tier<R>(&self, index: usize, f: impl FnOnce(&CacheList) -> R) -> Option<R> {
        self.tiers.get(index).map(|tier| f(&*tier.lock()))
    }

    /// Statistics for the tier at `index`
    pub fn stats(&self, index: usize) -> Option<&CacheStats> {
        self.stats.get(index)
    }

    /// Total entries across all tiers
    pub fn len(&self) -> usize {
        self.tiers.iter().map(|tier| tier.lock().len()).sum()
    }

    /// Check if every tier is empty
    pub fn is_empty(&self) -> bool {
        self.tiers.iter().all(|tier| tier.lock().is_empty())
    }

    /// Construction settings
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }
}

impl Default for SyncCache {
    fn default() -> Self {
        Self::new()
    }
}
