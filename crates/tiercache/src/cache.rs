//! Cache: three capacity-bounded tiers behind a header router

use std::fmt;

use tracing::debug;

use crate::error::{Error, Result};
use crate::item::ContentItem;
use crate::list::{CacheList, Inserted};
use crate::policy::EvictionPolicy;
use crate::routing::TIER_COUNT;
use crate::stats::CacheStats;

/// Capacity of each tier unless configured otherwise
pub const DEFAULT_TIER_CAPACITY: usize = 200;

/// Cache construction settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum size units held by each tier
    pub tier_capacity: usize,
}

impl CacheConfig {
    /// Config with the given per-tier capacity
    pub fn new(tier_capacity: usize) -> Self {
        Self { tier_capacity }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TIER_CAPACITY)
    }
}

/// Content cache split into [`TIER_COUNT`] tiers of equal capacity
///
/// Each item lives in the tier selected by its header's routing key, so
/// inserts, lookups and updates for one item always reach the same tier.
#[derive(Debug)]
pub struct Cache {
    tiers: Vec<CacheList>,
    stats: Vec<CacheStats>,
    config: CacheConfig,
}

impl Cache {
    /// Create a cache with [`DEFAULT_TIER_CAPACITY`] per tier
    pub fn new() -> Self {
        Self::with_config(CacheConfig::default())
    }

    /// Create a cache from `config`
    pub fn with_config(config: CacheConfig) -> Self {
        Self {
            tiers: (0..TIER_COUNT)
                .map(|_| CacheList::new(config.tier_capacity))
                .collect(),
            stats: (0..TIER_COUNT).map(|_| CacheStats::new()).collect(),
            config,
        }
    }

    /// Insert an item into its tier, evicting under `policy` as needed
    ///
    /// # Returns
    /// * `Result<Inserted>` - The stored item and any evicted entries
    pub fn insert(&mut self, item: ContentItem, policy: EvictionPolicy) -> Result<Inserted<'_>> {
        let tier = item.routing_key();
        let stats = &self.stats[tier];

        let inserted = self.tiers[tier].put(item, policy)?;
        stats.record_insert();
        stats.record_evictions(inserted.evicted.len());
        debug!(tier, id = inserted.item.id(), evicted = inserted.evicted.len(), %policy, "inserted content");

        Ok(inserted)
    }

    /// Find the stored item with `item`'s id in `item`'s tier
    ///
    /// A hit promotes the entry to the head of its tier.
    pub fn lookup(&mut self, item: &ContentItem) -> Result<&ContentItem> {
        let tier = item.routing_key();
        let stats = &self.stats[tier];

        match self.tiers[tier].get(item.id()) {
            Some(found) => {
                stats.record_hit();
                Ok(found)
            }
            None => {
                stats.record_miss();
                Err(Error::CacheMiss(item.id()))
            }
        }
    }

    /// Replace the stored item that shares `item`'s id
    pub fn update_content(&mut self, item: ContentItem) -> Result<&ContentItem> {
        let tier = item.routing_key();
        let stats = &self.stats[tier];

        self.tiers[tier].update(item.id(), item).map_err(|err| {
            if let Error::CacheMiss(_) = err {
                stats.record_miss();
            }
            err
        })
    }

    /// Clear every tier and reset statistics
    pub fn clear(&mut self) {
        for (tier, stats) in self.tiers.iter_mut().zip(&self.stats) {
            tier.clear();
            stats.reset();
        }
        debug!("cache cleared");
    }

    /// Tier at `index`
    pub fn tier(&self, index: usize) -> Option<&CacheList> {
        self.tiers.get(index)
    }

    /// All tiers in routing order
    pub fn tiers(&self) -> &[CacheList] {
        &self.tiers
    }

    /// Statistics for the tier at `index`
    pub fn stats(&self, index: usize) -> Option<&CacheStats> {
        self.stats.get(index)
    }

    /// Total entries across all tiers
    pub fn len(&self) -> usize {
        self.tiers.iter().map(CacheList::len).sum()
    }

    /// Check if every tier is empty
    pub fn is_empty(&self) -> bool {
        self.tiers.iter().all(CacheList::is_empty)
    }

    /// Construction settings
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }
}

impl Default for Cache {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Cache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (level, tier) in self.tiers.iter().enumerate() {
            writeln!(f, "L{} CACHE:", level + 1)?;
            writeln!(f, "{}", tier)?;
        }
        Ok(())
    }
}
