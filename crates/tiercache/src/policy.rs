//! Eviction policies

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Which end of a tier gives up space when a new item does not fit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EvictionPolicy {
    /// Most Recently Used - evict the head, protecting older entries
    Mru,
    /// Least Recently Used - evict the tail
    #[default]
    Lru,
}

impl EvictionPolicy {
    /// Lowercase policy name
    pub fn as_str(&self) -> &'static str {
        match self {
            EvictionPolicy::Mru => "mru",
            EvictionPolicy::Lru => "lru",
        }
    }
}

impl fmt::Display for EvictionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EvictionPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mru" => Ok(EvictionPolicy::Mru),
            "lru" => Ok(EvictionPolicy::Lru),
            _ => Err(Error::InvalidPolicy(s.to_string())),
        }
    }
}
