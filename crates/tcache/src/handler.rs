//! Command handler for the tcache driver

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;
use tiercache::{Cache, ContentItem, EvictionPolicy};

use crate::command::Command;

/// Result of one command
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// Success line: `OK <message>`
    Ok(String),
    /// Failure line: `ERR <message>`
    Error(String),
    /// Multi-line output printed as-is
    Text(String),
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Ok(msg) => write!(f, "OK {}", msg),
            Reply::Error(msg) => write!(f, "ERR {}", msg),
            Reply::Text(text) => f.write_str(text.trim_end()),
        }
    }
}

#[derive(Serialize)]
struct TierView<'a> {
    level: usize,
    max_capacity: usize,
    remaining_capacity: usize,
    items: Vec<ItemView<'a>>,
}

#[derive(Serialize)]
struct ItemView<'a> {
    id: u64,
    size: usize,
    header: &'a str,
    payload: Cow<'a, str>,
}

impl<'a> From<&'a ContentItem> for ItemView<'a> {
    fn from(item: &'a ContentItem) -> Self {
        Self {
            id: item.id(),
            size: item.size(),
            header: item.header(),
            payload: String::from_utf8_lossy(item.payload()),
        }
    }
}

pub struct CommandHandler {
    cache: Cache,
    default_policy: EvictionPolicy,
    json: bool,
}

impl CommandHandler {
    pub fn new(cache: Cache, default_policy: EvictionPolicy, json: bool) -> Self {
        Self {
            cache,
            default_policy,
            json,
        }
    }

    pub fn handle(&mut self, cmd: Command) -> Reply {
        match cmd {
            Command::Insert { item, policy } => self.handle_insert(item, policy),
            Command::Lookup { id, header } => self.handle_lookup(id, header),
            Command::Update { item } => self.handle_update(item),
            Command::Clear => self.handle_clear(),
            Command::Dump => self.handle_dump(),
            Command::Stats => self.handle_stats(),
        }
    }

    fn handle_insert(&mut self, item: ContentItem, policy: Option<EvictionPolicy>) -> Reply {
        let policy = policy.unwrap_or(self.default_policy);

        match self.cache.insert(item, policy) {
            Ok(inserted) if inserted.evicted.is_empty() => {
                Reply::Ok(format!("INSERTED: {}", inserted.item))
            }
            Ok(inserted) => {
                let evicted: Vec<String> = inserted
                    .evicted
                    .iter()
                    .map(|item| item.id().to_string())
                    .collect();
                Reply::Ok(format!(
                    "INSERTED: {} EVICTED: {}",
                    inserted.item,
                    evicted.join(",")
                ))
            }
            Err(e) => Reply::Error(e.to_string()),
        }
    }

    fn handle_lookup(&mut self, id: u64, header: String) -> Reply {
        // Only id and header take part in a lookup
        let probe = ContentItem::new(id, 0, header, Vec::<u8>::new());

        match self.cache.lookup(&probe) {
            Ok(found) => Reply::Ok(format!("FOUND: {}", found)),
            Err(e) => Reply::Error(e.to_string()),
        }
    }

    fn handle_update(&mut self, item: ContentItem) -> Reply {
        match self.cache.update_content(item) {
            Ok(updated) => Reply::Ok(format!("UPDATED: {}", updated)),
            Err(e) => Reply::Error(e.to_string()),
        }
    }

    fn handle_clear(&mut self) -> Reply {
        self.cache.clear();
        Reply::Ok("CLEARED".to_string())
    }

    fn handle_dump(&self) -> Reply {
        if !self.json {
            return Reply::Text(self.cache.to_string());
        }

        let tiers: Vec<TierView<'_>> = self
            .cache
            .tiers()
            .iter()
            .enumerate()
            .map(|(index, tier)| TierView {
                level: index + 1,
                max_capacity: tier.max_capacity(),
                remaining_capacity: tier.remaining_capacity(),
                items: tier.iter().map(ItemView::from).collect(),
            })
            .collect();

        match serde_json::to_string_pretty(&tiers) {
            Ok(json) => Reply::Text(json),
            Err(e) => Reply::Error(format!("dump failed: {}", e)),
        }
    }

    fn handle_stats(&self) -> Reply {
        let mut out = String::new();
        for (index, tier) in self.cache.tiers().iter().enumerate() {
            let Some(stats) = self.cache.stats(index) else {
                continue;
            };
            out.push_str(&format!(
                "# L{}\n\
                 entries:{}\n\
                 remaining_capacity:{}\n\
                 max_capacity:{}\n\
                 hits:{}\n\
                 misses:{}\n\
                 inserts:{}\n\
                 evictions:{}\n\
                 hit_ratio:{:.2}\n",
                index + 1,
                tier.len(),
                tier.remaining_capacity(),
                tier.max_capacity(),
                stats.hits(),
                stats.misses(),
                stats.inserts(),
                stats.evictions(),
                stats.hit_ratio(),
            ));
        }
        Reply::Text(out)
    }
}
