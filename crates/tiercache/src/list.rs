//! Capacity-bounded, recency-ordered tier
//!
//! Nodes live in an arena (`Vec<Option<Node>>`) and link to each other by
//! slot index, so promotion and eviction are O(1) splices without shared
//! ownership. Vacated slots go on a free list and are reused first.
//!
//! ```text
//!  head (MRU)                          tail (LRU)
//!  [slot 2] <-> [slot 0] <-> [slot 3] <-> [slot 1]
//!    ^ mru_evict                            ^ lru_evict
//! ```

use std::collections::HashMap;
use std::fmt;
use std::iter::FusedIterator;

use ahash::RandomState;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::item::ContentItem;
use crate::node::Node;
use crate::policy::EvictionPolicy;

/// Confirmation of a successful [`CacheList::put`]
#[derive(Debug)]
pub struct Inserted<'a> {
    /// The item now at the head of the tier
    pub item: &'a ContentItem,
    /// Entries evicted to make room, in eviction order
    pub evicted: Vec<ContentItem>,
}

/// One cache tier: a doubly-linked list ordered from most to least recently
/// used, bounded by a total size budget
#[derive(Debug)]
pub struct CacheList {
    index: HashMap<u64, usize, RandomState>,
    nodes: Vec<Option<Node>>,
    head: Option<usize>,
    tail: Option<usize>,
    free_list: Vec<usize>,
    max_capacity: usize,
    remaining_capacity: usize,
}

impl CacheList {
    /// Create an empty tier holding at most `max_capacity` size units
    pub fn new(max_capacity: usize) -> Self {
        Self {
            index: HashMap::with_hasher(RandomState::new()),
            nodes: Vec::new(),
            head: None,
            tail: None,
            free_list: Vec::new(),
            max_capacity,
            remaining_capacity: max_capacity,
        }
    }

    /// Insert `item` at the head, evicting under `policy` until it fits
    ///
    /// Fails with [`Error::OversizedItem`] if the item exceeds the tier's
    /// maximum capacity, or [`Error::DuplicateKey`] if its id is already
    /// present. The duplicate probe promotes the existing entry to the head
    /// even though the insertion is refused.
    pub fn put(&mut self, item: ContentItem, policy: EvictionPolicy) -> Result<Inserted<'_>> {
        if item.size() > self.max_capacity {
            debug!(id = item.id(), size = item.size(), max = self.max_capacity, "rejected oversized item");
            return Err(Error::OversizedItem {
                size: item.size(),
                max: self.max_capacity,
            });
        }

        if self.touch(item.id()) {
            debug!(id = item.id(), "rejected duplicate item");
            return Err(Error::DuplicateKey(item.id()));
        }

        let mut evicted = Vec::new();
        while item.size() > self.remaining_capacity {
            let victim = match policy {
                EvictionPolicy::Mru => self.mru_evict(),
                EvictionPolicy::Lru => self.lru_evict(),
            };
            match victim {
                Some(victim) => evicted.push(victim),
                // An empty tier always has room for an item within max_capacity
                None => break,
            }
        }

        let idx = self.push_front(item);
        Ok(Inserted {
            item: self.item_at(idx),
            evicted,
        })
    }

    /// Promote the entry with `id` to the head, returning whether it exists
    ///
    /// This is the tier's membership test. Every hit reorders the list, which
    /// is what gives MRU/LRU eviction its meaning.
    pub fn touch(&mut self, id: u64) -> bool {
        match self.index.get(&id) {
            Some(&idx) => {
                self.move_to_front(idx);
                true
            }
            None => false,
        }
    }

    /// Look up `id`, promoting it to the head on a hit
    pub fn get(&mut self, id: u64) -> Option<&ContentItem> {
        let idx = *self.index.get(&id)?;
        self.move_to_front(idx);
        Some(self.item_at(idx))
    }

    /// Look up `id` without changing recency order
    pub fn peek(&self, id: u64) -> Option<&ContentItem> {
        self.index.get(&id).map(|&idx| self.item_at(idx))
    }

    /// Replace the entry stored under `id` with `item`
    ///
    /// The entry is promoted before the capacity check, so it ends up at the
    /// head even when the replacement is refused. On
    /// [`Error::InsufficientCapacity`] the stored item and remaining capacity
    /// are unchanged.
    pub fn update(&mut self, id: u64, item: ContentItem) -> Result<&ContentItem> {
        let Some(&idx) = self.index.get(&id) else {
            return Err(Error::CacheMiss(id));
        };
        self.move_to_front(idx);

        let available = self.remaining_capacity + self.item_at(idx).size();
        if item.size() > available {
            debug!(id, needed = item.size(), available, "rejected update");
            return Err(Error::InsufficientCapacity {
                needed: item.size(),
                available,
            });
        }

        let new_id = item.id();
        if new_id != id {
            if self.index.contains_key(&new_id) {
                return Err(Error::DuplicateKey(new_id));
            }
            self.index.remove(&id);
            self.index.insert(new_id, idx);
        }

        self.remaining_capacity = available - item.size();
        if let Some(node) = &mut self.nodes[idx] {
            node.item = item;
        }
        Ok(self.item_at(idx))
    }

    /// Remove and return the most recently used entry
    pub fn mru_evict(&mut self) -> Option<ContentItem> {
        let idx = self.head?;
        let item = self.remove_slot(idx)?;
        debug!(id = item.id(), size = item.size(), "evicted mru entry");
        Some(item)
    }

    /// Remove and return the least recently used entry
    pub fn lru_evict(&mut self) -> Option<ContentItem> {
        let idx = self.tail?;
        let item = self.remove_slot(idx)?;
        debug!(id = item.id(), size = item.size(), "evicted lru entry");
        Some(item)
    }

    /// Drop every entry and restore full capacity
    pub fn clear(&mut self) {
        debug!(entries = self.index.len(), "clearing tier");
        self.index.clear();
        self.nodes.clear();
        self.free_list.clear();
        self.head = None;
        self.tail = None;
        self.remaining_capacity = self.max_capacity;
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Check if the tier is empty
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Fixed size budget
    pub fn max_capacity(&self) -> usize {
        self.max_capacity
    }

    /// Size units still free
    pub fn remaining_capacity(&self) -> usize {
        self.remaining_capacity
    }

    /// Size units held by stored entries
    pub fn used_capacity(&self) -> usize {
        self.max_capacity - self.remaining_capacity
    }

    /// Most recently used entry
    pub fn head(&self) -> Option<&ContentItem> {
        self.head.map(|idx| self.item_at(idx))
    }

    /// Least recently used entry
    pub fn tail(&self) -> Option<&ContentItem> {
        self.tail.map(|idx| self.item_at(idx))
    }

    /// Iterate from head (MRU) to tail (LRU); reverse with `.rev()`
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.len(),
        }
    }

    fn item_at(&self, idx: usize) -> &ContentItem {
        match &self.nodes[idx] {
            Some(node) => &node.item,
            None => unreachable!("slot {} is linked but vacant", idx),
        }
    }

    fn push_front(&mut self, item: ContentItem) -> usize {
        let id = item.id();
        self.remaining_capacity -= item.size();

        let idx = self.alloc_node();
        let mut node = Node::new(item);
        node.next = self.head;
        self.nodes[idx] = Some(node);

        if let Some(head_idx) = self.head {
            if let Some(head) = &mut self.nodes[head_idx] {
                head.prev = Some(idx);
            }
        }

        self.head = Some(idx);
        if self.tail.is_none() {
            self.tail = Some(idx);
        }

        self.index.insert(id, idx);
        idx
    }

    fn remove_slot(&mut self, idx: usize) -> Option<ContentItem> {
        self.unlink(idx);
        let node = self.nodes[idx].take()?;
        self.free_node(idx);

        let item = node.into_item();
        self.index.remove(&item.id());
        self.remaining_capacity += item.size();
        Some(item)
    }

    fn move_to_front(&mut self, idx: usize) {
        if self.head == Some(idx) {
            return;
        }

        self.unlink(idx);

        if let Some(node) = &mut self.nodes[idx] {
            node.prev = None;
            node.next = self.head;
            trace!(id = node.item.id(), "promoted to head");
        }

        if let Some(head_idx) = self.head {
            if let Some(head) = &mut self.nodes[head_idx] {
                head.prev = Some(idx);
            }
        }

        self.head = Some(idx);
        if self.tail.is_none() {
            self.tail = Some(idx);
        }
    }

    fn unlink(&mut self, idx: usize) {
        let (prev, next) = if let Some(node) = &self.nodes[idx] {
            (node.prev, node.next)
        } else {
            return;
        };

        match prev {
            Some(prev_idx) => {
                if let Some(prev_node) = &mut self.nodes[prev_idx] {
                    prev_node.next = next;
                }
            }
            None => {
                self.head = next;
            }
        }

        match next {
            Some(next_idx) => {
                if let Some(next_node) = &mut self.nodes[next_idx] {
                    next_node.prev = prev;
                }
            }
            None => {
                self.tail = prev;
            }
        }

        if let Some(node) = &mut self.nodes[idx] {
            node.prev = None;
            node.next = None;
        }
    }

    fn alloc_node(&mut self) -> usize {
        if let Some(idx) = self.free_list.pop() {
            idx
        } else {
            let idx = self.nodes.len();
            self.nodes.push(None);
            idx
        }
    }

    fn free_node(&mut self, idx: usize) {
        self.free_list.push(idx);
    }
}

impl fmt::Display for CacheList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "REMAINING SPACE:{}", self.remaining_capacity)?;
        writeln!(f, "ITEMS:{}", self.len())?;
        writeln!(f, "LIST:")?;
        for item in self.iter() {
            writeln!(f, "[{}]", item)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a CacheList {
    type Item = &'a ContentItem;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a tier's entries in recency order
pub struct Iter<'a> {
    list: &'a CacheList,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a ContentItem;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.nodes[self.front?].as_ref()?;
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.nodes[self.back?].as_ref()?;
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.item)
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u64, size: usize) -> ContentItem {
        ContentItem::new(id, size, "hdr", format!("payload-{}", id))
    }

    fn ids(list: &CacheList) -> Vec<u64> {
        list.iter().map(|item| item.id()).collect()
    }

    /// Walk the raw links in both directions and check every structural
    /// invariant of the tier.
    fn assert_consistent(list: &CacheList) {
        assert_eq!(list.head.is_none(), list.is_empty());
        assert_eq!(list.tail.is_none(), list.is_empty());

        let mut forward = Vec::new();
        let mut cursor = list.head;
        while let Some(idx) = cursor {
            let node = list.nodes[idx].as_ref().unwrap();
            forward.push(idx);
            assert!(forward.len() <= list.len(), "forward walk does not terminate");
            cursor = node.next;
        }
        assert_eq!(forward.len(), list.len());
        assert_eq!(forward.last().copied(), list.tail);

        let mut backward = Vec::new();
        let mut cursor = list.tail;
        while let Some(idx) = cursor {
            let node = list.nodes[idx].as_ref().unwrap();
            backward.push(idx);
            assert!(backward.len() <= list.len(), "backward walk does not terminate");
            cursor = node.prev;
        }
        backward.reverse();
        assert_eq!(forward, backward);

        let used: usize = list.iter().map(|item| item.size()).sum();
        assert_eq!(list.remaining_capacity + used, list.max_capacity);

        for (&id, &idx) in &list.index {
            assert_eq!(list.item_at(idx).id(), id);
            assert!(list.item_at(idx).size() <= list.max_capacity);
        }
    }

    #[test]
    fn test_put_links_at_head() {
        let mut list = CacheList::new(200);

        list.put(item(1, 10), EvictionPolicy::Lru).unwrap();
        list.put(item(2, 10), EvictionPolicy::Lru).unwrap();
        let inserted = list.put(item(3, 10), EvictionPolicy::Lru).unwrap();

        assert_eq!(inserted.item.id(), 3);
        assert!(inserted.evicted.is_empty());
        assert_eq!(ids(&list), vec![3, 2, 1]);
        assert_eq!(list.remaining_capacity(), 170);
        assert_eq!(list.len(), 3);
        assert_consistent(&list);
    }

    #[test]
    fn test_put_oversized() {
        let mut list = CacheList::new(200);
        list.put(item(1, 50), EvictionPolicy::Lru).unwrap();

        let result = list.put(item(2, 201), EvictionPolicy::Lru);

        assert_eq!(result.unwrap_err(), Error::OversizedItem { size: 201, max: 200 });
        assert_eq!(ids(&list), vec![1]);
        assert_eq!(list.remaining_capacity(), 150);
        assert_consistent(&list);
    }

    #[test]
    fn test_put_exactly_max_capacity() {
        let mut list = CacheList::new(200);
        list.put(item(1, 50), EvictionPolicy::Lru).unwrap();
        list.put(item(2, 50), EvictionPolicy::Lru).unwrap();

        let inserted = list.put(item(3, 200), EvictionPolicy::Mru).unwrap();

        assert_eq!(inserted.evicted.len(), 2);
        assert_eq!(ids(&list), vec![3]);
        assert_eq!(list.remaining_capacity(), 0);
        assert_consistent(&list);
    }

    #[test]
    fn test_duplicate_is_refused_but_promoted() {
        let mut list = CacheList::new(200);
        list.put(item(1, 10), EvictionPolicy::Lru).unwrap();
        list.put(item(2, 10), EvictionPolicy::Lru).unwrap();
        list.put(item(3, 10), EvictionPolicy::Lru).unwrap();

        let result = list.put(item(1, 99), EvictionPolicy::Lru);

        assert_eq!(result.unwrap_err(), Error::DuplicateKey(1));
        assert_eq!(ids(&list), vec![1, 3, 2]);
        assert_eq!(list.peek(1).unwrap().size(), 10);
        assert_eq!(list.remaining_capacity(), 170);
        assert_consistent(&list);
    }

    #[test]
    fn test_lru_eviction_single_entry() {
        let mut list = CacheList::new(200);
        list.put(item(1, 120), EvictionPolicy::Lru).unwrap();

        let inserted = list.put(item(2, 100), EvictionPolicy::Lru).unwrap();

        assert_eq!(inserted.evicted, vec![item(1, 120)]);
        assert_eq!(ids(&list), vec![2]);
        assert_eq!(list.remaining_capacity(), 100);
        assert_consistent(&list);
    }

    #[test]
    fn test_lru_eviction_respects_promotion() {
        let mut list = CacheList::new(100);
        list.put(item(1, 50), EvictionPolicy::Lru).unwrap();
        list.put(item(2, 50), EvictionPolicy::Lru).unwrap();
        assert!(list.touch(1));

        let inserted = list.put(item(3, 50), EvictionPolicy::Lru).unwrap();

        assert_eq!(inserted.evicted.len(), 1);
        assert_eq!(inserted.evicted[0].id(), 2);
        assert_eq!(ids(&list), vec![3, 1]);
        assert_consistent(&list);
    }

    #[test]
    fn test_mru_eviction_takes_head() {
        let mut list = CacheList::new(100);
        list.put(item(1, 40), EvictionPolicy::Mru).unwrap();
        list.put(item(2, 40), EvictionPolicy::Mru).unwrap();

        let inserted = list.put(item(3, 40), EvictionPolicy::Mru).unwrap();

        assert_eq!(inserted.evicted[0].id(), 2);
        assert_eq!(ids(&list), vec![3, 1]);
        assert_eq!(list.remaining_capacity(), 20);
        assert_consistent(&list);
    }

    #[test]
    fn test_eviction_frees_only_what_is_needed() {
        let mut list = CacheList::new(100);
        for id in 1..=5 {
            list.put(item(id, 20), EvictionPolicy::Lru).unwrap();
        }

        let inserted = list.put(item(6, 30), EvictionPolicy::Lru).unwrap();

        let evicted: Vec<u64> = inserted.evicted.iter().map(|item| item.id()).collect();
        assert_eq!(evicted, vec![1, 2]);
        assert_eq!(ids(&list), vec![6, 5, 4, 3]);
        assert_eq!(list.remaining_capacity(), 10);
        assert_consistent(&list);
    }

    #[test]
    fn test_touch() {
        let mut list = CacheList::new(200);
        list.put(item(1, 10), EvictionPolicy::Lru).unwrap();
        list.put(item(2, 10), EvictionPolicy::Lru).unwrap();
        list.put(item(3, 10), EvictionPolicy::Lru).unwrap();

        // Tail
        assert!(list.touch(1));
        assert_eq!(ids(&list), vec![1, 3, 2]);
        assert_consistent(&list);

        // Middle
        assert!(list.touch(3));
        assert_eq!(ids(&list), vec![3, 1, 2]);
        assert_consistent(&list);

        // Head
        assert!(list.touch(3));
        assert_eq!(ids(&list), vec![3, 1, 2]);

        assert!(!list.touch(42));
        assert_eq!(ids(&list), vec![3, 1, 2]);
        assert_consistent(&list);
    }

    #[test]
    fn test_touch_empty() {
        let mut list = CacheList::new(10);
        assert!(!list.touch(1));
        assert!(list.get(1).is_none());
    }

    #[test]
    fn test_get_and_peek() {
        let mut list = CacheList::new(200);
        list.put(item(1, 10), EvictionPolicy::Lru).unwrap();
        list.put(item(2, 10), EvictionPolicy::Lru).unwrap();

        assert_eq!(list.peek(1).map(|item| item.id()), Some(1));
        assert_eq!(ids(&list), vec![2, 1]);

        assert_eq!(list.get(1).map(|item| item.payload()), Some(&b"payload-1"[..]));
        assert_eq!(ids(&list), vec![1, 2]);
        assert_consistent(&list);
    }

    #[test]
    fn test_update_replaces_and_promotes() {
        let mut list = CacheList::new(200);
        list.put(item(1, 50), EvictionPolicy::Lru).unwrap();
        list.put(item(2, 50), EvictionPolicy::Lru).unwrap();

        let updated = list
            .update(1, ContentItem::new(1, 80, "hdr", "bigger"))
            .unwrap();

        assert_eq!(updated.payload(), b"bigger");
        assert_eq!(ids(&list), vec![1, 2]);
        assert_eq!(list.remaining_capacity(), 70);
        assert_consistent(&list);
    }

    #[test]
    fn test_update_shrinks() {
        let mut list = CacheList::new(200);
        list.put(item(1, 150), EvictionPolicy::Lru).unwrap();

        list.update(1, item(1, 10)).unwrap();

        assert_eq!(list.remaining_capacity(), 190);
        assert_consistent(&list);
    }

    #[test]
    fn test_update_miss() {
        let mut list = CacheList::new(200);
        list.put(item(1, 50), EvictionPolicy::Lru).unwrap();

        assert_eq!(list.update(2, item(2, 10)).unwrap_err(), Error::CacheMiss(2));
        assert_eq!(list.remaining_capacity(), 150);
    }

    #[test]
    fn test_update_insufficient_capacity() {
        let mut list = CacheList::new(200);
        list.put(item(1, 100), EvictionPolicy::Lru).unwrap();
        list.put(item(2, 80), EvictionPolicy::Lru).unwrap();

        let result = list.update(1, item(1, 121));

        assert_eq!(
            result.unwrap_err(),
            Error::InsufficientCapacity { needed: 121, available: 120 }
        );
        assert_eq!(list.peek(1), Some(&item(1, 100)));
        assert_eq!(list.remaining_capacity(), 20);
        // Refused updates still promote
        assert_eq!(ids(&list), vec![1, 2]);
        assert_consistent(&list);
    }

    #[test]
    fn test_update_rekeys_index() {
        let mut list = CacheList::new(200);
        list.put(item(1, 10), EvictionPolicy::Lru).unwrap();
        list.put(item(2, 10), EvictionPolicy::Lru).unwrap();

        list.update(1, item(7, 10)).unwrap();
        assert!(list.peek(1).is_none());
        assert_eq!(ids(&list), vec![7, 2]);

        assert_eq!(list.update(7, item(2, 10)).unwrap_err(), Error::DuplicateKey(2));
        assert_eq!(ids(&list), vec![7, 2]);
        assert_consistent(&list);
    }

    #[test]
    fn test_mru_evict_two_entries() {
        let mut list = CacheList::new(200);
        list.put(item(1, 10), EvictionPolicy::Lru).unwrap();
        list.put(item(2, 20), EvictionPolicy::Lru).unwrap();

        assert_eq!(list.mru_evict().map(|item| item.id()), Some(2));
        assert_eq!(ids(&list), vec![1]);
        assert_eq!(list.head(), list.tail());
        assert_eq!(list.remaining_capacity(), 190);
        assert_consistent(&list);

        assert_eq!(list.mru_evict().map(|item| item.id()), Some(1));
        assert!(list.is_empty());
        assert_eq!(list.remaining_capacity(), 200);
        assert_consistent(&list);
    }

    #[test]
    fn test_mru_evict_many_entries() {
        let mut list = CacheList::new(200);
        for id in 1..=4 {
            list.put(item(id, 10), EvictionPolicy::Lru).unwrap();
        }

        assert_eq!(list.mru_evict().map(|item| item.id()), Some(4));
        assert_eq!(ids(&list), vec![3, 2, 1]);
        assert_eq!(list.iter().rev().map(|item| item.id()).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_consistent(&list);
    }

    #[test]
    fn test_lru_evict() {
        let mut list = CacheList::new(200);
        for id in 1..=3 {
            list.put(item(id, 10), EvictionPolicy::Lru).unwrap();
        }

        assert_eq!(list.lru_evict().map(|item| item.id()), Some(1));
        assert_eq!(ids(&list), vec![3, 2]);
        assert_eq!(list.tail().map(|item| item.id()), Some(2));
        assert_consistent(&list);
    }

    #[test]
    fn test_evict_empty() {
        let mut list = CacheList::new(200);
        assert!(list.mru_evict().is_none());
        assert!(list.lru_evict().is_none());
        assert_eq!(list.remaining_capacity(), 200);
    }

    #[test]
    fn test_slots_are_reused() {
        let mut list = CacheList::new(30);
        for id in 0..100 {
            list.put(item(id, 10), EvictionPolicy::Lru).unwrap();
        }

        assert_eq!(list.len(), 3);
        assert!(list.nodes.len() <= 4);
        assert_eq!(ids(&list), vec![99, 98, 97]);
        assert_consistent(&list);
    }

    #[test]
    fn test_clear() {
        let mut list = CacheList::new(200);
        list.put(item(1, 10), EvictionPolicy::Lru).unwrap();
        list.put(item(2, 10), EvictionPolicy::Lru).unwrap();

        list.clear();

        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.remaining_capacity(), 200);
        assert!(list.head().is_none());
        assert!(list.tail().is_none());
        assert_consistent(&list);

        list.put(item(1, 10), EvictionPolicy::Lru).unwrap();
        assert_eq!(ids(&list), vec![1]);
    }

    #[test]
    fn test_zero_size_items() {
        let mut list = CacheList::new(0);
        list.put(item(1, 0), EvictionPolicy::Lru).unwrap();
        list.put(item(2, 0), EvictionPolicy::Mru).unwrap();

        assert_eq!(ids(&list), vec![2, 1]);
        assert!(list.put(item(3, 1), EvictionPolicy::Lru).is_err());
        assert_consistent(&list);
    }

    #[test]
    fn test_display() {
        let mut list = CacheList::new(100);
        list.put(ContentItem::new(1, 30, "h", "a"), EvictionPolicy::Lru).unwrap();

        assert_eq!(
            list.to_string(),
            "REMAINING SPACE:70\nITEMS:1\nLIST:\n[CONTENT ID: 1 SIZE: 30 HEADER: h CONTENT: a]\n"
        );
    }
}
