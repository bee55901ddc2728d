//! Arena node for the tier list

use crate::item::ContentItem;

/// Element of a [`CacheList`](crate::CacheList)
///
/// Links are slot indices into the owning list's arena: `prev` points toward
/// the head (more recently used), `next` toward the tail.
#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) item: ContentItem,
    pub(crate) prev: Option<usize>,
    pub(crate) next: Option<usize>,
}

impl Node {
    /// Unlinked node wrapping `item`
    pub(crate) fn new(item: ContentItem) -> Self {
        Self {
            item,
            prev: None,
            next: None,
        }
    }

    pub(crate) fn into_item(self) -> ContentItem {
        self.item
    }
}
