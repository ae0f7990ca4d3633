//! Recency Order Module
//!
//! Tracks key access order for LRU eviction using an arena-backed
//! doubly-linked list. Touch, remove and evict are all O(1).

/// Null link in the arena.
const NIL: usize = usize::MAX;

#[derive(Debug)]
struct Node {
    key: String,
    prev: usize,
    next: usize,
}

// == Recency Order ==
/// Tracks access order for the LRU eviction strategy.
///
/// Nodes are addressed by the slot index returned from [`RecencyOrder::push_back`];
/// the owner keeps that index next to its value. Orientation:
/// - Head = least recently used (next eviction candidate)
/// - Tail = most recently used
#[derive(Debug)]
pub struct RecencyOrder {
    slots: Vec<Option<Node>>,
    /// Vacated slots available for reuse
    free: Vec<usize>,
    head: usize,
    tail: usize,
    len: usize,
}

impl Default for RecencyOrder {
    fn default() -> Self {
        Self::new()
    }
}

impl RecencyOrder {
    // == Constructor ==
    /// Creates a new empty recency order.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: NIL,
            tail: NIL,
            len: 0,
        }
    }

    // == Push Back ==
    /// Appends a key at the most-recently-used end and returns its slot.
    ///
    /// The caller guarantees the key is not already tracked.
    pub fn push_back(&mut self, key: String) -> usize {
        let node = Node {
            key,
            prev: self.tail,
            next: NIL,
        };
        let idx = match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(node);
                idx
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        };
        self.link_after_tail(idx);
        self.len += 1;
        idx
    }

    // == Touch ==
    /// Marks a slot as most recently used (moves it to the tail).
    pub fn touch(&mut self, idx: usize) {
        if idx == self.tail || self.node(idx).is_none() {
            return;
        }
        self.unlink(idx);
        if let Some(node) = self.slots[idx].as_mut() {
            node.prev = self.tail;
            node.next = NIL;
        }
        self.link_after_tail(idx);
    }

    // == Remove ==
    /// Removes a slot from the order, returning its key.
    pub fn remove(&mut self, idx: usize) -> Option<String> {
        self.node(idx)?;
        self.unlink(idx);
        let node = self.slots[idx].take()?;
        self.free.push(idx);
        self.len -= 1;
        Some(node.key)
    }

    // == Pop Front ==
    /// Returns and removes the least recently used key.
    ///
    /// Returns None if the order is empty.
    pub fn pop_front(&mut self) -> Option<String> {
        if self.head == NIL {
            return None;
        }
        self.remove(self.head)
    }

    // == Peek Front ==
    /// Returns the least recently used key without removing it.
    pub fn peek_front(&self) -> Option<&str> {
        self.node(self.head).map(|node| node.key.as_str())
    }

    /// Returns the most recently used key.
    pub fn peek_back(&self) -> Option<&str> {
        self.node(self.tail).map(|node| node.key.as_str())
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // == Iter ==
    /// Iterates keys from least to most recently used.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            order: self,
            cursor: self.head,
            remaining: self.len,
        }
    }

    // == Clear ==
    /// Forgets every tracked key and releases the arena.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = NIL;
        self.tail = NIL;
        self.len = 0;
    }

    fn node(&self, idx: usize) -> Option<&Node> {
        self.slots.get(idx).and_then(Option::as_ref)
    }

    fn link_after_tail(&mut self, idx: usize) {
        match self.slots.get_mut(self.tail).and_then(Option::as_mut) {
            Some(old_tail) => old_tail.next = idx,
            None => self.head = idx,
        }
        self.tail = idx;
    }

    fn unlink(&mut self, idx: usize) {
        let (prev, next) = match self.node(idx) {
            Some(node) => (node.prev, node.next),
            None => return,
        };
        match self.slots.get_mut(prev).and_then(Option::as_mut) {
            Some(p) => p.next = next,
            None => self.head = next,
        }
        match self.slots.get_mut(next).and_then(Option::as_mut) {
            Some(n) => n.prev = prev,
            None => self.tail = prev,
        }
    }
}

/// Iterator over tracked keys, least recently used first.
pub struct Iter<'a> {
    order: &'a RecencyOrder,
    cursor: usize,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.order.node(self.cursor)?;
        self.cursor = node.next;
        self.remaining -= 1;
        Some(node.key.as_str())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn keys(order: &RecencyOrder) -> Vec<&str> {
        order.iter().collect()
    }

    #[test]
    fn test_order_new() {
        let order = RecencyOrder::new();
        assert!(order.is_empty());
        assert_eq!(order.len(), 0);
        assert_eq!(order.peek_front(), None);
        assert_eq!(order.iter().count(), 0);
    }

    #[test]
    fn test_order_push_back() {
        let mut order = RecencyOrder::new();

        order.push_back("key1".to_string());
        order.push_back("key2".to_string());
        order.push_back("key3".to_string());

        assert_eq!(order.len(), 3);
        // key1 is oldest (added first)
        assert_eq!(order.peek_front(), Some("key1"));
        assert_eq!(order.peek_back(), Some("key3"));
    }

    #[test]
    fn test_order_touch_existing_key() {
        let mut order = RecencyOrder::new();

        let k1 = order.push_back("key1".to_string());
        order.push_back("key2".to_string());
        order.push_back("key3".to_string());

        order.touch(k1);

        assert_eq!(order.len(), 3);
        assert_eq!(order.peek_front(), Some("key2"));
        assert_eq!(keys(&order), vec!["key2", "key3", "key1"]);
    }

    #[test]
    fn test_order_touch_tail_is_noop() {
        let mut order = RecencyOrder::new();

        order.push_back("a".to_string());
        let b = order.push_back("b".to_string());
        order.touch(b);
        order.touch(b);

        assert_eq!(keys(&order), vec!["a", "b"]);
    }

    #[test]
    fn test_order_pop_front() {
        let mut order = RecencyOrder::new();

        order.push_back("key1".to_string());
        order.push_back("key2".to_string());
        order.push_back("key3".to_string());

        assert_eq!(order.pop_front(), Some("key1".to_string()));
        assert_eq!(order.len(), 2);
        assert_eq!(order.pop_front(), Some("key2".to_string()));
        assert_eq!(order.pop_front(), Some("key3".to_string()));
        assert!(order.is_empty());
        assert_eq!(order.pop_front(), None);
    }

    #[test]
    fn test_order_remove_middle() {
        let mut order = RecencyOrder::new();

        order.push_back("key1".to_string());
        let k2 = order.push_back("key2".to_string());
        order.push_back("key3".to_string());

        assert_eq!(order.remove(k2), Some("key2".to_string()));
        assert_eq!(keys(&order), vec!["key1", "key3"]);
        // Stale slot
        assert_eq!(order.remove(k2), None);
        assert_eq!(order.len(), 2);
    }

    #[test]
    fn test_order_remove_only_node() {
        let mut order = RecencyOrder::new();

        let a = order.push_back("a".to_string());
        order.remove(a);

        assert!(order.is_empty());
        assert_eq!(order.peek_front(), None);
        assert_eq!(order.peek_back(), None);

        order.push_back("b".to_string());
        assert_eq!(keys(&order), vec!["b"]);
    }

    #[test]
    fn test_order_reuses_freed_slots() {
        let mut order = RecencyOrder::new();

        let a = order.push_back("a".to_string());
        order.push_back("b".to_string());
        order.remove(a);
        let c = order.push_back("c".to_string());

        assert_eq!(c, a);
        assert_eq!(keys(&order), vec!["b", "c"]);
    }

    #[test]
    fn test_order_after_multiple_touches() {
        let mut order = RecencyOrder::new();

        let a = order.push_back("a".to_string());
        let b = order.push_back("b".to_string());
        let c = order.push_back("c".to_string());

        order.touch(a);
        order.touch(c);
        order.touch(b);

        // [a, c, b] oldest to newest
        assert_eq!(order.pop_front(), Some("a".to_string()));
        assert_eq!(order.pop_front(), Some("c".to_string()));
        assert_eq!(order.pop_front(), Some("b".to_string()));
    }

    #[test]
    fn test_order_clear() {
        let mut order = RecencyOrder::new();

        order.push_back("a".to_string());
        order.push_back("b".to_string());
        order.clear();

        assert!(order.is_empty());
        assert_eq!(order.iter().len(), 0);
    }
}
