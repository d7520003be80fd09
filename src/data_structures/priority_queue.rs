use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// A binary min-heap that knows where each key lives.
///
/// Keeping a key -> slot index next to the heap lets a queued key change its
/// priority in place (decrease-key) instead of being pushed a second time, so
/// the queue never holds two entries for the same key.
///
/// Entries are ordered by `(priority, key)`: equal priorities pop smallest key first.
#[derive(Debug, Clone)]
pub struct IndexedPriorityQueue<K, P>
where
    K: Clone + Eq + Hash + Ord + Debug,
    P: Ord + Copy + Debug,
{
    /// The underlying binary heap, minimum at slot 0
    heap: Vec<(P, K)>,

    /// Slot of every queued key inside `heap`
    slots: HashMap<K, usize>,
}

impl<K, P> IndexedPriorityQueue<K, P>
where
    K: Clone + Eq + Hash + Ord + Debug,
    P: Ord + Copy + Debug,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        IndexedPriorityQueue {
            heap: Vec::new(),
            slots: HashMap::new(),
        }
    }

    /// Creates a new empty priority queue with room for `capacity` keys
    pub fn with_capacity(capacity: usize) -> Self {
        IndexedPriorityQueue {
            heap: Vec::with_capacity(capacity),
            slots: HashMap::with_capacity(capacity),
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of keys in the priority queue
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.slots.contains_key(key)
    }

    /// Current priority of a queued key
    pub fn priority(&self, key: &K) -> Option<P> {
        self.slots.get(key).map(|&slot| self.heap[slot].0)
    }

    /// Queues `key` with `priority`, or moves it to `priority` if it is already queued
    pub fn push(&mut self, key: K, priority: P) {
        match self.slots.get(&key) {
            Some(&slot) => {
                let previous = self.heap[slot].0;
                self.heap[slot].0 = priority;
                if priority < previous {
                    self.sift_up(slot);
                } else {
                    self.sift_down(slot);
                }
            }
            None => {
                let slot = self.heap.len();
                self.slots.insert(key.clone(), slot);
                self.heap.push((priority, key));
                self.sift_up(slot);
            }
        }
    }

    /// Lowers the priority of a queued key.
    ///
    /// Returns false, leaving the queue untouched, when the key is not queued
    /// or `priority` is not lower than its current one.
    pub fn decrease_key(&mut self, key: &K, priority: P) -> bool {
        match self.slots.get(key) {
            Some(&slot) if priority < self.heap[slot].0 => {
                self.heap[slot].0 = priority;
                self.sift_up(slot);
                true
            }
            _ => false,
        }
    }

    /// Removes the key with the lowest priority
    pub fn pop(&mut self) -> Option<(K, P)> {
        if self.heap.is_empty() {
            return None;
        }

        let last = self.heap.len() - 1;
        self.swap(0, last);
        let (priority, key) = self.heap.pop()?;
        self.slots.remove(&key);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some((key, priority))
    }

    /// Returns the key with the lowest priority without removing it
    pub fn peek(&self) -> Option<(&K, P)> {
        self.heap.first().map(|(priority, key)| (key, *priority))
    }

    /// Clears the priority queue
    pub fn clear(&mut self) {
        self.heap.clear();
        self.slots.clear();
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.heap[slot] >= self.heap[parent] {
                break;
            }
            self.swap(slot, parent);
            slot = parent;
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * slot + 1;
            let right = left + 1;
            let mut smallest = slot;

            if left < len && self.heap[left] < self.heap[smallest] {
                smallest = left;
            }
            if right < len && self.heap[right] < self.heap[smallest] {
                smallest = right;
            }
            if smallest == slot {
                break;
            }
            self.swap(slot, smallest);
            slot = smallest;
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.heap.swap(a, b);
        if let Some(slot) = self.slots.get_mut(&self.heap[a].1) {
            *slot = a;
        }
        if let Some(slot) = self.slots.get_mut(&self.heap[b].1) {
            *slot = b;
        }
    }
}

impl<K, P> Default for IndexedPriorityQueue<K, P>
where
    K: Clone + Eq + Hash + Ord + Debug,
    P: Ord + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
