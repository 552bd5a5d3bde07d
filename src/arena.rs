//! Chunked slot storage that hands out copyable handles, used for nodes that need parent links.

use std::mem;
use std::ops::{Index, IndexMut};

/// The number of slots allocated at once when an arena runs out of room.
pub const DEFAULT_CHUNK_SIZE: usize = 256;

/// A handle to a value stored in an `Arena<T>`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct NodeId {
    chunk: usize,
    slot: usize,
}

enum Slot<T> {
    Occupied(T),
    Vacant(Option<NodeId>),
}

/// Storage for values of a single type addressed by `NodeId` handles.
///
/// Freed slots are threaded onto a free list and reused by later allocations. Storage grows one
/// chunk at a time so existing values are never moved by a reallocation of the whole arena. The
/// arena is the only owner of its values: handles are plain indices and dropping the arena drops
/// every value still inside it.
///
/// # Examples
///
/// ```
/// use balance_trees::arena::Arena;
///
/// let mut arena = Arena::new(16);
///
/// let x = arena.allocate(1);
/// arena[x] += 1;
/// assert_eq!(arena[x], 2);
///
/// assert_eq!(arena.free(x), 2);
/// assert!(arena.get(x).is_none());
/// ```
pub struct Arena<T> {
    free_head: Option<NodeId>,
    chunks: Vec<Vec<Slot<T>>>,
    chunk_size: usize,
    len: usize,
}

impl<T> Arena<T> {
    /// Constructs a new, empty `Arena<T>` that grows by `chunk_size` slots at a time.
    ///
    /// # Panics
    ///
    /// Panics if `chunk_size` is zero.
    pub fn new(chunk_size: usize) -> Self {
        assert!(chunk_size > 0, "chunk size must be positive");
        Arena {
            free_head: None,
            chunks: Vec::new(),
            chunk_size,
            len: 0,
        }
    }

    fn slot(&self, id: NodeId) -> Option<&Slot<T>> {
        self.chunks.get(id.chunk).and_then(|chunk| chunk.get(id.slot))
    }

    fn slot_mut(&mut self, id: NodeId) -> Option<&mut Slot<T>> {
        self.chunks.get_mut(id.chunk).and_then(|chunk| chunk.get_mut(id.slot))
    }

    /// Moves `value` into the arena and returns its handle.
    pub fn allocate(&mut self, value: T) -> NodeId {
        self.len += 1;

        if let Some(id) = self.free_head.take() {
            let next = match self.slot_mut(id) {
                Some(slot) => match mem::replace(slot, Slot::Occupied(value)) {
                    Slot::Vacant(next) => next,
                    Slot::Occupied(_) => unreachable!(),
                },
                None => unreachable!(),
            };
            self.free_head = next;
            return id;
        }

        let needs_chunk = match self.chunks.last() {
            Some(chunk) => chunk.len() == self.chunk_size,
            None => true,
        };
        if needs_chunk {
            self.chunks.push(Vec::with_capacity(self.chunk_size));
        }

        let chunk = self.chunks.len() - 1;
        let slots = &mut self.chunks[chunk];
        slots.push(Slot::Occupied(value));
        NodeId { chunk, slot: slots.len() - 1 }
    }

    /// Removes the value behind `id` from the arena and returns it.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not refer to an occupied slot.
    pub fn free(&mut self, id: NodeId) -> T {
        let next = self.free_head;
        let old = match self.slot_mut(id) {
            Some(slot) => mem::replace(slot, Slot::Vacant(next)),
            None => panic!("attempting to free a slot outside of the arena"),
        };
        match old {
            Slot::Occupied(value) => {
                self.len -= 1;
                self.free_head = Some(id);
                value
            },
            Slot::Vacant(next) => {
                if let Some(slot) = self.slot_mut(id) {
                    *slot = Slot::Vacant(next);
                }
                panic!("attempting to free a vacant slot");
            },
        }
    }

    /// Returns a reference to the value behind `id`, or `None` if the slot is vacant or invalid.
    pub fn get(&self, id: NodeId) -> Option<&T> {
        match self.slot(id) {
            Some(Slot::Occupied(ref value)) => Some(value),
            _ => None,
        }
    }

    /// Returns a mutable reference to the value behind `id`, or `None` if the slot is vacant or
    /// invalid.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        match self.slot_mut(id) {
            Some(Slot::Occupied(ref mut value)) => Some(value),
            _ => None,
        }
    }

    /// Returns the number of values in the arena.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the arena holds no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drops every value in the arena and releases its chunks.
    pub fn clear(&mut self) {
        self.chunks.clear();
        self.free_head = None;
        self.len = 0;
    }
}

impl<T> Index<NodeId> for Arena<T> {
    type Output = T;

    fn index(&self, id: NodeId) -> &Self::Output {
        self.get(id).expect("Expected an occupied slot.")
    }
}

impl<T> IndexMut<NodeId> for Arena<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        self.get_mut(id).expect("Expected an occupied slot.")
    }
}

#[cfg(test)]
mod tests {
    use super::{Arena, NodeId};

    #[test]
    #[should_panic]
    fn test_zero_chunk_size() {
        let _: Arena<u32> = Arena::new(0);
    }

    #[test]
    #[should_panic]
    fn test_free_invalid_slot() {
        let mut arena: Arena<u32> = Arena::new(4);
        arena.free(NodeId { chunk: 0, slot: 0 });
    }

    #[test]
    #[should_panic]
    fn test_free_vacant_slot() {
        let mut arena = Arena::new(4);
        let id = arena.allocate(0);
        arena.free(id);
        arena.free(id);
    }

    #[test]
    fn test_allocate_multiple_chunks() {
        let mut arena = Arena::new(2);
        assert_eq!(arena.allocate(0), NodeId { chunk: 0, slot: 0 });
        assert_eq!(arena.allocate(1), NodeId { chunk: 0, slot: 1 });
        assert_eq!(arena.allocate(2), NodeId { chunk: 1, slot: 0 });
        assert_eq!(arena.len(), 3);
    }

    #[test]
    fn test_free_reuses_slot() {
        let mut arena = Arena::new(4);
        let x = arena.allocate(0);
        let y = arena.allocate(1);
        assert_eq!(arena.free(x), 0);
        assert_eq!(arena.len(), 1);
        assert_eq!(arena.allocate(2), x);
        assert_eq!(arena[x], 2);
        assert_eq!(arena[y], 1);
    }

    #[test]
    fn test_get_vacant_and_invalid() {
        let mut arena = Arena::new(4);
        let x = arena.allocate(0);
        arena.free(x);
        assert_eq!(arena.get(x), None);
        assert_eq!(arena.get(NodeId { chunk: 3, slot: 0 }), None);
        assert_eq!(arena.get_mut(x), None);
    }

    #[test]
    fn test_clear() {
        let mut arena = Arena::new(4);
        arena.allocate(0);
        arena.allocate(1);
        arena.clear();
        assert!(arena.is_empty());
        assert_eq!(arena.allocate(5), NodeId { chunk: 0, slot: 0 });
    }
}
