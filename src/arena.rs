//! Fast, but limited allocator with generational handles.

use std::mem;
use std::ops::{Index, IndexMut};
use std::vec::Vec;

/// A struct representing an entry to `TypedArena<T>`.
///
/// An entry remembers the generation of the slot it was allocated in, so an entry that outlives
/// its object never resolves to a different object that later reuses the same slot.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Entry {
    index: usize,
    generation: u64,
}

enum Block<T> {
    Occupied { generation: u64, value: T },
    Vacant { generation: u64, next: Option<usize> },
}

impl<T> Block<T> {
    fn generation(&self) -> u64 {
        match self {
            Block::Occupied { generation, .. } | Block::Vacant { generation, .. } => *generation,
        }
    }
}

/// A fast, but limited allocator that only allocates a single type of object.
///
/// All objects inside the arena will be destroyed when the typed arena is destroyed. Freed slots
/// are threaded onto a free list and reused by later allocations. Every time a slot is freed its
/// generation is incremented, which invalidates all outstanding entries to it: `get` and
/// `get_mut` return `None` for such stale entries instead of yielding the object that reused the
/// slot.
///
/// # Examples
///
/// ```
/// use ordered_set::arena::TypedArena;
///
/// let mut arena = TypedArena::new();
///
/// let x = arena.allocate(1);
/// assert_eq!(arena[x], 1);
///
/// arena[x] += 1;
/// assert_eq!(arena[x], 2);
///
/// assert_eq!(arena.free(&x), 2);
/// assert_eq!(arena.get(&x), None);
/// ```
pub struct TypedArena<T> {
    head: Option<usize>,
    blocks: Vec<Block<T>>,
    size: usize,
}

impl<T> TypedArena<T> {
    /// Constructs a new, empty `TypedArena<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_set::arena::TypedArena;
    ///
    /// let arena: TypedArena<u32> = TypedArena::new();
    /// assert!(arena.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Constructs a new, empty `TypedArena<T>` with room for `capacity` objects before it
    /// reallocates.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_set::arena::TypedArena;
    ///
    /// let arena: TypedArena<u32> = TypedArena::with_capacity(1024);
    /// assert!(arena.capacity() >= 1024);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        TypedArena {
            head: None,
            blocks: Vec::with_capacity(capacity),
            size: 0,
        }
    }

    /// Allocates an object in the typed arena and returns an Entry. The Entry can later be used to
    /// retrieve mutable and immutable references to the object, and deallocate the object.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_set::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::new();
    /// let x = arena.allocate(0);
    /// assert_eq!(arena.len(), 1);
    /// ```
    pub fn allocate(&mut self, value: T) -> Entry {
        self.size += 1;

        match self.head.take() {
            None => {
                self.blocks.push(Block::Occupied {
                    generation: 0,
                    value,
                });
                Entry {
                    index: self.blocks.len() - 1,
                    generation: 0,
                }
            },
            Some(index) => {
                let generation = self.blocks[index].generation();
                let vacant_block = mem::replace(
                    &mut self.blocks[index],
                    Block::Occupied { generation, value },
                );

                match vacant_block {
                    Block::Vacant { next, .. } => {
                        self.head = next;
                        Entry { index, generation }
                    },
                    Block::Occupied { .. } => panic!("Expected a vacant block."),
                }
            },
        }
    }

    /// Deallocates an object in the typed arena and returns the object. The entry and every copy
    /// of it become stale.
    ///
    /// # Panics
    ///
    /// Panics if entry corresponds to an invalid, vacant, or stale value.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_set::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::new();
    /// let x = arena.allocate(0);
    /// assert_eq!(arena.free(&x), 0);
    /// assert!(!arena.contains(&x));
    /// ```
    pub fn free(&mut self, entry: &Entry) -> T {
        if !self.contains(entry) {
            panic!("Error: attempting to free invalid block.");
        }
        let old_block = mem::replace(
            &mut self.blocks[entry.index],
            Block::Vacant {
                generation: entry.generation.wrapping_add(1),
                next: self.head.take(),
            },
        );
        self.head = Some(entry.index);
        self.size -= 1;
        match old_block {
            Block::Occupied { value, .. } => value,
            Block::Vacant { .. } => unreachable!(),
        }
    }

    /// Returns `true` if the entry corresponds to a live object in the arena.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_set::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::new();
    /// let x = arena.allocate(0);
    /// assert!(arena.contains(&x));
    /// ```
    pub fn contains(&self, entry: &Entry) -> bool {
        self.get(entry).is_some()
    }

    /// Returns an immutable reference to an object in the typed arena. Returns `None` if the entry
    /// does not correspond to a live object.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_set::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::new();
    /// let x = arena.allocate(0);
    /// assert_eq!(arena.get(&x), Some(&0));
    /// ```
    pub fn get(&self, entry: &Entry) -> Option<&T> {
        match self.blocks.get(entry.index) {
            Some(Block::Occupied { generation, value }) if *generation == entry.generation => {
                Some(value)
            },
            _ => None,
        }
    }

    /// Returns a mutable reference to an object in the typed arena. Returns `None` if the entry
    /// does not correspond to a live object.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_set::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::new();
    /// let x = arena.allocate(0);
    /// assert_eq!(arena.get_mut(&x), Some(&mut 0));
    /// ```
    pub fn get_mut(&mut self, entry: &Entry) -> Option<&mut T> {
        match self.blocks.get_mut(entry.index) {
            Some(Block::Occupied { generation, value }) if *generation == entry.generation => {
                Some(value)
            },
            _ => None,
        }
    }

    /// Deallocates every object in the arena. All outstanding entries become stale, but the
    /// allocated slots are kept for reuse.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_set::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::new();
    /// let x = arena.allocate(0);
    /// arena.clear();
    /// assert!(arena.is_empty());
    /// assert_eq!(arena.get(&x), None);
    /// ```
    pub fn clear(&mut self) {
        for index in 0..self.blocks.len() {
            if let Block::Occupied { generation, .. } = self.blocks[index] {
                self.blocks[index] = Block::Vacant {
                    generation: generation.wrapping_add(1),
                    next: self.head.take(),
                };
                self.head = Some(index);
            }
        }
        self.size = 0;
    }

    /// Returns the number of live objects in the arena.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the arena holds no live objects.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of objects the arena can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.blocks.capacity()
    }
}

impl<T> Default for TypedArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<Entry> for TypedArena<T> {
    type Output = T;

    fn index(&self, entry: Entry) -> &Self::Output {
        self.get(&entry).expect("Error: entry out of bounds.")
    }
}

impl<T> IndexMut<Entry> for TypedArena<T> {
    fn index_mut(&mut self, entry: Entry) -> &mut Self::Output {
        self.get_mut(&entry).expect("Error: entry out of bounds.")
    }
}

#[cfg(test)]
mod tests {
    use super::Entry;
    use super::TypedArena;

    #[test]
    #[should_panic]
    fn test_free_invalid_block() {
        let mut arena: TypedArena<u32> = TypedArena::new();
        arena.free(&Entry {
            index: 0,
            generation: 0,
        });
    }

    #[test]
    #[should_panic]
    fn test_free_stale_block() {
        let mut arena = TypedArena::new();
        let entry = arena.allocate(0);
        arena.free(&entry);
        arena.free(&entry);
    }

    #[test]
    fn test_allocate() {
        let mut arena = TypedArena::new();
        assert_eq!(
            arena.allocate(0),
            Entry {
                index: 0,
                generation: 0,
            },
        );
        assert_eq!(
            arena.allocate(0),
            Entry {
                index: 1,
                generation: 0,
            },
        );
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn test_free_reuses_slot_with_new_generation() {
        let mut arena = TypedArena::new();
        let entry = arena.allocate(0);
        assert_eq!(arena.free(&entry), 0);
        assert!(arena.is_empty());

        let reused = arena.allocate(1);
        assert_eq!(
            reused,
            Entry {
                index: 0,
                generation: 1,
            },
        );
        assert_eq!(arena.get(&entry), None);
        assert_eq!(arena.get(&reused), Some(&1));
    }

    #[test]
    fn test_free_list_is_last_in_first_out() {
        let mut arena = TypedArena::new();
        let a = arena.allocate(0);
        let b = arena.allocate(1);
        arena.allocate(2);
        arena.free(&a);
        arena.free(&b);

        assert_eq!(arena.allocate(3).index, 1);
        assert_eq!(arena.allocate(4).index, 0);
        assert_eq!(arena.allocate(5).index, 3);
    }

    #[test]
    fn test_get_vacant_block() {
        let mut arena = TypedArena::new();
        arena.allocate(0);
        assert_eq!(
            arena.get(&Entry {
                index: 1,
                generation: 0,
            }),
            None,
        );
    }

    #[test]
    fn test_get_mut() {
        let mut arena = TypedArena::new();
        let entry = arena.allocate(0);
        *arena.get_mut(&entry).unwrap() = 1;
        assert_eq!(arena.get(&entry), Some(&1));
    }

    #[test]
    fn test_get_mut_stale_block() {
        let mut arena = TypedArena::new();
        let entry = arena.allocate(0);
        arena.free(&entry);
        assert_eq!(arena.get_mut(&entry), None);
    }

    #[test]
    fn test_clear() {
        let mut arena = TypedArena::new();
        let a = arena.allocate(0);
        let b = arena.allocate(1);
        arena.clear();

        assert!(arena.is_empty());
        assert!(!arena.contains(&a));
        assert!(!arena.contains(&b));

        arena.allocate(2);
        arena.allocate(3);
        assert_eq!(arena.len(), 2);
        assert_eq!(arena.blocks.len(), 2);
    }
}
