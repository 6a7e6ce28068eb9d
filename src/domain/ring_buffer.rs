//! Fixed-capacity FIFO backed by a preallocated slice.
//!
//! Storage is allocated once in [`RingBuffer::with_capacity`] and never grows,
//! so a push is O(1) and the retained size depends only on the capacity.

#[derive(Debug, Clone)]
pub struct RingBuffer<T> {
    slots: Box<[T]>,
    head: usize,
    len: usize,
}

impl<T: Copy + Default> RingBuffer<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![T::default(); capacity].into_boxed_slice(),
            head: 0,
            len: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    /// Oldest retained element.
    pub fn front(&self) -> Option<T> {
        if self.is_empty() {
            None
        } else {
            Some(self.slots[self.head])
        }
    }

    /// Append `value`, returning the element evicted to make room.
    ///
    /// A zero-capacity buffer retains nothing: the pushed value is handed
    /// straight back.
    pub fn push(&mut self, value: T) -> Option<T> {
        let capacity = self.slots.len();
        if capacity == 0 {
            return Some(value);
        }

        if self.is_full() {
            let evicted = self.slots[self.head];
            self.slots[self.head] = value;
            self.head = (self.head + 1) % capacity;
            Some(evicted)
        } else {
            let tail = (self.head + self.len) % capacity;
            self.slots[tail] = value;
            self.len += 1;
            None
        }
    }

    /// Iterate from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        let capacity = self.slots.len();
        (0..self.len).map(move |i| self.slots[(self.head + i) % capacity])
    }
}
