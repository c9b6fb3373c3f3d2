// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt;

use crate::config::Config;
use crate::config::Overflow;
use crate::error::Error;
use crate::error::Full;
use crate::iter::Drain;
use crate::iter::Iter;

/// A fixed-capacity FIFO ring buffer.
///
/// Storage for exactly `capacity` elements is allocated once at construction and
/// never grows. `read` points at the oldest element, `write` at the next free
/// slot, and `len` counts occupied slots, so that
/// `write == (read + len) % capacity` always holds.
///
/// The buffer is not synchronized. Sharing it between a producer and a consumer
/// thread requires an external lock around every call.
///
/// ```
/// use fastring::Error;
/// use fastring::RingBuffer;
///
/// let mut buf = RingBuffer::new(3);
/// buf.insert(1).unwrap();
/// buf.insert(2).unwrap();
/// buf.insert(3).unwrap();
/// assert_eq!(buf.insert(4).unwrap_err().into_inner(), 4);
///
/// assert_eq!(buf.remove(), Ok(1));
/// buf.insert(4).unwrap();
///
/// assert_eq!(buf.remove(), Ok(2));
/// assert_eq!(buf.remove(), Ok(3));
/// assert_eq!(buf.remove(), Ok(4));
/// assert_eq!(buf.remove(), Err(Error::BufferEmpty));
/// ```
pub struct RingBuffer<T> {
    slots: Box<[Option<T>]>,
    read: usize,
    write: usize,
    len: usize,
    overflow: Overflow,
}

impl<T> RingBuffer<T> {
    /// Creates an empty `RingBuffer` with room for `capacity` elements.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero or the storage cannot be allocated.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "Capacity must be greater than zero");
        match Self::try_new(capacity) {
            Ok(buf) => buf,
            Err(err) => panic!("failed to create ring buffer: {err}"),
        }
    }

    /// Creates an empty `RingBuffer` with room for `capacity` elements.
    ///
    /// Returns [`Error::ZeroCapacity`] for a zero capacity and [`Error::Alloc`]
    /// when the storage cannot be allocated.
    pub fn try_new(capacity: usize) -> Result<Self, Error> {
        Self::with_config(Config::new().capacity(capacity))
    }

    /// Creates an empty `RingBuffer` from `config`.
    pub fn with_config(config: Config) -> Result<Self, Error> {
        if config.capacity == 0 {
            return Err(Error::ZeroCapacity);
        }

        let mut slots = Vec::new();
        slots.try_reserve_exact(config.capacity)?;
        slots.resize_with(config.capacity, || None);

        log::trace!(
            "allocated ring buffer: capacity={}, overflow={:?}",
            config.capacity,
            config.overflow
        );

        Ok(Self {
            slots: slots.into_boxed_slice(),
            read: 0,
            write: 0,
            len: 0,
            overflow: config.overflow,
        })
    }

    /// Returns the number of slots. Fixed for the lifetime of the buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of buffered elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Returns the policy [`push`](Self::push) follows once the buffer is full.
    #[inline]
    pub fn overflow(&self) -> Overflow {
        self.overflow
    }

    /// Appends `value` as the newest element.
    ///
    /// A full buffer is left untouched and `value` is returned inside [`Full`].
    #[inline]
    pub fn insert(&mut self, value: T) -> Result<(), Full<T>> {
        if self.is_full() {
            return Err(Full(value));
        }
        self.slots[self.write] = Some(value);
        self.write = self.next(self.write);
        self.len += 1;
        Ok(())
    }

    /// Appends `value` as the newest element, discarding the oldest one when
    /// the buffer is full.
    ///
    /// Returns the discarded element, if any. The length stays at capacity once
    /// reached.
    #[inline]
    pub fn overwrite(&mut self, value: T) -> Option<T> {
        if !self.is_full() {
            self.slots[self.write] = Some(value);
            self.write = self.next(self.write);
            self.len += 1;
            return None;
        }

        // When full, `write == read`: the new value lands in the oldest slot.
        let evicted = self.slots[self.write].replace(value);
        self.read = self.next(self.read);
        self.write = self.next(self.write);
        log::trace!("ring buffer full, evicted oldest element");
        evicted
    }

    /// Appends `value` following the configured [`Overflow`] policy.
    ///
    /// Under [`Overflow::Overwrite`] this never fails.
    #[inline]
    pub fn push(&mut self, value: T) -> Result<(), Full<T>> {
        match self.overflow {
            Overflow::Reject => self.insert(value),
            Overflow::Overwrite => {
                self.overwrite(value);
                Ok(())
            }
        }
    }

    /// Removes and returns the oldest element.
    #[inline]
    pub fn remove(&mut self) -> Result<T, Error> {
        if self.is_empty() {
            return Err(Error::BufferEmpty);
        }
        let value = self.slots[self.read]
            .take()
            .expect("occupied slot must hold a value");
        self.read = self.next(self.read);
        self.len -= 1;
        Ok(value)
    }

    /// Returns the oldest element without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.read].as_ref()
    }

    /// Forgets every buffered element.
    ///
    /// The storage is kept. Stale values stay in their slots until they are
    /// overwritten or the buffer is dropped.
    pub fn clear(&mut self) {
        if self.len > 0 {
            log::trace!("clearing ring buffer: discarded={}", self.len);
        }
        self.read = 0;
        self.write = 0;
        self.len = 0;
    }

    /// Returns an iterator over the buffered elements, oldest first.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.slots, self.read, self.len)
    }

    /// Removes all elements, returning them oldest first.
    ///
    /// The buffer is empty once the returned iterator is dropped, even if it was
    /// not fully consumed.
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain::new(self)
    }

    #[inline]
    fn next(&self, index: usize) -> usize {
        let index = index + 1;
        if index == self.capacity() {
            0
        } else {
            index
        }
    }
}

impl<T: Clone> RingBuffer<T> {
    /// Copies the buffered elements into a `Vec`, oldest first.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> Extend<T> for RingBuffer<T> {
    /// Overwrite-inserts every item, so only the newest `capacity` survive.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.overwrite(item);
        }
    }
}

impl<'a, T> IntoIterator for &'a RingBuffer<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for RingBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
