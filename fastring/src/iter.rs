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

use std::iter::FusedIterator;

use crate::ring::RingBuffer;

/// Borrowing iterator over a [`RingBuffer`], oldest element first.
///
/// Created by [`RingBuffer::iter`].
#[derive(Clone)]
pub struct Iter<'a, T> {
    slots: &'a [Option<T>],
    pos: usize,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(slots: &'a [Option<T>], read: usize, len: usize) -> Self {
        Self {
            slots,
            pos: read,
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let item = self.slots[self.pos].as_ref();
        self.pos += 1;
        if self.pos == self.slots.len() {
            self.pos = 0;
        }
        self.remaining -= 1;
        item
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Draining iterator over a [`RingBuffer`], oldest element first.
///
/// Created by [`RingBuffer::drain`]. Leaves the buffer empty when dropped.
pub struct Drain<'a, T> {
    buf: &'a mut RingBuffer<T>,
}

impl<'a, T> Drain<'a, T> {
    pub(crate) fn new(buf: &'a mut RingBuffer<T>) -> Self {
        Self { buf }
    }
}

impl<T> Iterator for Drain<'_, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.buf.remove().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.buf.len(), Some(self.buf.len()))
    }
}

impl<T> ExactSizeIterator for Drain<'_, T> {}

impl<T> FusedIterator for Drain<'_, T> {}

impl<T> Drop for Drain<'_, T> {
    fn drop(&mut self) {
        while self.buf.remove().is_ok() {}
        self.buf.clear();
    }
}
