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

use std::collections::TryReserveError;
use std::fmt;

/// Errors produced by [`RingBuffer`](crate::RingBuffer) operations and constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Every slot is occupied.
    #[error("no buffer space available")]
    BufferFull,
    /// No slot is occupied.
    #[error("no data available")]
    BufferEmpty,
    /// A ring buffer must hold at least one element.
    #[error("ring buffer capacity must be greater than zero")]
    ZeroCapacity,
    /// The backing storage could not be allocated.
    #[error("failed to allocate ring buffer storage")]
    Alloc(#[from] TryReserveError),
}

/// The value rejected by [`RingBuffer::insert`](crate::RingBuffer::insert)
/// because the buffer was full.
///
/// The buffer is left untouched, so the caller decides whether to retry,
/// drop or re-route the value.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Full<T>(pub T);

impl<T> Full<T> {
    /// Returns the value that could not be stored.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> fmt::Debug for Full<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Full").finish_non_exhaustive()
    }
}

impl<T> fmt::Display for Full<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Error::BufferFull, f)
    }
}

impl<T> std::error::Error for Full<T> {}

impl<T> From<Full<T>> for Error {
    #[inline]
    fn from(_: Full<T>) -> Self {
        Error::BufferFull
    }
}
