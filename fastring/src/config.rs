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

/// Capacity used by [`Config::default`].
pub const DEFAULT_CAPACITY: usize = 1024;

/// What [`RingBuffer::push`](crate::RingBuffer::push) does when the buffer is full.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Overflow {
    /// Keep the buffered elements and hand the new value back to the caller.
    #[default]
    Reject,
    /// Discard the oldest element to make room for the new one.
    Overwrite,
}

/// Configuration for [`RingBuffer::with_config`](crate::RingBuffer::with_config).
///
/// ```
/// use fastring::Config;
/// use fastring::Overflow;
/// use fastring::RingBuffer;
///
/// let config = Config::default().capacity(2).overflow(Overflow::Overwrite);
/// let mut buf = RingBuffer::with_config(config).unwrap();
///
/// buf.push(1).unwrap();
/// buf.push(2).unwrap();
/// buf.push(3).unwrap();
///
/// assert_eq!(buf.to_vec(), vec![2, 3]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub struct Config {
    pub(crate) capacity: usize,
    pub(crate) overflow: Overflow,
}

impl Config {
    /// Creates a configuration with [`DEFAULT_CAPACITY`] slots that rejects
    /// values once full.
    pub const fn new() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            overflow: Overflow::Reject,
        }
    }

    /// Sets the number of slots. Zero is rejected when the buffer is built.
    pub const fn capacity(self, capacity: usize) -> Self {
        Self { capacity, ..self }
    }

    /// Sets the policy used by `push` once every slot is occupied.
    pub const fn overflow(self, overflow: Overflow) -> Self {
        Self { overflow, ..self }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
