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

//! `fastring` is a fixed-capacity, single-producer/single-consumer ring buffer.
//!
//! A [`RingBuffer`] allocates its storage once and never resizes. Elements are
//! removed in FIFO order. When the buffer is full, [`RingBuffer::insert`] hands the
//! value back inside [`Full`], while [`RingBuffer::overwrite`] discards the oldest
//! element to make room.
//!
//! ```
//! use fastring::RingBuffer;
//!
//! let mut buf = RingBuffer::new(2);
//! buf.insert("a").unwrap();
//! buf.insert("b").unwrap();
//! assert!(buf.insert("c").is_err());
//!
//! buf.overwrite("c");
//! assert_eq!(buf.remove(), Ok("b"));
//! assert_eq!(buf.remove(), Ok("c"));
//! ```
//!
//! Every operation runs in constant time and none of them block. The buffer does
//! no internal synchronization; wrap it in a lock to share it across threads.

mod config;
mod error;
mod iter;
mod ring;

pub use crate::config::Config;
pub use crate::config::Overflow;
pub use crate::config::DEFAULT_CAPACITY;
pub use crate::error::Error;
pub use crate::error::Full;
pub use crate::iter::Drain;
pub use crate::iter::Iter;
pub use crate::ring::RingBuffer;
