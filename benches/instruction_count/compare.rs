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

use std::collections::VecDeque;
use std::hint::black_box;

use fastring::RingBuffer;
use iai_callgrind::library_benchmark;
use iai_callgrind::library_benchmark_group;
use iai_callgrind::main;

const CAPACITY: usize = 1024;
const N: u64 = 100_000;

fn setup_ring() -> RingBuffer<u64> {
    RingBuffer::new(CAPACITY)
}

fn setup_deque() -> VecDeque<u64> {
    VecDeque::with_capacity(CAPACITY)
}

#[library_benchmark]
#[bench::first(args = (), setup = setup_ring)]
fn bench_fastring(mut buf: RingBuffer<u64>) -> RingBuffer<u64> {
    for i in 0..N {
        buf.overwrite(i);
        if i % 3 == 0 {
            black_box(buf.remove().ok());
        }
    }
    buf
}

#[library_benchmark]
#[bench::first(args = (), setup = setup_deque)]
fn bench_vecdeque(mut buf: VecDeque<u64>) -> VecDeque<u64> {
    for i in 0..N {
        if buf.len() == CAPACITY {
            buf.pop_front();
        }
        buf.push_back(i);
        if i % 3 == 0 {
            black_box(buf.pop_front());
        }
    }
    buf
}

library_benchmark_group!(name = bench_group; benchmarks = bench_fastring, bench_vecdeque);
main!(library_benchmark_groups = bench_group);
