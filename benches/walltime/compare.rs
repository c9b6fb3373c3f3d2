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

use criterion::criterion_group;
use criterion::criterion_main;
use criterion::Criterion;
use fastring::RingBuffer;

const CAPACITY: usize = 1024;

fn ring_bounded_harness(buf: &mut RingBuffer<u64>, n: usize) {
    for i in 0..n as u64 {
        if let Err(full) = buf.insert(i) {
            // Drain a batch once full, like a consumer catching up.
            while let Ok(v) = buf.remove() {
                black_box(v);
            }
            let _ = buf.insert(full.into_inner());
        }
    }
    buf.clear();
}

fn deque_bounded_harness(buf: &mut VecDeque<u64>, n: usize) {
    for i in 0..n as u64 {
        if buf.len() == CAPACITY {
            while let Some(v) = buf.pop_front() {
                black_box(v);
            }
        }
        buf.push_back(i);
    }
    buf.clear();
}

fn ring_overwrite_harness(buf: &mut RingBuffer<u64>, n: usize) {
    for i in 0..n as u64 {
        black_box(buf.overwrite(i));
    }
    buf.clear();
}

fn deque_overwrite_harness(buf: &mut VecDeque<u64>, n: usize) {
    for i in 0..n as u64 {
        if buf.len() == CAPACITY {
            black_box(buf.pop_front());
        }
        buf.push_back(i);
    }
    buf.clear();
}

fn ring_comparison(c: &mut Criterion) {
    let mut ring = RingBuffer::new(CAPACITY);
    let mut deque = VecDeque::with_capacity(CAPACITY);

    let mut bgroup = c.benchmark_group("compare");

    for n in &[1000, 10000, 100000] {
        bgroup.bench_function(format!("fastring/bounded/{n}"), |b| {
            b.iter(|| ring_bounded_harness(&mut ring, *n))
        });
        bgroup.bench_function(format!("vecdeque/bounded/{n}"), |b| {
            b.iter(|| deque_bounded_harness(&mut deque, *n))
        });
        bgroup.bench_function(format!("fastring/overwrite/{n}"), |b| {
            b.iter(|| ring_overwrite_harness(&mut ring, *n))
        });
        bgroup.bench_function(format!("vecdeque/overwrite/{n}"), |b| {
            b.iter(|| deque_overwrite_harness(&mut deque, *n))
        });
    }

    bgroup.finish();
}

criterion_group!(benches, ring_comparison);
criterion_main!(benches);
