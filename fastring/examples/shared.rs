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

//! The ring buffer is not synchronized, so a producer and a consumer thread
//! share it through a lock held for the duration of each call.

use std::sync::Arc;
use std::time::Duration;

use fastring::RingBuffer;
use parking_lot::Mutex;

fn main() {
    let queue = Arc::new(Mutex::new(RingBuffer::new(16)));
    let total = 1000;

    let producer = {
        let queue = queue.clone();
        std::thread::Builder::new()
            .name("producer".to_string())
            .spawn(move || {
                let mut next = 0;
                while next < total {
                    let inserted = queue.lock().insert(next);
                    match inserted {
                        Ok(()) => next += 1,
                        // Back off and retry; the consumer frees a slot soon.
                        Err(_) => std::thread::sleep(Duration::from_micros(50)),
                    }
                }
            })
            .unwrap()
    };

    let consumer = {
        let queue = queue.clone();
        std::thread::Builder::new()
            .name("consumer".to_string())
            .spawn(move || {
                let mut expected = 0;
                while expected < total {
                    let removed = queue.lock().remove();
                    match removed {
                        Ok(value) => {
                            assert_eq!(value, expected);
                            expected += 1;
                        }
                        Err(_) => std::thread::yield_now(),
                    }
                }
            })
            .unwrap()
    };

    producer.join().unwrap();
    consumer.join().unwrap();
    println!("transferred {total} values in order");
}
