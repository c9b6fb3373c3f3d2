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

use fastring::Config;
use fastring::Error;
use fastring::Overflow;
use fastring::RingBuffer;

fn main() -> Result<(), Error> {
    let mut buf = RingBuffer::try_new(3)?;

    for sample in [1, 2, 3, 4] {
        if let Err(full) = buf.insert(sample) {
            println!("buffer full, dropping {}", full.into_inner());
        }
    }
    println!("bounded: {buf:?}");

    buf.overwrite(4);
    println!("after overwrite: {buf:?}");

    while let Ok(sample) = buf.remove() {
        println!("removed {sample}");
    }

    // A lossy log tail that only keeps the newest lines.
    let config = Config::default().capacity(2).overflow(Overflow::Overwrite);
    let mut tail = RingBuffer::with_config(config)?;
    for line in ["boot", "listening", "accepted", "closed"] {
        tail.push(line)?;
    }
    println!("tail: {:?}", tail.drain().collect::<Vec<_>>());

    Ok(())
}
