#![no_main]

use indexlru::ds::LruStore;
use libfuzzer_sys::fuzz_target;
use std::collections::VecDeque;

// Fuzz stress test with reference validation
//
// Mirrors every operation into a VecDeque (front = most recent) and
// compares full order after each step.
fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let capacity = usize::from(data[0] % 16) + 1;
    let mut store: LruStore<u8> = LruStore::new(capacity);
    let mut reference: VecDeque<u8> = VecDeque::new();

    for (idx, &byte) in data[1..].iter().enumerate() {
        if idx % 3 == 0 {
            // touch
            let hit = store.touch(|v| *v == byte);
            let pos = reference.iter().position(|v| *v == byte);
            assert_eq!(hit, pos.is_some());
            if let Some(pos) = pos {
                if let Some(v) = reference.remove(pos) {
                    reference.push_front(v);
                }
            }
        } else {
            // insert
            let evicted = store.insert(byte);
            let expected = if reference.len() == capacity {
                reference.pop_back()
            } else {
                None
            };
            reference.push_front(byte);
            assert_eq!(evicted, expected);
        }

        assert!(store.iter().eq(reference.iter()));
    }
});
