#![no_main]

use indexlru::ds::LruStore;
use libfuzzer_sys::fuzz_target;

// Fuzz arbitrary operation sequences on LruStore
//
// First byte picks the capacity; each following pair is (op, value) over
// insert, touch, lookup, find, front_mut, cursor pass, clear.
fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }

    let capacity = usize::from(data[0] % 32) + 1;
    let mut store: LruStore<u32> = LruStore::new(capacity);

    for pair in data[1..].chunks_exact(2) {
        let op = pair[0] % 7;
        let value = u32::from(pair[1]);

        match op {
            0 => {
                let was_full = store.is_full();
                let prior_back = store.back().copied();
                let evicted = store.insert(value);
                assert_eq!(evicted.is_some(), was_full);
                if was_full {
                    assert_eq!(evicted, prior_back);
                }
                assert_eq!(store.front(), Some(&value));
            }
            1 => {
                let len = store.len();
                if store.touch(|v| *v == value) {
                    assert_eq!(store.front(), Some(&value));
                }
                assert_eq!(store.len(), len);
            }
            2 => {
                if let Some(found) = store.lookup(|v| (*v == value).then_some(*v)) {
                    assert_eq!(found, value);
                    assert_eq!(store.front(), Some(&value));
                }
            }
            3 => {
                if let Some(v) = store.find(|v| *v == value) {
                    *v = v.wrapping_add(1);
                }
            }
            4 => {
                if let Some(v) = store.front_mut() {
                    *v = value;
                }
            }
            5 => {
                let len = store.len();
                let mut cursor = store.cursor_mut();
                while cursor.next().is_some() {}
                assert_eq!(cursor.visited(), len);
            }
            6 => {
                store.clear();
                assert!(store.is_empty());
                assert_eq!(store.front(), None);
            }
            _ => unreachable!(),
        }

        assert!(store.len() <= store.capacity());
        store.check_invariants().unwrap();
    }
});
