use indexlru::ds::LruStore;

fn main() {
    let mut store: LruStore<(u32, String)> = LruStore::new(2);

    store.insert((1, "alpha".to_string()));
    store.insert((2, "beta".to_string()));

    if let Some(name) = store.lookup(|(id, name)| (*id == 1).then(|| name.clone())) {
        println!("hit 1: {}", name);
    }

    if let Some((id, name)) = store.insert((3, "gamma".to_string())) {
        println!("evicted {}: {}", id, name);
    }

    println!("contains 2? {}", store.touch(|(id, _)| *id == 2));
}

// Expected output:
// hit 1: alpha
// evicted 2: beta
// contains 2? false
//
// Explanation: capacity=2; after lookup of 1, entry 1 is MRU and entry 2 is LRU.
// Inserting entry 3 evicts entry 2, so touching 2 misses.
