#![no_main]

use libfuzzer_sys::fuzz_target;
use probelru::ds::OsSeededRng;
use probelru::policy::sampled_lru::SampledLruCache;

// Fuzz eviction accounting under sustained insert pressure
//
// Drives the cache past capacity with fuzzer-chosen key streams and
// checks that every eviction is reported exactly once, occupancy stays
// bounded, and the eviction handler only ever sees keys that were live.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let capacity = usize::from(data[0] % 16) + 1;
    let seed = u64::from(data[1]);

    use std::cell::RefCell;
    use std::rc::Rc;

    let evictions: Rc<RefCell<Vec<u8>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&evictions);
    let mut cache: SampledLruCache<u8, u16> = SampledLruCache::with_rng_and_handler(
        capacity,
        OsSeededRng::with_seed(seed),
        Some(Box::new(move |k: &u8, _v: &u16| sink.borrow_mut().push(*k))),
    )
    .unwrap();

    let mut reported = 0usize;
    let mut inserted = 0usize;

    for &byte in &data[2..] {
        let was_present = cache.contains(&byte);
        let was_full = cache.len() == cache.capacity();
        let evicted = cache.add(byte, u16::from(byte) * 2);

        if !was_present {
            inserted += 1;
        }
        if evicted {
            reported += 1;
            assert!(was_full && !was_present);
        }
        assert_eq!(evictions.borrow().len(), reported);
        assert!(cache.len() <= capacity);
        cache.check_invariants().expect("bijection must hold");
    }

    // Every insertion either still resides in the cache or was evicted.
    assert_eq!(cache.len() + reported, inserted);
});
