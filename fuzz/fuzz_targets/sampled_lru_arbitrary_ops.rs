#![no_main]

use libfuzzer_sys::fuzz_target;
use probelru::ds::OsSeededRng;
use probelru::policy::sampled_lru::SampledLruCache;

// Fuzz arbitrary operation sequences on SampledLruCache
//
// Tests random sequences of add, get, peek, touch, remove, contains,
// resize, pop_sampled, and purge operations, asserting the slot/index
// bijection after every step.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let capacity = usize::from(data[0] % 32) + 1;
    let seed = u64::from(data[1]);
    let mut cache: SampledLruCache<u8, u8> =
        SampledLruCache::with_rng(capacity, OsSeededRng::with_seed(seed)).unwrap();

    let mut idx = 2;
    while idx + 1 < data.len() {
        let op = data[idx] % 9;
        let key = data[idx + 1];

        match op {
            0 => {
                let was_full = cache.len() == cache.capacity();
                let was_present = cache.contains(&key);
                let evicted = cache.add(key, key.wrapping_mul(3));

                if cache.capacity() > 0 {
                    assert!(cache.contains(&key));
                    assert_eq!(cache.peek(&key), Some(&key.wrapping_mul(3)));
                    assert_eq!(evicted, was_full && !was_present);
                }
            }
            1 => {
                let expected = cache.contains(&key);
                assert_eq!(cache.get(&key).is_some(), expected);
            }
            2 => {
                let expected = cache.contains(&key);
                assert_eq!(cache.peek(&key).is_some(), expected);
            }
            3 => {
                let expected = cache.contains(&key);
                assert_eq!(cache.touch(&key), expected);
            }
            4 => {
                let old_len = cache.len();
                let removed = cache.remove(&key);
                if removed.is_some() {
                    assert_eq!(cache.len(), old_len - 1);
                    assert!(!cache.contains(&key));
                }
            }
            5 => {
                let new_capacity = usize::from(key % 32);
                let before = cache.len();
                let evicted = cache.resize(new_capacity);
                assert_eq!(evicted, before.saturating_sub(new_capacity));
                assert!(cache.len() <= cache.capacity());
            }
            6 => {
                let old_len = cache.len();
                match cache.pop_sampled() {
                    Some(_) => assert_eq!(cache.len(), old_len - 1),
                    None => assert_eq!(old_len, 0),
                }
            }
            7 => {
                cache.purge();
                assert!(cache.is_empty());
            }
            _ => {
                assert_eq!(cache.is_empty(), cache.len() == 0);
            }
        }

        cache.check_invariants().expect("bijection must hold");
        idx += 2;
    }
});
