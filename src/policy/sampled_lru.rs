//! Sampled approximate-LRU cache replacement policy.
//!
//! Implements a fixed-capacity cache that approximates least-recently-used
//! eviction with randomized probing instead of an exact recency order. Each
//! eviction draws one random probe base and examines a fixed run of slots;
//! the stalest sampled entry is the victim. This trades exactness for an
//! allocation-free hot path with no per-access list maintenance.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────────┐
//! │                      SampledLruCache<K, V, R> Layout                        │
//! │                                                                             │
//! │   ┌─────────────────────────────────────────────────────────────────────┐   │
//! │   │  index: FxHashMap<K, usize>       slots: Vec<Slot<K, V>>            │   │
//! │   │         key → slot number                dense entry storage        │   │
//! │   │                                                                     │   │
//! │   │  ┌──────────┬──────┐        ┌──────────┬──────────┬──────────┐      │   │
//! │   │  │   Key    │ slot │        │    0     │    1     │    2     │      │   │
//! │   │  ├──────────┼──────┤        ├──────────┼──────────┼──────────┤      │   │
//! │   │  │  "page1" │  2   │───┐    │ k="p3"   │ k="p2"   │ k="p1"   │      │   │
//! │   │  │  "page2" │  1   │───┼───►│ v=..     │ v=..     │ v=..     │      │   │
//! │   │  │  "page3" │  0   │───┘    │ used=17  │ used=41  │ used=40  │      │   │
//! │   │  └──────────┴──────┘        └──────────┴──────────┴──────────┘      │   │
//! │   │                                                                     │   │
//! │   │  Invariant: index[key] == i  ⇔  slots[i].key == key                 │   │
//! │   │  Occupied slots are exactly [0, slots.len()) — no holes.            │   │
//! │   └─────────────────────────────────────────────────────────────────────┘   │
//! │                                                                             │
//! │   ┌─────────────────────────────────────────────────────────────────────┐   │
//! │   │                  Sampled Eviction (O(PROBE_WIDTH))                  │   │
//! │   │                                                                     │   │
//! │   │   1. Draw random base in [0, n)                                     │   │
//! │   │   2. Probe slots (base + 0) % n … (base + PROBE_WIDTH - 1) % n      │   │
//! │   │   3. Victim = probed slot with smallest last_used                   │   │
//! │   │      (ties broken by first-seen-in-probe-order)                     │   │
//! │   │   4. Swap-remove victim, re-point relocated tail entry's index      │   │
//! │   │   5. Fire eviction handler with (&key, &value)                      │   │
//! │   └─────────────────────────────────────────────────────────────────────┘   │
//! │                                                                             │
//! └─────────────────────────────────────────────────────────────────────────────┘
//!
//! Access Flow
//! ───────────
//!
//!   get("key"):
//!     1. Lookup slot number in index
//!     2. Bump entry's last_used to the next logical tick
//!     3. Return &value (storage position never changes)
//!
//! Insert Flow (new key, cache not yet full)
//! ─────────────────────────────────────────
//!
//!   add("new_key", value):
//!     1. Check index - not found
//!     2. Append entry at slot slots.len(), record index mapping
//!     3. If this append just filled the cache: shuffle all slots once,
//!        re-pointing the index per swap. Insertion order up to this point
//!        is sequential and would correlate adjacent slots' ages, skewing
//!        which entries get compared in the same probe run.
//!
//! Insert Flow (new key, cache full)
//! ─────────────────────────────────
//!
//!   add("new_key", value):
//!     1. Sample a victim, swap-remove it, fire the eviction handler
//!     2. Append the new entry in the vacated tail position
//!     3. Returns true (an eviction occurred)
//! ```
//!
//! ## Key Components
//!
//! - [`SampledLruCache`]: the cache itself
//! - [`EvictHandler`]: boxed callback fired for every entry leaving the cache
//! - [`PROBE_WIDTH`]: fixed number of slots examined per eviction
//!
//! ## Operations
//!
//! | Operation     | Time            | Notes                                    |
//! |---------------|-----------------|------------------------------------------|
//! | `get`         | O(1)            | Hash lookup + tick bump                  |
//! | `peek`        | O(1)            | Hash lookup only, recency untouched      |
//! | `add`         | O(1) amortized  | O(PROBE_WIDTH) when evicting; one-time   |
//! |               |                 | O(n) shuffle on first fill               |
//! | `contains`    | O(1)            | Index lookup only                        |
//! | `remove`      | O(1)            | Swap-remove keeps the array dense        |
//! | `resize`      | O(k·PROBE_WIDTH)| k = entries evicted when shrinking       |
//! | `purge`       | O(n)            | Handler fires once per entry             |
//!
//! ## Algorithm Properties
//!
//! - **Approximate recency**: the globally oldest entry is missed by one
//!   eviction only when none of the PROBE_WIDTH probes lands on it; over
//!   repeated evictions that probability decays geometrically.
//! - **Exact at small occupancy**: with `len <= PROBE_WIDTH` the probe run
//!   covers every slot, so eviction degenerates to exact LRU.
//! - **Position-independent**: recency lives in a per-entry logical tick,
//!   never in storage order; `get` does not move entries.
//! - **Unpredictable victims**: the probe base comes from a generator
//!   seeded with OS entropy, so an adversary cannot steer evictions by
//!   timing insertions.
//!
//! ## When to Use
//!
//! **Use sampled LRU when:**
//! - You want LRU-like hit rates without per-access list surgery
//! - The hot path must stay allocation-free and pointer-chasing-free
//! - A single-threaded core behind your own lock or sharding is acceptable
//!
//! **Avoid sampled LRU when:**
//! - You need strict LRU ordering guarantees
//! - You need scan resistance (this policy tracks recency only)
//! - Entries need TTL expiry or weighted sizes
//!
//! ## Example Usage
//!
//! ```
//! use probelru::policy::sampled_lru::SampledLruCache;
//!
//! let mut cache = SampledLruCache::new(2).unwrap();
//! assert!(!cache.add("a", 1));
//! assert!(!cache.add("b", 2));
//!
//! // Refresh "a"; "b" is now the stalest entry. At this occupancy the
//! // probe run covers every slot, so the next eviction is exact.
//! assert_eq!(cache.get(&"a"), Some(&1));
//! assert!(cache.add("c", 3));
//! assert!(!cache.contains(&"b"));
//! assert_eq!(cache.len(), 2);
//! ```
//!
//! ## Thread Safety
//!
//! Not thread-safe and deliberately so: every operation is a plain
//! in-memory mutation with no suspension points. Callers needing
//! concurrency must wrap the cache in external mutual exclusion or shard
//! it.
//!
//! ## Implementation Notes
//!
//! - `FxHashMap<K, usize>` for the key→slot index
//! - `Vec<Slot<K, V>>` reserved to capacity; occupied slots are a dense
//!   prefix, which the wraparound probe arithmetic depends on
//! - Removal swaps the victim with the last occupied slot and pops, fixing
//!   the relocated entry's index entry; tombstones would force the sampler
//!   to skip holes and change its probability analysis
//! - Recency is a strictly monotonic `u64` logical tick, not wall-clock
//!   time, so timestamps never tie

use std::fmt;
use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::ds::probe_rng::{OsSeededRng, SampleRng};
use crate::error::{ConfigError, InvariantError};
use crate::traits::{CoreCache, MutableCache, ReadOnlyCache, SampledLruCacheTrait};

/// Number of slots examined per sampled eviction.
///
/// Raising this sharpens the LRU approximation at a linear cost per
/// eviction; it never affects `get`/`peek`/`contains`.
pub const PROBE_WIDTH: usize = 8;

const _: () = assert!(PROBE_WIDTH >= 2, "a single probe cannot compare recency");

/// Callback fired with `(&key, &value)` for every entry leaving the cache.
pub type EvictHandler<K, V> = Box<dyn FnMut(&K, &V)>;

/// One occupied cell of the slot array.
struct Slot<K, V> {
    key: K,
    value: V,
    /// Logical tick of the last read or write of this entry.
    last_used: u64,
}

/// Fixed-capacity cache with randomized-probe approximate-LRU eviction.
///
/// Keeps a dense slot array plus a key→slot index map. Eviction samples
/// [`PROBE_WIDTH`] slots starting from a random base and removes the
/// stalest one, giving O(1)-expected eviction without the doubly-linked
/// bookkeeping of exact LRU.
///
/// # Type Parameters
///
/// - `K`: Key type, must be `Clone + Eq + Hash`
/// - `V`: Value type
/// - `R`: Random source, defaults to [`OsSeededRng`]
///
/// # Example
///
/// ```
/// use probelru::policy::sampled_lru::SampledLruCache;
///
/// let mut cache = SampledLruCache::new(100).unwrap();
///
/// cache.add("key1", "value1");
/// assert!(cache.contains(&"key1"));
///
/// // Updating an existing key refreshes it in place, without eviction.
/// assert!(!cache.add("key1", "value2"));
/// assert_eq!(cache.peek(&"key1"), Some(&"value2"));
/// ```
///
/// # Eviction Behavior
///
/// When a new key is added at capacity, one entry chosen by the probe
/// sampler is evicted and the configured handler (if any) fires with the
/// departing key and value. The handler also fires for explicit removal,
/// capacity-shrinking [`resize`](Self::resize), and [`purge`](Self::purge).
/// The handler must not re-enter the cache.
pub struct SampledLruCache<K, V, R = OsSeededRng>
where
    K: Clone + Eq + Hash,
{
    /// Maps each live key to its slot number.
    index: FxHashMap<K, usize>,
    /// Dense entry storage; occupied slots are exactly `[0, slots.len())`.
    slots: Vec<Slot<K, V>>,
    /// Maximum number of entries.
    capacity: usize,
    /// Logical clock; bumped on every successful read or write.
    tick: u64,
    /// Probe-base and shuffle randomness.
    rng: R,
    /// Fired for every entry leaving the cache.
    on_evict: Option<EvictHandler<K, V>>,
}

impl<K, V> SampledLruCache<K, V>
where
    K: Clone + Eq + Hash,
{
    /// Creates a cache with the given capacity and no eviction handler.
    ///
    /// The probe generator is seeded from the operating-system CSPRNG.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `capacity` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use probelru::policy::sampled_lru::SampledLruCache;
    ///
    /// let cache: SampledLruCache<String, i32> = SampledLruCache::new(100).unwrap();
    /// assert_eq!(cache.capacity(), 100);
    /// assert!(cache.is_empty());
    ///
    /// assert!(SampledLruCache::<String, i32>::new(0).is_err());
    /// ```
    pub fn new(capacity: usize) -> Result<Self, ConfigError> {
        Self::with_rng_and_handler(capacity, OsSeededRng::from_entropy(), None)
    }

    /// Creates a cache that reports every departing entry to `handler`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `capacity` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use std::cell::RefCell;
    /// use std::rc::Rc;
    /// use probelru::policy::sampled_lru::SampledLruCache;
    ///
    /// let evicted = Rc::new(RefCell::new(Vec::new()));
    /// let log = Rc::clone(&evicted);
    /// let mut cache = SampledLruCache::with_evict_handler(1, move |k: &u64, v: &u64| {
    ///     log.borrow_mut().push((*k, *v));
    /// })
    /// .unwrap();
    ///
    /// cache.add(1, 10);
    /// cache.add(2, 20); // capacity 1: the second add evicts the first
    /// assert_eq!(evicted.borrow().as_slice(), &[(1, 10)]);
    /// ```
    pub fn with_evict_handler<F>(capacity: usize, handler: F) -> Result<Self, ConfigError>
    where
        F: FnMut(&K, &V) + 'static,
    {
        Self::with_rng_and_handler(capacity, OsSeededRng::from_entropy(), Some(Box::new(handler)))
    }
}

impl<K, V, R> SampledLruCache<K, V, R>
where
    K: Clone + Eq + Hash,
    R: SampleRng,
{
    /// Creates a cache driven by the supplied random source.
    ///
    /// Tests use this with a seeded or scripted generator to make victim
    /// selection reproducible; production code should prefer
    /// [`new`](SampledLruCache::new), which seeds from OS entropy.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `capacity` is zero.
    pub fn with_rng(capacity: usize, rng: R) -> Result<Self, ConfigError> {
        Self::with_rng_and_handler(capacity, rng, None)
    }

    /// Creates a cache from all of its collaborators.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `capacity` is zero.
    pub fn with_rng_and_handler(
        capacity: usize,
        rng: R,
        on_evict: Option<EvictHandler<K, V>>,
    ) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::new("capacity must be greater than zero"));
        }
        Ok(Self {
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            slots: Vec::with_capacity(capacity),
            capacity,
            tick: 0,
            rng,
            on_evict,
        })
    }

    /// Adds a value to the cache. Returns `true` if an eviction occurred.
    ///
    /// An already-present key is updated in place and refreshed; that path
    /// never evicts and never fires the eviction handler. A new key is
    /// appended while the cache has room, or replaces a sampled victim once
    /// it is full.
    ///
    /// # Example
    ///
    /// ```
    /// use probelru::policy::sampled_lru::SampledLruCache;
    ///
    /// let mut cache = SampledLruCache::new(2).unwrap();
    /// assert!(!cache.add(1, "one"));
    /// assert!(!cache.add(2, "two"));
    /// assert!(!cache.add(1, "uno")); // update, no eviction
    ///
    /// assert!(cache.add(3, "three")); // full: evicts a sampled victim
    /// assert_eq!(cache.len(), 2);
    /// ```
    pub fn add(&mut self, key: K, value: V) -> bool {
        if self.capacity == 0 {
            return false;
        }
        let tick = self.next_tick();
        if let Some(&idx) = self.index.get(&key) {
            let slot = &mut self.slots[idx];
            slot.value = value;
            slot.last_used = tick;
            return false;
        }

        let evicted = if self.slots.len() < self.capacity {
            self.push_slot(key, value, tick);
            if self.slots.len() == self.capacity {
                // First fill: slots are in insertion order, which would
                // correlate adjacent probes' ages. One uniform permutation
                // removes the correlation for the lifetime of this fill.
                self.shuffle_slots();
            }
            false
        } else {
            self.pop_sampled();
            self.push_slot(key, value, tick);
            true
        };

        #[cfg(debug_assertions)]
        self.validate_invariants();
        evicted
    }

    /// Looks up a key's value, refreshing its recency.
    ///
    /// # Example
    ///
    /// ```
    /// use probelru::policy::sampled_lru::SampledLruCache;
    ///
    /// let mut cache = SampledLruCache::new(10).unwrap();
    /// cache.add("key", 42);
    ///
    /// assert_eq!(cache.get(&"key"), Some(&42));
    /// assert_eq!(cache.get(&"missing"), None);
    /// ```
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let idx = *self.index.get(key)?;
        let tick = self.next_tick();
        let slot = &mut self.slots[idx];
        slot.last_used = tick;
        Some(&slot.value)
    }

    /// Returns the value for a key without refreshing its recency.
    ///
    /// A repeatedly peeked entry remains exactly as likely to be evicted
    /// as if it had never been read.
    ///
    /// # Example
    ///
    /// ```
    /// use probelru::policy::sampled_lru::SampledLruCache;
    ///
    /// let mut cache = SampledLruCache::new(10).unwrap();
    /// cache.add("key", 42);
    ///
    /// assert_eq!(cache.peek(&"key"), Some(&42));
    /// ```
    #[inline]
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.index.get(key).map(|&idx| &self.slots[idx].value)
    }

    /// Checks if a key is in the cache without refreshing its recency.
    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Marks an entry as recently used without retrieving the value.
    ///
    /// Returns `true` if the key was found and refreshed.
    ///
    /// # Example
    ///
    /// ```
    /// use probelru::policy::sampled_lru::SampledLruCache;
    ///
    /// let mut cache = SampledLruCache::new(10).unwrap();
    /// cache.add(1, "one");
    ///
    /// assert!(cache.touch(&1));
    /// assert!(!cache.touch(&99));
    /// ```
    pub fn touch(&mut self, key: &K) -> bool {
        let Some(&idx) = self.index.get(key) else {
            return false;
        };
        let tick = self.next_tick();
        self.slots[idx].last_used = tick;
        true
    }

    /// Removes the provided key from the cache.
    ///
    /// Returns the removed value if the key was present. The eviction
    /// handler fires before the value is returned. The vacated slot is
    /// backfilled by the last occupied slot so storage stays dense.
    ///
    /// # Example
    ///
    /// ```
    /// use probelru::policy::sampled_lru::SampledLruCache;
    ///
    /// let mut cache = SampledLruCache::new(10).unwrap();
    /// cache.add(1, "one");
    ///
    /// assert_eq!(cache.remove(&1), Some("one"));
    /// assert_eq!(cache.remove(&1), None);
    /// assert!(!cache.contains(&1));
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let idx = *self.index.get(key)?;
        let (key, value) = self.remove_at(idx);
        self.notify_evict(&key, &value);

        #[cfg(debug_assertions)]
        self.validate_invariants();
        Some(value)
    }

    /// Evicts one entry chosen by the probe sampler and returns it.
    ///
    /// Draws a random probe base, examines [`PROBE_WIDTH`] slots wrapping
    /// modulo the occupied count, and removes the one with the smallest
    /// `last_used`. Returns `None` if the cache is empty. The eviction
    /// handler fires before the entry is returned.
    ///
    /// # Example
    ///
    /// ```
    /// use probelru::policy::sampled_lru::SampledLruCache;
    ///
    /// let mut cache = SampledLruCache::new(3).unwrap();
    /// cache.add(1, "a");
    /// cache.add(2, "b");
    /// cache.get(&1);
    ///
    /// // Occupancy <= PROBE_WIDTH, so the stalest entry is found exactly.
    /// assert_eq!(cache.pop_sampled(), Some((2, "b")));
    /// ```
    pub fn pop_sampled(&mut self) -> Option<(K, V)> {
        let idx = self.sample_victim()?;
        let (key, value) = self.remove_at(idx);
        self.notify_evict(&key, &value);

        #[cfg(debug_assertions)]
        self.validate_invariants();
        Some((key, value))
    }

    /// Changes the cache capacity. Returns the number of entries evicted.
    ///
    /// Shrinking below the current occupancy evicts one sampled victim at
    /// a time (handler firing for each) until the cache fits; growing only
    /// raises the ceiling and evicts nothing.
    ///
    /// # Example
    ///
    /// ```
    /// use probelru::policy::sampled_lru::SampledLruCache;
    ///
    /// let mut cache = SampledLruCache::new(4).unwrap();
    /// for i in 0..4 {
    ///     cache.add(i, i);
    /// }
    ///
    /// assert_eq!(cache.resize(2), 2);
    /// assert_eq!(cache.len(), 2);
    /// assert_eq!(cache.resize(100), 0);
    /// ```
    pub fn resize(&mut self, capacity: usize) -> usize {
        let mut evicted = 0;
        while self.slots.len() > capacity {
            if self.pop_sampled().is_none() {
                break;
            }
            evicted += 1;
        }
        self.capacity = capacity;

        #[cfg(debug_assertions)]
        self.validate_invariants();
        evicted
    }

    /// Completely clears the cache, preserving the configured capacity.
    ///
    /// The eviction handler fires once per entry, in unspecified order,
    /// before storage is reset.
    ///
    /// # Example
    ///
    /// ```
    /// use probelru::policy::sampled_lru::SampledLruCache;
    ///
    /// let mut cache = SampledLruCache::new(10).unwrap();
    /// cache.add(1, "one");
    /// cache.add(2, "two");
    ///
    /// cache.purge();
    /// assert!(cache.is_empty());
    /// assert_eq!(cache.capacity(), 10);
    /// ```
    pub fn purge(&mut self) {
        self.index.clear();
        if let Some(handler) = self.on_evict.as_mut() {
            for slot in self.slots.drain(..) {
                handler(&slot.key, &slot.value);
            }
        } else {
            self.slots.clear();
        }

        #[cfg(debug_assertions)]
        self.validate_invariants();
    }

    /// Returns the number of items in the cache.
    #[inline]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns `true` if the cache holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Returns the maximum number of entries the cache can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the fixed number of slots examined per sampled eviction.
    #[inline]
    pub fn probe_width(&self) -> usize {
        PROBE_WIDTH
    }

    /// Audits the slot-array/index-map bijection.
    ///
    /// The probe arithmetic silently reads the wrong entries if the two
    /// structures drift apart, so this walks every mapping and reports the
    /// first violation. Debug builds run it automatically after every
    /// mutating operation.
    ///
    /// # Errors
    ///
    /// Returns [`InvariantError`] describing the first violated invariant.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.index.len() != self.slots.len() {
            return Err(InvariantError::new(format!(
                "index has {} keys but {} slots are occupied",
                self.index.len(),
                self.slots.len()
            )));
        }
        if self.slots.len() > self.capacity {
            return Err(InvariantError::new(format!(
                "{} occupied slots exceed capacity {}",
                self.slots.len(),
                self.capacity
            )));
        }
        for (key, &idx) in &self.index {
            if idx >= self.slots.len() {
                return Err(InvariantError::new(format!(
                    "index points at slot {} but only {} slots are occupied",
                    idx,
                    self.slots.len()
                )));
            }
            if self.slots[idx].key != *key {
                return Err(InvariantError::new(format!(
                    "index entry for slot {idx} does not match the key stored there"
                )));
            }
        }
        Ok(())
    }

    // -- internals --------------------------------------------------------

    #[inline]
    fn next_tick(&mut self) -> u64 {
        self.tick = self.tick.saturating_add(1);
        self.tick
    }

    fn push_slot(&mut self, key: K, value: V, tick: u64) {
        let idx = self.slots.len();
        self.index.insert(key.clone(), idx);
        self.slots.push(Slot {
            key,
            value,
            last_used: tick,
        });
    }

    /// Picks the eviction victim: the stalest of PROBE_WIDTH slots probed
    /// sequentially (wrapping) from a random base. `None` when empty.
    fn sample_victim(&mut self) -> Option<usize> {
        let n = self.slots.len();
        if n == 0 {
            return None;
        }
        let base = self.rng.next_index(n);
        let mut victim = base;
        let mut oldest = self.slots[base].last_used;
        for step in 1..PROBE_WIDTH {
            let idx = (base + step) % n;
            let candidate = &self.slots[idx];
            if candidate.last_used < oldest {
                victim = idx;
                oldest = candidate.last_used;
            }
        }
        Some(victim)
    }

    /// Removes the slot at `idx`, backfilling from the tail so occupied
    /// slots stay the dense prefix the sampler's modulo arithmetic needs.
    fn remove_at(&mut self, idx: usize) -> (K, V) {
        let slot = self.slots.swap_remove(idx);
        self.index.remove(&slot.key);
        if idx < self.slots.len() {
            // The former tail entry now lives at idx; re-point its mapping.
            if let Some(moved) = self.index.get_mut(&self.slots[idx].key) {
                *moved = idx;
            }
        }
        (slot.key, slot.value)
    }

    /// Uniformly permutes the slot array, mirroring every swap in the
    /// index map.
    fn shuffle_slots(&mut self) {
        let Self {
            rng, slots, index, ..
        } = self;
        rng.shuffle(slots.len(), &mut |i, j| {
            slots.swap(i, j);
            if let Some(idx) = index.get_mut(&slots[i].key) {
                *idx = i;
            }
            if let Some(idx) = index.get_mut(&slots[j].key) {
                *idx = j;
            }
        });
    }

    fn notify_evict(&mut self, key: &K, value: &V) {
        if let Some(handler) = self.on_evict.as_mut() {
            handler(key, value);
        }
    }

    #[cfg(debug_assertions)]
    fn validate_invariants(&self) {
        if let Err(err) = self.check_invariants() {
            panic!("sampled-lru invariant violated: {err}");
        }
    }
}

impl<K, V, R> fmt::Debug for SampledLruCache<K, V, R>
where
    K: Clone + Eq + Hash,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SampledLruCache")
            .field("capacity", &self.capacity)
            .field("len", &self.slots.len())
            .finish_non_exhaustive()
    }
}

impl<K, V, R> ReadOnlyCache<K, V> for SampledLruCache<K, V, R>
where
    K: Clone + Eq + Hash,
    R: SampleRng,
{
    #[inline]
    fn contains(&self, key: &K) -> bool {
        SampledLruCache::contains(self, key)
    }

    #[inline]
    fn len(&self) -> usize {
        SampledLruCache::len(self)
    }

    #[inline]
    fn capacity(&self) -> usize {
        SampledLruCache::capacity(self)
    }
}

/// [`CoreCache`] implementation, letting the sampled policy be used through
/// the unified cache interface.
///
/// `insert` follows map semantics: updating an existing key returns the
/// previous value. An eviction triggered by inserting a new key at capacity
/// is reported through the eviction handler, not the return value.
impl<K, V, R> CoreCache<K, V> for SampledLruCache<K, V, R>
where
    K: Clone + Eq + Hash,
    R: SampleRng,
{
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        if let Some(&idx) = self.index.get(&key) {
            let tick = self.next_tick();
            let slot = &mut self.slots[idx];
            slot.last_used = tick;
            return Some(std::mem::replace(&mut slot.value, value));
        }
        self.add(key, value);
        None
    }

    #[inline]
    fn get(&mut self, key: &K) -> Option<&V> {
        SampledLruCache::get(self, key)
    }

    #[inline]
    fn contains(&self, key: &K) -> bool {
        SampledLruCache::contains(self, key)
    }

    #[inline]
    fn len(&self) -> usize {
        SampledLruCache::len(self)
    }

    #[inline]
    fn capacity(&self) -> usize {
        SampledLruCache::capacity(self)
    }

    fn clear(&mut self) {
        self.purge();
    }
}

impl<K, V, R> MutableCache<K, V> for SampledLruCache<K, V, R>
where
    K: Clone + Eq + Hash,
    R: SampleRng,
{
    #[inline]
    fn remove(&mut self, key: &K) -> Option<V> {
        SampledLruCache::remove(self, key)
    }
}

impl<K, V, R> SampledLruCacheTrait<K, V> for SampledLruCache<K, V, R>
where
    K: Clone + Eq + Hash,
    R: SampleRng,
{
    #[inline]
    fn peek(&self, key: &K) -> Option<&V> {
        SampledLruCache::peek(self, key)
    }

    #[inline]
    fn pop_sampled(&mut self) -> Option<(K, V)> {
        SampledLruCache::pop_sampled(self)
    }

    #[inline]
    fn touch(&mut self, key: &K) -> bool {
        SampledLruCache::touch(self, key)
    }

    #[inline]
    fn resize(&mut self, capacity: usize) -> usize {
        SampledLruCache::resize(self, capacity)
    }

    #[inline]
    fn probe_width(&self) -> usize {
        SampledLruCache::probe_width(self)
    }
}
