//! Hash map and set aliases.
//!
//! Internal lookup tables use `hashbrown` with `ahash`. Anything whose
//! iteration order is observable goes through a `BTreeMap` instead.

/// A `hashbrown` map keyed with `ahash`.
pub type FastHashMap<K, V> = hashbrown::HashMap<K, V, ahash::RandomState>;

/// A `hashbrown` set keyed with `ahash`.
pub type FastHashSet<T> = hashbrown::HashSet<T, ahash::RandomState>;

