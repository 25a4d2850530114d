//! Memoizing caches: a lazy single value and a keyed memo map.
//!
//! Both wrap a producer the cache invokes at most once per value/key. The
//! producer must be a pure function of its key (or acceptable to invoke at
//! most once per key): there is no invalidation on upstream changes —
//! staleness management belongs to the caller.
//!
//! Single-threaded by design: interior mutability is `RefCell` and the
//! shared producer is an `Rc`, so neither type is `Send` or `Sync`. A
//! multi-threaded host must wrap a cache in its own lock or keep one per
//! thread, since the check-then-insert in [`CacheMap::get`] is not atomic.

use std::cell::{OnceCell, RefCell};
use std::rc::Rc;

use indexmap::IndexMap;

/// A lazily computed single value.
///
/// The first [`value`](Self::value) call invokes the producer exactly once;
/// the result is retained for the cache's lifetime and never recomputed.
///
/// # Example
///
/// ```rust
/// use bigraph_core::CacheValue;
///
/// let cached = CacheValue::new(|| "expensive".len());
/// assert_eq!(*cached.value(), 9);
/// assert_eq!(*cached.value(), 9);
/// ```
pub struct CacheValue<'a, T> {
    cell: OnceCell<T>,
    producer: Box<dyn Fn() -> T + 'a>,
}

impl<'a, T> CacheValue<'a, T> {
    /// Creates a cache around a producer, invoked on first read.
    #[must_use]
    pub fn new<P>(producer: P) -> Self
    where
        P: Fn() -> T + 'a,
    {
        Self {
            cell: OnceCell::new(),
            producer: Box::new(producer),
        }
    }

    /// Returns the cached value, computing it on first access.
    #[must_use]
    pub fn value(&self) -> &T {
        self.cell.get_or_init(|| (self.producer)())
    }
}

impl<T: Clone + 'static> CacheValue<'_, T> {
    /// Creates an already-resolved cache holding `value`.
    #[must_use]
    pub fn from_value(value: T) -> Self {
        let producer = value.clone();
        let cell = OnceCell::new();
        let _ = cell.set(value);
        Self {
            cell,
            producer: Box::new(move || producer.clone()),
        }
    }
}

/// A keyed memoizing map around a one-argument producer.
///
/// [`get`](Self::get) computes-and-stores on miss and returns the stored
/// value on hit. Entries iterate in insertion order.
///
/// # Example
///
/// ```rust
/// use bigraph_core::CacheMap;
///
/// let cache: CacheMap<String, usize> = CacheMap::new(|key: &String| key.len());
/// assert_eq!(cache.get(&"graph".to_string()), 5);
/// assert_eq!(cache.len(), 1);
///
/// let fresh = cache.reset();
/// assert!(fresh.is_empty());
/// assert_eq!(cache.len(), 1);
/// ```
pub struct CacheMap<'a, K, V> {
    entries: RefCell<IndexMap<K, V>>,
    producer: Rc<dyn Fn(&K) -> V + 'a>,
}

impl<'a, K, V> CacheMap<'a, K, V>
where
    K: std::hash::Hash + Eq + Clone,
    V: Clone,
{
    /// Creates an empty cache around a keyed producer.
    #[must_use]
    pub fn new<P>(producer: P) -> Self
    where
        P: Fn(&K) -> V + 'a,
    {
        Self {
            entries: RefCell::new(IndexMap::new()),
            producer: Rc::new(producer),
        }
    }

    /// Returns the value for `key`, invoking the producer and storing the
    /// result on a miss.
    #[must_use]
    pub fn get(&self, key: &K) -> V {
        if let Some(value) = self.entries.borrow().get(key) {
            return value.clone();
        }
        let value = (self.producer)(key);
        self.entries.borrow_mut().insert(key.clone(), value.clone());
        value
    }

    /// Evicts a single entry, returning the evicted value if one was
    /// present. Preserves the insertion order of the remaining entries.
    pub fn remove(&self, key: &K) -> Option<V> {
        self.entries.borrow_mut().shift_remove(key)
    }

    /// Evicts all entries.
    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }

    /// Returns a brand-new empty cache sharing this cache's producer. The
    /// original cache is untouched.
    #[must_use]
    pub fn reset(&self) -> Self {
        Self {
            entries: RefCell::new(IndexMap::new()),
            producer: Rc::clone(&self.producer),
        }
    }

    /// Returns a read-only snapshot of the entries, in insertion order.
    #[must_use]
    pub fn entries(&self) -> IndexMap<K, V> {
        self.entries.borrow().clone()
    }

    /// Returns the number of cached entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Returns true if no entry is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Returns true if `key` has a cached value.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.borrow().contains_key(key)
    }
}
