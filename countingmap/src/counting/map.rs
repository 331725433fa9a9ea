// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Hash-based counting map.

use std::borrow::Borrow;
use std::cell::Ref;
use std::cell::RefCell;
use std::collections::HashMap;
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

use crate::counting::lowest::LowestCount;
use crate::error::Error;

/// A map from keys to their occurrence counts.
///
/// Besides the counts themselves, the map keeps track of which keys currently
/// hold the highest and the lowest count. Counts only ever grow, and a key is
/// present iff its count is at least one.
///
/// Increments, [`count`](Self::count), [`contains_key`](Self::contains_key),
/// [`len`](Self::len) and the highest-count queries run in constant time. The
/// lowest-count queries may need a full scan of the map after an increment
/// moved the last tracked lowest key past the minimum; the result of that scan
/// is cached until the next such increment.
///
/// The lowest-count cache uses interior mutability, so the map is not `Sync`.
/// Share it across threads behind a lock.
///
/// See [`crate::counting`] for an overview.
#[derive(Clone)]
pub struct CountingMap<K> {
    counts: HashMap<K, u64>,
    highest_count: u64,
    keys_at_highest: HashSet<K>,
    lowest: RefCell<LowestCount<K>>,
}

impl<K: Eq + Hash + Clone> CountingMap<K> {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty map with room for at least `capacity` distinct keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            counts: HashMap::with_capacity(capacity),
            highest_count: 0,
            keys_at_highest: HashSet::new(),
            lowest: RefCell::new(LowestCount::Empty),
        }
    }

    /// Increments the count for `key` by one and returns the new count.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::CountOverflow`](crate::error::ErrorKind::CountOverflow)
    /// if the count is already `u64::MAX`.
    pub fn increment_count(&mut self, key: K) -> Result<u64, Error> {
        self.add(key, 1)
    }

    /// Increments the count for `key` by `delta` and returns the new count.
    ///
    /// An absent key is inserted with a count of `delta`. A `delta` of zero
    /// returns the current count and leaves the map untouched; in particular it
    /// never inserts a key with a zero count.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidArgument`](crate::error::ErrorKind::InvalidArgument)
    /// if `delta` is negative, and
    /// [`ErrorKind::CountOverflow`](crate::error::ErrorKind::CountOverflow) if the
    /// new count would exceed `u64::MAX`. The map is unchanged on error.
    pub fn increment_count_by(&mut self, key: K, delta: i64) -> Result<u64, Error> {
        let delta = u64::try_from(delta).map_err(|_| Error::negative_delta(delta))?;
        self.add(key, delta)
    }

    /// Increments the count of each key once per occurrence, in order.
    ///
    /// ```
    /// # use countingmap::counting::CountingMap;
    /// let mut map = CountingMap::new();
    /// map.increment_count_by("bob", 2).unwrap();
    /// map.increment_count("sally").unwrap();
    /// map.increment_counts(["bob", "joe", "bob"]).unwrap();
    /// assert_eq!(map.count("bob"), 4);
    /// assert_eq!(map.count("sally"), 1);
    /// assert_eq!(map.count("joe"), 1);
    /// ```
    ///
    /// # Errors
    ///
    /// Stops at the first key whose count would overflow. Increments applied
    /// before that key are kept.
    pub fn increment_counts<I>(&mut self, keys: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = K>,
    {
        for key in keys {
            self.add(key, 1)?;
        }
        Ok(())
    }

    /// Adds every count of `other` to this map.
    ///
    /// After the merge, the count of each key is the sum of its counts in both
    /// maps. `other` is not modified.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::CountOverflow`](crate::error::ErrorKind::CountOverflow)
    /// if any sum would exceed `u64::MAX`. All sums are checked before the first
    /// write, so the map is unchanged on error.
    pub fn merge_counts(&mut self, other: &CountingMap<K>) -> Result<(), Error> {
        for (key, count) in other.iter() {
            let current = self.count(key);
            if current.checked_add(count).is_none() {
                return Err(Error::count_overflow(current, count));
            }
        }
        for (key, count) in other.iter() {
            self.add(key.clone(), count)?;
        }
        Ok(())
    }

    /// Returns the count for `key`, or zero if the key is absent.
    pub fn count<Q>(&self, key: &Q) -> u64
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Returns an owned snapshot of all counts.
    ///
    /// Mutating the snapshot does not affect the map.
    pub fn counts(&self) -> HashMap<K, u64> {
        self.counts.clone()
    }

    /// Returns an iterator over keys and their counts, in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, u64)> + '_ {
        self.counts.iter().map(|(key, &count)| (key, count))
    }

    /// Returns the highest count, or `None` if the map is empty.
    pub fn highest_count(&self) -> Option<u64> {
        if self.is_empty() {
            None
        } else {
            Some(self.highest_count)
        }
    }

    /// Returns a key holding the highest count, or `None` if the map is empty.
    ///
    /// When several keys are tied, which one is returned is unspecified.
    pub fn key_with_highest_count(&self) -> Option<&K> {
        self.keys_at_highest.iter().next()
    }

    /// Returns every key holding the highest count.
    ///
    /// The set is empty iff the map is empty.
    pub fn keys_with_highest_count(&self) -> HashSet<&K> {
        self.keys_at_highest.iter().collect()
    }

    /// Returns the lowest count, or `None` if the map is empty.
    ///
    /// May scan the whole map, see [`CountingMap`].
    pub fn lowest_count(&self) -> Option<u64> {
        self.fresh_lowest().exact_keys().map(|(count, _)| count)
    }

    /// Returns a key holding the lowest count, or `None` if the map is empty.
    ///
    /// When several keys are tied, which one is returned is unspecified. May
    /// scan the whole map, see [`CountingMap`].
    pub fn key_with_lowest_count(&self) -> Option<&K> {
        // The tracker sits behind a `RefCell`, so hand out the key stored in `counts`.
        match self.fresh_lowest().exact_keys() {
            Some((_, keys)) => keys
                .iter()
                .find_map(|key| self.counts.get_key_value(key).map(|(key, _)| key)),
            None => None,
        }
    }

    /// Returns every key holding the lowest count.
    ///
    /// The set is empty iff the map is empty. May scan the whole map, see
    /// [`CountingMap`].
    pub fn keys_with_lowest_count(&self) -> HashSet<&K> {
        match self.fresh_lowest().exact_keys() {
            Some((_, keys)) => keys
                .iter()
                .filter_map(|key| self.counts.get_key_value(key).map(|(key, _)| key))
                .collect(),
            None => HashSet::new(),
        }
    }

    /// Returns true if, for every key of `other`, this map's count is at least
    /// as large.
    ///
    /// Keys present only in this map are ignored, and an empty `other` is
    /// subsumed by every map.
    pub fn subsumes(&self, other: &CountingMap<K>) -> bool {
        other.iter().all(|(key, count)| self.count(key) >= count)
    }

    /// Returns the number of distinct keys.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns true if the map holds no keys.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Returns true if `key` has a count of at least one.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.counts.contains_key(key)
    }

    fn add(&mut self, key: K, delta: u64) -> Result<u64, Error> {
        if delta == 0 {
            return Ok(self.count(&key));
        }
        let new_count = match self.counts.get_mut(&key) {
            Some(count) => {
                let next = count
                    .checked_add(delta)
                    .ok_or_else(|| Error::count_overflow(*count, delta))?;
                *count = next;
                next
            }
            None => {
                self.counts.insert(key.clone(), delta);
                delta
            }
        };
        self.track(&key, new_count);
        Ok(new_count)
    }

    fn track(&mut self, key: &K, new_count: u64) {
        if new_count > self.highest_count {
            self.highest_count = new_count;
            self.keys_at_highest.clear();
            self.keys_at_highest.insert(key.clone());
        } else if new_count == self.highest_count {
            self.keys_at_highest.insert(key.clone());
        }
        self.lowest.get_mut().observe(key, new_count);
    }

    fn fresh_lowest(&self) -> Ref<'_, LowestCount<K>> {
        let stale = self.lowest.borrow().is_stale();
        if stale {
            self.lowest.borrow_mut().rebuild(&self.counts);
        }
        self.lowest.borrow()
    }
}

impl<K: Eq + Hash + Clone> Default for CountingMap<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Clone> FromIterator<K> for CountingMap<K> {
    /// Creates a map that counts each occurrence of each key, in order.
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut map = Self::with_capacity(iter.size_hint().0);
        for key in iter {
            // A fresh map counts at most one per yielded key, so this never overflows.
            let added = map.add(key, 1);
            debug_assert!(added.is_ok(), "fresh map count overflowed");
        }
        map
    }
}

impl<K: Eq + Hash + Clone> PartialEq for CountingMap<K> {
    fn eq(&self, other: &Self) -> bool {
        self.counts == other.counts
    }
}

impl<K: Eq + Hash + Clone> Eq for CountingMap<K> {}

impl<K: fmt::Debug> fmt::Debug for CountingMap<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CountingMap")
            .field("counts", &self.counts)
            .field("highest_count", &self.highest_count)
            .finish_non_exhaustive()
    }
}
