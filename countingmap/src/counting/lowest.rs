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

//! Lowest-count tie-set tracker.
//!
//! Increments can only move a key away from the minimum. When the last tracked
//! key at the minimum grows past it, the tracker cannot know which key now holds
//! the minimum without a full scan, so it records only a lower bound and
//! becomes stale until the next read rebuilds it.

use std::collections::HashMap;
use std::collections::HashSet;
use std::hash::Hash;

#[derive(Debug, Clone)]
pub(super) enum LowestCount<K> {
    /// The map holds no keys.
    Empty,
    /// `keys` is exactly the set of keys whose count is `count`, and `count` is
    /// the minimum over the map. `keys` is never empty.
    Exact { count: u64, keys: HashSet<K> },
    /// Every count in the map is strictly greater than `floor`.
    Stale { floor: u64 },
}

impl<K: Eq + Hash + Clone> LowestCount<K> {
    fn exact(key: &K, count: u64) -> Self {
        let mut keys = HashSet::new();
        keys.insert(key.clone());
        Self::Exact { count, keys }
    }

    /// Records that `key` now has `new_count`. Counts never decrease.
    pub fn observe(&mut self, key: &K, new_count: u64) {
        match self {
            Self::Empty => *self = Self::exact(key, new_count),
            Self::Exact { count, keys } => {
                if new_count < *count {
                    *self = Self::exact(key, new_count);
                } else if new_count == *count {
                    keys.insert(key.clone());
                } else {
                    keys.remove(key);
                    if keys.is_empty() {
                        let floor = *count;
                        *self = Self::Stale { floor };
                    }
                }
            }
            Self::Stale { floor } => {
                // Only a key that was absent can land at or below the floor.
                if new_count <= *floor {
                    *self = Self::exact(key, new_count);
                }
            }
        }
    }

    pub fn is_stale(&self) -> bool {
        matches!(self, Self::Stale { .. })
    }

    /// Recomputes the tie-set with a full scan of `counts`.
    pub fn rebuild(&mut self, counts: &HashMap<K, u64>) {
        let mut lowest = u64::MAX;
        let mut keys = HashSet::new();
        for (key, &count) in counts {
            if count < lowest {
                lowest = count;
                keys.clear();
                keys.insert(key.clone());
            } else if count == lowest {
                keys.insert(key.clone());
            }
        }
        log::trace!(
            "rebuilt lowest-count tie-set: scanned {} keys, lowest count {}, {} tied",
            counts.len(),
            lowest,
            keys.len()
        );
        *self = if keys.is_empty() {
            Self::Empty
        } else {
            Self::Exact {
                count: lowest,
                keys,
            }
        };
    }

    /// Returns the minimum count and the keys holding it.
    ///
    /// Returns `None` when empty or stale; callers rebuild first.
    pub fn exact_keys(&self) -> Option<(u64, &HashSet<K>)> {
        match self {
            Self::Exact { count, keys } => Some((*count, keys)),
            Self::Empty | Self::Stale { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys_of(tracker: &LowestCount<&'static str>) -> Vec<&'static str> {
        let mut keys: Vec<_> = tracker
            .exact_keys()
            .map(|(_, keys)| keys.iter().copied().collect())
            .unwrap_or_default();
        keys.sort();
        keys
    }

    #[test]
    fn test_first_observation_is_exact() {
        let mut tracker = LowestCount::Empty;
        tracker.observe(&"a", 3);
        assert_eq!(tracker.exact_keys().map(|(c, _)| c), Some(3));
        assert_eq!(keys_of(&tracker), vec!["a"]);
    }

    #[test]
    fn test_growing_past_minimum_goes_stale() {
        let mut tracker = LowestCount::Empty;
        let mut counts = HashMap::new();
        counts.insert("a", 1);
        tracker.observe(&"a", 1);
        counts.insert("b", 1);
        tracker.observe(&"b", 1);
        assert_eq!(keys_of(&tracker), vec!["a", "b"]);

        counts.insert("a", 5);
        tracker.observe(&"a", 5);
        assert!(!tracker.is_stale());
        assert_eq!(keys_of(&tracker), vec!["b"]);

        counts.insert("b", 2);
        tracker.observe(&"b", 2);
        assert!(tracker.is_stale());
        assert!(tracker.exact_keys().is_none());

        tracker.rebuild(&counts);
        assert_eq!(tracker.exact_keys().map(|(c, _)| c), Some(2));
        assert_eq!(keys_of(&tracker), vec!["b"]);
    }

    #[test]
    fn test_new_key_at_or_below_floor_clears_staleness() {
        let mut tracker = LowestCount::Stale { floor: 4 };
        tracker.observe(&"x", 9);
        assert!(tracker.is_stale());

        tracker.observe(&"y", 4);
        assert!(!tracker.is_stale());
        assert_eq!(tracker.exact_keys().map(|(c, _)| c), Some(4));
        assert_eq!(keys_of(&tracker), vec!["y"]);
    }

    #[test]
    fn test_rebuild_of_empty_map_is_empty() {
        let mut tracker: LowestCount<&'static str> = LowestCount::Stale { floor: 1 };
        tracker.rebuild(&HashMap::new());
        assert!(matches!(tracker, LowestCount::Empty));
    }
}
