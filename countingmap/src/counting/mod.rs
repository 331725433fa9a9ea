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

//! Counting map with highest and lowest count tracking.
//!
//! # Overview
//!
//! A [`CountingMap`] maps keys to the number of times they occurred. Counts
//! only grow: the map is updated through increments and merges, and there is
//! no way to remove a key. A key is present iff its count is at least one.
//!
//! Alongside the counts, the map maintains the tie-sets of keys at the highest
//! and at the lowest count.
//!
//! * The highest tie-set is kept exact on every increment in constant time. A
//!   key can only join it by matching the current maximum or replace it by
//!   exceeding it.
//! * The lowest tie-set is kept exact on increments until the last key at the
//!   minimum grows past it. From then on the map only knows a lower bound for
//!   the minimum, and the next lowest-count query rebuilds the tie-set with a
//!   full scan. Callers that need constant-time lowest-count queries should
//!   batch their writes before reading.
//!
//! When several keys are tied, [`CountingMap::key_with_highest_count`] and
//! [`CountingMap::key_with_lowest_count`] return an arbitrary one of them.
//!
//! # Errors
//!
//! Negative increments are rejected with
//! [`ErrorKind::InvalidArgument`](crate::error::ErrorKind::InvalidArgument),
//! and increments that would overflow a `u64` count with
//! [`ErrorKind::CountOverflow`](crate::error::ErrorKind::CountOverflow). A
//! rejected increment leaves the map unchanged.
//!
//! # Examples
//!
//! ```
//! # use countingmap::counting::CountingMap;
//! let mut map = CountingMap::new();
//! map.increment_count_by("a", 2).unwrap();
//! map.increment_count("b").unwrap();
//! assert_eq!(map.key_with_highest_count(), Some(&"a"));
//! assert_eq!(map.key_with_lowest_count(), Some(&"b"));
//!
//! map.increment_count("b").unwrap();
//! assert_eq!(map.keys_with_highest_count().len(), 2);
//! assert_eq!(map.keys_with_lowest_count().len(), 2);
//!
//! assert!(map.increment_count_by("a", -1).is_err());
//! assert_eq!(map.count("a"), 2);
//! ```
//!
//! Maps can be built from a sequence of keys and compared by subsumption:
//!
//! ```
//! # use countingmap::counting::CountingMap;
//! let pool: CountingMap<char> = "lottery".chars().collect();
//! let target: CountingMap<char> = "tote".chars().collect();
//! assert!(pool.subsumes(&target));
//! assert!(!target.subsumes(&pool));
//! ```

mod lowest;
mod map;

pub use self::map::CountingMap;
