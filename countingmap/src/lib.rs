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

//! # Counting map
//!
//! A hash map from keys to occurrence counts that keeps track of which keys
//! hold the highest and the lowest count.
//!
//! The crate provides:
//!
//! * [`counting`]: the [`CountingMap`](counting::CountingMap) itself.
//! * [`word`]: a string paired with the multiset of its characters, answering
//!   whether one string can be spelled from the letters of another.
//! * [`integers`]: small sign, parity and random-range helpers.
//!
//! The library does not install a logger. Lowest-count rebuilds are reported
//! at `trace` level through the [`log`] facade.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]

pub mod counting;
pub mod error;
pub mod integers;
pub mod word;
