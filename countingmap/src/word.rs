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

//! Character-multiset view of a string.

use std::fmt;

use crate::counting::CountingMap;
use crate::error::Error;

/// A string together with the multiset of its characters.
///
/// Every `char` counts, whitespace included.
///
/// ```
/// # use countingmap::word::Word;
/// let word = Word::from("lottery");
/// assert!(word.can_make("lot"));
/// assert!(word.can_make("try"));
/// assert!(!word.can_make("lotteries"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    string: String,
    char_counts: CountingMap<char>,
}

impl Word {
    /// Creates a word from an optional string.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidArgument`](crate::error::ErrorKind::InvalidArgument)
    /// if `string` is `None`.
    pub fn new(string: Option<&str>) -> Result<Self, Error> {
        string
            .map(Word::from)
            .ok_or_else(|| Error::invalid_argument("word input is absent"))
    }

    /// Returns the string this word was created from.
    pub fn as_str(&self) -> &str {
        &self.string
    }

    /// Returns the character counts of this word.
    pub fn char_counts(&self) -> &CountingMap<char> {
        &self.char_counts
    }

    /// Returns true if `target` can be spelled with the characters of this word.
    ///
    /// Each character of this word may be used at most once. The empty string
    /// can be made from any word.
    pub fn can_make(&self, target: &str) -> bool {
        self.can_make_word(&Word::from(target))
    }

    /// Same as [`Word::can_make`], for a word that is already built.
    pub fn can_make_word(&self, other: &Word) -> bool {
        self.char_counts.subsumes(&other.char_counts)
    }
}

impl From<&str> for Word {
    fn from(string: &str) -> Self {
        Self::from(string.to_owned())
    }
}

impl From<String> for Word {
    fn from(string: String) -> Self {
        let char_counts = string.chars().collect();
        Self {
            string,
            char_counts,
        }
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.string)
    }
}
