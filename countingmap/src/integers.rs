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

//! Small integer helpers.

use rand::Rng;

use crate::error::Error;

/// Returns true if `n > 0`.
pub fn is_positive(n: i64) -> bool {
    n > 0
}

/// Returns true if `n < 0`.
pub fn is_negative(n: i64) -> bool {
    n < 0
}

/// Returns true if `n >= 0`.
pub fn is_non_negative(n: i64) -> bool {
    n >= 0
}

/// Returns true if `n <= 0`.
pub fn is_non_positive(n: i64) -> bool {
    n <= 0
}

/// Returns true if `n` is even.
pub fn is_even(n: i64) -> bool {
    n % 2 == 0
}

/// Returns true if `n` is odd.
pub fn is_odd(n: i64) -> bool {
    n % 2 != 0
}

/// Returns a uniformly distributed integer in `[lower, upper]`, using the
/// thread-local generator.
///
/// # Errors
///
/// Returns [`ErrorKind::InvalidArgument`](crate::error::ErrorKind::InvalidArgument)
/// if `lower > upper`.
pub fn random_int(lower: i64, upper: i64) -> Result<i64, Error> {
    random_int_with(&mut rand::rng(), lower, upper)
}

/// Same as [`random_int`], drawing from `rng`.
pub fn random_int_with<R: Rng>(rng: &mut R, lower: i64, upper: i64) -> Result<i64, Error> {
    if lower > upper {
        return Err(Error::invalid_argument("lower bound exceeds upper bound")
            .with_context("lower", lower)
            .with_context("upper", upper));
    }
    Ok(rng.random_range(lower..=upper))
}
