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

//! Error types for the counting map and its helpers.

use std::fmt;

/// ErrorKind is all kinds of [`Error`] returned by this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The argument provided is invalid, e.g. a negative increment.
    InvalidArgument,
    /// An increment would push a count past `u64::MAX`.
    CountOverflow,
}

impl ErrorKind {
    /// Converts this kind into a static string.
    pub fn into_static(self) -> &'static str {
        self.into()
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.into_static())
    }
}

impl From<ErrorKind> for &'static str {
    fn from(v: ErrorKind) -> &'static str {
        match v {
            ErrorKind::InvalidArgument => "InvalidArgument",
            ErrorKind::CountOverflow => "CountOverflow",
        }
    }
}

/// Error is the error struct returned by all fallible functions in this crate.
///
/// An operation that returns an `Error` leaves its receiver unchanged.
pub struct Error {
    kind: ErrorKind,
    message: String,
    context: Vec<(&'static str, String)>,
}

impl Error {
    /// Creates a new error with the given kind and message.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            context: vec![],
        }
    }

    /// Adds more context to the error.
    pub fn with_context(mut self, key: &'static str, value: impl ToString) -> Self {
        self.context.push((key, value.to_string()));
        self
    }

    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the message of this error.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the context attached to this error, in insertion order.
    pub fn context(&self) -> &[(&'static str, String)] {
        &self.context
    }
}

// Convenience constructors
impl Error {
    pub(crate) fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument, msg)
    }

    pub(crate) fn negative_delta(delta: i64) -> Self {
        Self::invalid_argument("count increment may not be negative").with_context("delta", delta)
    }

    pub(crate) fn count_overflow(current: u64, delta: u64) -> Self {
        Self::new(ErrorKind::CountOverflow, "count would exceed u64::MAX")
            .with_context("current", current)
            .with_context("delta", delta)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        if !self.context.is_empty() {
            write!(f, ", context: {{ ")?;
            write!(
                f,
                "{}",
                self.context
                    .iter()
                    .map(|(k, v)| format!("{k}: {v}"))
                    .collect::<Vec<_>>()
                    .join(", ")
            )?;
            write!(f, " }}")?;
        }

        if !self.message.is_empty() {
            write!(f, " => {}", self.message)?;
        }

        Ok(())
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // If alternate has been specified, we will print like Debug.
        if f.alternate() {
            let mut de = f.debug_struct("Error");
            de.field("kind", &self.kind);
            de.field("message", &self.message);
            de.field("context", &self.context);
            return de.finish();
        }

        write!(f, "{}", self.kind)?;
        if !self.message.is_empty() {
            write!(f, " => {}", self.message)?;
        }
        writeln!(f)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            writeln!(f, "Context:")?;
            for (k, v) in self.context.iter() {
                writeln!(f, "   {k}: {v}")?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_without_context() {
        let err = Error::invalid_argument("word input is absent");
        assert_eq!(err.to_string(), "InvalidArgument => word input is absent");
    }

    #[test]
    fn test_display_with_context() {
        let err = Error::count_overflow(u64::MAX, 1);
        assert_eq!(
            err.to_string(),
            format!(
                "CountOverflow, context: {{ current: {}, delta: 1 }} => count would exceed u64::MAX",
                u64::MAX
            )
        );
    }

    #[test]
    fn test_negative_delta_carries_delta() {
        let err = Error::negative_delta(-7);
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(err.context(), &[("delta", "-7".to_string())]);
    }

    #[test]
    fn test_alternate_debug_is_struct() {
        let err = Error::invalid_argument("bad");
        let dbg = format!("{err:#?}");
        assert!(dbg.starts_with("Error {"));
        assert!(dbg.contains("InvalidArgument"));
    }

    #[test]
    fn test_implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<Error>();
    }
}
