//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Error types for the ansiseq crate.
//!
//! Every failure in this crate happens while an argument group, command or color is being
//! constructed. Once a value exists it always renders, so rendering has no error path.

use thiserror::Error;

/// Result type alias for operations that may fail with an [`AnsiError`].
pub type AnsiResult<T> = Result<T, AnsiError>;

/// Errors that can occur while constructing ANSI sequence components.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AnsiError {
    /// An argument was outside the values accepted by the constructor.
    ///
    /// Raised for empty argument lists, characters that are not a known command terminator,
    /// and palette indices that have no named standard color.
    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument {
        /// Name of the offending argument
        name: &'static str,
        /// Description of why it's invalid
        reason: String,
    },
}

impl AnsiError {
    /// Build an [`AnsiError::InvalidArgument`] for the named argument.
    pub fn invalid_argument(name: &'static str, reason: impl Into<String>) -> AnsiError {
        AnsiError::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    /// Name of the argument that was rejected.
    pub fn argument(&self) -> &'static str {
        match self {
            AnsiError::InvalidArgument { name, .. } => name,
        }
    }
}
