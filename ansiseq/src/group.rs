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

use crate::consts::SEPARATOR;
use crate::{AnsiError, AnsiResult};
use std::fmt::Write;
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;
use tracing::trace;

/// An ordered, non-empty group of byte arguments for a Control Sequence.
///
/// A `ByteGroup` renders as its values in decimal joined by `;`, e.g. `[38, 5, 2]` renders
/// as `38;5;2`. Groups are immutable once built; the rendering is computed on first access
/// and cached for the lifetime of the group.
///
/// # Examples
///
/// ```rust
/// use ansiseq::ByteGroup;
///
/// let group = ByteGroup::new([38, 5, 2]).unwrap();
/// assert_eq!(group.values(), &[38, 5, 2]);
/// assert_eq!(group.render(), "38;5;2");
///
/// assert!(ByteGroup::new(Vec::<u8>::new()).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct ByteGroup {
    values: Vec<u8>,
    rendered: OnceLock<String>,
}

impl ByteGroup {
    /// Create a group from a list of argument bytes.
    ///
    /// # Errors
    ///
    /// Returns [`AnsiError::InvalidArgument`] if `values` is empty.
    pub fn new(values: impl Into<Vec<u8>>) -> AnsiResult<ByteGroup> {
        let values = values.into();
        if values.is_empty() {
            return Err(AnsiError::invalid_argument(
                "values",
                "argument group must contain at least one byte",
            ));
        }
        Ok(ByteGroup::from_vec(values))
    }

    /// Create a group holding a single argument byte.
    pub fn single(value: u8) -> ByteGroup {
        ByteGroup::from_vec(vec![value])
    }

    /// Callers guarantee `values` is non-empty.
    pub(crate) fn from_vec(values: Vec<u8>) -> ByteGroup {
        debug_assert!(!values.is_empty(), "ByteGroup must not be empty");
        ByteGroup {
            values,
            rendered: OnceLock::new(),
        }
    }

    /// Argument bytes in order.
    pub fn values(&self) -> &[u8] {
        &self.values
    }

    /// Rendered `v1;v2;...;vn` form of this group.
    pub fn render(&self) -> &str {
        self.rendered.get_or_init(|| {
            let mut rendered = String::with_capacity(self.values.len() * 4);
            push_joined(&mut rendered, self.values.iter().copied());
            trace!(values = self.values.len(), "rendered byte group");
            rendered
        })
    }

    /// Length of the rendered group in bytes.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.render().len()
    }
}

/// Append `values` to `out` in decimal, separated by `;`.
pub(crate) fn push_joined(out: &mut String, values: impl IntoIterator<Item = u8>) {
    for (position, value) in values.into_iter().enumerate() {
        if position > 0 {
            out.push(SEPARATOR);
        }
        // Writing to a String cannot fail.
        let _ = write!(out, "{}", value);
    }
}

impl PartialEq for ByteGroup {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl Eq for ByteGroup {}

impl Hash for ByteGroup {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.values.hash(state);
    }
}

impl AsRef<ByteGroup> for ByteGroup {
    fn as_ref(&self) -> &ByteGroup {
        self
    }
}

impl From<u8> for ByteGroup {
    fn from(value: u8) -> Self {
        ByteGroup::single(value)
    }
}

impl TryFrom<Vec<u8>> for ByteGroup {
    type Error = AnsiError;

    fn try_from(values: Vec<u8>) -> AnsiResult<Self> {
        ByteGroup::new(values)
    }
}

impl TryFrom<&[u8]> for ByteGroup {
    type Error = AnsiError;

    fn try_from(values: &[u8]) -> AnsiResult<Self> {
        ByteGroup::new(values)
    }
}

impl std::fmt::Display for ByteGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.render())
    }
}
