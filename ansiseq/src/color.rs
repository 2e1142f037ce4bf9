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

//! SGR color argument groups.
//!
//! | Group        | Description         |
//! |--------------|---------------------|
//! | `5;n`        | 8-bit palette index |
//! | `2;r;g;b`    | 24-bit RGB          |
//!
//! These groups carry no foreground/background selector on their own. Wrap them in a
//! [`TextColor`](crate::TextColor) to apply them to text.

use crate::consts::{INDEXED_COLOR_CODE, RGB_COLOR_CODE};
use crate::{AnsiError, AnsiResult, ByteGroup};

/// An argument group that encodes a color.
///
/// Only color groups may be wrapped in a [`TextColor`](crate::TextColor); plain
/// [`ByteGroup`]s do not implement this trait.
pub trait ColorArgument {
    /// Argument group encoding this color.
    fn group(&self) -> &ByteGroup;

    /// Argument bytes encoding this color.
    fn values(&self) -> &[u8] {
        self.group().values()
    }
}

/// The sixteen named colors at the start of the 256-color palette.
///
/// - Colours 0 to 7 are the standard colors. These can usually be changed in the terminal
///   emulator.
/// - Colours 8 to 15 are brighter versions of the eight colors above.
///
/// Reference [XTerm - Color Chart](https://upload.wikimedia.org/wikipedia/commons/1/15/Xterm_256color_chart.svg).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum StandardColor {
    /// Color #0
    Black = 0,
    /// Color #1
    Maroon = 1,
    /// Color #2
    Green = 2,
    /// Color #3
    Olive = 3,
    /// Color #4
    Navy = 4,
    /// Color #5
    Purple = 5,
    /// Color #6
    Teal = 6,
    /// Color #7
    Silver = 7,
    /// Color #8
    Grey = 8,
    /// Color #9
    Red = 9,
    /// Color #10
    Lime = 10,
    /// Color #11
    Yellow = 11,
    /// Color #12
    Blue = 12,
    /// Color #13
    Fuchsia = 13,
    /// Color #14
    Aqua = 14,
    /// Color #15
    White = 15,
}

impl StandardColor {
    /// Every standard color, ordered by palette index.
    pub const ALL: [StandardColor; 16] = [
        StandardColor::Black,
        StandardColor::Maroon,
        StandardColor::Green,
        StandardColor::Olive,
        StandardColor::Navy,
        StandardColor::Purple,
        StandardColor::Teal,
        StandardColor::Silver,
        StandardColor::Grey,
        StandardColor::Red,
        StandardColor::Lime,
        StandardColor::Yellow,
        StandardColor::Blue,
        StandardColor::Fuchsia,
        StandardColor::Aqua,
        StandardColor::White,
    ];

    /// Palette index of this color.
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Named color at palette `index`, if it has one.
    pub fn from_u8(index: u8) -> Option<StandardColor> {
        StandardColor::ALL.get(usize::from(index)).copied()
    }
}

impl TryFrom<u8> for StandardColor {
    type Error = AnsiError;

    fn try_from(index: u8) -> AnsiResult<Self> {
        StandardColor::from_u8(index).ok_or_else(|| {
            AnsiError::invalid_argument(
                "index",
                format!("palette index {} has no named standard color (0-15)", index),
            )
        })
    }
}

/// An 8-bit palette color, encoded as `5;n`.
///
/// # Examples
///
/// ```rust
/// use ansiseq::{ColorArgument, IndexedColor, StandardColor};
///
/// let color = IndexedColor::new(196);
/// assert_eq!(color.values(), &[5, 196]);
/// assert!(color.to_standard().is_err());
///
/// let white = IndexedColor::from(StandardColor::White);
/// assert_eq!(white.to_standard(), Ok(StandardColor::White));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct IndexedColor {
    index: u8,
    group: ByteGroup,
}

impl IndexedColor {
    /// Palette color at `index`.
    pub fn new(index: u8) -> IndexedColor {
        IndexedColor {
            index,
            group: ByteGroup::from_vec(vec![INDEXED_COLOR_CODE, index]),
        }
    }

    /// Palette color for a named standard color.
    pub fn standard(color: StandardColor) -> IndexedColor {
        IndexedColor::new(color.to_u8())
    }

    /// Palette index.
    pub fn index(&self) -> u8 {
        self.index
    }

    /// Named standard color for this index.
    ///
    /// # Errors
    ///
    /// Returns [`AnsiError::InvalidArgument`] if the index is 16 or higher.
    pub fn to_standard(&self) -> AnsiResult<StandardColor> {
        StandardColor::try_from(self.index)
    }
}

impl ColorArgument for IndexedColor {
    fn group(&self) -> &ByteGroup {
        &self.group
    }
}

impl From<StandardColor> for IndexedColor {
    fn from(color: StandardColor) -> Self {
        IndexedColor::standard(color)
    }
}

impl TryFrom<&IndexedColor> for StandardColor {
    type Error = AnsiError;

    fn try_from(color: &IndexedColor) -> AnsiResult<Self> {
        color.to_standard()
    }
}

impl TryFrom<IndexedColor> for StandardColor {
    type Error = AnsiError;

    fn try_from(color: IndexedColor) -> AnsiResult<Self> {
        color.to_standard()
    }
}

impl From<IndexedColor> for ByteGroup {
    fn from(color: IndexedColor) -> Self {
        color.group
    }
}

/// A 24-bit RGB color, as specified by ISO-8613-3, encoded as `2;r;g;b`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RgbColor {
    group: ByteGroup,
}

impl RgbColor {
    /// Color with the given red, green and blue levels.
    pub fn new(red: u8, green: u8, blue: u8) -> RgbColor {
        RgbColor {
            group: ByteGroup::from_vec(vec![RGB_COLOR_CODE, red, green, blue]),
        }
    }

    /// Red level.
    pub fn red(&self) -> u8 {
        self.group.values()[1]
    }

    /// Green level.
    pub fn green(&self) -> u8 {
        self.group.values()[2]
    }

    /// Blue level.
    pub fn blue(&self) -> u8 {
        self.group.values()[3]
    }
}

impl ColorArgument for RgbColor {
    fn group(&self) -> &ByteGroup {
        &self.group
    }
}

impl From<(u8, u8, u8)> for RgbColor {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        RgbColor::new(red, green, blue)
    }
}

impl From<RgbColor> for ByteGroup {
    fn from(color: RgbColor) -> Self {
        color.group
    }
}
