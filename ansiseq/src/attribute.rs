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

use crate::{AnsiError, AnsiResult, ByteGroup};

/// Select Graphic Rendition text attribute.
///
/// Each attribute is a single SGR parameter and converts into a one-byte [`ByteGroup`].
///
/// # Examples
///
/// ```rust
/// use ansiseq::{ByteGroup, ControlSequence, TextAttribute};
///
/// let sequence = ControlSequence::graphic_rendition([
///     TextAttribute::Bold,
///     TextAttribute::Underline,
/// ])
/// .unwrap();
/// assert_eq!(sequence.render(), "\x1b[1;4m");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum TextAttribute {
    /// Reset all attributes (`0`)
    Reset = 0,
    /// Bold or increased intensity (`1`)
    Bold = 1,
    /// Dim or decreased intensity (`2`)
    Dim = 2,
    /// Italic (`3`)
    Italic = 3,
    /// Single underline (`4`)
    Underline = 4,
    /// Slow blink (`5`)
    SlowBlink = 5,
    /// Rapid blink (`6`)
    RapidBlink = 6,
    /// Reverse video (`7`)
    Reverse = 7,
    /// Concealed (`8`)
    Hidden = 8,
    /// Crossed out (`9`)
    Strike = 9,
    /// Neither bold nor dim (`22`)
    NormalIntensity = 22,
    /// Not italic (`23`)
    NotItalic = 23,
    /// Not underlined (`24`)
    NotUnderlined = 24,
    /// Not blinking (`25`)
    NotBlinking = 25,
    /// Not reversed (`27`)
    NotReversed = 27,
    /// Revealed (`28`)
    Revealed = 28,
    /// Not crossed out (`29`)
    NotStruck = 29,
    /// Default foreground color (`39`)
    DefaultForeground = 39,
    /// Default background color (`49`)
    DefaultBackground = 49,
}

impl TextAttribute {
    /// SGR parameter for this attribute.
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Attribute for SGR parameter `value`.
    pub fn from_u8(value: u8) -> Option<TextAttribute> {
        match value {
            0 => Some(TextAttribute::Reset),
            1 => Some(TextAttribute::Bold),
            2 => Some(TextAttribute::Dim),
            3 => Some(TextAttribute::Italic),
            4 => Some(TextAttribute::Underline),
            5 => Some(TextAttribute::SlowBlink),
            6 => Some(TextAttribute::RapidBlink),
            7 => Some(TextAttribute::Reverse),
            8 => Some(TextAttribute::Hidden),
            9 => Some(TextAttribute::Strike),
            22 => Some(TextAttribute::NormalIntensity),
            23 => Some(TextAttribute::NotItalic),
            24 => Some(TextAttribute::NotUnderlined),
            25 => Some(TextAttribute::NotBlinking),
            27 => Some(TextAttribute::NotReversed),
            28 => Some(TextAttribute::Revealed),
            29 => Some(TextAttribute::NotStruck),
            39 => Some(TextAttribute::DefaultForeground),
            49 => Some(TextAttribute::DefaultBackground),
            _ => None,
        }
    }
}

impl TryFrom<u8> for TextAttribute {
    type Error = AnsiError;

    fn try_from(value: u8) -> AnsiResult<Self> {
        TextAttribute::from_u8(value).ok_or_else(|| {
            AnsiError::invalid_argument(
                "attribute",
                format!("{} is not a supported text attribute", value),
            )
        })
    }
}

impl From<TextAttribute> for ByteGroup {
    fn from(attribute: TextAttribute) -> Self {
        ByteGroup::single(attribute.to_u8())
    }
}
