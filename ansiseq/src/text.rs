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

use crate::consts::{BACKGROUND_CODE, FOREGROUND_CODE};
use crate::{ByteGroup, ColorArgument};

/// Which part of the text a color applies to.
///
/// | Code | Description |
/// |------|-------------|
/// | `38` | Foreground  |
/// | `48` | Background  |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorCategory {
    /// Text color
    Foreground,
    /// Cell color behind the text
    Background,
}

impl ColorCategory {
    /// SGR category code.
    pub const fn to_u8(self) -> u8 {
        match self {
            ColorCategory::Foreground => FOREGROUND_CODE,
            ColorCategory::Background => BACKGROUND_CODE,
        }
    }
}

/// A color argument applied to the foreground or background.
///
/// The group is the category code followed by the color's own values, so a foreground
/// palette color `5;n` becomes `38;5;n`.
///
/// # Examples
///
/// ```rust
/// use ansiseq::{ByteGroup, ControlSequence, IndexedColor, RgbColor, StandardColor, TextColor};
///
/// let sequence = ControlSequence::graphic_rendition([
///     ByteGroup::from(TextColor::foreground(RgbColor::new(60, 60, 60))),
///     ByteGroup::from(TextColor::background(IndexedColor::from(StandardColor::White))),
/// ])
/// .unwrap();
/// assert_eq!(sequence.render(), "\x1b[38;2;60;60;60;48;5;15m");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TextColor<C: ColorArgument> {
    category: ColorCategory,
    color: C,
    group: ByteGroup,
}

impl<C: ColorArgument> TextColor<C> {
    /// Apply `color` to `category`.
    pub fn new(category: ColorCategory, color: C) -> TextColor<C> {
        let mut values = Vec::with_capacity(color.values().len() + 1);
        values.push(category.to_u8());
        values.extend_from_slice(color.values());
        TextColor {
            category,
            color,
            group: ByteGroup::from_vec(values),
        }
    }

    /// Apply `color` to the foreground.
    pub fn foreground(color: C) -> TextColor<C> {
        TextColor::new(ColorCategory::Foreground, color)
    }

    /// Apply `color` to the background.
    pub fn background(color: C) -> TextColor<C> {
        TextColor::new(ColorCategory::Background, color)
    }

    /// Foreground or background.
    pub fn category(&self) -> ColorCategory {
        self.category
    }

    /// Color argument being applied.
    pub fn color(&self) -> &C {
        &self.color
    }

    /// Argument group, category code first.
    pub fn group(&self) -> &ByteGroup {
        &self.group
    }

    /// Argument bytes, category code first.
    pub fn values(&self) -> &[u8] {
        self.group.values()
    }
}

/// Shorthand for [`TextColor::foreground`].
pub fn foreground<C: ColorArgument>(color: C) -> TextColor<C> {
    TextColor::foreground(color)
}

/// Shorthand for [`TextColor::background`].
pub fn background<C: ColorArgument>(color: C) -> TextColor<C> {
    TextColor::background(color)
}

impl<C: ColorArgument> AsRef<ByteGroup> for TextColor<C> {
    fn as_ref(&self) -> &ByteGroup {
        &self.group
    }
}

impl<C: ColorArgument> From<TextColor<C>> for ByteGroup {
    fn from(color: TextColor<C>) -> Self {
        color.group
    }
}
