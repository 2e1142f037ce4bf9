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

//! Typed construction of ANSI Control Sequences.
//!
//! Arguments are built as [`ByteGroup`]s (raw bytes, [`TextAttribute`]s, or colors wrapped in
//! a [`TextColor`]), combined with a [`Command`] into a [`ControlSequence`], and rendered to
//! the `ESC [ <args> <terminator>` string a terminal understands. Writing that string to a
//! terminal is left to the caller.

mod attribute;
mod color;
mod command;
mod config;
pub mod consts;
mod group;
mod result;
mod sequence;
mod text;

pub use self::attribute::TextAttribute;
pub use self::color::{ColorArgument, IndexedColor, RgbColor, StandardColor};
pub use self::command::Command;
pub use self::config::AnsiConfig;
pub use self::group::ByteGroup;
pub use self::result::{AnsiError, AnsiResult};
pub use self::sequence::ControlSequence;
pub use self::text::{ColorCategory, TextColor, background, foreground};
