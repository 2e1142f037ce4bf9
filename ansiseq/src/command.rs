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

use crate::{AnsiError, AnsiResult};

/// Control Sequence Introducer (CSI) Command
///
/// Each command is represented by the final byte that terminates its escape sequence,
/// so `Command::CursorUp as u8 == b'A'`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Command {
    // Cursor Controls
    /// CUU - Cursor Up
    /// ESC[#A - moves cursor up # lines
    CursorUp = b'A',

    /// CUD - Cursor Down
    /// ESC[#B - moves cursor down # lines
    CursorDown = b'B',

    /// CUF - Cursor Forward
    /// ESC[#C - moves cursor right # columns
    CursorForward = b'C',

    /// CUB - Cursor Back
    /// ESC[#D - moves cursor left # columns
    CursorBack = b'D',

    /// CNL - Cursor Next Line
    /// ESC[#E - moves the cursor to the beginning of the next line, # lines down
    CursorNextLine = b'E',

    /// CPL - Cursor Previous Line
    /// ESC[#F - moves the cursor to the beginning of the previous line, # lines up
    CursorPreviousLine = b'F',

    /// CHA - Cursor Horizontal Absolute
    /// ESC[#G - moves cursor to column #
    CursorHorizontalAbsolute = b'G',

    /// CUP - Cursor Position
    /// ESC[{line};{column}H
    CursorPosition = b'H',

    /// HVP - Horizontal Vertical Position
    /// ESC[{line};{column}f
    HorizontalVerticalPosition = b'f',

    /// DSR - Device Status Report
    /// ESC[6n - request cursor position (reports as ESC[#;#R)
    DeviceStatusReport = b'n',

    /// SCP - Save Cursor Position (SCO)
    SaveCursorPosition = b's',

    /// RCP - Restore Cursor Position (SCO)
    RestoreCursorPosition = b'u',

    // Erase Functions
    /// ED - Erase in Display
    /// ESC[0J - erase from cursor until end of screen
    /// ESC[1J - erase from cursor to beginning of screen
    /// ESC[2J - erase entire screen
    /// ESC[3J - erase saved lines
    ClearScreen = b'J',

    /// EL - Erase in Line
    /// ESC[0K - erase from cursor to end of line
    /// ESC[1K - erase start of line to the cursor
    /// ESC[2K - erase the entire line
    ClearLine = b'K',

    // Scrolling
    /// SU - Scroll Up
    /// ESC[#S - Scroll up # lines
    ScrollUp = b'S',

    /// SD - Scroll Down
    /// ESC[#T - Scroll down # lines
    ScrollDown = b'T',

    // Insert/Delete
    /// ICH - Insert Character
    /// ESC[#@ - Insert # blank characters
    InsertCharacter = b'@',

    /// DCH - Delete Character
    /// ESC[#P - Delete # characters
    DeleteCharacter = b'P',

    /// IL - Insert Line
    /// ESC[#L - Insert # blank lines
    InsertLine = b'L',

    /// DL - Delete Line
    /// ESC[#M - Delete # lines
    DeleteLine = b'M',

    /// ECH - Erase Character
    /// ESC[#X - Erase # characters from the cursor position
    EraseCharacter = b'X',

    /// SGR - Select Graphic Rendition
    /// ESC[{attributes}m - set text attributes and colors
    SelectGraphicRendition = b'm',
}

impl Command {
    /// Every defined command.
    pub const ALL: [Command; 22] = [
        Command::CursorUp,
        Command::CursorDown,
        Command::CursorForward,
        Command::CursorBack,
        Command::CursorNextLine,
        Command::CursorPreviousLine,
        Command::CursorHorizontalAbsolute,
        Command::CursorPosition,
        Command::HorizontalVerticalPosition,
        Command::DeviceStatusReport,
        Command::SaveCursorPosition,
        Command::RestoreCursorPosition,
        Command::ClearScreen,
        Command::ClearLine,
        Command::ScrollUp,
        Command::ScrollDown,
        Command::InsertCharacter,
        Command::DeleteCharacter,
        Command::InsertLine,
        Command::DeleteLine,
        Command::EraseCharacter,
        Command::SelectGraphicRendition,
    ];

    /// Final byte that terminates this command's sequence.
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Final character that terminates this command's sequence.
    pub const fn terminator(self) -> char {
        self as u8 as char
    }

    /// Whether this command sets graphic attributes rather than moving or erasing.
    pub const fn is_graphic_rendition(self) -> bool {
        matches!(self, Command::SelectGraphicRendition)
    }

    /// Look up the command terminated by `value`.
    pub fn from_u8(value: u8) -> Option<Command> {
        match value {
            b'A' => Some(Command::CursorUp),
            b'B' => Some(Command::CursorDown),
            b'C' => Some(Command::CursorForward),
            b'D' => Some(Command::CursorBack),
            b'E' => Some(Command::CursorNextLine),
            b'F' => Some(Command::CursorPreviousLine),
            b'G' => Some(Command::CursorHorizontalAbsolute),
            b'H' => Some(Command::CursorPosition),
            b'f' => Some(Command::HorizontalVerticalPosition),
            b'n' => Some(Command::DeviceStatusReport),
            b's' => Some(Command::SaveCursorPosition),
            b'u' => Some(Command::RestoreCursorPosition),
            b'J' => Some(Command::ClearScreen),
            b'K' => Some(Command::ClearLine),
            b'S' => Some(Command::ScrollUp),
            b'T' => Some(Command::ScrollDown),
            b'@' => Some(Command::InsertCharacter),
            b'P' => Some(Command::DeleteCharacter),
            b'L' => Some(Command::InsertLine),
            b'M' => Some(Command::DeleteLine),
            b'X' => Some(Command::EraseCharacter),
            b'm' => Some(Command::SelectGraphicRendition),
            _ => None,
        }
    }
}

impl TryFrom<u8> for Command {
    type Error = AnsiError;

    fn try_from(value: u8) -> AnsiResult<Self> {
        Command::from_u8(value).ok_or_else(|| {
            AnsiError::invalid_argument(
                "command",
                format!("{:#04X} is not a known command terminator", value),
            )
        })
    }
}

impl TryFrom<char> for Command {
    type Error = AnsiError;

    fn try_from(value: char) -> AnsiResult<Self> {
        u8::try_from(value)
            .ok()
            .and_then(Command::from_u8)
            .ok_or_else(|| {
                AnsiError::invalid_argument(
                    "command",
                    format!("{:?} is not a known command terminator", value),
                )
            })
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.terminator())
    }
}
