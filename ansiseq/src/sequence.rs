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

use crate::consts::{CSI_BRACKET, ESC};
use crate::group::push_joined;
use crate::{AnsiConfig, AnsiError, AnsiResult, ByteGroup, Command};
use bytes::BufMut;
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;
use tracing::trace;

/// A complete ANSI Control Sequence: one [`Command`] applied to one or more [`ByteGroup`]s.
///
/// Renders as `ESC [ <args> <terminator>`, where `<args>` is every group's values joined by
/// `;`. Group boundaries do not appear in the output, so `[38, 5, 2]` followed by `[4]`
/// renders the same as a single group `[38, 5, 2, 4]`.
///
/// The rendering is computed once, on first access, and reused afterwards.
///
/// # Examples
///
/// ```rust
/// use ansiseq::{ByteGroup, Command, ControlSequence};
///
/// let sequence = ControlSequence::new(
///     Command::SelectGraphicRendition,
///     [ByteGroup::new([38, 5, 2]).unwrap(), ByteGroup::single(4)],
/// )
/// .unwrap();
/// assert_eq!(sequence.render(), "\x1b[38;5;2;4m");
///
/// let reset = ControlSequence::from_bytes(Command::SelectGraphicRendition, [0]).unwrap();
/// println!("{}plain text", reset);
/// ```
#[derive(Clone, Debug)]
pub struct ControlSequence {
    command: Command,
    groups: Vec<ByteGroup>,
    rendered: OnceLock<String>,
}

impl ControlSequence {
    /// Create a sequence from a command and its argument groups.
    ///
    /// # Errors
    ///
    /// Returns [`AnsiError::InvalidArgument`] if `groups` yields no groups.
    pub fn new<I, G>(command: Command, groups: I) -> AnsiResult<ControlSequence>
    where
        I: IntoIterator<Item = G>,
        G: Into<ByteGroup>,
    {
        let groups: Vec<ByteGroup> = groups.into_iter().map(Into::into).collect();
        if groups.is_empty() {
            return Err(AnsiError::invalid_argument(
                "groups",
                "control sequence requires at least one argument group",
            ));
        }
        Ok(ControlSequence::from_groups(command, groups))
    }

    /// Create a sequence whose arguments form a single group of raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`AnsiError::InvalidArgument`] if `values` is empty.
    pub fn from_bytes(
        command: Command,
        values: impl Into<Vec<u8>>,
    ) -> AnsiResult<ControlSequence> {
        Ok(ControlSequence::with_group(command, ByteGroup::new(values)?))
    }

    /// Create a sequence from a single argument group.
    pub fn with_group(command: Command, group: impl Into<ByteGroup>) -> ControlSequence {
        ControlSequence::from_groups(command, vec![group.into()])
    }

    fn from_groups(command: Command, groups: Vec<ByteGroup>) -> ControlSequence {
        ControlSequence {
            command,
            groups,
            rendered: OnceLock::new(),
        }
    }

    /// SGR `0`, clearing every text attribute and color.
    pub fn reset() -> ControlSequence {
        ControlSequence::with_group(Command::SelectGraphicRendition, ByteGroup::single(0))
    }

    /// SGR sequence from attribute and color groups.
    ///
    /// # Errors
    ///
    /// Returns [`AnsiError::InvalidArgument`] if `groups` yields no groups.
    pub fn graphic_rendition<I, G>(groups: I) -> AnsiResult<ControlSequence>
    where
        I: IntoIterator<Item = G>,
        G: Into<ByteGroup>,
    {
        ControlSequence::new(Command::SelectGraphicRendition, groups)
    }

    /// Move the cursor up `lines` lines.
    pub fn cursor_up(lines: u8) -> ControlSequence {
        ControlSequence::with_group(Command::CursorUp, lines)
    }

    /// Move the cursor down `lines` lines.
    pub fn cursor_down(lines: u8) -> ControlSequence {
        ControlSequence::with_group(Command::CursorDown, lines)
    }

    /// Move the cursor right `columns` columns.
    pub fn cursor_forward(columns: u8) -> ControlSequence {
        ControlSequence::with_group(Command::CursorForward, columns)
    }

    /// Move the cursor left `columns` columns.
    pub fn cursor_back(columns: u8) -> ControlSequence {
        ControlSequence::with_group(Command::CursorBack, columns)
    }

    /// Move the cursor to the 1-based `row` and `col`.
    pub fn cursor_position(row: u8, col: u8) -> ControlSequence {
        ControlSequence::with_group(Command::CursorPosition, ByteGroup::from_vec(vec![row, col]))
    }

    /// Erase the entire screen.
    pub fn clear_screen() -> ControlSequence {
        ControlSequence::with_group(Command::ClearScreen, ByteGroup::single(2))
    }

    /// Erase the entire current line.
    pub fn clear_line() -> ControlSequence {
        ControlSequence::with_group(Command::ClearLine, ByteGroup::single(2))
    }

    /// Command terminating this sequence.
    pub fn command(&self) -> Command {
        self.command
    }

    /// Argument groups in order.
    pub fn groups(&self) -> &[ByteGroup] {
        &self.groups
    }

    /// Every argument byte across all groups, in order.
    pub fn values(&self) -> impl Iterator<Item = u8> + '_ {
        self.groups
            .iter()
            .flat_map(|group| group.values().iter().copied())
    }

    /// Rendered escape sequence.
    pub fn render(&self) -> &str {
        self.rendered.get_or_init(|| {
            let mut rendered = String::with_capacity(3 + self.groups.len() * 8);
            rendered.push(ESC);
            rendered.push(CSI_BRACKET);
            push_joined(&mut rendered, self.values());
            rendered.push(self.command.terminator());
            trace!(
                command = ?self.command,
                length = rendered.len(),
                "rendered control sequence"
            );
            rendered
        })
    }

    /// Length of the rendered sequence in bytes.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.render().len()
    }

    /// Encode this sequence to a `BufMut` buffer, returning the number of bytes written.
    pub fn encode<T: BufMut>(&self, dst: &mut T) -> usize {
        let rendered = self.render();
        dst.put_slice(rendered.as_bytes());
        rendered.len()
    }

    /// Write this sequence to a `std::io::Write` writer.
    ///
    /// # Errors
    ///
    /// Returns any error raised by `writer`.
    pub fn write<W: std::io::Write>(&self, writer: &mut W) -> std::io::Result<usize> {
        let rendered = self.render();
        writer.write_all(rendered.as_bytes())?;
        Ok(rendered.len())
    }

    /// Write this sequence to a `std::fmt::Write` writer unless `config` strips it.
    ///
    /// A `config` of `None` behaves like [`AnsiConfig::enabled`].
    ///
    /// # Errors
    ///
    /// Returns any error raised by `writer`.
    pub fn write_str<W: std::fmt::Write>(
        &self,
        writer: &mut W,
        config: Option<&AnsiConfig>,
    ) -> std::fmt::Result {
        match config {
            Some(config) if !config.allows(self.command) => Ok(()),
            _ => writer.write_str(self.render()),
        }
    }
}

impl PartialEq for ControlSequence {
    fn eq(&self, other: &Self) -> bool {
        self.command == other.command && self.groups == other.groups
    }
}

impl Eq for ControlSequence {}

impl Hash for ControlSequence {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.command.hash(state);
        self.groups.hash(state);
    }
}

impl From<ControlSequence> for String {
    fn from(mut sequence: ControlSequence) -> Self {
        match sequence.rendered.take() {
            Some(rendered) => rendered,
            None => sequence.render().to_owned(),
        }
    }
}

impl std::fmt::Display for ControlSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::BytesMut;
    use tracing_test::traced_test;

    #[test]
    fn test_render_multiple_groups_flattened() {
        let sequence = ControlSequence::new(
            Command::SelectGraphicRendition,
            [ByteGroup::new([38, 5, 2]).unwrap(), ByteGroup::single(4)],
        )
        .unwrap();
        assert_eq!(sequence.render(), "\x1b[38;5;2;4m");
    }

    #[test]
    fn test_render_reset() {
        let sequence = ControlSequence::from_bytes(Command::SelectGraphicRendition, [0]).unwrap();
        assert_eq!(sequence.render(), "\x1b[0m");
        assert_eq!(sequence, ControlSequence::reset());
    }

    #[test]
    fn test_empty_groups_rejected() {
        let error = ControlSequence::new(Command::CursorUp, Vec::<ByteGroup>::new()).unwrap_err();
        assert_eq!(error.argument(), "groups");
    }

    #[test]
    fn test_empty_bytes_rejected() {
        let error = ControlSequence::from_bytes(Command::CursorUp, Vec::<u8>::new()).unwrap_err();
        assert_eq!(error.argument(), "values");
    }

    #[test]
    fn test_cursor_shortcuts() {
        assert_eq!(ControlSequence::cursor_up(3).render(), "\x1b[3A");
        assert_eq!(ControlSequence::cursor_down(1).render(), "\x1b[1B");
        assert_eq!(ControlSequence::cursor_forward(10).render(), "\x1b[10C");
        assert_eq!(ControlSequence::cursor_back(255).render(), "\x1b[255D");
        assert_eq!(ControlSequence::cursor_position(12, 40).render(), "\x1b[12;40H");
    }

    #[test]
    fn test_erase_shortcuts() {
        assert_eq!(ControlSequence::clear_screen().render(), "\x1b[2J");
        assert_eq!(ControlSequence::clear_line().render(), "\x1b[2K");
    }

    #[test]
    fn test_values_flattened() {
        let sequence = ControlSequence::new(
            Command::SelectGraphicRendition,
            [ByteGroup::new([1, 2]).unwrap(), ByteGroup::new([3]).unwrap()],
        )
        .unwrap();
        assert_eq!(sequence.values().collect::<Vec<u8>>(), vec![1, 2, 3]);
        assert_eq!(sequence.groups().len(), 2);
        assert_eq!(sequence.command(), Command::SelectGraphicRendition);
    }

    #[test]
    fn test_len() {
        assert_eq!(ControlSequence::cursor_up(1).len(), 4);
        assert_eq!(ControlSequence::cursor_position(100, 2).len(), 8);
    }

    #[test]
    fn test_encode() {
        let sequence = ControlSequence::cursor_position(1, 1);
        let mut buffer = BytesMut::new();
        let written = sequence.encode(&mut buffer);
        assert_eq!(written, 6);
        assert_eq!(&buffer[..], b"\x1b[1;1H");
    }

    #[test]
    fn test_write() {
        let mut output = Vec::new();
        let written = ControlSequence::reset().write(&mut output).unwrap();
        assert_eq!(written, 4);
        assert_eq!(output, b"\x1b[0m");
    }

    #[test]
    fn test_write_str_respects_config() {
        let sgr = ControlSequence::reset();
        let csi = ControlSequence::clear_screen();

        let mut output = String::new();
        sgr.write_str(&mut output, None).unwrap();
        csi.write_str(&mut output, None).unwrap();
        assert_eq!(output, "\x1b[0m\x1b[2J");

        let mut output = String::new();
        sgr.write_str(&mut output, Some(&AnsiConfig::sgr_only())).unwrap();
        csi.write_str(&mut output, Some(&AnsiConfig::sgr_only())).unwrap();
        assert_eq!(output, "\x1b[0m");

        let mut output = String::new();
        sgr.write_str(&mut output, Some(&AnsiConfig::strip_all())).unwrap();
        csi.write_str(&mut output, Some(&AnsiConfig::strip_all())).unwrap();
        assert_eq!(output, "");
    }

    #[test]
    fn test_into_string() {
        let unrendered: String = ControlSequence::cursor_up(2).into();
        assert_eq!(unrendered, "\x1b[2A");

        let sequence = ControlSequence::cursor_down(2);
        let _ = sequence.render();
        let rendered: String = sequence.into();
        assert_eq!(rendered, "\x1b[2B");
    }

    #[test]
    fn test_display_embeds_in_text() {
        let bold = ControlSequence::with_group(Command::SelectGraphicRendition, ByteGroup::single(1));
        let text = format!("{}bold{}", bold, ControlSequence::reset());
        assert_eq!(text, "\x1b[1mbold\x1b[0m");
    }

    #[test]
    fn test_sequences_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ControlSequence>();
        assert_send_sync::<ByteGroup>();
    }

    #[test]
    #[traced_test]
    fn test_render_is_cached() {
        let sequence = ControlSequence::cursor_position(5, 7);
        let first = sequence.render();
        let second = sequence.render();
        assert!(std::ptr::eq(first, second));
        assert_eq!(sequence.to_string(), first);
        logs_assert(|lines: &[&str]| {
            match lines
                .iter()
                .filter(|line| line.contains("rendered control sequence"))
                .count()
            {
                1 => Ok(()),
                n => Err(format!("expected a single render, saw {}", n)),
            }
        });
    }
}
