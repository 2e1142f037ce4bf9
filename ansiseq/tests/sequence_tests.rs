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

//! End-to-end rendering of Control Sequences built from typed arguments

use ansiseq::{
    AnsiConfig, ByteGroup, Command, ControlSequence, IndexedColor, RgbColor, StandardColor,
    TextAttribute, TextColor, background, foreground,
};

#[test]
fn test_indexed_foreground_with_underline() {
    let sequence = ControlSequence::new(
        Command::SelectGraphicRendition,
        [ByteGroup::new([38, 5, 2]).unwrap(), ByteGroup::new([4]).unwrap()],
    )
    .unwrap();
    assert_eq!(sequence.render(), "\x1b[38;5;2;4m");
}

#[test]
fn test_full_reset() {
    let sequence = ControlSequence::from_bytes(Command::SelectGraphicRendition, [0]).unwrap();
    assert_eq!(sequence.render(), "\x1b[0m");
}

#[test]
fn test_rgb_foreground_on_standard_background() {
    let sequence = ControlSequence::new(
        Command::SelectGraphicRendition,
        [
            ByteGroup::from(foreground(RgbColor::new(60, 60, 60))),
            ByteGroup::from(background(IndexedColor::from(StandardColor::White))),
        ],
    )
    .unwrap();
    assert_eq!(sequence.render(), "\x1b[38;2;60;60;60;48;5;15m");
}

#[test]
fn test_typed_foreground_matches_raw_bytes() {
    let typed = ControlSequence::graphic_rendition([
        ByteGroup::from(TextColor::foreground(IndexedColor::new(2))),
        ByteGroup::from(TextAttribute::Underline),
    ])
    .unwrap();
    let raw = ControlSequence::from_bytes(Command::SelectGraphicRendition, [38, 5, 2, 4]).unwrap();
    assert_eq!(typed.render(), raw.render());
}

#[test]
fn test_every_command_renders_its_terminator() {
    for command in Command::ALL {
        let sequence = ControlSequence::with_group(command, ByteGroup::single(1));
        let expected = format!("\x1b[1{}", command.terminator());
        assert_eq!(sequence.render(), expected);
    }
}

#[test]
fn test_command_from_terminator_builds_sequence() {
    let command = Command::try_from('J').unwrap();
    let sequence = ControlSequence::from_bytes(command, [2]).unwrap();
    assert_eq!(sequence, ControlSequence::clear_screen());
}

#[test]
fn test_invalid_construction_fails() {
    assert!(ByteGroup::new(Vec::<u8>::new()).is_err());
    assert!(ControlSequence::from_bytes(Command::CursorUp, Vec::<u8>::new()).is_err());
    assert!(ControlSequence::new(Command::CursorUp, Vec::<ByteGroup>::new()).is_err());
    assert!(ControlSequence::graphic_rendition(Vec::<TextAttribute>::new()).is_err());
    assert!(Command::try_from('~').is_err());
    assert!(IndexedColor::new(16).to_standard().is_err());
}

#[test]
fn test_styled_line_embedding() {
    let style = ControlSequence::graphic_rendition([
        ByteGroup::from(TextAttribute::Bold),
        ByteGroup::from(foreground(IndexedColor::from(StandardColor::Red))),
    ])
    .unwrap();
    let line = format!("{}error:{} file not found", style, ControlSequence::reset());
    assert_eq!(line, "\x1b[1;38;5;9merror:\x1b[0m file not found");
}

#[test]
fn test_config_filters_output() {
    let sequences = [
        ControlSequence::clear_screen(),
        ControlSequence::cursor_position(1, 1),
        ControlSequence::graphic_rendition([TextAttribute::Italic]).unwrap(),
    ];

    let mut styled_only = String::new();
    for sequence in &sequences {
        sequence
            .write_str(&mut styled_only, Some(&AnsiConfig::sgr_only()))
            .unwrap();
    }
    assert_eq!(styled_only, "\x1b[3m");

    let mut everything = String::new();
    for sequence in &sequences {
        sequence
            .write_str(&mut everything, Some(&AnsiConfig::default()))
            .unwrap();
    }
    assert_eq!(everything, "\x1b[2J\x1b[1;1H\x1b[3m");
}

#[test]
fn test_render_shared_across_threads() {
    let sequence = std::sync::Arc::new(
        ControlSequence::graphic_rendition([ByteGroup::from(background(RgbColor::new(
            10, 20, 30,
        )))])
        .unwrap(),
    );
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let sequence = sequence.clone();
            std::thread::spawn(move || sequence.render().to_owned())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), "\x1b[48;2;10;20;30m");
    }
}
