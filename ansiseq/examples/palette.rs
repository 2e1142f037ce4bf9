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

//! Writes the standard palette and an RGB gradient to standard output.

use ansiseq::{
    AnsiResult, ByteGroup, ControlSequence, IndexedColor, RgbColor, StandardColor, TextAttribute,
    background, foreground,
};
use tracing::info;

fn main() -> AnsiResult<()> {
    tracing_subscriber::fmt::init();

    print!("{}{}", ControlSequence::clear_screen(), ControlSequence::cursor_position(1, 1));

    let title =
        ControlSequence::graphic_rendition([TextAttribute::Bold, TextAttribute::Underline])?;
    println!("{}Standard Colors{}", title, ControlSequence::reset());

    for color in StandardColor::ALL {
        let swatch = ControlSequence::graphic_rendition([ByteGroup::from(background(
            IndexedColor::from(color),
        ))])?;
        print!("{}  {:>2}  {}", swatch, color.to_u8(), ControlSequence::reset());
    }
    println!();

    for step in 0..32u8 {
        let level = step * 8;
        let swatch = ControlSequence::graphic_rendition([
            ByteGroup::from(foreground(RgbColor::new(255 - level, 255 - level, 255 - level))),
            ByteGroup::from(background(RgbColor::new(level, 64, 255 - level))),
        ])?;
        print!("{}#{}", swatch, ControlSequence::reset());
    }
    println!();

    info!("palette written");
    Ok(())
}
