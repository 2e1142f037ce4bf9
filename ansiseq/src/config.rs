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

use crate::Command;

/// Controls which sequences are emitted when writing to an output.
///
/// The configuration never changes how a sequence renders; it only decides whether the
/// rendering is written at all.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct AnsiConfig {
    /// Strip Select Graphics Rendition (SGR) Command Sequences
    pub strip_sgr: bool,
    /// Strip Control Sequence (CSI) Commands (Except SGR) Sequences
    pub strip_csi: bool,
}

impl AnsiConfig {
    /// Emit every sequence
    pub fn enabled() -> AnsiConfig {
        AnsiConfig {
            strip_sgr: false,
            strip_csi: false,
        }
    }
    /// Strip all sequences
    pub fn strip_all() -> AnsiConfig {
        AnsiConfig {
            strip_sgr: true,
            strip_csi: true,
        }
    }
    /// Emit styling only, strip cursor and erase commands
    pub fn sgr_only() -> AnsiConfig {
        AnsiConfig {
            strip_sgr: false,
            strip_csi: true,
        }
    }

    /// Whether sequences for `command` should be written.
    pub fn allows(&self, command: Command) -> bool {
        if command.is_graphic_rendition() {
            !self.strip_sgr
        } else {
            !self.strip_csi
        }
    }
}

impl Default for AnsiConfig {
    fn default() -> Self {
        AnsiConfig::enabled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_enabled() {
        assert_eq!(AnsiConfig::default(), AnsiConfig::enabled());
        for command in Command::ALL {
            assert!(AnsiConfig::default().allows(command));
        }
    }

    #[test]
    fn test_strip_all() {
        for command in Command::ALL {
            assert!(!AnsiConfig::strip_all().allows(command));
        }
    }

    #[test]
    fn test_sgr_only() {
        let config = AnsiConfig::sgr_only();
        assert!(config.allows(Command::SelectGraphicRendition));
        assert!(!config.allows(Command::CursorUp));
        assert!(!config.allows(Command::ClearScreen));
    }
}
