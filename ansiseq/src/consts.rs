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

/// Escape character that starts every sequence.
pub const ESC: char = '\x1b';

/// Second byte of the Control Sequence Introducer (`ESC [`).
pub const CSI_BRACKET: char = '[';

/// Separator placed between argument bytes.
pub const SEPARATOR: char = ';';

/// SGR argument type code for an 8-bit palette color (`5;n`).
pub const INDEXED_COLOR_CODE: u8 = 5;

/// SGR argument type code for a 24-bit color (`2;r;g;b`).
pub const RGB_COLOR_CODE: u8 = 2;

/// SGR category code selecting the foreground color.
pub const FOREGROUND_CODE: u8 = 38;

/// SGR category code selecting the background color.
pub const BACKGROUND_CODE: u8 = 48;
