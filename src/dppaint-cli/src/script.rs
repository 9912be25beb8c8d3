// This file is part of Drawpile.
// Copyright (C) 2020 Calle Laakkonen
//
// Drawpile is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// As additional permission under section 7, you are allowed to distribute
// the software through an app store, even if that store has restrictive
// terms and conditions that are incompatible with the GPL, provided that
// the source is also available under the GPL with or without this permission
// through a channel without those restrictive terms and conditions.
//
// Drawpile is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with Drawpile.  If not, see <https://www.gnu.org/licenses/>.

//! Line oriented input scripts for driving the paint controller without a window.
//!
//! One command per line. Empty lines and lines starting with `#` are skipped.
//!
//! ```text
//! # draw a line and fill the area around it
//! size 4
//! down 300 300
//! move 600 400
//! up
//! fill
//! click 800 100
//! save
//! ```

use dppaint::canvas::Key;
use dppaint::paint::Color;
use dppaint::palette::{Channel, Slot};

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq)]
pub enum PickerCommand {
    Open,
    Save,
    Cancel,
    Default,
    Commit,
    Slot(Slot),
    Color(Color),
    Grid(i32, i32),
    Slider(Channel, i32),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Down(i32, i32),
    Move(i32, i32),
    Up,
    Click(i32, i32),
    Key { key: Key, ctrl: bool, shift: bool },
    Fill,
    Rainbow,
    Undo,
    Redo,
    Clear,
    Size(u32),
    Slot(Slot),
    Open(PathBuf),
    Save(Option<PathBuf>),
    Picker(PickerCommand),
}

#[derive(Debug, PartialEq, Eq)]
pub struct ScriptError {
    pub line: usize,
    pub message: String,
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

impl std::error::Error for ScriptError {}

struct Tokens<'a> {
    name: &'a str,
    rest: std::str::SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn next_str(&mut self, what: &str) -> Result<&'a str, String> {
        self.rest
            .next()
            .ok_or_else(|| format!("{}: missing {}", self.name, what))
    }

    fn next<T: FromStr>(&mut self, what: &str) -> Result<T, String> {
        let token = self.next_str(what)?;
        token
            .parse::<T>()
            .map_err(|_| format!("{}: invalid {} '{}'", self.name, what, token))
    }

    fn point(&mut self) -> Result<(i32, i32), String> {
        Ok((self.next("x")?, self.next("y")?))
    }

    fn slot(&mut self) -> Result<Slot, String> {
        let row = self.next("row")?;
        let col = self.next("column")?;
        Slot::new(row, col).ok_or_else(|| format!("{}: no palette slot ({}, {})", self.name, row, col))
    }

    fn finish<T>(mut self, value: T) -> Result<T, String> {
        match self.rest.next() {
            Some(extra) => Err(format!("{}: unexpected argument '{}'", self.name, extra)),
            None => Ok(value),
        }
    }
}

fn parse_key(s: &str) -> Option<Key> {
    Some(match s.to_ascii_lowercase().as_str() {
        "space" => Key::Space,
        "b" => Key::B,
        "z" => Key::Z,
        "p" => Key::P,
        "plus" | "+" => Key::Plus,
        "minus" | "-" => Key::Minus,
        _ => return None,
    })
}

fn parse_channel(s: &str) -> Option<Channel> {
    match s {
        "red" | "r" => Some(Channel::Red),
        "green" | "g" => Some(Channel::Green),
        "blue" | "b" => Some(Channel::Blue),
        _ => None,
    }
}

impl FromStr for PickerCommand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let name = parts.next().unwrap_or("");
        let mut t = Tokens { name, rest: parts };

        let cmd = match name {
            "open" => PickerCommand::Open,
            "save" => PickerCommand::Save,
            "cancel" => PickerCommand::Cancel,
            "default" => PickerCommand::Default,
            "commit" => PickerCommand::Commit,
            "slot" => PickerCommand::Slot(t.slot()?),
            "color" => {
                let token = t.next_str("color")?;
                PickerCommand::Color(
                    token
                        .parse::<Color>()
                        .map_err(|e| format!("color: {} ({})", e, token))?,
                )
            }
            "grid" => {
                let (x, y) = t.point()?;
                PickerCommand::Grid(x, y)
            }
            "slider" => {
                let channel = t.next_str("channel")?;
                let channel = parse_channel(channel)
                    .ok_or_else(|| format!("slider: unknown channel '{}'", channel))?;
                PickerCommand::Slider(channel, t.next("value")?)
            }
            "" => return Err("picker: missing subcommand".into()),
            _ => return Err(format!("picker: unknown subcommand '{}'", name)),
        };

        t.finish(cmd)
    }
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (name, args) = match s.split_once(char::is_whitespace) {
            Some((n, a)) => (n, a.trim()),
            None => (s, ""),
        };

        if name == "picker" {
            return args.parse().map(Command::Picker);
        }

        let mut t = Tokens {
            name,
            rest: args.split_whitespace(),
        };

        let cmd = match name {
            "down" => {
                let (x, y) = t.point()?;
                Command::Down(x, y)
            }
            "move" => {
                let (x, y) = t.point()?;
                Command::Move(x, y)
            }
            "up" => Command::Up,
            "click" => {
                let (x, y) = t.point()?;
                Command::Click(x, y)
            }
            "key" => {
                let token = t.next_str("key")?;
                let key = parse_key(token).ok_or_else(|| format!("key: unknown key '{}'", token))?;
                let mut ctrl = false;
                let mut shift = false;
                for modifier in t.rest.by_ref() {
                    match modifier {
                        "ctrl" => ctrl = true,
                        "shift" => shift = true,
                        m => return Err(format!("key: unknown modifier '{}'", m)),
                    }
                }
                Command::Key { key, ctrl, shift }
            }
            "fill" => Command::Fill,
            "rainbow" => Command::Rainbow,
            "undo" => Command::Undo,
            "redo" => Command::Redo,
            "clear" => Command::Clear,
            "size" => Command::Size(t.next("size")?),
            "slot" => Command::Slot(t.slot()?),
            "open" => {
                if args.is_empty() {
                    return Err("open: missing path".into());
                }
                return Ok(Command::Open(PathBuf::from(args)));
            }
            "save" => {
                return Ok(Command::Save(if args.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(args))
                }));
            }
            _ => return Err(format!("unknown command '{}'", name)),
        };

        t.finish(cmd)
    }
}

/// Parse a whole script. Returns the commands along with their line numbers.
pub fn parse_script(text: &str) -> Result<Vec<(usize, Command)>, ScriptError> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line, s)| {
            s.parse::<Command>()
                .map(|cmd| (line, cmd))
                .map_err(|message| ScriptError { line, message })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!("down 10 20".parse::<Command>(), Ok(Command::Down(10, 20)));
        assert_eq!("  move -5 7 ".parse::<Command>(), Ok(Command::Move(-5, 7)));
        assert_eq!("up".parse::<Command>(), Ok(Command::Up));
        assert_eq!("size 6".parse::<Command>(), Ok(Command::Size(6)));
        assert_eq!(
            "slot 1 5".parse::<Command>(),
            Ok(Command::Slot(Slot::new(1, 5).unwrap()))
        );
        assert_eq!(
            "key z ctrl shift".parse::<Command>(),
            Ok(Command::Key {
                key: Key::Z,
                ctrl: true,
                shift: true
            })
        );
        assert_eq!(
            "open some dir/image.png".parse::<Command>(),
            Ok(Command::Open(PathBuf::from("some dir/image.png")))
        );
        assert_eq!("save".parse::<Command>(), Ok(Command::Save(None)));
    }

    #[test]
    fn test_parse_picker_commands() {
        assert_eq!(
            "picker open".parse::<Command>(),
            Ok(Command::Picker(PickerCommand::Open))
        );
        assert_eq!(
            "picker color #ff8000".parse::<Command>(),
            Ok(Command::Picker(PickerCommand::Color(Color::rgb8(255, 128, 0))))
        );
        assert_eq!(
            "picker slider green 300".parse::<Command>(),
            Ok(Command::Picker(PickerCommand::Slider(Channel::Green, 300)))
        );
        assert_eq!(
            "picker grid 1 2".parse::<Command>(),
            Ok(Command::Picker(PickerCommand::Grid(1, 2)))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!("down 10".parse::<Command>().is_err());
        assert!("down 10 20 30".parse::<Command>().is_err());
        assert!("slot 2 0".parse::<Command>().is_err());
        assert!("key q".parse::<Command>().is_err());
        assert!("key z alt".parse::<Command>().is_err());
        assert!("picker".parse::<Command>().is_err());
        assert!("picker slider alpha 3".parse::<Command>().is_err());
        assert!("picker color red".parse::<Command>().is_err());
        assert!("jump".parse::<Command>().is_err());
    }

    #[test]
    fn test_parse_script() {
        let script = "# comment\n\nfill\n  click 1 2\n";
        assert_eq!(
            parse_script(script),
            Ok(vec![(3, Command::Fill), (4, Command::Click(1, 2))])
        );

        let err = parse_script("undo\nbogus\n").unwrap_err();
        assert_eq!(err.line, 2);
        assert_eq!(err.to_string(), "line 2: unknown command 'bogus'");
    }
}
