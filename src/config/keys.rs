//! Key binding names from the config file.
//!
//! A binding is either a single character (`"l"`, matched case-insensitively)
//! or one of the named keys `space`, `enter`, `esc`, `tab`, `backspace`,
//! `f1`..`f12`.

use crate::app::command::Command;
use crossterm::event::KeyCode;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum KeyBindingError {
    #[error("empty key binding for `{0}`")]
    Empty(&'static str),
    #[error("unknown key `{name}` for `{command}`")]
    Unknown { command: &'static str, name: String },
    #[error("key `{key}` is bound to both `{first}` and `{second}`")]
    Duplicate {
        key: Key,
        first: &'static str,
        second: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Space,
    Enter,
    Esc,
    Tab,
    Backspace,
    F(u8),
}

impl Key {
    pub fn matches(&self, code: KeyCode) -> bool {
        match (self, code) {
            (Key::Char(c), KeyCode::Char(k)) => c.eq_ignore_ascii_case(&k),
            (Key::Space, KeyCode::Char(' ')) => true,
            (Key::Enter, KeyCode::Enter) => true,
            (Key::Esc, KeyCode::Esc) => true,
            (Key::Tab, KeyCode::Tab) => true,
            (Key::Backspace, KeyCode::Backspace) => true,
            (Key::F(n), KeyCode::F(k)) => *n == k,
            _ => false,
        }
    }
}

impl FromStr for Key {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // A literal space binds Space; anything else ignores surrounding blanks
        if !s.is_empty() && s.chars().all(|c| c == ' ') {
            return Ok(Key::Space);
        }
        let s = s.trim();
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Ok(Key::Char(c.to_ascii_lowercase()));
        }
        let lower = s.to_ascii_lowercase();
        match lower.as_str() {
            "space" => Ok(Key::Space),
            "enter" | "return" => Ok(Key::Enter),
            "esc" | "escape" => Ok(Key::Esc),
            "tab" => Ok(Key::Tab),
            "backspace" => Ok(Key::Backspace),
            f if f.starts_with('f') => match f[1..].parse::<u8>() {
                Ok(n) if (1..=12).contains(&n) => Ok(Key::F(n)),
                _ => Err(()),
            },
            _ => Err(()),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Char(c) => write!(f, "{}", c.to_ascii_uppercase()),
            Key::Space => write!(f, "Space"),
            Key::Enter => write!(f, "Enter"),
            Key::Esc => write!(f, "Esc"),
            Key::Tab => write!(f, "Tab"),
            Key::Backspace => write!(f, "Bksp"),
            Key::F(n) => write!(f, "F{}", n),
        }
    }
}

/// Resolved bindings, one key per command.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyMap {
    pub toggle: Key,
    pub lap: Key,
    pub reset: Key,
    pub theme: Key,
    pub quit: Key,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            toggle: Key::Space,
            lap: Key::Char('l'),
            reset: Key::Char('r'),
            theme: Key::Char('t'),
            quit: Key::Char('q'),
        }
    }
}

impl KeyMap {
    pub fn from_names(names: &super::model::KeyConfig) -> Result<Self, KeyBindingError> {
        let map = Self {
            toggle: parse_binding("toggle", &names.toggle)?,
            lap: parse_binding("lap", &names.lap)?,
            reset: parse_binding("reset", &names.reset)?,
            theme: parse_binding("theme", &names.theme)?,
            quit: parse_binding("quit", &names.quit)?,
        };
        map.check_unique()?;
        Ok(map)
    }

    pub fn command_for(&self, code: KeyCode) -> Option<Command> {
        self.bindings()
            .into_iter()
            .find(|(_, key, _)| key.matches(code))
            .map(|(_, _, cmd)| cmd)
    }

    pub fn key_for(&self, command: Command) -> Key {
        match command {
            Command::Toggle => self.toggle,
            Command::Lap => self.lap,
            Command::Reset => self.reset,
            Command::ToggleTheme => self.theme,
            Command::Quit => self.quit,
        }
    }

    fn bindings(&self) -> [(&'static str, Key, Command); 5] {
        [
            ("toggle", self.toggle, Command::Toggle),
            ("lap", self.lap, Command::Lap),
            ("reset", self.reset, Command::Reset),
            ("theme", self.theme, Command::ToggleTheme),
            ("quit", self.quit, Command::Quit),
        ]
    }

    fn check_unique(&self) -> Result<(), KeyBindingError> {
        let bindings = self.bindings();
        for (i, (first, key, _)) in bindings.iter().enumerate() {
            if let Some((second, _, _)) = bindings[i + 1..].iter().find(|(_, k, _)| k == key) {
                return Err(KeyBindingError::Duplicate {
                    key: *key,
                    first: *first,
                    second: *second,
                });
            }
        }
        Ok(())
    }
}

fn parse_binding(command: &'static str, name: &str) -> Result<Key, KeyBindingError> {
    if name.is_empty() {
        return Err(KeyBindingError::Empty(command));
    }
    name.parse().map_err(|_| KeyBindingError::Unknown {
        command,
        name: name.to_string(),
    })
}
