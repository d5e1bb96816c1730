// Keyboard -> command mapping. Keys are physical, so 'e' and 'E' are the same.
use minifb::Key;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    AddE,
    AddGg,
    Reset,
    Export,
    Dismiss,
}

impl Command {
    /// `None` for keys we ignore. `D` only maps when export is enabled.
    pub fn from_key(key: Key, export_enabled: bool) -> Option<Self> {
        match key {
            Key::E => Some(Command::AddE),
            Key::G => Some(Command::AddGg),
            Key::R => Some(Command::Reset),
            Key::D if export_enabled => Some(Command::Export),
            Key::Escape => Some(Command::Dismiss),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_command_keys() {
        assert_eq!(Command::from_key(Key::E, true), Some(Command::AddE));
        assert_eq!(Command::from_key(Key::G, true), Some(Command::AddGg));
        assert_eq!(Command::from_key(Key::R, false), Some(Command::Reset));
        assert_eq!(Command::from_key(Key::Escape, false), Some(Command::Dismiss));
    }

    #[test]
    fn export_key_follows_config() {
        assert_eq!(Command::from_key(Key::D, true), Some(Command::Export));
        assert_eq!(Command::from_key(Key::D, false), None);
    }

    #[test]
    fn other_keys_are_ignored() {
        for key in [Key::A, Key::Space, Key::Key1, Key::Enter] {
            assert_eq!(Command::from_key(key, true), None);
        }
    }
}
