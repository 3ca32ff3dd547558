use crate::constants::{CHATS_FILE, WINDOWS_FILE};
use camino::{Utf8Path, Utf8PathBuf};
use std::fmt;

pub type Characters = Vec<CharacterEntry>;

/// One character's settings folder, identified by the server and character directory names.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CharacterEntry {
    pub server: String,
    pub character: String,
}

impl CharacterEntry {
    pub fn new(server: &str, character: &str) -> Self {
        Self {
            server: server.to_string(),
            character: character.to_string(),
        }
    }

    pub fn dir(&self, settings_root: &Utf8Path) -> Utf8PathBuf {
        settings_root.join(&self.server).join(&self.character)
    }
}

impl fmt::Display for CharacterEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.server, self.character)
    }
}

pub struct Opts {
    pub verbose: bool,
    pub noop: bool,
}

/// Which of the UI files a copy should include.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConfigFiles {
    pub windows: bool,
    pub chats: bool,
}

impl Default for ConfigFiles {
    fn default() -> Self {
        Self {
            windows: true,
            chats: true,
        }
    }
}

impl ConfigFiles {
    pub fn selected(&self) -> Vec<&'static str> {
        [(self.windows, WINDOWS_FILE), (self.chats, CHATS_FILE)]
            .into_iter()
            .filter_map(|(on, name)| on.then_some(name))
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_character_dir() {
        assert_eq!(
            Utf8PathBuf::from("/settings/Faydark/Alice"),
            CharacterEntry::new("Faydark", "Alice").dir(Utf8Path::new("/settings"))
        );
    }

    #[test]
    fn test_selected_files() {
        assert_eq!(
            vec!["windows.json", "chats.json"],
            ConfigFiles::default().selected()
        );

        let chats_only = ConfigFiles {
            windows: false,
            chats: true,
        };

        assert_eq!(vec!["chats.json"], chats_only.selected());

        let nothing = ConfigFiles {
            windows: false,
            chats: false,
        };

        assert!(nothing.selected().is_empty());
    }
}
