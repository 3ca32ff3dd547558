//! One source, many destinations. The source is never also a destination.
//!
use crate::types::CharacterEntry;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    source: Option<CharacterEntry>,
    destinations: Vec<CharacterEntry>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source(&self) -> Option<&CharacterEntry> {
        self.source.as_ref()
    }

    /// Destinations, in the order they were picked.
    pub fn destinations(&self) -> &[CharacterEntry] {
        &self.destinations
    }

    /// Applies a click to the given entry. The first click picks the source, clicking the
    /// source again drops it (leaving destinations alone), and any other entry flips in or out
    /// of the destinations.
    ///
    pub fn toggle(&mut self, entry: &CharacterEntry) {
        match &self.source {
            None => {
                self.destinations.retain(|d| d != entry);
                self.source = Some(entry.clone());
            }
            Some(source) if source == entry => self.source = None,
            Some(_) => {
                if let Some(i) = self.destinations.iter().position(|d| d == entry) {
                    self.destinations.remove(i);
                } else {
                    self.destinations.push(entry.clone());
                }
            }
        }
    }

    pub fn clear(&mut self) {
        self.source = None;
        self.destinations.clear();
    }

    pub fn is_source(&self, entry: &CharacterEntry) -> bool {
        self.source.as_ref() == Some(entry)
    }

    pub fn is_destination(&self, entry: &CharacterEntry) -> bool {
        self.destinations.contains(entry)
    }

    pub fn can_copy(&self) -> bool {
        self.source.is_some() && !self.destinations.is_empty()
    }

    pub fn destination_names(&self) -> Vec<&str> {
        self.destinations
            .iter()
            .map(|d| d.character.as_str())
            .collect()
    }

    pub fn describe(&self) -> String {
        let dest_names = self.destination_names();

        match (&self.source, dest_names.is_empty()) {
            (Some(src), false) => format!(
                "Copying from '{}' to {} destination(s): {}",
                src.character,
                dest_names.len(),
                dest_names.join(", ")
            ),
            (Some(src), true) => {
                format!("Source selected: '{}'. Select destination(s)", src.character)
            }
            (None, false) => format!(
                "Destination(s) selected: {}. Select source",
                dest_names.join(", ")
            ),
            (None, true) => "No source or destinations selected".to_string(),
        }
    }
}
