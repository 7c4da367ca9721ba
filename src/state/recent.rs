use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use log::{debug, warn};

use crate::core::color::Rgba;
use crate::core::constants::{RECENT_COLORS_CAPACITY, RECENT_COLORS_KEY};
use crate::error::StoreError;

/// Durable slot holding the serialized recent-colors list
pub trait RecentColorStore {
    /// Raw stored text, `None` when nothing was ever saved
    fn load(&self) -> Result<Option<String>, StoreError>;
    fn save(&mut self, contents: &str) -> Result<(), StoreError>;
}

/// One JSON file per namespace key under the user data directory
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        FileStore { path }
    }

    pub fn default_path() -> PathBuf {
        let data_dir = if let Some(data_dir) = dirs::data_dir() {
            data_dir.join("pixel-editor")
        } else {
            PathBuf::from(".local/share/pixel-editor")
        };

        data_dir.join(format!("{RECENT_COLORS_KEY}.json"))
    }
}

impl RecentColorStore for FileStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, contents: &str) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

/// Volatile store for tests
#[cfg(test)]
#[derive(Default)]
pub struct MemoryStore {
    contents: Option<String>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn with_contents(contents: &str) -> Self {
        MemoryStore {
            contents: Some(contents.to_string()),
        }
    }
}

#[cfg(test)]
impl RecentColorStore for MemoryStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        Ok(self.contents.clone())
    }

    fn save(&mut self, contents: &str) -> Result<(), StoreError> {
        self.contents = Some(contents.to_string());
        Ok(())
    }
}

/// Most-recent-first list of hex colors, without duplicates
pub struct RecentColors {
    colors: Vec<String>,
    capacity: usize,
    store: Box<dyn RecentColorStore>,
}

impl RecentColors {
    /// Read the stored list once; anything unreadable starts empty
    pub fn load(store: Box<dyn RecentColorStore>) -> Self {
        let colors = match Self::read(store.as_ref()) {
            Ok(colors) => colors,
            Err(e) => {
                warn!("ignoring stored recent colors: {e}");
                Vec::new()
            }
        };
        debug!("loaded {} recent color(s)", colors.len());

        RecentColors {
            colors,
            capacity: RECENT_COLORS_CAPACITY,
            store,
        }
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Move `color` to the front, evicting the oldest past capacity, then persist
    pub fn add(&mut self, color: &str) {
        self.colors.retain(|existing| existing != color);
        self.colors.insert(0, color.to_string());
        self.colors.truncate(self.capacity);

        if let Err(e) = self.persist() {
            warn!("could not save recent colors: {e}");
        }
    }

    fn read(store: &dyn RecentColorStore) -> Result<Vec<String>, StoreError> {
        let Some(content) = store.load()? else {
            return Ok(Vec::new());
        };
        let stored: Vec<String> = serde_json::from_str(&content)?;

        let mut colors: Vec<String> = Vec::with_capacity(RECENT_COLORS_CAPACITY);
        for entry in stored {
            let Ok(color) = entry.parse::<Rgba>() else {
                debug!("dropping stored recent color {entry:?}");
                continue;
            };
            let hex = color.to_hex();
            if !colors.contains(&hex) {
                colors.push(hex);
            }
        }
        colors.truncate(RECENT_COLORS_CAPACITY);
        Ok(colors)
    }

    fn persist(&mut self) -> Result<(), StoreError> {
        let content = serde_json::to_string(&self.colors)?;
        self.store.save(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hexes(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("#{i}{i}{i}{i}{i}{i}")).collect()
    }

    #[test]
    fn nine_colors_evict_the_first() {
        let mut recent = RecentColors::load(Box::new(MemoryStore::default()));
        for color in hexes(9) {
            recent.add(&color);
        }

        let mut expected = hexes(9);
        expected.reverse();
        expected.truncate(8);
        assert_eq!(recent.colors(), expected.as_slice());
        assert!(!recent.colors().contains(&"#111111".to_string()));
    }

    #[test]
    fn re_adding_moves_to_front() {
        let mut recent = RecentColors::load(Box::new(MemoryStore::default()));
        for color in hexes(3) {
            recent.add(&color);
        }
        recent.add("#111111");
        recent.add("#111111");

        assert_eq!(recent.colors(), &["#111111", "#333333", "#222222"]);
    }

    #[test]
    fn corrupt_storage_loads_empty() {
        for stored in ["{not json", "{\"a\": 1}", "[1, 2, 3]"] {
            let recent = RecentColors::load(Box::new(MemoryStore::with_contents(stored)));
            assert!(recent.is_empty(), "{stored}");
        }
    }

    #[test]
    fn oversized_storage_is_truncated() {
        let stored = serde_json::to_string(&hexes(9)).unwrap();
        let recent = RecentColors::load(Box::new(MemoryStore::with_contents(&stored)));
        assert_eq!(recent.colors().len(), 8);
        assert_eq!(recent.colors()[0], "#111111");
    }

    #[test]
    fn stored_colors_are_normalized_on_load() {
        let stored = r##"["#ABCDEF", "abcdef", "#12", "#00FF00"]"##;
        let mut recent = RecentColors::load(Box::new(MemoryStore::with_contents(stored)));
        assert_eq!(recent.colors(), &["#abcdef", "#00ff00"]);

        recent.add("#abcdef");
        assert_eq!(recent.colors(), &["#abcdef", "#00ff00"]);
    }

    #[test]
    fn file_store_persists_every_addition() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("recent.json");

        let mut recent = RecentColors::load(Box::new(FileStore::new(path.clone())));
        assert!(recent.is_empty());
        recent.add("#ff0000");
        recent.add("#00ff00");

        let on_disk = fs::read_to_string(&path).unwrap();
        assert_eq!(on_disk, r##"["#00ff00","#ff0000"]"##);

        let reloaded = RecentColors::load(Box::new(FileStore::new(path)));
        assert_eq!(reloaded.colors(), &["#00ff00", "#ff0000"]);
    }
}
