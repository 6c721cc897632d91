use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use tracing::info;

const FAVORITES_FILE: &str = "wordFavorites.json";

/// Words the user chose to keep, in the order they were saved. Unlike
/// history this list has no cap.
///
/// Persisted as a plain JSON array of strings.
#[derive(Debug, Clone, Default)]
pub struct Favorites {
    pub words: Vec<String>,
    file_path: Option<PathBuf>,
}

fn decode_store(content: &str) -> Vec<String> {
    match serde_json::from_str(content) {
        Ok(words) => words,
        Err(e) => {
            tracing::warn!("Discarding corrupt favorites store: {e}");
            Vec::new()
        }
    }
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_or_create() -> Result<Self> {
        // Resolve the OS-specific config directory and append our app folder.
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join("tui-dict-app");

        info!(config_dir = %config_dir.display(), "Resolved config directory for favorites");

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir).with_context(|| {
                format!("Failed to create config directory {}", config_dir.display())
            })?;
        }

        let file_path = config_dir.join(FAVORITES_FILE);

        let words = match file_path.exists() {
            true => {
                info!(favorites_file = %file_path.display(), "Favorites file exists, attempting to read");
                match fs::read_to_string(&file_path) {
                    Ok(content) => decode_store(&content),
                    Err(e) => {
                        tracing::warn!("Could not read favorites file: {e}");
                        Vec::new()
                    }
                }
            }
            false => {
                info!(favorites_file = %file_path.display(), "No favorites file found, starting empty");
                Vec::new()
            }
        };

        Ok(Self {
            words,
            file_path: Some(file_path),
        })
    }

    pub fn save(&self) -> Result<()> {
        match &self.file_path {
            Some(path) => {
                let content = serde_json::to_string_pretty(&self.words)
                    .context("Failed to serialize favorites")?;
                fs::write(path, content).context("Failed to write favorites file")?;
                info!(favorites_file = %path.display(), "Saved favorites to file");
            }
            None => {
                info!("Favorites.save() called but no file_path is set; skipping write");
            }
        }
        Ok(())
    }

    /// Save a word. Returns `false` when the word was already saved, so
    /// callers can tell a fresh save from a repeat.
    pub fn add(&mut self, word: &str) -> bool {
        if self.contains(word) {
            return false;
        }
        self.words.push(word.to_string());
        true
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    pub fn remove_at(&mut self, index: usize) -> Option<String> {
        if index < self.words.len() {
            Some(self.words.remove(index))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_appends_in_save_order() {
        let mut favorites = Favorites::new();
        assert!(favorites.add("hiraeth"));
        assert!(favorites.add("mellifluous"));

        assert_eq!(favorites.words, vec!["hiraeth", "mellifluous"]);
    }

    #[test]
    fn test_add_reports_repeat_saves() {
        let mut favorites = Favorites::new();
        assert!(favorites.add("hiraeth"));
        assert!(!favorites.add("hiraeth"));

        assert_eq!(favorites.words.len(), 1);
    }

    #[test]
    fn test_no_cap_on_saved_words() {
        let mut favorites = Favorites::new();
        for i in 0..50 {
            favorites.add(&format!("word-{i}"));
        }

        assert_eq!(favorites.words.len(), 50);
        assert_eq!(favorites.words[0], "word-0");
    }

    #[test]
    fn test_remove_at() {
        let mut favorites = Favorites::new();
        favorites.add("hiraeth");
        favorites.add("mellifluous");

        assert_eq!(favorites.remove_at(0), Some("hiraeth".to_string()));
        assert_eq!(favorites.words, vec!["mellifluous"]);
        assert_eq!(favorites.remove_at(3), None);
    }

    #[test]
    fn test_decode_store_recovers_from_corrupt_content() {
        assert!(decode_store("{broken").is_empty());
        assert_eq!(decode_store(r#"["ineffable"]"#), vec!["ineffable"]);
    }
}
