use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Most recent lookups kept, newest first.
pub const HISTORY_CAP: usize = 5;

const HISTORY_FILE: &str = "wordHistory.json";

/// Recently looked-up words, newest first, capped at [`HISTORY_CAP`].
///
/// Persisted as a plain JSON array of strings so the file stays
/// hand-editable.
#[derive(Debug, Clone, Default)]
pub struct History {
    pub words: Vec<String>,
    file_path: Option<PathBuf>,
}

fn decode_store(content: &str) -> Vec<String> {
    match serde_json::from_str(content) {
        Ok(words) => words,
        Err(e) => {
            tracing::warn!("Discarding corrupt history store: {e}");
            Vec::new()
        }
    }
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_or_create() -> Result<Self> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join("tui-dict-app");

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir).context("Failed to create config directory")?;
        }

        let file_path = config_dir.join(HISTORY_FILE);

        let words = match file_path.exists() {
            true => match fs::read_to_string(&file_path) {
                Ok(content) => decode_store(&content),
                Err(e) => {
                    tracing::warn!("Could not read history file: {e}");
                    Vec::new()
                }
            },
            false => Vec::new(),
        };

        Ok(Self {
            words,
            file_path: Some(file_path),
        })
    }

    pub fn save(&self) -> Result<()> {
        if let Some(path) = &self.file_path {
            let content =
                serde_json::to_string_pretty(&self.words).context("Failed to serialize history")?;
            fs::write(path, content).context("Failed to write history file")?;
        }
        Ok(())
    }

    /// Record a lookup. Newest entries go to the front; a word already in
    /// the list stays where it is.
    pub fn add(&mut self, word: &str) {
        if self.contains(word) {
            return;
        }

        self.words.insert(0, word.to_string());

        if self.words.len() > HISTORY_CAP {
            self.words.truncate(HISTORY_CAP);
        }
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
    fn test_add_inserts_newest_first() {
        let mut history = History::new();
        history.add("zephyr");
        history.add("quixotic");

        assert_eq!(history.words, vec!["quixotic", "zephyr"]);
    }

    #[test]
    fn test_readding_a_word_does_not_reorder() {
        let mut history = History::new();
        history.add("zephyr");
        history.add("quixotic");
        history.add("zephyr");

        assert_eq!(history.words, vec!["quixotic", "zephyr"]);
    }

    #[test]
    fn test_cap_evicts_the_oldest_entry() {
        let mut history = History::new();
        for word in ["one", "two", "three", "four", "five", "six"] {
            history.add(word);
        }

        assert_eq!(history.words.len(), HISTORY_CAP);
        assert_eq!(history.words[0], "six");
        assert!(!history.contains("one"));
    }

    #[test]
    fn test_remove_at() {
        let mut history = History::new();
        history.add("zephyr");
        history.add("quixotic");

        assert_eq!(history.remove_at(1), Some("zephyr".to_string()));
        assert_eq!(history.words, vec!["quixotic"]);
        assert_eq!(history.remove_at(5), None);
    }

    #[test]
    fn test_decode_store_recovers_from_corrupt_content() {
        assert!(decode_store("definitely not json").is_empty());
        assert_eq!(decode_store(r#"["zephyr", "sonder"]"#), vec!["zephyr", "sonder"]);
    }
}
