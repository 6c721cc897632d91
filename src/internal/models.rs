use serde::Deserialize;

/// Shown in place of an example sentence when the service has none.
pub const NO_EXAMPLE_TEXT: &str = "No example available";

/// At most this many synonyms are kept, in source order.
pub const MAX_SYNONYMS: usize = 5;

/// One top-level object in the dictionary service's response array,
/// corresponding to one word with possibly multiple meanings.
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct Entry {
    pub word: String,
    pub phonetic: Option<String>,
    #[serde(default)]
    pub phonetics: Vec<Phonetic>,
    #[serde(default)]
    pub meanings: Vec<Meaning>,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct Phonetic {
    pub text: Option<String>,
    pub audio: Option<String>,
}

/// A part-of-speech-scoped group of definitions within an entry.
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct Meaning {
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub definitions: Vec<Definition>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Definition {
    pub definition: String,
    #[serde(default)]
    pub example: Option<String>,
}

/// Body the service returns instead of an entry array when it has no
/// definitions for the requested word.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct MissingWord {
    pub title: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub resolution: Option<String>,
}

/// The distilled result shown in the result panel.
///
/// Built from the FIRST entry's FIRST meaning's FIRST definition; later
/// meanings and definitions are ignored on purpose.
#[derive(Debug, Clone, PartialEq)]
pub struct WordCard {
    pub headword: String,
    /// Possibly empty when the service has no transcription at all.
    pub phonetic: String,
    pub definition: String,
    pub example: String,
    pub synonyms: Vec<String>,
    pub audio_url: Option<String>,
}

impl WordCard {
    /// Extract a card from a parsed response array.
    ///
    /// Returns `None` when the array, the first entry's meanings, or the
    /// first meaning's definitions are empty. Callers treat that as a
    /// malformed response.
    pub fn from_entries(entries: &[Entry]) -> Option<Self> {
        let entry = entries.first()?;
        let meaning = entry.meanings.first()?;
        let definition = meaning.definitions.first()?;

        // Prefer the entry-level transcription, then the first phonetics
        // element that carries text.
        let phonetic = entry
            .phonetic
            .clone()
            .filter(|t| !t.is_empty())
            .or_else(|| {
                entry
                    .phonetics
                    .iter()
                    .find_map(|p| p.text.clone().filter(|t| !t.is_empty()))
            })
            .unwrap_or_default();

        let audio_url = entry
            .phonetics
            .iter()
            .find_map(|p| p.audio.clone().filter(|a| !a.is_empty()));

        Some(Self {
            headword: entry.word.clone(),
            phonetic,
            definition: definition.definition.clone(),
            example: definition
                .example
                .clone()
                .filter(|e| !e.is_empty())
                .unwrap_or_else(|| NO_EXAMPLE_TEXT.to_string()),
            synonyms: meaning.synonyms.iter().take(MAX_SYNONYMS).cloned().collect(),
            audio_url,
        })
    }
}
