use rand::Rng;

/// A curated word with a short etymology or trivia line, shown in the
/// word-of-the-day panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WordFact {
    pub word: &'static str,
    pub definition: &'static str,
    pub fact: &'static str,
}

impl WordFact {
    pub fn did_you_know(&self) -> String {
        format!("Did you know? \"{}\"", self.fact)
    }
}

/// A starter word with a one-line hint, shown in the suggestions panel
/// for users with nothing to search yet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Suggestion {
    pub word: &'static str,
    pub hint: &'static str,
}

pub const WORD_FACTS: [WordFact; 5] = [
    WordFact {
        word: "Serendipity",
        definition: "Finding something good without looking for it",
        fact: "Comes from a Persian fairy tale!",
    },
    WordFact {
        word: "Petrichor",
        definition: "The smell of rain on dry earth",
        fact: "Coined in 1964 by Australian scientists",
    },
    WordFact {
        word: "Ephemeral",
        definition: "Lasting for a very short time",
        fact: "From Greek 'ephemeros' (lasting a day)",
    },
    WordFact {
        word: "Liminal",
        definition: "Relating to a transitional stage",
        fact: "Often used in psychology and architecture",
    },
    WordFact {
        word: "Sonder",
        definition: "Realizing everyone has a complex life",
        fact: "Popularized by The Dictionary of Obscure Sorrows",
    },
];

pub const SUGGESTIONS: [Suggestion; 8] = [
    Suggestion {
        word: "Defenestration",
        hint: "The act of throwing someone out a window",
    },
    Suggestion {
        word: "Hiraeth",
        hint: "Nostalgia for a home you can't return to",
    },
    Suggestion {
        word: "Mellifluous",
        hint: "Sweet or musical sounding",
    },
    Suggestion {
        word: "Sesquipedalian",
        hint: "Given to using long words",
    },
    Suggestion {
        word: "Zephyr",
        hint: "A gentle breeze",
    },
    Suggestion {
        word: "Quixotic",
        hint: "Extremely idealistic",
    },
    Suggestion {
        word: "Luminous",
        hint: "Full of light",
    },
    Suggestion {
        word: "Ineffable",
        hint: "Too great to be expressed in words",
    },
];

/// Pick the word of the day for this session.
pub fn random_word_fact() -> &'static WordFact {
    let idx = rand::thread_rng().gen_range(0..WORD_FACTS.len());
    &WORD_FACTS[idx]
}
