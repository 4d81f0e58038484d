use std::collections::BTreeMap;

use shared::{
    domain::{DifficultyLevel, WordId},
    protocol::VocabularyEntry,
};

/// Words a sentence can be scored against.
#[derive(Debug, Clone, Default)]
pub struct VocabularyCatalog {
    entries: BTreeMap<WordId, VocabularyEntry>,
}

impl VocabularyCatalog {
    pub fn seeded() -> Self {
        let seed = [
            (
                "library",
                "A place where books are kept for reading or borrowing",
                DifficultyLevel::Beginner,
            ),
            (
                "magnificent",
                "Extremely beautiful, elaborate, or impressive",
                DifficultyLevel::Intermediate,
            ),
            (
                "serendipity",
                "The occurrence of events by chance in a happy or beneficial way",
                DifficultyLevel::Advanced,
            ),
            (
                "study",
                "The devotion of time and attention to acquiring knowledge",
                DifficultyLevel::Beginner,
            ),
            (
                "collaborate",
                "Work jointly on an activity or project",
                DifficultyLevel::Intermediate,
            ),
        ];

        let mut catalog = Self::default();
        for (word, definition, level) in seed {
            catalog.insert(word, Some(definition), level);
        }
        catalog
    }

    /// Adds a word under the next free id.
    pub fn insert(
        &mut self,
        word: &str,
        definition: Option<&str>,
        difficulty_level: DifficultyLevel,
    ) -> WordId {
        let id = WordId(self.entries.keys().next_back().map_or(1, |last| last.0 + 1));
        self.entries.insert(
            id,
            VocabularyEntry {
                id,
                word: word.to_string(),
                definition: definition.map(str::to_string),
                difficulty_level,
            },
        );
        id
    }

    pub fn get(&self, id: WordId) -> Option<&VocabularyEntry> {
        self.entries.get(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
