//! Word bank for rounds
//!
//! Six fixed categories of lowercase ASCII words. Selection filters a
//! category by the difficulty's length bounds and falls back to the whole
//! category when nothing fits, so a word is always available.

use super::validation::is_plain_word;
use super::{Category, Difficulty, RandomSource};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use thiserror::Error;

const ALL: &[&str] = &[
    "apple", "brain", "chair", "dance", "earth", "flower", "garden", "happy", "island", "jigsaw",
    "kitten", "lemon", "mountain", "notebook", "ocean", "puzzle", "quiet", "river", "sunset", "travel",
    "umbrella", "victory", "window", "xylophone", "yellow", "zebra", "butterfly", "chocolate", "diamond", "elephant",
    "fantasy", "guitar", "harmony", "illusion", "journey", "kingdom", "library", "melody", "nostalgia", "orchestra",
    "paradise", "quantum", "rainbow", "symphony", "twilight", "universe", "volcano", "wonder", "xenon", "yesterday",
];

const ANIMALS: &[&str] = &[
    "cat", "dog", "elephant", "giraffe", "kangaroo", "lion", "monkey", "penguin", "tiger", "zebra",
    "dolphin", "eagle", "butterfly", "rhinoceros", "hippopotamus", "crocodile", "octopus", "panda", "koala", "flamingo",
    "cheetah", "gorilla", "leopard", "raccoon", "squirrel", "tortoise", "woodpecker", "buffalo", "chameleon",
];

const COUNTRIES: &[&str] = &[
    "france", "germany", "italy", "spain", "canada", "brazil", "india", "japan", "australia", "egypt",
    "mexico", "china", "russia", "argentina", "sweden", "norway", "turkey", "greece", "thailand", "vietnam",
    "belgium", "finland", "hungary", "ireland", "jamaica", "kenya", "morocco", "nigeria", "portugal", "singapore",
];

const PROGRAMMING: &[&str] = &[
    "javascript", "python", "html", "css", "react", "angular", "vue", "node", "express", "database",
    "algorithm", "function", "variable", "constant", "loop", "array", "object", "class", "method", "interface",
    "framework", "library", "compiler", "debugger", "syntax", "parameter", "argument", "callback", "promise", "async",
];

const SCIENCE: &[&str] = &[
    "physics", "chemistry", "biology", "astronomy", "geology", "mathematics", "experiment", "microscope",
    "telescope", "molecule", "atom", "electron", "gravity", "evolution", "theory", "research", "discovery", "laboratory",
    "quantum", "relativity", "genetics", "ecosystem", "biodiversity", "photosynthesis", "respiration", "magnetism", "velocity",
];

const FOOD: &[&str] = &[
    "pizza", "burger", "pasta", "sushi", "taco", "salad", "sandwich", "soup", "steak", "chicken",
    "chocolate", "icecream", "cookie", "cake", "bread", "cheese", "coffee", "juice", "smoothie", "pancake",
    "spaghetti", "lasagna", "burrito", "omelette", "waffle", "croissant", "baguette", "cupcake", "doughnut", "brownie",
];

/// Built once on first use and shared by every engine.
static STANDARD: Lazy<Result<WordBank, WordBankError>> = Lazy::new(|| {
    WordBank::from_lists([
        (Category::All, ALL.to_vec()),
        (Category::Animals, ANIMALS.to_vec()),
        (Category::Countries, COUNTRIES.to_vec()),
        (Category::Programming, PROGRAMMING.to_vec()),
        (Category::Science, SCIENCE.to_vec()),
        (Category::Food, FOOD.to_vec()),
    ])
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordBankError {
    #[error("the `all` category has no usable words")]
    EmptyDefaultCategory,
}

/// A word picked for a round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub word: String,
    /// True when no word matched the difficulty and the whole category was used
    pub fell_back: bool,
}

/// Category name to ordered word list. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordBank {
    words: HashMap<Category, Vec<String>>,
}

impl WordBank {
    /// The built-in word lists
    pub fn standard() -> Result<&'static WordBank, WordBankError> {
        Lazy::force(&STANDARD).as_ref().map_err(Clone::clone)
    }

    /// Build a bank from custom lists.
    ///
    /// Words are trimmed and lowercased; anything that is not purely ASCII
    /// letters afterwards is dropped. The `all` list must keep at least one
    /// word since every other category falls back to it.
    pub fn from_lists<I, W>(lists: I) -> Result<Self, WordBankError>
    where
        I: IntoIterator<Item = (Category, Vec<W>)>,
        W: AsRef<str>,
    {
        let mut words: HashMap<Category, Vec<String>> = HashMap::new();
        for (category, list) in lists {
            let entry = words.entry(category).or_default();
            entry.extend(
                list.iter()
                    .map(|w| AsRef::<str>::as_ref(w).trim().to_ascii_lowercase())
                    .filter(|w| is_plain_word(w)),
            );
        }

        if words.get(&Category::All).map_or(true, |w| w.is_empty()) {
            return Err(WordBankError::EmptyDefaultCategory);
        }

        Ok(Self { words })
    }

    /// The word pool for a category. Categories without words use `all`.
    pub fn words(&self, category: Category) -> &[String] {
        match self.words.get(&category) {
            Some(list) if !list.is_empty() => list,
            _ => self
                .words
                .get(&Category::All)
                .map(Vec::as_slice)
                .unwrap_or_default(),
        }
    }

    /// Words of `category` that fit the difficulty's length bounds.
    pub fn filtered(&self, category: Category, difficulty: Difficulty) -> Vec<&str> {
        let profile = difficulty.profile();
        self.words(category)
            .iter()
            .filter(|w| profile.contains(w.len()))
            .map(String::as_str)
            .collect()
    }

    /// Pick a word uniformly from the filtered pool, or from the full
    /// category pool when the filter leaves nothing.
    pub fn pick(
        &self,
        category: Category,
        difficulty: Difficulty,
        random: &mut dyn RandomSource,
    ) -> Selection {
        let filtered = self.filtered(category, difficulty);
        let fell_back = filtered.is_empty();
        let pool: Vec<&str> = if fell_back {
            self.words(category).iter().map(String::as_str).collect()
        } else {
            filtered
        };

        let word = pool[random.pick_index(pool.len())].to_string();
        Selection { word, fell_back }
    }
}
