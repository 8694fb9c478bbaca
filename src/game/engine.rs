//! Round state machine
//!
//! A round is `Active` from `start_new_game` until the word is fully
//! revealed (`Won`) or the wrong-guess limit is reached (`Lost`). Terminal
//! rounds ignore guesses and hints until the next `start_new_game`.
//!
//! The engine does no I/O. Each operation returns its outcome together with
//! the events a presenter should render.

use super::events::GameEvent;
use super::validation::is_guessable;
use super::words::WordBank;
use super::{Category, Clock, Difficulty, EngineConfig, RandomSource};
use crate::stats::Stats;
use std::rc::Rc;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Active,
    Won,
    Lost,
}

/// How a letter has been used in the current round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    Unused,
    Correct,
    Wrong,
}

/// State of a single round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    word: String,
    difficulty: Difficulty,
    category: Category,
    /// Revealed letters in reveal order (guesses and hints)
    correct_letters: Vec<char>,
    /// Wrong guesses in guess order
    wrong_letters: Vec<char>,
    status: GameStatus,
    fell_back: bool,
    started_at: u64,
    finished_at: Option<u64>,
}

impl RoundState {
    fn new(
        word: String,
        difficulty: Difficulty,
        category: Category,
        fell_back: bool,
        started_at: u64,
    ) -> Self {
        RoundState {
            word,
            difficulty,
            category,
            correct_letters: Vec::new(),
            wrong_letters: Vec::new(),
            status: GameStatus::Active,
            fell_back,
            started_at,
            finished_at: None,
        }
    }

    /// The secret word (lowercase)
    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_playable(&self) -> bool {
        self.status == GameStatus::Active
    }

    /// Whether the word came from the unfiltered category pool
    pub fn used_fallback(&self) -> bool {
        self.fell_back
    }

    pub fn correct_letters(&self) -> &[char] {
        &self.correct_letters
    }

    pub fn wrong_letters(&self) -> &[char] {
        &self.wrong_letters
    }

    pub fn wrong_count(&self) -> usize {
        self.wrong_letters.len()
    }

    pub fn has_guessed(&self, letter: char) -> bool {
        self.correct_letters.contains(&letter) || self.wrong_letters.contains(&letter)
    }

    pub fn key_state(&self, letter: char) -> KeyState {
        if self.correct_letters.contains(&letter) {
            KeyState::Correct
        } else if self.wrong_letters.contains(&letter) {
            KeyState::Wrong
        } else {
            KeyState::Unused
        }
    }

    /// Every distinct letter of the word has been revealed
    pub fn is_fully_revealed(&self) -> bool {
        self.word.chars().all(|c| self.correct_letters.contains(&c))
    }

    /// Number of word positions currently revealed
    #[cfg(test)]
    pub fn revealed_count(&self) -> usize {
        self.word
            .chars()
            .filter(|c| self.correct_letters.contains(c))
            .count()
    }

    /// Round duration so far, or the final duration once finished
    pub fn elapsed_millis(&self, now: u64) -> u64 {
        self.finished_at.unwrap_or(now).saturating_sub(self.started_at)
    }

    /// Letters of unrevealed positions; repeated letters appear once per position.
    fn unrevealed_positions(&self) -> Vec<char> {
        self.word
            .chars()
            .filter(|c| !self.correct_letters.contains(c))
            .collect()
    }

    fn finish(&mut self, status: GameStatus, now: u64) {
        self.status = status;
        self.finished_at = Some(now);
    }

    fn reveal_events(&self, fresh: char) -> Vec<GameEvent> {
        self.correct_letters
            .iter()
            .map(|&letter| GameEvent::LetterRevealed {
                letter,
                fresh: letter == fresh,
            })
            .collect()
    }
}

/// Result of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Letter is in the word; `won` if it completed the word
    Correct { letter: char, won: bool },
    /// Letter is not in the word; `lost` if it used the last allowed miss
    Wrong { letter: char, lost: bool },
    /// Letter was already guessed this round; nothing changed
    Repeat { letter: char },
    /// Not a single lowercase ASCII letter; nothing changed
    Invalid,
    /// No active round; nothing changed
    RoundOver,
}

impl GuessOutcome {
    /// True if the guess mutated the round
    pub fn changed_state(&self) -> bool {
        matches!(self, GuessOutcome::Correct { .. } | GuessOutcome::Wrong { .. })
    }
}

/// Result of a hint request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintOutcome {
    /// A letter was revealed; `won` if it completed the word
    Revealed { letter: char, won: bool },
    NoHintsLeft,
    NothingToReveal,
    RoundOver,
}

impl HintOutcome {
    /// True if the hint mutated the round
    pub fn changed_state(&self) -> bool {
        matches!(self, HintOutcome::Revealed { .. })
    }
}

/// Outcome of an operation plus the events to present
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn<T> {
    pub outcome: T,
    pub events: Vec<GameEvent>,
}

impl<T> Turn<T> {
    fn quiet(outcome: T) -> Self {
        Turn {
            outcome,
            events: Vec::new(),
        }
    }
}

/// Owns the current round, the hint budget and lifetime stats.
pub struct GameEngine {
    bank: &'static WordBank,
    random: Box<dyn RandomSource>,
    clock: Rc<dyn Clock>,
    config: EngineConfig,
    stats: Stats,
    hints_remaining: u32,
    round: Option<RoundState>,
}

impl GameEngine {
    pub fn new(
        bank: &'static WordBank,
        random: Box<dyn RandomSource>,
        clock: Rc<dyn Clock>,
        config: EngineConfig,
    ) -> Self {
        let config = EngineConfig {
            max_wrong_guesses: config.max_wrong_guesses.max(1),
            ..config
        };
        GameEngine {
            bank,
            random,
            clock,
            config,
            stats: Stats::default(),
            hints_remaining: config.initial_hints,
            round: None,
        }
    }

    /// Replace counters and hint budget with previously saved values.
    pub fn restore(&mut self, stats: Stats, hints_remaining: u32) {
        self.stats = stats;
        self.hints_remaining = hints_remaining;
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn hints_remaining(&self) -> u32 {
        self.hints_remaining
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn round(&self) -> Option<&RoundState> {
        self.round.as_ref()
    }

    #[cfg(test)]
    pub fn status(&self) -> Option<GameStatus> {
        self.round.as_ref().map(RoundState::status)
    }

    pub fn now_millis(&self) -> u64 {
        self.clock.now_millis()
    }

    /// Discard the current round and start a new one.
    ///
    /// Always succeeds: if no word of `category` fits the difficulty, the
    /// whole category is used instead. The hint budget carries over.
    pub fn start_new_game(&mut self, difficulty: Difficulty, category: Category) -> Vec<GameEvent> {
        let selection = self.bank.pick(category, difficulty, &mut *self.random);
        if selection.fell_back {
            debug!(
                category = category.name(),
                difficulty = difficulty.name(),
                "no word fits difficulty, using whole category"
            );
        }

        let word_length = selection.word.len();
        self.stats.record_game_started();
        self.round = Some(RoundState::new(
            selection.word,
            difficulty,
            category,
            selection.fell_back,
            self.clock.now_millis(),
        ));

        info!(
            category = category.name(),
            difficulty = difficulty.name(),
            word_length,
            games_played = self.stats.games_played,
            "round started"
        );

        vec![GameEvent::RoundStarted {
            word_length,
            category,
            difficulty,
        }]
    }

    /// Guess a lowercase letter.
    pub fn guess(&mut self, letter: char) -> Turn<GuessOutcome> {
        let now = self.clock.now_millis();
        let Some(round) = self.round.as_mut() else {
            return Turn::quiet(GuessOutcome::RoundOver);
        };
        if !round.is_playable() {
            return Turn::quiet(GuessOutcome::RoundOver);
        }
        if !is_guessable(letter) {
            return Turn::quiet(GuessOutcome::Invalid);
        }
        if round.has_guessed(letter) {
            return Turn {
                outcome: GuessOutcome::Repeat { letter },
                events: vec![GameEvent::RepeatGuess { letter }],
            };
        }

        if round.word.contains(letter) {
            round.correct_letters.push(letter);
            let won = round.is_fully_revealed();
            if won {
                round.finish(GameStatus::Won, now);
                self.stats.record_win();
                info!(wins = self.stats.wins, "round won");
            }

            let mut events = round.reveal_events(letter);
            if won {
                events.push(GameEvent::Won {
                    word: round.word.clone(),
                    wins: self.stats.wins,
                });
            }
            Turn {
                outcome: GuessOutcome::Correct { letter, won },
                events,
            }
        } else {
            round.wrong_letters.push(letter);
            let wrong_count = round.wrong_count();
            let lost = wrong_count >= self.config.max_wrong_guesses;
            if lost {
                round.finish(GameStatus::Lost, now);
                info!(wrong_count, "round lost");
            }

            let mut events = vec![GameEvent::WrongGuess {
                letter,
                wrong_count,
                max_wrong: self.config.max_wrong_guesses,
            }];
            if lost {
                events.push(GameEvent::Lost {
                    word: round.word.clone(),
                    wins: self.stats.wins,
                });
            }
            Turn {
                outcome: GuessOutcome::Wrong { letter, lost },
                events,
            }
        }
    }

    /// Reveal a random unrevealed letter, spending one hint.
    ///
    /// Each unrevealed position is equally likely, so a letter that occurs
    /// twice in the word is twice as likely to be picked.
    pub fn use_hint(&mut self) -> Turn<HintOutcome> {
        let now = self.clock.now_millis();
        let Some(round) = self.round.as_mut() else {
            return Turn::quiet(HintOutcome::RoundOver);
        };
        if !round.is_playable() {
            return Turn::quiet(HintOutcome::RoundOver);
        }
        if self.hints_remaining == 0 {
            return Turn {
                outcome: HintOutcome::NoHintsLeft,
                events: vec![GameEvent::NoHintsLeft],
            };
        }

        let unrevealed = round.unrevealed_positions();
        if unrevealed.is_empty() {
            return Turn::quiet(HintOutcome::NothingToReveal);
        }

        let letter = unrevealed[self.random.pick_index(unrevealed.len())];
        round.correct_letters.push(letter);
        self.hints_remaining -= 1;
        self.stats.record_hint();

        let won = round.is_fully_revealed();
        if won {
            round.finish(GameStatus::Won, now);
            self.stats.record_win();
            info!(wins = self.stats.wins, "round won on hint");
        }
        debug!(hints_remaining = self.hints_remaining, "hint used");

        let mut events = vec![GameEvent::HintUsed {
            letter,
            hints_remaining: self.hints_remaining,
        }];
        events.extend(round.reveal_events(letter));
        if won {
            events.push(GameEvent::Won {
                word: round.word.clone(),
                wins: self.stats.wins,
            });
        }
        Turn {
            outcome: HintOutcome::Revealed { letter, won },
            events,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::testing::{leaked_bank, ManualClock, ScriptedRandom};
    use crate::game::RngSource;
    use rand::SeedableRng;

    fn engine_with_words(words: &[&str], picks: Vec<usize>) -> GameEngine {
        GameEngine::new(
            leaked_bank(words),
            Box::new(ScriptedRandom::new(picks)),
            Rc::new(ManualClock::at(1_000)),
            EngineConfig::default(),
        )
    }

    fn engine_playing(word: &str) -> GameEngine {
        let mut engine = engine_with_words(&[word], vec![]);
        engine.start_new_game(Difficulty::Easy, Category::All);
        assert_eq!(engine.round().unwrap().word(), word);
        engine
    }

    #[test]
    fn test_start_new_game_resets_round() {
        let mut engine = engine_playing("cat");
        engine.guess('c');
        engine.guess('x');

        let events = engine.start_new_game(Difficulty::Easy, Category::All);
        let round = engine.round().unwrap();
        assert!(round.correct_letters().is_empty());
        assert!(round.wrong_letters().is_empty());
        assert_eq!(round.status(), GameStatus::Active);
        assert_eq!(engine.stats().games_played, 2);
        assert_eq!(
            events,
            vec![GameEvent::RoundStarted {
                word_length: 3,
                category: Category::All,
                difficulty: Difficulty::Easy,
            }]
        );
    }

    #[test]
    fn test_scenario_cat_win() {
        let mut engine = engine_playing("cat");

        assert_eq!(
            engine.guess('c').outcome,
            GuessOutcome::Correct { letter: 'c', won: false }
        );
        let turn = engine.guess('a');
        assert_eq!(turn.outcome, GuessOutcome::Correct { letter: 'a', won: false });
        assert_eq!(engine.status(), Some(GameStatus::Active));
        assert_eq!(engine.round().unwrap().revealed_count(), 2);

        let turn = engine.guess('t');
        assert_eq!(turn.outcome, GuessOutcome::Correct { letter: 't', won: true });
        assert_eq!(engine.status(), Some(GameStatus::Won));
        assert_eq!(engine.stats().wins, 1);
        assert_eq!(
            turn.events.last(),
            Some(&GameEvent::Won { word: "cat".to_string(), wins: 1 })
        );
    }

    #[test]
    fn test_scenario_dog_loss() {
        let mut engine = engine_playing("dog");

        for (i, letter) in ['x', 'y', 'z', 'q', 'w'].into_iter().enumerate() {
            let turn = engine.guess(letter);
            assert_eq!(turn.outcome, GuessOutcome::Wrong { letter, lost: false });
            assert_eq!(engine.round().unwrap().wrong_count(), i + 1);
            assert_eq!(engine.status(), Some(GameStatus::Active));
        }

        let turn = engine.guess('v');
        assert_eq!(turn.outcome, GuessOutcome::Wrong { letter: 'v', lost: true });
        assert_eq!(engine.status(), Some(GameStatus::Lost));
        assert_eq!(
            turn.events,
            vec![
                GameEvent::WrongGuess { letter: 'v', wrong_count: 6, max_wrong: 6 },
                GameEvent::Lost { word: "dog".to_string(), wins: 0 },
            ]
        );

        // No further guesses accepted
        assert_eq!(engine.guess('d').outcome, GuessOutcome::RoundOver);
        assert_eq!(engine.round().unwrap().wrong_count(), 6);
        assert!(engine.round().unwrap().correct_letters().is_empty());
        assert_eq!(engine.stats().wins, 0);
    }

    #[test]
    fn test_scenario_expert_animals_never_leaves_category() {
        let mut engine = GameEngine::new(
            WordBank::standard().unwrap(),
            Box::new(RngSource(rand::rngs::StdRng::seed_from_u64(3))),
            Rc::new(ManualClock::default()),
            EngineConfig::default(),
        );
        let animals = WordBank::standard().unwrap().words(Category::Animals).to_vec();

        for _ in 0..50 {
            engine.start_new_game(Difficulty::Expert, Category::Animals);
            let round = engine.round().unwrap();
            assert!(animals.iter().any(|w| w == round.word()));
            assert!(round.word().len() >= 10);
        }
    }

    #[test]
    fn test_fallback_when_filter_is_empty() {
        let bank = WordBank::from_lists([
            (Category::All, vec!["apple"]),
            (Category::Animals, vec!["cat", "dog"]),
        ])
        .unwrap();
        let mut engine = GameEngine::new(
            Box::leak(Box::new(bank)),
            Box::new(ScriptedRandom::new([1])),
            Rc::new(ManualClock::default()),
            EngineConfig::default(),
        );

        engine.start_new_game(Difficulty::Expert, Category::Animals);
        let round = engine.round().unwrap();
        assert_eq!(round.word(), "dog");
        assert!(round.used_fallback());
    }

    #[test]
    fn test_all_combinations_select_valid_words() {
        let mut engine = GameEngine::new(
            WordBank::standard().unwrap(),
            Box::new(RngSource(rand::rngs::StdRng::seed_from_u64(99))),
            Rc::new(ManualClock::default()),
            EngineConfig::default(),
        );

        for category in Category::all() {
            for difficulty in Difficulty::all() {
                engine.start_new_game(*difficulty, *category);
                let round = engine.round().unwrap();
                assert!(!round.word().is_empty());
                assert!(round.word().chars().all(|c| c.is_ascii_lowercase()));
                if !round.used_fallback() {
                    assert!(difficulty.profile().contains(round.word().len()));
                }
            }
        }
        assert_eq!(engine.stats().games_played, 24);
    }

    #[test]
    fn test_repeat_guess_is_idempotent() {
        let mut engine = engine_playing("banana");

        engine.guess('a');
        engine.guess('z');
        let before = engine.round().unwrap().clone();

        let turn = engine.guess('a');
        assert_eq!(turn.outcome, GuessOutcome::Repeat { letter: 'a' });
        assert_eq!(turn.events, vec![GameEvent::RepeatGuess { letter: 'a' }]);
        let turn = engine.guess('z');
        assert_eq!(turn.outcome, GuessOutcome::Repeat { letter: 'z' });
        assert!(!turn.outcome.changed_state());

        assert_eq!(engine.round().unwrap(), &before);
        assert_eq!(engine.round().unwrap().correct_letters(), &['a']);
        assert_eq!(engine.round().unwrap().wrong_letters(), &['z']);
    }

    #[test]
    fn test_letter_never_in_both_lists() {
        let mut engine = engine_playing("puzzle");
        for letter in "puzzlequickbrownfoxpuzzle".chars() {
            engine.guess(letter);
            let round = engine.round().unwrap();
            for c in round.correct_letters() {
                assert!(!round.wrong_letters().contains(c));
            }
        }
    }

    #[test]
    fn test_wrong_count_is_monotonic_within_round() {
        let mut engine = engine_playing("melody");
        let mut last = 0;
        for letter in "abcdefghijklmnop".chars() {
            engine.guess(letter);
            let count = engine.round().unwrap().wrong_count();
            assert!(count >= last);
            last = count;
        }
        engine.start_new_game(Difficulty::Easy, Category::All);
        assert_eq!(engine.round().unwrap().wrong_count(), 0);
    }

    #[test]
    fn test_win_requires_every_distinct_letter() {
        let mut engine = engine_playing("banana");
        engine.guess('b');
        engine.guess('n');
        assert_eq!(engine.status(), Some(GameStatus::Active));
        assert_eq!(engine.round().unwrap().revealed_count(), 3);

        engine.guess('a');
        assert_eq!(engine.status(), Some(GameStatus::Won));
        assert!(engine.round().unwrap().is_fully_revealed());
    }

    #[test]
    fn test_invalid_letters_are_rejected() {
        let mut engine = engine_playing("cat");
        assert_eq!(engine.guess('C').outcome, GuessOutcome::Invalid);
        assert_eq!(engine.guess('1').outcome, GuessOutcome::Invalid);
        assert!(engine.guess('\u{e9}').events.is_empty());
        assert!(engine.round().unwrap().correct_letters().is_empty());
    }

    #[test]
    fn test_guess_without_round() {
        let mut engine = engine_with_words(&["cat"], vec![]);
        assert_eq!(engine.guess('c').outcome, GuessOutcome::RoundOver);
        assert_eq!(engine.use_hint().outcome, HintOutcome::RoundOver);
        assert_eq!(engine.status(), None);
    }

    #[test]
    fn test_reveal_events_mark_fresh_letter() {
        let mut engine = engine_playing("cat");
        engine.guess('c');
        let turn = engine.guess('t');
        assert_eq!(
            turn.events,
            vec![
                GameEvent::LetterRevealed { letter: 'c', fresh: false },
                GameEvent::LetterRevealed { letter: 't', fresh: true },
            ]
        );
    }

    #[test]
    fn test_hint_reveals_unrevealed_position() {
        // b a n a n a -> unrevealed after 'b': a n a n a; index 1 is 'n'
        let mut engine = engine_with_words(&["banana"], vec![0, 1]);
        engine.start_new_game(Difficulty::Medium, Category::All);
        engine.guess('b');

        let turn = engine.use_hint();
        assert_eq!(turn.outcome, HintOutcome::Revealed { letter: 'n', won: false });
        assert_eq!(engine.hints_remaining(), 2);
        assert_eq!(engine.stats().hints_used, 1);
        assert_eq!(engine.round().unwrap().correct_letters(), &['b', 'n']);
        assert_eq!(
            turn.events,
            vec![
                GameEvent::HintUsed { letter: 'n', hints_remaining: 2 },
                GameEvent::LetterRevealed { letter: 'b', fresh: false },
                GameEvent::LetterRevealed { letter: 'n', fresh: true },
            ]
        );
    }

    #[test]
    fn test_hint_can_win_round() {
        let mut engine = engine_playing("cat");
        engine.guess('c');
        engine.guess('a');

        let turn = engine.use_hint();
        assert_eq!(turn.outcome, HintOutcome::Revealed { letter: 't', won: true });
        assert_eq!(engine.status(), Some(GameStatus::Won));
        assert_eq!(engine.stats().wins, 1);
        assert!(matches!(turn.events.last(), Some(GameEvent::Won { .. })));
    }

    #[test]
    fn test_hint_budget_never_goes_negative() {
        let mut engine = engine_playing("xylophone");
        for _ in 0..3 {
            assert!(engine.use_hint().outcome.changed_state());
        }
        assert_eq!(engine.hints_remaining(), 0);

        let before = engine.round().unwrap().correct_letters().to_vec();
        let turn = engine.use_hint();
        assert_eq!(turn.outcome, HintOutcome::NoHintsLeft);
        assert_eq!(turn.events, vec![GameEvent::NoHintsLeft]);
        assert_eq!(engine.hints_remaining(), 0);
        assert_eq!(engine.stats().hints_used, 3);
        assert_eq!(engine.round().unwrap().correct_letters(), before.as_slice());
    }

    #[test]
    fn test_hint_budget_carries_across_rounds() {
        let mut engine = engine_playing("xylophone");
        engine.use_hint();
        engine.start_new_game(Difficulty::Easy, Category::All);
        assert_eq!(engine.hints_remaining(), 2);
    }

    #[test]
    fn test_hint_ignored_after_round_ends() {
        let mut engine = engine_playing("dog");
        for letter in "xyzqwv".chars() {
            engine.guess(letter);
        }
        assert_eq!(engine.use_hint().outcome, HintOutcome::RoundOver);
        assert_eq!(engine.hints_remaining(), 3);
    }

    #[test]
    fn test_restore_replaces_counters() {
        let mut engine = engine_with_words(&["cat"], vec![]);
        engine.restore(Stats::new(5, 2, 9), 1);
        assert_eq!(engine.stats(), &Stats::new(5, 2, 9));
        assert_eq!(engine.hints_remaining(), 1);

        engine.start_new_game(Difficulty::Easy, Category::All);
        assert_eq!(engine.stats().games_played, 10);
    }

    #[test]
    fn test_custom_max_wrong_guesses() {
        let config = EngineConfig {
            max_wrong_guesses: 2,
            ..EngineConfig::default()
        };
        let mut engine = GameEngine::new(
            leaked_bank(&["dog"]),
            Box::new(ScriptedRandom::default()),
            Rc::new(ManualClock::default()),
            config,
        );
        engine.start_new_game(Difficulty::Easy, Category::All);
        engine.guess('a');
        assert_eq!(engine.guess('b').outcome, GuessOutcome::Wrong { letter: 'b', lost: true });
    }

    #[test]
    fn test_round_timing_uses_clock() {
        let clock = ManualClock::at(10_000);
        let mut engine = GameEngine::new(
            leaked_bank(&["cat"]),
            Box::new(ScriptedRandom::default()),
            Rc::new(clock.clone()),
            EngineConfig::default(),
        );
        engine.start_new_game(Difficulty::Easy, Category::All);

        clock.advance(42_000);
        assert_eq!(engine.round().unwrap().elapsed_millis(clock.now_millis()), 42_000);
        for letter in "cat".chars() {
            engine.guess(letter);
        }
        clock.advance(5_000);

        let round = engine.round().unwrap();
        assert_eq!(round.status(), GameStatus::Won);
        assert_eq!(round.elapsed_millis(clock.now_millis()), 42_000);
    }

    #[test]
    fn test_key_state() {
        let mut engine = engine_playing("cat");
        engine.guess('a');
        engine.guess('q');
        let round = engine.round().unwrap();
        assert_eq!(round.key_state('a'), KeyState::Correct);
        assert_eq!(round.key_state('q'), KeyState::Wrong);
        assert_eq!(round.key_state('t'), KeyState::Unused);
    }
}
