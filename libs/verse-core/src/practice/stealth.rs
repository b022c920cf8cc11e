//! Stealth recall: the passage stays hidden and is revealed one word at a
//! time as the player types each word correctly.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::PracticeSession;
use crate::error::{PracticeError, Result};
use crate::grading::accuracy_percent;
use crate::normalize::normalize_for_compare;
use crate::tokenizer::tokenize;
use crate::types::{EffectiveSettings, PracticeMode, Token};

/// Result of submitting one word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum StealthOutcome {
    /// The word was right. `revealed` holds it plus any punctuation after it.
    Correct { revealed: Vec<Token> },
    /// The word was wrong and may be tried again.
    Incorrect { attempts_left: u32 },
    /// Out of tries: the word is shown and counted as missed.
    Revealed { revealed: Vec<Token> },
    /// Nothing comparable was typed; no attempt was used.
    Ignored,
}

/// Final tally of a stealth session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StealthSummary {
    /// Share of words typed right on the first try.
    pub accuracy: u8,
    pub mistakes: u32,
    pub missed_words: Vec<String>,
}

/// Word-by-word recall session.
#[derive(Debug, Clone)]
pub struct StealthSession {
    tokens: Vec<Token>,
    cursor: usize,
    max_attempts: u32,
    attempts_on_word: u32,
    mistakes: u32,
    first_try: usize,
    scorable: usize,
    missed_words: Vec<String>,
}

impl StealthSession {
    pub fn new(target: &str, settings: &EffectiveSettings) -> Result<Self> {
        let tokens = tokenize(target);
        let scorable = tokens.iter().filter(|t| !t.is_punct()).count();
        if scorable == 0 {
            return Err(PracticeError::EmptyInput);
        }

        let mut session = Self {
            tokens,
            cursor: 0,
            max_attempts: settings.max_attempts_per_word.max(1),
            attempts_on_word: 0,
            mistakes: 0,
            first_try: 0,
            scorable,
            missed_words: Vec::new(),
        };
        session.skip_punctuation();
        Ok(session)
    }

    /// Tokens shown so far, punctuation included.
    pub fn revealed(&self) -> &[Token] {
        &self.tokens[..self.cursor]
    }

    /// The word the player has to type next.
    pub fn expected(&self) -> Option<&Token> {
        self.tokens.get(self.cursor)
    }

    pub fn submit_word(&mut self, word: &str) -> Result<StealthOutcome> {
        let expected = self
            .expected()
            .map(|t| t.text.clone())
            .ok_or(PracticeError::SessionComplete)?;

        let typed = normalize_for_compare(word);
        if typed.is_empty() {
            return Ok(StealthOutcome::Ignored);
        }

        if typed == normalize_for_compare(&expected) {
            if self.attempts_on_word == 0 {
                self.first_try += 1;
            }
            return Ok(StealthOutcome::Correct {
                revealed: self.advance(),
            });
        }

        self.mistakes += 1;
        self.attempts_on_word += 1;

        if self.attempts_on_word >= self.max_attempts {
            debug!(word = %expected, "stealth word revealed after failed attempts");
            self.missed_words.push(expected);
            return Ok(StealthOutcome::Revealed {
                revealed: self.advance(),
            });
        }

        Ok(StealthOutcome::Incorrect {
            attempts_left: self.max_attempts - self.attempts_on_word,
        })
    }

    pub fn summary(&self) -> StealthSummary {
        StealthSummary {
            accuracy: self.accuracy(),
            mistakes: self.mistakes,
            missed_words: self.missed_words.clone(),
        }
    }

    /// Move past the current word and the punctuation after it.
    fn advance(&mut self) -> Vec<Token> {
        let start = self.cursor;
        self.cursor += 1;
        self.attempts_on_word = 0;
        self.skip_punctuation();
        self.tokens[start..self.cursor].to_vec()
    }

    fn skip_punctuation(&mut self) {
        while self.tokens.get(self.cursor).is_some_and(Token::is_punct) {
            self.cursor += 1;
        }
    }
}

impl PracticeSession for StealthSession {
    fn mode(&self) -> PracticeMode {
        PracticeMode::Stealth
    }

    fn is_complete(&self) -> bool {
        self.cursor >= self.tokens.len()
    }

    fn accuracy(&self) -> u8 {
        accuracy_percent(self.first_try, self.scorable, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PracticeSettings, VerseSettings};
    use pretty_assertions::assert_eq;

    fn session(target: &str, max_attempts: u32) -> StealthSession {
        let mut verse = VerseSettings::new("test".to_string());
        verse.max_attempts_per_word = Some(max_attempts);
        let settings = EffectiveSettings::merge(&PracticeSettings::default(), Some(&verse));
        StealthSession::new(target, &settings).unwrap()
    }

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn correct_words_reveal_trailing_punctuation() {
        let mut s = session("¿Quién eres, Señor?", 3);
        assert_eq!(texts(s.revealed()), vec!["¿"]);

        let outcome = s.submit_word("quien").unwrap();
        assert_eq!(
            outcome,
            StealthOutcome::Correct {
                revealed: vec![Token::new("Quién", None)]
            }
        );

        match s.submit_word("Eres").unwrap() {
            StealthOutcome::Correct { revealed } => {
                assert_eq!(texts(&revealed), vec!["eres", ","])
            }
            other => panic!("unexpected outcome {:?}", other),
        }

        s.submit_word("señor").unwrap();
        assert!(s.is_complete());
        assert_eq!(s.accuracy(), 100);
        assert_eq!(s.submit_word("amén"), Err(PracticeError::SessionComplete));
    }

    #[test]
    fn wrong_words_use_attempts_then_reveal() {
        let mut s = session("gracia y paz", 2);

        assert_eq!(
            s.submit_word("amor").unwrap(),
            StealthOutcome::Incorrect { attempts_left: 1 }
        );
        assert!(matches!(
            s.submit_word("fe").unwrap(),
            StealthOutcome::Revealed { .. }
        ));
        assert_eq!(s.expected().map(|t| t.text.as_str()), Some("y"));

        s.submit_word("y").unwrap();
        assert_eq!(
            s.submit_word("guerra").unwrap(),
            StealthOutcome::Incorrect { attempts_left: 1 }
        );
        s.submit_word("paz").unwrap();

        let summary = s.summary();
        assert_eq!(summary.missed_words, vec!["gracia"]);
        assert_eq!(summary.mistakes, 3);
        // Only "y" was right on the first try.
        assert_eq!(summary.accuracy, 33);
    }

    #[test]
    fn blank_submissions_are_ignored() {
        let mut s = session("luz", 1);
        assert_eq!(s.submit_word("  ").unwrap(), StealthOutcome::Ignored);
        assert_eq!(s.submit_word("?!").unwrap(), StealthOutcome::Ignored);
        assert_eq!(s.summary().mistakes, 0);
    }

    #[test]
    fn target_without_words_is_rejected() {
        let settings = EffectiveSettings::from(&PracticeSettings::default());
        assert_eq!(
            StealthSession::new("...", &settings).unwrap_err(),
            PracticeError::EmptyInput
        );
    }
}
