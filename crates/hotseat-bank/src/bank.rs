//! The question bank: the validated catalog, indexed by id.

use std::collections::HashMap;

use crate::{BankError, PrizeLadder, Question, QuestionId, OPTION_COUNT};

/// The fixed catalog of questions a server runs with.
///
/// Validated once at startup; after that it is read-only and safe to
/// share across every session. Lookup by id is O(1) through a side
/// index, so the engine can resolve a session's `current_question`
/// on every request without scanning the catalog.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
    /// id → position in `questions`. Kept in sync by construction —
    /// the bank is never mutated after `new`.
    index: HashMap<QuestionId, usize>,
}

impl QuestionBank {
    /// Builds a bank from a list of questions, validating each record.
    ///
    /// # Errors
    /// - [`BankError::Empty`] — no questions at all
    /// - [`BankError::DuplicateId`] — two records share an id
    /// - [`BankError::CorrectIndexOutOfRange`] — `correct_index` not 0–3
    pub fn new(questions: Vec<Question>) -> Result<Self, BankError> {
        if questions.is_empty() {
            return Err(BankError::Empty);
        }

        let mut index = HashMap::with_capacity(questions.len());
        for (pos, question) in questions.iter().enumerate() {
            if question.correct_index >= OPTION_COUNT {
                return Err(BankError::CorrectIndexOutOfRange {
                    id: question.id,
                    index: question.correct_index,
                });
            }
            if index.insert(question.id, pos).is_some() {
                return Err(BankError::DuplicateId(question.id));
            }
        }

        Ok(Self { questions, index })
    }

    /// Parses a JSON catalog (an array of question records) and builds
    /// a validated bank from it.
    pub fn from_json(json: &str) -> Result<Self, BankError> {
        let questions: Vec<Question> = serde_json::from_str(json)?;
        Self::new(questions)
    }

    /// Looks up a question by id.
    pub fn get(&self, id: QuestionId) -> Option<&Question> {
        self.index.get(&id).map(|&pos| &self.questions[pos])
    }

    /// All question ids, in catalog order. This is what seeds a fresh
    /// session's draw pool.
    pub fn ids(&self) -> Vec<QuestionId> {
        self.questions.iter().map(|q| q.id).collect()
    }

    /// Number of questions in the catalog.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Returns `true` if the catalog is empty (never, post-`new`).
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Checks that the catalog is large enough to carry a full climb of
    /// the given ladder: one question per rung.
    ///
    /// This is the startup guard against mid-session deck exhaustion.
    /// (A swap lifeline consumes one extra draw, so operators should
    /// size catalogs with headroom; the hard floor is the ladder length.)
    ///
    /// # Errors
    /// [`BankError::TooFewQuestions`] with the actual and required counts.
    pub fn check_covers(&self, ladder: &PrizeLadder) -> Result<(), BankError> {
        if self.len() < ladder.len() {
            return Err(BankError::TooFewQuestions {
                have: self.len(),
                need: ladder.len(),
            });
        }
        Ok(())
    }
}
