//! The transition rules: how answers, lifelines, and walk-aways move a
//! game forward.
//!
//! Every method here is a pure state transition — it takes the state
//! plus read-only collaborators (bank, ladder) and an injected RNG, and
//! either mutates the state and returns an [`Outcome`], or rejects the
//! action leaving the state untouched.

use rand::seq::SliceRandom;
use rand::Rng;

use hotseat_bank::{PrizeLadder, Question, QuestionBank, OPTION_COUNT};

use crate::{
    AnswerOption, GameError, GamePhase, GameState, LifelineKind, Outcome,
    QuestionView,
};

impl GameState {
    /// (Re)starts the game: level 0, full draw pool, all lifelines
    /// unspent, first question drawn. Works from any phase — starting
    /// over on a finished (or abandoned) state wipes it completely.
    ///
    /// # Errors
    /// [`GameError::BankExhausted`] if the catalog is empty. The startup
    /// coverage check makes this unreachable in a validated deployment.
    pub fn start<R: Rng + ?Sized>(
        &mut self,
        bank: &QuestionBank,
        ladder: &PrizeLadder,
        rng: &mut R,
    ) -> Result<(), GameError> {
        self.phase = GamePhase::InProgress;
        self.current_level = 0;
        self.remaining = bank.ids();
        self.lifelines = Default::default();
        self.safe_index = ladder.safe_index();

        match self.advance_question(rng) {
            Some(first) => {
                tracing::info!(
                    question = %first,
                    pool = self.remaining.len(),
                    "game started"
                );
                Ok(())
            }
            None => Err(GameError::BankExhausted),
        }
    }

    /// Resolves an answer for the current question.
    ///
    /// - Correct on the top rung → [`Outcome::Won`] with the top prize.
    /// - Correct below it → level +1, fresh question, [`Outcome::Continue`].
    /// - Wrong → [`Outcome::Lost`]; the payout falls back to the safe
    ///   rung's prize if the player had reached it, zero otherwise. The
    ///   payout depends only on the level reached, not on which question
    ///   was missed.
    ///
    /// # Errors
    /// - [`GameError::NotInProgress`] — game over or never started
    /// - [`GameError::InvalidOptionIndex`] — `choice` outside 0–3;
    ///   rejected before any state changes
    /// - [`GameError::BankExhausted`] — the pool ran dry below the top
    ///   rung; unrecoverable, the session must restart
    pub fn submit_answer<R: Rng + ?Sized>(
        &mut self,
        bank: &QuestionBank,
        ladder: &PrizeLadder,
        rng: &mut R,
        choice: usize,
    ) -> Result<Outcome, GameError> {
        if !self.phase.is_active() {
            return Err(GameError::NotInProgress);
        }
        if choice >= OPTION_COUNT {
            return Err(GameError::InvalidOptionIndex(choice));
        }
        let current = self.current_question.ok_or(GameError::NotInProgress)?;
        let question = bank
            .get(current)
            .ok_or(GameError::UnknownQuestion(current))?;

        if choice != question.correct_index {
            self.phase = GamePhase::Lost;
            self.clear_question();
            let payout = if self.current_level >= self.safe_index {
                ladder.value(self.safe_index)
            } else {
                0
            };
            tracing::info!(
                level = self.current_level,
                payout,
                "wrong answer, game lost"
            );
            return Ok(Outcome::Lost { payout });
        }

        if self.current_level + 1 == ladder.len() {
            // Top rung cleared. The level moves past the last index —
            // the "won" sentinel of the level invariant.
            self.phase = GamePhase::Won;
            self.current_level = ladder.len();
            self.clear_question();
            let payout = ladder.top();
            tracing::info!(payout, "top rung cleared, game won");
            return Ok(Outcome::Won { payout });
        }

        self.current_level += 1;
        match self.advance_question(rng) {
            Some(_) => Ok(Outcome::Continue {
                level: self.current_level,
            }),
            None => {
                tracing::error!(
                    level = self.current_level,
                    "draw pool exhausted below the top rung"
                );
                Err(GameError::BankExhausted)
            }
        }
    }

    /// Spends a lifeline on the current question.
    ///
    /// - fifty-fifty hides two wrong options.
    /// - hint reveals the question's hint text (for this question only).
    /// - swap discards the current question — gone for good, it does not
    ///   return to the pool — and draws a replacement at the same level.
    ///
    /// # Errors
    /// - [`GameError::LifelineAlreadyUsed`] — each kind is one-shot; the
    ///   state is left untouched
    /// - [`GameError::NotInProgress`] — nothing on screen to help with
    /// - [`GameError::BankExhausted`] — swap found the pool empty
    pub fn use_lifeline<R: Rng + ?Sized>(
        &mut self,
        bank: &QuestionBank,
        rng: &mut R,
        kind: LifelineKind,
    ) -> Result<(), GameError> {
        if !self.phase.is_active() {
            return Err(GameError::NotInProgress);
        }
        let current = self.current_question.ok_or(GameError::NotInProgress)?;
        if self.lifelines.is_used(kind) {
            return Err(GameError::LifelineAlreadyUsed(kind));
        }

        match kind {
            LifelineKind::FiftyFifty => {
                let question = bank
                    .get(current)
                    .ok_or(GameError::UnknownQuestion(current))?;
                self.removed_options = pick_removed_options(question, rng);
            }
            LifelineKind::Hint => {
                self.hint_question = Some(current);
            }
            LifelineKind::Swap => {
                if self.advance_question(rng).is_none() {
                    self.lifelines.mark_used(kind);
                    return Err(GameError::BankExhausted);
                }
            }
        }

        self.lifelines.mark_used(kind);
        tracing::info!(lifeline = %kind, question = %current, "lifeline spent");
        Ok(())
    }

    /// Walks away with the prize at the current rung — the voluntary
    /// stop, distinct from losing (no forfeit down to the safe rung).
    pub fn give_up(&mut self, ladder: &PrizeLadder) -> Result<Outcome, GameError> {
        if !self.phase.is_active() {
            return Err(GameError::NotInProgress);
        }
        let payout = ladder.value(self.current_level);
        self.phase = GamePhase::Won;
        self.clear_question();
        tracing::info!(
            level = self.current_level,
            payout,
            "player walked away"
        );
        Ok(Outcome::Won { payout })
    }

    /// Builds the player-facing snapshot of the current question:
    /// hidden options filtered out, hint attached only while its marker
    /// still points at the displayed question.
    pub fn current_view(
        &self,
        bank: &QuestionBank,
        ladder: &PrizeLadder,
    ) -> Result<QuestionView, GameError> {
        if !self.phase.is_active() {
            return Err(GameError::NotInProgress);
        }
        let current = self.current_question.ok_or(GameError::NotInProgress)?;
        let question = bank
            .get(current)
            .ok_or(GameError::UnknownQuestion(current))?;

        let options = question
            .options
            .iter()
            .enumerate()
            .filter(|(index, _)| !self.removed_options.contains(index))
            .map(|(index, text)| AnswerOption {
                index,
                text: text.clone(),
            })
            .collect();

        let hint = self
            .hint_question
            .filter(|&marked| marked == current)
            .and_then(|_| question.hint.clone());

        Ok(QuestionView {
            id: current,
            text: question.text.clone(),
            options,
            hint,
            level: self.current_level,
            prize: ladder.value(self.current_level),
            safe_prize: ladder.value(self.safe_index),
            lifelines: self.lifelines,
        })
    }
}

/// Picks the two option indices fifty-fifty hides: Fisher–Yates-shuffle
/// the three wrong indices, keep the first two. The correct index and
/// exactly one decoy always survive.
fn pick_removed_options<R: Rng + ?Sized>(
    question: &Question,
    rng: &mut R,
) -> Vec<usize> {
    let mut wrong = question.wrong_indices();
    wrong.shuffle(rng);
    wrong.truncate(2);
    wrong
}
