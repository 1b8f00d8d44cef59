//! End-to-end playthroughs of the game-state machine, exercising the
//! behavioral properties the engine guarantees across whole sessions:
//! monotone levels, no repeated questions, one-shot lifelines, and the
//! payout rules at every exit.

use hotseat_bank::{PrizeLadder, Question, QuestionBank, QuestionId, OPTION_COUNT};
use hotseat_engine::{GamePhase, GameState, LifelineKind, Outcome};
use rand::{rngs::StdRng, SeedableRng};

/// A bank of `n` questions with predictable answers: question `id` is
/// correct at index `id % 4`.
fn bank_of(n: u32) -> QuestionBank {
    let questions = (1..=n)
        .map(|id| Question {
            id: QuestionId(id),
            text: format!("question {id}"),
            options: ["a".into(), "b".into(), "c".into(), "d".into()],
            correct_index: (id as usize) % OPTION_COUNT,
            hint: Some(format!("hint {id}")),
        })
        .collect();
    QuestionBank::new(questions).expect("valid bank")
}

fn correct_choice(state: &GameState) -> usize {
    let id = state.current_question().expect("a question is on screen");
    (id.0 as usize) % OPTION_COUNT
}

fn wrong_choice(state: &GameState) -> usize {
    (correct_choice(state) + 1) % OPTION_COUNT
}

#[test]
fn test_full_climb_wins_the_million() {
    let bank = bank_of(20);
    let ladder = PrizeLadder::default();
    let mut rng = StdRng::seed_from_u64(1);
    let mut state = GameState::new(&bank, &ladder);
    state.start(&bank, &ladder, &mut rng).unwrap();

    let mut last = None;
    for _ in 0..15 {
        last = Some(
            state
                .submit_answer(&bank, &ladder, &mut rng, correct_choice(&state))
                .expect("climb step"),
        );
    }

    assert_eq!(last, Some(Outcome::Won { payout: 1_000_000 }));
    assert_eq!(state.phase(), GamePhase::Won);
    assert_eq!(state.current_level(), 15);
}

#[test]
fn test_five_correct_answers_reach_level_five_without_repeats() {
    let bank = bank_of(20);
    let ladder = PrizeLadder::default();
    let mut rng = StdRng::seed_from_u64(2);
    let mut state = GameState::new(&bank, &ladder);
    state.start(&bank, &ladder, &mut rng).unwrap();

    let mut asked = vec![state.current_question().unwrap()];
    for _ in 0..5 {
        state
            .submit_answer(&bank, &ladder, &mut rng, correct_choice(&state))
            .unwrap();
        asked.push(state.current_question().unwrap());
    }

    assert_eq!(state.current_level(), 5);
    assert!(state.current_question().is_some());

    let mut unique = asked.clone();
    unique.sort_by_key(|id| id.0);
    unique.dedup();
    assert_eq!(unique.len(), asked.len(), "a question repeated: {asked:?}");
}

#[test]
fn test_level_is_monotone_and_bounded_across_whole_sessions() {
    let bank = bank_of(30);
    let ladder = PrizeLadder::default();

    // Play many full sessions with mixed right/wrong answers and check
    // the level never decreases and never passes the ladder length.
    for seed in 0..25 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut state = GameState::new(&bank, &ladder);
        state.start(&bank, &ladder, &mut rng).unwrap();

        let mut previous = state.current_level();
        let mut step = 0u64;
        while state.phase().is_active() {
            // Miss every fourth answer, keyed off the seed for variety.
            let choice = if (step + seed) % 4 == 3 {
                wrong_choice(&state)
            } else {
                correct_choice(&state)
            };
            state.submit_answer(&bank, &ladder, &mut rng, choice).unwrap();

            assert!(state.current_level() >= previous, "level decreased");
            assert!(state.current_level() <= ladder.len(), "level past top");
            previous = state.current_level();
            step += 1;
        }
    }
}

#[test]
fn test_losing_pays_zero_below_safe_and_safe_prize_at_or_above() {
    let bank = bank_of(20);
    let ladder = PrizeLadder::default(); // safe rung: index 4, 1 000

    // Lose at every reachable level and check the forfeit rule.
    for lose_at in 0..10 {
        let mut rng = StdRng::seed_from_u64(100 + lose_at as u64);
        let mut state = GameState::new(&bank, &ladder);
        state.start(&bank, &ladder, &mut rng).unwrap();

        for _ in 0..lose_at {
            state
                .submit_answer(&bank, &ladder, &mut rng, correct_choice(&state))
                .unwrap();
        }
        let outcome = state
            .submit_answer(&bank, &ladder, &mut rng, wrong_choice(&state))
            .unwrap();

        let expected = if lose_at >= 4 { 1_000 } else { 0 };
        assert_eq!(
            outcome,
            Outcome::Lost { payout: expected },
            "losing at level {lose_at}"
        );
    }
}

#[test]
fn test_walking_away_banks_the_current_rung() {
    let bank = bank_of(20);
    let ladder = PrizeLadder::default();

    for stop_at in 0..6 {
        let mut rng = StdRng::seed_from_u64(200 + stop_at as u64);
        let mut state = GameState::new(&bank, &ladder);
        state.start(&bank, &ladder, &mut rng).unwrap();

        for _ in 0..stop_at {
            state
                .submit_answer(&bank, &ladder, &mut rng, correct_choice(&state))
                .unwrap();
        }
        let outcome = state.give_up(&ladder).unwrap();

        assert_eq!(
            outcome,
            Outcome::Won {
                payout: ladder.value(stop_at)
            },
            "walking away at level {stop_at}"
        );
    }
}

#[test]
fn test_lifeline_flags_stay_spent_for_the_whole_session() {
    let bank = bank_of(20);
    let ladder = PrizeLadder::default();
    let mut rng = StdRng::seed_from_u64(3);
    let mut state = GameState::new(&bank, &ladder);
    state.start(&bank, &ladder, &mut rng).unwrap();

    state
        .use_lifeline(&bank, &mut rng, LifelineKind::FiftyFifty)
        .unwrap();
    state.use_lifeline(&bank, &mut rng, LifelineKind::Hint).unwrap();
    state.use_lifeline(&bank, &mut rng, LifelineKind::Swap).unwrap();

    // Climb a few rungs; every flag must still read spent, and every
    // re-use must be rejected.
    for _ in 0..4 {
        state
            .submit_answer(&bank, &ladder, &mut rng, correct_choice(&state))
            .unwrap();
        for kind in [LifelineKind::FiftyFifty, LifelineKind::Hint, LifelineKind::Swap]
        {
            assert!(state.lifelines().is_used(kind));
            assert!(state.use_lifeline(&bank, &mut rng, kind).is_err());
        }
    }
}

#[test]
fn test_all_three_lifelines_on_one_question_then_win_it() {
    let bank = bank_of(20);
    let ladder = PrizeLadder::default();
    let mut rng = StdRng::seed_from_u64(4);
    let mut state = GameState::new(&bank, &ladder);
    state.start(&bank, &ladder, &mut rng).unwrap();

    // Swap first (new question), then narrow it down and peek the hint.
    state.use_lifeline(&bank, &mut rng, LifelineKind::Swap).unwrap();
    state
        .use_lifeline(&bank, &mut rng, LifelineKind::FiftyFifty)
        .unwrap();
    state.use_lifeline(&bank, &mut rng, LifelineKind::Hint).unwrap();

    let view = state.current_view(&bank, &ladder).unwrap();
    assert_eq!(view.options.len(), 2);
    assert!(view.hint.is_some());

    let outcome = state
        .submit_answer(&bank, &ladder, &mut rng, correct_choice(&state))
        .unwrap();
    assert_eq!(outcome, Outcome::Continue { level: 1 });
}

#[test]
fn test_pool_shrinks_by_exactly_one_per_draw() {
    let bank = bank_of(20);
    let ladder = PrizeLadder::default();
    let mut rng = StdRng::seed_from_u64(5);
    let mut state = GameState::new(&bank, &ladder);

    state.start(&bank, &ladder, &mut rng).unwrap();
    let mut expected = bank.len() - 1;
    assert_eq!(state.remaining_count(), expected);

    // Answers and a swap each consume exactly one draw.
    state
        .submit_answer(&bank, &ladder, &mut rng, correct_choice(&state))
        .unwrap();
    expected -= 1;
    assert_eq!(state.remaining_count(), expected);

    state.use_lifeline(&bank, &mut rng, LifelineKind::Swap).unwrap();
    expected -= 1;
    assert_eq!(state.remaining_count(), expected);

    state
        .submit_answer(&bank, &ladder, &mut rng, correct_choice(&state))
        .unwrap();
    expected -= 1;
    assert_eq!(state.remaining_count(), expected);
}
