//! Console playthrough of the Hotseat engine.
//!
//! A stand-in for the real presentation layer: it renders question
//! views to stdout and maps typed commands onto the five player
//! actions. All game rules live behind the `GameService`.

use std::io::{self, BufRead};

use hotseat::prelude::*;

/// The bundled catalog: programming and internet trivia, one hint each.
static CATALOG: &str = include_str!("../questions.json");

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn render(view: &QuestionView) {
    println!();
    println!(
        "── Level {} ── playing for {} (safe: {}) ──",
        view.level + 1,
        view.prize,
        view.safe_prize
    );
    println!("{}", view.text);
    for option in &view.options {
        println!("  {}) {}", option.index + 1, option.text);
    }
    if let Some(hint) = &view.hint {
        println!("  hint: {hint}");
    }
    let available: Vec<String> = view
        .lifelines
        .available()
        .iter()
        .map(|kind| kind.to_string())
        .collect();
    if !available.is_empty() {
        println!("  lifelines: {}", available.join(", "));
    }
}

fn render_outcome(outcome: &Outcome) {
    match outcome {
        Outcome::Won { payout } => println!("\nYou take home {payout}!"),
        Outcome::Lost { payout } => {
            println!("\nWrong! You leave with {payout}.")
        }
        Outcome::Continue { .. } => {}
    }
}

// ---------------------------------------------------------------------------
// Command parsing
// ---------------------------------------------------------------------------

enum Command {
    Answer(usize),
    Lifeline(LifelineKind),
    Walk,
    Play,
    Quit,
}

fn parse_command(input: &str) -> Option<Command> {
    match input {
        "walk" => return Some(Command::Walk),
        "play" => return Some(Command::Play),
        "quit" | "q" => return Some(Command::Quit),
        "50" => return Some(Command::Lifeline(LifelineKind::FiftyFifty)),
        _ => {}
    }
    if let Ok(kind) = input.parse::<LifelineKind>() {
        return Some(Command::Lifeline(kind));
    }
    if let Ok(number) = input.parse::<usize>() {
        if (1..=OPTION_COUNT).contains(&number) {
            return Some(Command::Answer(number - 1));
        }
    }
    None
}

// ---------------------------------------------------------------------------
// Main loop
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let bank = QuestionBank::from_json(CATALOG)?;
    let service = GameService::new(
        bank,
        PrizeLadder::default(),
        SessionConfig::default(),
    )?;

    println!("Welcome to the hot seat!");
    println!("Answer with 1-4. Lifelines: `50`, `hint`, `swap`.");
    println!("`walk` banks your prize, `play` starts over, `quit` exits.");

    let started = service.start(None).await?;
    let token = started.token.clone();
    render(&started.question);

    for line in io::stdin().lock().lines() {
        let input = line?;
        let Some(command) = parse_command(input.trim()) else {
            println!("(1-4, 50, hint, swap, walk, play, quit)");
            continue;
        };

        let result = match command {
            Command::Quit => break,
            Command::Play => {
                let restarted = service.start(Some(token.clone())).await?;
                render(&restarted.question);
                continue;
            }
            Command::Walk => service.give_up(&token).await.map(|outcome| {
                render_outcome(&outcome);
            }),
            Command::Answer(choice) => service
                .submit_answer(&token, choice)
                .await
                .map(|answer| {
                    render_outcome(&answer.outcome);
                    if let Some(view) = &answer.question {
                        render(view);
                    }
                }),
            Command::Lifeline(kind) => service
                .use_lifeline(&token, kind)
                .await
                .map(|view| render(&view)),
        };

        if let Err(err) = result {
            if err.is_recoverable() {
                println!("({err})");
            } else if err.needs_restart() {
                println!("({err} — type `play` to start over)");
            } else {
                return Err(err.into());
            }
        }
    }

    Ok(())
}
