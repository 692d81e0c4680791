//! Masquerade - find the masked guest matching every clue before time
//! runs out
//!
//! Terminal front end around the hint engine: spawns a ballroom
//! population, derives a clue set, and reads accusations from stdin.

mod session;
mod settings;

use std::io::{self, BufRead};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

use masquerade_core::{spawn_population, CharacterData, CharacterId};
use masquerade_hints::{derive_round, evaluator, RoundSetup};

use session::Session;
use settings::GameSettings;

enum RoundOutcome {
    Won,
    Lost,
    Quit,
}

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set subscriber");

    let seed = parse_seed().context("invalid --seed argument")?;
    let mut rng = match seed {
        Some(seed) => {
            info!("Seeded session: {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let settings = GameSettings::load();
    let mut session = Session::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("=== MASQUERADE ===");
    println!("Read the clues, then accuse a guest by typing their number.");

    loop {
        session.start_round();

        let mut population = spawn_population(&settings.spawn, &mut rng);
        let round = derive_round(&mut population, settings.rules.hint_count, &mut rng)
            .context("failed to derive a round")?;

        let matching = evaluator::count_matching(&population, &round.hints);
        debug!("round {}: target {}", session.current_round, round.target_id);
        debug!("guests matching all clues: {}", matching);

        let time_limit = session.time_for_round(&settings.rules);
        let outcome = play_round(
            &population,
            &round,
            &mut session,
            &settings,
            time_limit,
            &mut lines,
        )?;

        match outcome {
            RoundOutcome::Won => {
                session.end_round(true);
                println!(
                    "Found them! Round {} cleared ({} in a row).",
                    session.current_round, session.consecutive_wins
                );
            }
            RoundOutcome::Lost => {
                session.end_round(false);
                let target = population
                    .iter()
                    .find(|c| c.id == round.target_id)
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| format!("Guest {}", round.target_id));
                println!("The masquerade ends. It was {target}.");
                break;
            }
            RoundOutcome::Quit => {
                println!("Leaving the ball.");
                break;
            }
        }
    }

    println!(
        "Session over after {} round(s), best streak {}.",
        session.current_round, session.consecutive_wins
    );
    Ok(())
}

/// One round: print the ballroom and the clues, then read accusations
/// until the target is found, the guess budget is spent, or the clock
/// runs out. The timer is checked when each accusation is submitted.
fn play_round(
    population: &[CharacterData],
    round: &RoundSetup,
    session: &mut Session,
    settings: &GameSettings,
    time_limit: f32,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<RoundOutcome> {
    println!();
    println!("--- Round {} ({:.0}s) ---", session.current_round, time_limit);
    for guest in population.iter().filter(|c| !c.is_player) {
        println!("  {guest}");
    }
    println!();
    println!("Clues:");
    for hint in &round.hints {
        println!("  - {hint}");
    }
    println!();

    let deadline = Instant::now() + Duration::from_secs_f32(time_limit);

    loop {
        let Some(line) = lines.next() else {
            return Ok(RoundOutcome::Quit);
        };
        let line = line.context("failed to read accusation")?;
        let input = line.trim();

        if input.eq_ignore_ascii_case("quit") {
            return Ok(RoundOutcome::Quit);
        }
        let Ok(number) = input.parse::<u32>() else {
            println!("Type a guest number or 'quit'.");
            continue;
        };

        if Instant::now() > deadline {
            println!("Time's up!");
            return Ok(RoundOutcome::Lost);
        }

        let accused = CharacterId(number);
        if population.iter().all(|c| c.id != accused) {
            println!("No guest {accused} in the ballroom.");
            continue;
        }

        if accused == round.target_id {
            return Ok(RoundOutcome::Won);
        }

        let wrong = session.record_wrong_guess();
        if wrong >= settings.rules.max_wrong_guesses {
            println!("Wrong - and that was your last accusation.");
            return Ok(RoundOutcome::Lost);
        }
        println!(
            "Wrong guest. ({}/{} accusations used)",
            wrong, settings.rules.max_wrong_guesses
        );
    }
}

/// Parse an optional `--seed <n>` argument
fn parse_seed() -> Result<Option<u64>> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--seed" {
            let value = args.next().context("--seed requires a value")?;
            let seed = value.parse::<u64>().context("--seed must be an integer")?;
            return Ok(Some(seed));
        }
    }
    Ok(None)
}
