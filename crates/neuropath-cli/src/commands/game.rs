//! Calming flower game commands.

use std::io::{BufRead, Write};

use chrono::NaiveDate;
use clap::Subcommand;
use neuropath_core::{DateKey, GameScoreRepository, GameSession};
use serde::Serialize;

use crate::context::AppContext;

#[derive(Subcommand)]
pub enum GameAction {
    /// Play interactively: each input line taps a flower (index, or empty
    /// for the first flower); `q` ends the game
    Play,
    /// Finish a game with the given number of taps
    Record {
        /// Flowers tapped during the game
        taps: u32,
    },
    /// Show the high score for a day
    Score {
        /// Day to show (YYYY-MM-DD), defaults to today
        #[arg(long, value_parser = super::parse_date)]
        date: Option<NaiveDate>,
    },
}

#[derive(Serialize)]
struct DayScore {
    date: DateKey,
    high_score: u32,
}

pub fn run(action: GameAction, ctx: &AppContext) -> Result<(), Box<dyn std::error::Error>> {
    let repo = GameScoreRepository::new(&ctx.store);

    match action {
        GameAction::Play => {
            let session = GameSession::start(&repo, ctx.today_key(), ctx.config.game.flowers);
            let stdin = std::io::stdin();
            let session = play(session, stdin.lock(), std::io::stdout().lock())?;
            let result = session.finish(&repo)?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        GameAction::Record { taps } => {
            let mut session = GameSession::start(&repo, ctx.today_key(), ctx.config.game.flowers);
            let flowers = session.flowers();
            for i in 0..taps as usize {
                session.tap(i % flowers)?;
            }
            let result = session.finish(&repo)?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        GameAction::Score { date } => {
            let date = DateKey::format(date.unwrap_or_else(|| ctx.today()));
            let score = DayScore {
                high_score: repo.get_score(&date),
                date,
            };
            println!("{}", serde_json::to_string_pretty(&score)?);
        }
    }
    Ok(())
}

/// Feed input lines to the session until `q` or end of input.
fn play(
    mut session: GameSession,
    input: impl BufRead,
    mut out: impl Write,
) -> Result<GameSession, Box<dyn std::error::Error>> {
    writeln!(
        out,
        "Tap the flowers to reduce stress and relax! ({} flowers, today's high score: {})",
        session.flowers(),
        session.high_score()
    )?;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
            break;
        }

        let index = if line.is_empty() {
            0
        } else {
            match line.parse::<usize>() {
                Ok(index) => index,
                Err(_) => {
                    writeln!(out, "enter a flower number between 0 and {}", session.flowers() - 1)?;
                    continue;
                }
            }
        };

        match session.tap(index) {
            Ok(outcome) => {
                write!(
                    out,
                    "Flowers tapped: {}  Today's high score: {}",
                    outcome.taps, outcome.high_score
                )?;
                if outcome.new_best {
                    write!(out, "  New high score!")?;
                }
                writeln!(out)?;
            }
            Err(e) => writeln!(out, "{e}")?,
        }
    }
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use neuropath_core::MemoryStore;

    #[test]
    fn play_counts_taps_until_quit() {
        let store = MemoryStore::new();
        let repo = GameScoreRepository::new(&store);
        let session = GameSession::start(&repo, DateKey::parse("2024-06-01").unwrap(), 6);

        let input = "\n2\nnot-a-number\n9\n5\nq\n4\n".as_bytes();
        let mut out = Vec::new();
        let session = play(session, input, &mut out).unwrap();

        assert_eq!(session.taps(), 3);
        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("Flowers tapped: 3"));
        assert!(printed.contains("New high score!"));
        assert!(printed.contains("out of bounds"));
    }
}
