//! Exercise list and detail commands.
//!
//! Completion toggles always apply to today.

use clap::Subcommand;
use neuropath_core::{Exercise, ExerciseLogRepository};
use serde::Serialize;

use crate::context::AppContext;

#[derive(Subcommand)]
pub enum ExerciseAction {
    /// List exercises with today's completion state
    List,
    /// Show description and steps for an exercise
    Show {
        /// Exercise name or slug (e.g. "breathing")
        exercise: Exercise,
    },
    /// Mark an exercise as completed today
    Complete {
        /// Exercise name or slug
        exercise: Exercise,
        /// Clear the completed mark instead
        #[arg(long)]
        undo: bool,
    },
    /// Print whether an exercise is completed today
    Status {
        /// Exercise name or slug
        exercise: Exercise,
    },
}

#[derive(Serialize)]
struct ListEntry {
    name: &'static str,
    slug: &'static str,
    completed_today: bool,
}

#[derive(Serialize)]
struct CompletionState {
    date: String,
    exercise: Exercise,
    completed: bool,
}

pub fn run(action: ExerciseAction, ctx: &AppContext) -> Result<(), Box<dyn std::error::Error>> {
    let repo = ExerciseLogRepository::new(&ctx.store);
    let today = ctx.today_key();

    match action {
        ExerciseAction::List => {
            let log = repo.load_all();
            let entries: Vec<ListEntry> = Exercise::ALL
                .into_iter()
                .map(|exercise| ListEntry {
                    name: exercise.name(),
                    slug: exercise.slug(),
                    completed_today: log.is_completed(&today, exercise),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        ExerciseAction::Show { exercise } => {
            let mut detail = serde_json::to_value(exercise.detail())?;
            detail["completed_today"] = repo.is_completed(&today, exercise).into();
            println!("{}", serde_json::to_string_pretty(&detail)?);
        }
        ExerciseAction::Complete { exercise, undo } => {
            repo.set_completed(&today, exercise, !undo)?;
            let state = CompletionState {
                date: today.to_string(),
                exercise,
                completed: repo.is_completed(&today, exercise),
            };
            println!("{}", serde_json::to_string_pretty(&state)?);
        }
        ExerciseAction::Status { exercise } => {
            let state = CompletionState {
                date: today.to_string(),
                exercise,
                completed: repo.is_completed(&today, exercise),
            };
            println!("{}", serde_json::to_string_pretty(&state)?);
        }
    }
    Ok(())
}
