//! Personal info form commands.

use clap::Subcommand;
use neuropath_core::personal_info::validate_age;
use neuropath_core::{Gender, PersonalInfoStore};

use crate::context::AppContext;

#[derive(Subcommand)]
pub enum InfoAction {
    /// Show the saved details
    Show,
    /// Update one or more fields
    Set {
        /// Parent or caretaker name
        #[arg(long)]
        parent_name: Option<String>,
        /// Child's name
        #[arg(long)]
        child_name: Option<String>,
        /// Child's gender: Male or Female
        #[arg(long)]
        gender: Option<Gender>,
        /// Child's age (1-18)
        #[arg(long, value_parser = parse_age)]
        age: Option<u32>,
    },
}

fn parse_age(s: &str) -> Result<u32, String> {
    let age: u32 = s.parse().map_err(|_| format!("'{s}' is not a number"))?;
    validate_age(age).map_err(|e| e.to_string())
}

pub fn run(action: InfoAction, ctx: &AppContext) -> Result<(), Box<dyn std::error::Error>> {
    let info = PersonalInfoStore::new(&ctx.store);

    match action {
        InfoAction::Show => {
            println!("{}", serde_json::to_string_pretty(&info.load())?);
        }
        InfoAction::Set {
            parent_name,
            child_name,
            gender,
            age,
        } => {
            if parent_name.is_none() && child_name.is_none() && gender.is_none() && age.is_none() {
                return Err("nothing to update: pass at least one field".into());
            }
            if let Some(name) = parent_name {
                info.set_parent_name(name.trim())?;
            }
            if let Some(name) = child_name {
                info.set_child_name(name.trim())?;
            }
            if let Some(gender) = gender {
                info.set_gender(gender)?;
            }
            if let Some(age) = age {
                info.set_age(age)?;
            }
            println!("{}", serde_json::to_string_pretty(&info.load())?);
        }
    }
    Ok(())
}
