//! NoFap + NoCorn tracker commands.

use clap::Subcommand;
use disciplineos_core::{CheckInOutcome, CoreError, SaveOutcome, TrackerError, TrackerKind};

use super::common::{confirm, open_session, print_status, print_status_json, read_text};

#[derive(Subcommand)]
pub enum NofapAction {
    /// Retype your identity statement and log today's check-in
    CheckIn {
        /// Identity statement; use - to read from stdin
        text: String,
    },
    /// Save or update the identity statement without touching the streak
    Save {
        /// Identity statement; use - to read from stdin
        text: String,
    },
    /// Set the displayed day to account for progress before this tracker
    SetDay {
        /// Desired displayed day (0-5000)
        day: u32,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Reset the streak to Day 0, keeping the identity statement
    Reset {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Remove all local data for this tracker
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Show the current streak and identity statement
    Show {
        /// Print the raw record as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: NofapAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = open_session(TrackerKind::NoFap)?;

    match action {
        NofapAction::CheckIn { text } => {
            let text = read_text(&text)?;
            match session.check_in(&text, None) {
                Ok(reply) => match reply.outcome {
                    CheckInOutcome::FirstCheckIn => println!(
                        "Identity locked in. Day 1 of your NoFap + NoCorn streak has started."
                    ),
                    CheckInOutcome::AlreadyDone => println!(
                        "You've already checked in today. Streak stays the same, time updated."
                    ),
                    CheckInOutcome::Advanced(_) => println!(
                        "Check-in logged. You are now on Day {}.",
                        reply.record.displayed_day()
                    ),
                },
                Err(CoreError::Tracker(TrackerError::CommitmentMismatch)) => {
                    return Err("This doesn't match your saved identity statement exactly. \
                         Use 'save' if you evolved it."
                        .into());
                }
                Err(e) => return Err(e.into()),
            }
        }
        NofapAction::Save { text } => {
            let text = read_text(&text)?;
            let reply = session.save_commitment(&text, None)?;
            match reply.outcome {
                SaveOutcome::FirstSave => println!(
                    "Identity saved. Now retype it exactly and run 'check-in' to start Day 1."
                ),
                SaveOutcome::Updated => {
                    println!("Identity updated. Your streak stays the same.");
                }
            }
        }
        NofapAction::SetDay { day, yes } => {
            let (record, _) = session.status();
            if day < record.displayed_day() {
                let prompt = format!(
                    "You're lowering your displayed day from {} to {}. Continue?",
                    record.displayed_day(),
                    day
                );
                if !confirm(&prompt, yes)? {
                    return Ok(());
                }
            }
            let reply = session.set_starting_day(day)?;
            println!(
                "Streak updated. Now displaying Day {}.",
                reply.record.displayed_day()
            );
        }
        NofapAction::Reset { yes } => {
            let prompt = "Are you sure you want to reset your streak? This will set you back \
                 to Day 0, but will keep your identity statement.";
            if !confirm(prompt, yes)? {
                return Ok(());
            }
            session.reset_streak()?;
            println!("Streak reset to Day 0. Your identity statement is still saved.");
        }
        NofapAction::Clear { yes } => {
            let prompt = "Clear ALL local data for this module? This removes identity + streak \
                 from this device.";
            if !confirm(prompt, yes)? {
                return Ok(());
            }
            session.clear()?;
            println!("Local data cleared for this module.");
        }
        NofapAction::Show { json } => {
            let (record, _) = session.status();
            if json {
                print_status_json(&record)?;
            } else {
                print_status(
                    &record,
                    "No identity saved yet. Your first check-in will lock it in.",
                    false,
                );
            }
        }
    }
    Ok(())
}
