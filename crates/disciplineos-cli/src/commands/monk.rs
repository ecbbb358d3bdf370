//! Monk Mode script tracker commands.

use clap::Subcommand;
use disciplineos_core::{CheckInOutcome, CoreError, SaveOutcome, TrackerError, TrackerKind};

use super::common::{confirm, open_session, print_status, print_status_json, read_text};

#[derive(Subcommand)]
pub enum MonkAction {
    /// Retype your full Monk Mode script and log today's check-in
    CheckIn {
        /// Monk Mode script; use - to read from stdin
        text: String,
    },
    /// Save or update the script without touching the streak
    Save {
        /// Monk Mode script; use - to read from stdin
        text: String,
    },
    /// Reset the streak to Day 0, keeping the script
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
    /// Show the current streak and script
    Show {
        /// Print the raw record as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: MonkAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = open_session(TrackerKind::MonkMode)?;

    match action {
        MonkAction::CheckIn { text } => {
            let text = read_text(&text)?;
            match session.check_in(&text, None) {
                Ok(reply) => match reply.outcome {
                    CheckInOutcome::FirstCheckIn => {
                        println!("Monk Mode script locked in. Day 1 has started.");
                    }
                    CheckInOutcome::AlreadyDone => println!(
                        "You already checked in today. Streak stays the same, time updated."
                    ),
                    CheckInOutcome::Advanced(day) => {
                        println!("Check-in logged. You are now on Monk Mode Day {day}.");
                    }
                },
                Err(CoreError::Tracker(TrackerError::CommitmentMismatch)) => {
                    return Err("This doesn't match your saved Monk Mode script exactly. \
                         Use 'save' if you changed it."
                        .into());
                }
                Err(e) => return Err(e.into()),
            }
        }
        MonkAction::Save { text } => {
            let text = read_text(&text)?;
            let reply = session.save_commitment(&text, None)?;
            match reply.outcome {
                SaveOutcome::FirstSave => println!(
                    "Script saved. Now retype it exactly and run 'check-in' to start Day 1."
                ),
                SaveOutcome::Updated => println!(
                    "Script updated. Your streak stays the same; the next check-in must match \
                     this script."
                ),
            }
        }
        MonkAction::Reset { yes } => {
            let prompt = "Reset your Monk Mode streak back to Day 0? This keeps your script saved.";
            if !confirm(prompt, yes)? {
                return Ok(());
            }
            session.reset_streak()?;
            println!("Monk Mode streak reset to Day 0. Script still saved. Rebuild from zero.");
        }
        MonkAction::Clear { yes } => {
            let prompt = "Clear ALL local data for this module? This removes the script + streak \
                 from this device.";
            if !confirm(prompt, yes)? {
                return Ok(());
            }
            session.clear()?;
            println!("Local data cleared for this module.");
        }
        MonkAction::Show { json } => {
            let (record, _) = session.status();
            if json {
                print_status_json(&record)?;
            } else {
                print_status(
                    &record,
                    "No Monk Mode script saved yet. Your first check-in will lock it in.",
                    false,
                );
            }
        }
    }
    Ok(())
}
