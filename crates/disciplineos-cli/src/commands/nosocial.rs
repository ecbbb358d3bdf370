//! Healthy Social Media tracker commands.

use clap::Subcommand;
use disciplineos_core::{CheckInOutcome, CoreError, TrackerError, TrackerKind};

use super::common::{confirm, open_session, print_status, print_status_json, read_text};

#[derive(Subcommand)]
pub enum NosocialAction {
    /// Retype your identity statement and log today's check-in
    CheckIn {
        /// Identity statement; use - to read from stdin
        text: String,
        /// Allow-listed creator or site; repeat for several
        #[arg(long = "allow")]
        allow: Vec<String>,
    },
    /// Save identity statement and allow-listed creators
    Save {
        /// Identity statement; use - to read from stdin
        text: String,
        /// Allow-listed creator or site; repeat for several
        #[arg(long = "allow")]
        allow: Vec<String>,
    },
    /// Mark today as a slip and reset the streak to Day 0
    Slip {
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
    /// Show the current streak, identity, and creators
    Show {
        /// Print the raw record as JSON
        #[arg(long)]
        json: bool,
    },
}

fn allow_arg(allow: &[String]) -> Option<String> {
    if allow.is_empty() {
        None
    } else {
        Some(allow.join("\n"))
    }
}

pub fn run(action: NosocialAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = open_session(TrackerKind::NoSocial)?;

    match action {
        NosocialAction::CheckIn { text, allow } => {
            let text = read_text(&text)?;
            match session.check_in(&text, allow_arg(&allow).as_deref()) {
                Ok(reply) => match reply.outcome {
                    CheckInOutcome::FirstCheckIn => {
                        println!("Identity locked in. Day 1 started.");
                    }
                    CheckInOutcome::AlreadyDone => println!(
                        "You already checked in today. Streak stays the same, time updated."
                    ),
                    CheckInOutcome::Advanced(day) => {
                        println!("Check-in logged. Day {day}.");
                    }
                },
                Err(CoreError::Tracker(TrackerError::CommitmentMismatch)) => {
                    return Err(
                        "Identity does not match exactly. Use 'save' to update it.".into()
                    );
                }
                Err(e) => return Err(e.into()),
            }
        }
        NosocialAction::Save { text, allow } => {
            let text = read_text(&text)?;
            session.save_commitment(&text, allow_arg(&allow).as_deref())?;
            println!("Identity + creators saved.");
        }
        NosocialAction::Slip { yes } => {
            if !confirm("Mark today as a slip and reset your streak?", yes)? {
                return Ok(());
            }
            session.reset_streak()?;
            println!("Slip recorded. Back to Day 0.");
        }
        NosocialAction::Clear { yes } => {
            let prompt = "Clear ALL local data for this module? This removes identity + creators \
                 + streak from this device.";
            if !confirm(prompt, yes)? {
                return Ok(());
            }
            session.clear()?;
            println!("Local data cleared for this module.");
        }
        NosocialAction::Show { json } => {
            let (record, _) = session.status();
            if json {
                print_status_json(&record)?;
            } else {
                print_status(
                    &record,
                    "No identity saved yet. Your first check-in will lock it in.",
                    true,
                );
            }
        }
    }
    Ok(())
}
