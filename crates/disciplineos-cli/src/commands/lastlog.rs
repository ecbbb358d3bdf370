//! Last Log pad commands.

use chrono::Utc;
use clap::Subcommand;
use disciplineos_core::lastlog::{self, LogPad};
use disciplineos_core::{display, FileStore};

use super::common::{confirm, read_text};

#[derive(Subcommand)]
pub enum LastlogAction {
    /// Save the log text, replacing the previous entry
    Save {
        /// Log text; use - to read from stdin
        text: String,
    },
    /// Show the saved log and when it was last saved
    Show,
    /// Print the checklist template, appended to any existing log text
    Template,
    /// Remove the saved log
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

pub fn run(action: LastlogAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = FileStore::open()?;

    match action {
        LastlogAction::Save { text } => {
            let text = read_text(&text)?;
            LogPad::save(&mut store, &text, Utc::now())?;
            if text.trim().is_empty() {
                println!("Saved (empty).");
            } else {
                println!("Saved.");
            }
        }
        LastlogAction::Show => {
            let pad = LogPad::load(&store);
            if pad.is_empty() {
                println!("No log saved yet.");
            } else {
                println!("{}", pad.text);
            }
            println!("{}", display::last_saved_label(&pad));
        }
        LastlogAction::Template => {
            let pad = LogPad::load(&store);
            println!("{}", lastlog::with_template(&pad.text));
        }
        LastlogAction::Clear { yes } => {
            if !confirm("Clear the saved log from this device?", yes)? {
                return Ok(());
            }
            LogPad::clear(&mut store)?;
            println!("Cleared.");
        }
    }
    Ok(())
}
