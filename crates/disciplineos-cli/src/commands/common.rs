//! Shared helpers for the tracker subcommands.

use std::io::{BufRead, Read, Write};

use disciplineos_core::{display, Config, StreakRecord, TrackerKind, TrackerSession};

/// Open a session over the default store with the saved configuration.
pub fn open_session(kind: TrackerKind) -> Result<TrackerSession, Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    Ok(TrackerSession::open(kind, &config)?)
}

/// Resolve a TEXT argument: `-` reads the whole of stdin, anything else is
/// taken verbatim. Lets multi-line scripts be piped in.
pub fn read_text(arg: &str) -> Result<String, Box<dyn std::error::Error>> {
    if arg == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        Ok(arg.to_string())
    }
}

/// Ask a yes/no question on stdin unless `--yes` was passed. Anything other
/// than `y`/`yes` declines.
pub fn confirm(prompt: &str, yes: bool) -> Result<bool, Box<dyn std::error::Error>> {
    if yes {
        return Ok(true);
    }
    print!("{prompt} [y/N] ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    let answer = line.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}

/// Print the status block for a record.
pub fn print_status(record: &StreakRecord, placeholder: &str, show_allow_list: bool) {
    let config = Config::load_or_default();

    println!("{}", display::day_label(record));
    if record.has_commitment() {
        println!("{}", record.commitment_text);
    } else {
        println!("{placeholder}");
    }
    if show_allow_list {
        if record.allow_list.is_empty() {
            println!("No content creators listed yet.");
        } else {
            for entry in &record.allow_list {
                println!("  {entry}");
            }
        }
    }
    println!(
        "{}",
        display::last_check_in_label(record, config.display.use_24h_time)
    );
}

/// Print the record as pretty JSON.
pub fn print_status_json(record: &StreakRecord) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(record)?);
    Ok(())
}
