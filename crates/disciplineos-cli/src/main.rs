use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "disciplineos", version, about = "DisciplineOS trackers")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// NoFap + NoCorn streak tracker
    Nofap {
        #[command(subcommand)]
        action: commands::nofap::NofapAction,
    },
    /// Monk Mode script tracker
    Monk {
        #[command(subcommand)]
        action: commands::monk::MonkAction,
    },
    /// Healthy Social Media tracker
    Nosocial {
        #[command(subcommand)]
        action: commands::nosocial::NosocialAction,
    },
    /// Last Log pad
    Lastlog {
        #[command(subcommand)]
        action: commands::lastlog::LastlogAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Nofap { action } => commands::nofap::run(action),
        Commands::Monk { action } => commands::monk::run(action),
        Commands::Nosocial { action } => commands::nosocial::run(action),
        Commands::Lastlog { action } => commands::lastlog::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_a_check_in() {
        let cli = Cli::parse_from(["disciplineos", "nofap", "check-in", "I am disciplined."]);
        assert!(matches!(
            cli.command,
            Commands::Nofap {
                action: commands::nofap::NofapAction::CheckIn { .. }
            }
        ));
    }

    #[test]
    fn parses_set_day_with_skip_confirmation() {
        let cli = Cli::parse_from(["disciplineos", "nofap", "set-day", "120", "--yes"]);
        match cli.command {
            Commands::Nofap {
                action: commands::nofap::NofapAction::SetDay { day, yes },
            } => {
                assert_eq!(day, 120);
                assert!(yes);
            }
            _ => panic!("expected nofap set-day"),
        }
    }
}
