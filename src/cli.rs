use crate::console::VerbosityLevel;
use clap::Parser;

/// Prints the current time as a casual spoken-English sentence and exits.
/// There are no functional flags; only diagnostic verbosity is adjustable.
#[derive(Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Increase verbosity (-v verbose, -vv debug)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode - only show errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    pub fn get_verbosity(&self) -> VerbosityLevel {
        if self.quiet {
            VerbosityLevel::Quiet
        } else {
            match self.verbose {
                0 => VerbosityLevel::Normal,
                1 => VerbosityLevel::Verbose,
                _ => VerbosityLevel::Debug,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_invocation_is_normal() {
        let cli = Cli::parse_from(["saytime"]);
        assert_eq!(cli.get_verbosity(), VerbosityLevel::Normal);
    }

    #[test]
    fn verbose_flags_stack() {
        let cli = Cli::parse_from(["saytime", "-v"]);
        assert_eq!(cli.get_verbosity(), VerbosityLevel::Verbose);

        let cli = Cli::parse_from(["saytime", "-vv"]);
        assert_eq!(cli.get_verbosity(), VerbosityLevel::Debug);
    }

    #[test]
    fn quiet_flag_silences_diagnostics() {
        let cli = Cli::parse_from(["saytime", "--quiet"]);
        assert_eq!(cli.get_verbosity(), VerbosityLevel::Quiet);
    }
}
