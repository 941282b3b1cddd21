//! CLI command definitions

use crate::application::GenerateOptions;
use clap::{ArgAction, Parser};
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "chapters")]
#[command(
    about = "Append YouTube chapter lists built from markdown headings",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Markdown files to process (default: every *.md file in the directory)
    #[arg(value_name = "PATHS")]
    pub paths: Vec<PathBuf>,

    /// Directory to scan and resolve paths against
    #[arg(short = 'C', long, default_value = ".")]
    pub dir: PathBuf,

    /// Also process markdown files in subdirectories
    #[arg(short, long)]
    pub recursive: bool,

    /// Show the chapters that would be appended without writing
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only report failures
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// Run options for the generate chapters service
    pub fn options(&self) -> GenerateOptions {
        GenerateOptions {
            paths: self.paths.clone(),
            recursive: self.recursive,
            dry_run: self.dry_run,
        }
    }

    /// Log level selected by -v/-q
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["chapters"]).unwrap();
        assert!(cli.paths.is_empty());
        assert_eq!(cli.dir, PathBuf::from("."));
        assert!(!cli.dry_run);
        assert_eq!(cli.log_level(), LevelFilter::Warn);
    }

    #[test]
    fn test_options_from_flags() {
        let cli =
            Cli::try_parse_from(["chapters", "-r", "--dry-run", "one.md", "two.md"]).unwrap();
        let options = cli.options();
        assert!(options.recursive);
        assert!(options.dry_run);
        assert_eq!(
            options.paths,
            vec![PathBuf::from("one.md"), PathBuf::from("two.md")]
        );
    }

    #[test]
    fn test_verbosity_levels() {
        let cli = Cli::try_parse_from(["chapters", "-vv"]).unwrap();
        assert_eq!(cli.log_level(), LevelFilter::Debug);

        let cli = Cli::try_parse_from(["chapters", "--quiet"]).unwrap();
        assert_eq!(cli.log_level(), LevelFilter::Error);
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["chapters", "-q", "-v"]).is_err());
    }
}
