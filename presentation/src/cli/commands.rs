//! CLI command definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for planning results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Ideas, slot assignment, menus and fidelity report
    Full,
    /// Only the menus
    Menus,
    /// JSON output
    Json,
}

impl From<OutputFormat> for planner_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => planner_domain::OutputFormat::Full,
            OutputFormat::Menus => planner_domain::OutputFormat::Menus,
            OutputFormat::Json => planner_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for course-planner
#[derive(Parser, Debug)]
#[command(name = "course-planner")]
#[command(author, version, about = "Plan five-course tasting menus around the host's own dishes")]
#[command(long_about = r#"
course-planner turns a host's free-form list of dishes into five tasting
menus (Classic, Deconstructed, Modernist, Global Slant, Elevated).

Each idea is placed in a course slot (Amuse-Bouche, First Course, Second
Course, Main Course, Dessert) by explicit tag ("Dessert: panna cotta"),
by keyword ("duck breast" is a main), or by position.

Configuration files are loaded from (in priority order):
1. --config <path>                          Explicit config file
2. ./course-planner.toml                    Project-level config
3. ~/.config/course-planner/config.toml     Global config

Example:
  course-planner plan "Amuse: Oyster; Salad; Soup; Steak; Chocolate tart"
  course-planner prompt --file dinner.txt
  course-planner check --menus response.json --file dinner.txt
  course-planner generate --file dinner.txt --food-cost "$80 per guest"
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format (defaults to the config file's, then "full")
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Food budget shown on every menu
    #[arg(long, value_name = "TEXT", global = true)]
    pub food_cost: Option<String>,

    /// Wine budget shown on every menu
    #[arg(long, value_name = "TEXT", global = true)]
    pub wine_cost: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build the five deterministic menus from the host's ideas
    Plan {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Print the custom-course instruction and the full generation prompt
    Prompt {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Validate a saved generator response against the host's ideas
    ///
    /// Exits with status 1 when any menu drifts from the host's courses.
    Check {
        /// File containing the generator's response
        #[arg(long, value_name = "PATH")]
        menus: PathBuf,

        #[command(flatten)]
        input: InputArgs,
    },

    /// Generate menus with the configured external command
    Generate {
        #[command(flatten)]
        input: InputArgs,

        /// Override generation.max_attempts
        #[arg(long, value_name = "N")]
        max_attempts: Option<usize>,

        /// Fail instead of falling back to deterministic menus
        #[arg(long)]
        no_fallback: bool,
    },
}

impl Command {
    /// Where the host's text comes from
    pub fn input(&self) -> &InputArgs {
        match self {
            Command::Plan { input }
            | Command::Prompt { input }
            | Command::Check { input, .. }
            | Command::Generate { input, .. } => input,
        }
    }
}

/// The host's custom-course text, inline or from a file
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Custom-course text (one dish per line, or separated by ; , | /)
    #[arg(value_name = "TEXT", conflicts_with = "file")]
    pub text: Option<String>,

    /// Read the custom-course text from a file ("-" for stdin)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_plan_with_global_flags() {
        let cli = Cli::try_parse_from([
            "course-planner",
            "plan",
            "Dessert: panna cotta; duck breast",
            "-o",
            "json",
            "--food-cost",
            "$20",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.food_cost.as_deref(), Some("$20"));
        assert_eq!(cli.verbose, 2);
        let command = cli.command.unwrap();
        assert!(matches!(command, Command::Plan { .. }));
        assert_eq!(
            command.input().text.as_deref(),
            Some("Dessert: panna cotta; duck breast")
        );
    }

    #[test]
    fn test_parse_check_requires_menus() {
        assert!(Cli::try_parse_from(["course-planner", "check", "soup"]).is_err());

        let cli = Cli::try_parse_from([
            "course-planner",
            "check",
            "--menus",
            "out.json",
            "--file",
            "dinner.txt",
        ])
        .unwrap();
        match cli.command.unwrap() {
            Command::Check { menus, input } => {
                assert_eq!(menus, PathBuf::from("out.json"));
                assert_eq!(input.file, Some(PathBuf::from("dinner.txt")));
                assert!(input.text.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_text_and_file_conflict() {
        let result =
            Cli::try_parse_from(["course-planner", "plan", "soup", "--file", "dinner.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_generate_overrides() {
        let cli = Cli::try_parse_from([
            "course-planner",
            "generate",
            "--max-attempts",
            "4",
            "--no-fallback",
        ])
        .unwrap();
        match cli.command.unwrap() {
            Command::Generate {
                max_attempts,
                no_fallback,
                ..
            } => {
                assert_eq!(max_attempts, Some(4));
                assert!(no_fallback);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_output_format_converts_to_domain() {
        let domain: planner_domain::OutputFormat = OutputFormat::Menus.into();
        assert_eq!(domain, planner_domain::OutputFormat::Menus);
    }
}
