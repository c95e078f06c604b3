use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use clap::builder::PossibleValuesParser;
use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "csv-reports")]
#[command(about = "Generate console reports from one or more CSV files")]
pub struct CliConfig {
    #[arg(
        long,
        value_name = "PATH",
        num_args = 1..,
        required = true,
        help = "One or more CSV files to read"
    )]
    pub files: Vec<PathBuf>,

    #[arg(long, value_name = "NAME", help = "Report to generate")]
    pub report: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// The clap command, with `--report` restricted to `choices` when any exist.
    pub fn command_with_choices(choices: &[String]) -> clap::Command {
        let command = Self::command();
        if choices.is_empty() {
            return command;
        }

        let choices = choices.to_vec();
        command.mut_arg("report", |arg| {
            arg.value_parser(PossibleValuesParser::new(choices))
        })
    }

    /// Parses the process arguments; exits with status 2 on usage errors.
    pub fn parse_with_choices(choices: &[String]) -> Self {
        let matches = Self::command_with_choices(choices).get_matches();
        Self::from_matches(&matches)
    }

    pub fn try_parse_from_with_choices<I, T>(
        choices: &[String],
        args: I,
    ) -> clap::error::Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let matches = Self::command_with_choices(choices).try_get_matches_from(args)?;
        Self::from_arg_matches(&matches)
    }

    fn from_matches(matches: &ArgMatches) -> Self {
        Self::from_arg_matches(matches).unwrap_or_else(|e| e.exit())
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("report", &self.report)?;
        for path in &self.files {
            validate_path("files", path)?;
        }
        Ok(())
    }
}
