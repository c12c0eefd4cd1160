use clap::CommandFactory;
use crate::commands;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

#[derive(clap::Parser, Debug)]
#[command(
    name = "thrift",
    version,
    about = "Utilities for parsing and checking Thrift IDL files.",
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        help="Enable verbose output. Overrides the `LOG_LEVEL` environment \
             variable.",
        long,
        short='v',
    )]
    pub verbose: bool,
}
impl Cli {
    pub(crate) async fn run_default(self) -> anyhow::Result<()> {
        Self::command().print_help()?;
        Ok(())
    }

    /// Picks the logging level from `--verbose`, then from the value of the
    /// `LOG_LEVEL` environment variable (if set).
    ///
    /// Returns a warning to log once logging is up if `log_level_env` holds
    /// an unrecognized value.
    pub(crate) fn log_level(
        &self,
        log_level_env: Option<&str>,
    ) -> (tracing::Level, Option<String>) {
        if self.verbose {
            return (tracing::Level::DEBUG, None);
        }

        match log_level_env.map(str::trim) {
            Some("TRACE" | "trace") => (tracing::Level::TRACE, None),
            Some("DEBUG" | "debug" | "VERBOSE" | "verbose") => {
                (tracing::Level::DEBUG, None)
            },
            Some("INFO" | "info") => (tracing::Level::INFO, None),
            Some("WARN" | "warn") => (tracing::Level::WARN, None),
            Some("ERROR" | "error") => (tracing::Level::ERROR, None),
            Some(other) => (
                DEFAULT_LOG_LEVEL,
                Some(format!(
                    "Invalid `LOG_LEVEL` environment variable value: \
                    `{other}`"
                )),
            ),
            None => (DEFAULT_LOG_LEVEL, None),
        }
    }
}
