mod to_json;
mod validate;

use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
pub(crate) use to_json::ToJsonCmd;
pub(crate) use validate::ValidateCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "thrift")]
pub(crate) enum CommandEnum {
    /// Parse one Thrift file and print its AST as JSON.
    ToJson(Box<ToJsonCmd>),

    /// Parse every Thrift file at or under the given paths and report any
    /// that fail.
    Validate(Box<ValidateCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::ToJson(cmd) => run_logged(*cmd, cli).await,
            Self::Validate(cmd) => run_logged(*cmd, cli).await,
        }
    }
}

async fn run_logged<C: RunnableCommand>(cmd: C, cli: Cli) -> CommandResult {
    log::debug!("Running `{}` with {cmd:?}.", cmd.name());
    let result = cmd.run(cli).await;
    log::debug!("Command finished (success: {}).", result.succeeded);
    result
}
