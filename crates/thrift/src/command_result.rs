use std::process::ExitCode;

/// What a command prints and how the process exits.
#[derive(Debug)]
pub(crate) struct CommandResult {
    pub succeeded: bool,
    pub stderr: Option<String>,
    pub stdout: Option<String>,
}

impl CommandResult {
    pub fn failure(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            succeeded: false,
            stderr: Some(format!("{fmt_args}")),
            stdout: None,
        }
    }

    pub fn success(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            succeeded: true,
            stderr: None,
            stdout: Some(format!("{fmt_args}")),
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        if self.succeeded {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}
