use crate::annotations;
use crate::file_reader;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct ToJsonCmd {
    #[arg(
        help="Print compact single-line JSON instead of pretty-printed JSON.",
        long,
    )]
    compact: bool,

    #[arg(
        help="Parse the file as-is instead of first stripping \
             `(js.type = \"Long\")` annotations.",
        long,
    )]
    keep_annotations: bool,

    #[arg(
        help="Path to the Thrift file to convert.",
        name="FILE",
    )]
    file_path: PathBuf,
}

impl ToJsonCmd {
    /// Converts already-loaded Thrift source to JSON text.
    pub(crate) fn convert(&self, source: &str) -> Result<String, String> {
        let source = if self.keep_annotations {
            source.into()
        } else {
            annotations::strip_js_type_annotations(source)
        };

        let doc = libthrift_parser::parse(&source)
            .map_err(|err| err.format_detailed(Some(self.file_path.as_path())))?;
        log::debug!(
            "Parsed {} declarations from {:?}.",
            doc.len(),
            self.file_path,
        );

        let json = if self.compact {
            serde_json::to_string(&doc)
        } else {
            serde_json::to_string_pretty(&doc)
        };
        json.map_err(|err| format!("failed to serialize AST: {err}"))
    }
}

#[inherent::inherent]
impl RunnableCommand for ToJsonCmd {
    pub fn name(&self) -> &'static str {
        "to-json"
    }

    pub async fn run(self, _cli: Cli) -> CommandResult {
        let source = match file_reader::read_content(&self.file_path) {
            Ok(source) => source,
            Err(err) => return CommandResult::failure(format_args!(
                "{} {err}",
                output_utils::RED_X,
            )),
        };

        match self.convert(&source) {
            Ok(json) => CommandResult::success(format_args!("{json}")),
            Err(message) => CommandResult::failure(format_args!(
                "{} {message}",
                output_utils::RED_X,
            )),
        }
    }
}

#[cfg(test)]
impl ToJsonCmd {
    pub(crate) fn for_test(compact: bool, keep_annotations: bool) -> Self {
        Self {
            compact,
            keep_annotations,
            file_path: PathBuf::from("test.thrift"),
        }
    }
}
