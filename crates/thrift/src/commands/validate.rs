use crate::annotations;
use crate::file_reader;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use rayon::prelude::IntoParallelRefIterator;
use rayon::prelude::ParallelIterator;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct ValidateCmd {
    #[arg(
        default_values_t=["thrift".to_string()],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    thrift_file_exts: Vec<String>,

    #[arg(
        help="Parse files as-is instead of first stripping \
             `(js.type = \"Long\")` annotations.",
        long,
    )]
    keep_annotations: bool,

    #[arg(
        help="Paths to one or more Thrift files or directories containing \
             Thrift files which need to be validated.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

/// The files found under the input paths, plus anything that went wrong
/// while looking.
#[derive(Debug, Default)]
struct FileScan {
    file_paths: Vec<PathBuf>,
    num_skipped_files: usize,
    errors: Vec<anyhow::Error>,
}

impl ValidateCmd {
    pub(crate) fn validate(&self) -> CommandResult {
        let FileScan {
            file_paths,
            num_skipped_files,
            mut errors,
        } = self.scan_file_paths();

        log::debug!(
            "Found {} Thrift files to be validated.",
            file_paths.len(),
        );

        let outcomes: Vec<anyhow::Result<usize>> = file_paths
            .par_iter()
            .map(|path| validate_file(path, self.keep_annotations))
            .collect();

        let mut num_declarations = 0;
        let mut num_failed_files = 0;
        for outcome in outcomes {
            match outcome {
                Ok(count) => num_declarations += count,
                Err(err) => {
                    num_failed_files += 1;
                    errors.push(err);
                },
            }
        }

        if !errors.is_empty() {
            let details = errors
                .iter()
                .map(|err| format!("{err:#}"))
                .collect::<Vec<_>>()
                .join("\n\n");
            return CommandResult::failure(format_args!(
                "{} {num_failed_files} of {} Thrift files failed validation \
                ({} errors):\n\n{details}",
                output_utils::RED_X,
                file_paths.len(),
                errors.len(),
            ));
        }

        CommandResult::success(format_args!(
            concat!(
                "{} All Thrift validated successfully:\n",
                "  * Analyzed {} files.\n",
                "  * Skipped {} non-thrift files.\n",
                "  * Parsed {} declarations.",
            ),
            output_utils::GREEN_CHECK,
            file_paths.len(),
            num_skipped_files,
            num_declarations,
        ))
    }

    /// Finds all Thrift files recursively located at or under each path
    /// passed as an arg.
    fn scan_file_paths(&self) -> FileScan {
        let thrift_file_exts: HashSet<&str> =
            self.thrift_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.'))
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut scan = FileScan::default();
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true) {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(err) => {
                        log::trace!(
                            "Encountered an error while iterating recursive \
                            filesystem entities at/under {path:#?}."
                        );
                        scan.errors.push(err.into());
                        continue
                    },
                };

                let entry_path = entry.path();
                if !entry.file_type().is_file() {
                    log::trace!("Skipping non-file: {entry_path:#?}.");
                    continue
                }

                let has_thrift_ext = entry_path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| thrift_file_exts.contains(ext));
                if has_thrift_ext {
                    log::trace!("Found Thrift file at {entry_path:#?}.");
                    scan.push_canonicalized(entry_path);
                } else {
                    scan.num_skipped_files += 1;
                }
            }
        }

        // If the user specifies a single file path as an argument, presume the
        // user explicitly wants that file validated as a Thrift file, even if
        // its file extension doesn't match `--thrift-file-exts`.
        if scan.file_paths.is_empty()
            && self.file_or_dir_paths.len() == 1
            && let Some(first_arg_path) = self.file_or_dir_paths.first()
            && first_arg_path.is_file() {
            log::warn!(
                "Proceeding to validate {first_arg_path:#?} even though it \
                doesn't match any of the --thrift-file-exts ({}).",
                thrift_file_exts.iter()
                    .map(|ext| format!("`.{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            scan.num_skipped_files = scan.num_skipped_files.saturating_sub(1);
            scan.push_canonicalized(first_arg_path);
        }

        scan
    }
}

impl FileScan {
    fn push_canonicalized(&mut self, path: &Path) {
        match std::fs::canonicalize(path) {
            Ok(path) => self.file_paths.push(path),
            Err(err) => self.errors.push(
                anyhow::Error::new(err)
                    .context(format!("failed to resolve {path:?}")),
            ),
        }
    }
}

/// Parses one file, returning how many declarations it holds.
fn validate_file(path: &Path, keep_annotations: bool) -> anyhow::Result<usize> {
    let source = file_reader::read_content(path)
        .with_context(|| format!("failed to load {path:?}"))?;
    let source = if keep_annotations {
        source.as_str().into()
    } else {
        annotations::strip_js_type_annotations(&source)
    };

    match libthrift_parser::parse(&source) {
        Ok(doc) => {
            log::trace!("Validated {path:#?} ({} declarations).", doc.len());
            Ok(doc.len())
        },
        Err(err) => Err(anyhow::anyhow!("{}", err.format_detailed(Some(path)))),
    }
}

#[inherent::inherent]
impl RunnableCommand for ValidateCmd {
    pub fn name(&self) -> &'static str {
        "validate"
    }

    pub async fn run(self, _cli: Cli) -> CommandResult {
        self.validate()
    }
}

#[cfg(test)]
impl ValidateCmd {
    pub(crate) fn for_test(file_or_dir_paths: Vec<PathBuf>) -> Self {
        Self {
            thrift_file_exts: vec!["thrift".to_string()],
            keep_annotations: false,
            file_or_dir_paths,
        }
    }
}
