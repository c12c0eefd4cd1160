use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, ReadContentError>;

/// Reads a file into a `String`, distinguishing "not a file", I/O failures,
/// and non-UTF-8 content.
pub(crate) fn read_content<P: AsRef<Path>>(file_path: P) -> Result<String> {
    let file_path = file_path.as_ref();
    if !file_path.is_file() {
        return Err(ReadContentError::PathIsNotAFile(file_path.to_path_buf()));
    }

    let bytes = std::fs::read(file_path)
        .map_err(|err| ReadContentError::FileReadError {
            file_path: file_path.to_path_buf(),
            err,
        })?;

    String::from_utf8(bytes)
        .map_err(|err| ReadContentError::FileDecodeError {
            file_path: file_path.to_path_buf(),
            err,
        })
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum ReadContentError {
    #[error("{file_path:?} is not valid UTF-8: {err}")]
    FileDecodeError {
        file_path: PathBuf,
        #[source]
        err: std::string::FromUtf8Error,
    },

    #[error("failed to read {file_path:?}: {err}")]
    FileReadError {
        file_path: PathBuf,
        #[source]
        err: std::io::Error,
    },

    #[error("{0:?} is not a file")]
    PathIsNotAFile(PathBuf),
}
impl std::cmp::PartialEq for ReadContentError {
    fn eq(&self, other: &Self) -> bool {
        use ReadContentError::*;
        match (self, other) {
            (
                FileDecodeError { file_path: a_path, err: a_err },
                FileDecodeError { file_path: b_path, err: b_err },
            ) => a_path == b_path && a_err == b_err,

            // io::Error has no PartialEq; its kind is close enough.
            (
                FileReadError { file_path: a_path, err: a_err },
                FileReadError { file_path: b_path, err: b_err },
            ) => a_path == b_path && a_err.kind() == b_err.kind(),

            (PathIsNotAFile(a_path), PathIsNotAFile(b_path)) => a_path == b_path,

            _ => false,
        }
    }
}
