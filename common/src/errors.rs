use camino::Utf8PathBuf;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UnifyError {
    #[error("failed to scan {path}: {source}")]
    Scan {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not work out the per-user data directory")]
    NoSettingsRoot,

    #[error("select a source and at least one destination")]
    IncompleteSelection,

    #[error("no files to copy")]
    NoFilesSelected,

    #[error("no {file} in source: {dir}")]
    MissingSourceFile { file: String, dir: Utf8PathBuf },

    #[error("failed to copy {file} to {dest} after {completed} character(s): {source}")]
    Copy {
        file: String,
        dest: Utf8PathBuf,
        completed: usize,
        #[source]
        source: io::Error,
    },

    #[error("failed to create backup {path}: {source}")]
    Backup {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to stamp backup name: {0}")]
    Timestamp(#[from] time::error::Format),

    #[error("failed to measure {path}: {source}")]
    Size {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type UnifyResult<T> = Result<T, UnifyError>;
