use crate::tools::password::PasswordError;
use crate::worker::WorkerError;
use std::path::PathBuf;

/// Which side of the diff checker a loaded file goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffPane {
    Original,
    Modified,
}

/// Requests handled off the UI thread
pub enum WorkerMessage {
    LoadFile { pane: DiffPane, path: PathBuf },
    SaveFile { path: PathBuf, contents: Vec<u8> },
    HashPassword { password: String, cost: u32 },
    VerifyPassword { password: String, hash: String },
}

/// Response messages from background operations
pub enum ResponseMessage {
    FileLoaded {
        pane: DiffPane,
        path: PathBuf,
        result: Result<String, WorkerError>,
    },
    FileSaved(Result<PathBuf, WorkerError>),
    PasswordHashed(Result<String, PasswordError>),
    PasswordVerified(Result<bool, PasswordError>),
}
