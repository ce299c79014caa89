use std::error::Error;
use std::fmt;
use std::fmt::Formatter;
use std::io;
use std::path::PathBuf;

#[derive(Debug, PartialEq)]
pub enum StoreError {
    /// The index passed to an edit or delete is not below the current size.
    OutOfRange { index: usize, size: usize },
}

#[derive(Debug)]
pub enum PersistenceError {
    /// The ledger file could not be opened for reading or writing.
    Open { path: PathBuf, source: io::Error },
    Read(io::Error),
    Write(csv::Error),
}

#[derive(Debug)]
pub enum ShellError {
    Io(io::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::OutOfRange { index, size } => write!(
                f,
                "entry index {} is out of range, the ledger holds {} entries",
                index, size
            ),
        }
    }
}

impl fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PersistenceError::Open { path, source } => {
                write!(f, "failed to open {}: {}", path.display(), source)
            }
            PersistenceError::Read(err) => write!(f, "failed to read ledger file: {}", err),
            PersistenceError::Write(err) => write!(f, "failed to write ledger record: {}", err),
        }
    }
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ShellError::Io(err) => write!(f, "console i/o failed: {}", err),
        }
    }
}

impl From<csv::Error> for PersistenceError {
    fn from(err: csv::Error) -> Self {
        PersistenceError::Write(err)
    }
}

impl From<io::Error> for ShellError {
    fn from(err: io::Error) -> Self {
        ShellError::Io(err)
    }
}

impl Error for StoreError {}

impl Error for PersistenceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PersistenceError::Open { source, .. } => Some(source),
            PersistenceError::Read(err) => Some(err),
            PersistenceError::Write(err) => Some(err),
        }
    }
}

impl Error for ShellError {}
