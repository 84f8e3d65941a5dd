use thiserror::Error;

/// Failures that stop a run before a result can be given.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("candidate id {0} is listed more than once")]
    DuplicateCandidate(String),
    #[error("region {0} is listed more than once")]
    DuplicateRegion(String),
    #[error("recorded votes disagree with the receipts handed out")]
    AuditMismatch,
}

impl Error {
    /// The process exit code matching this error.
    pub fn exit_code(&self) -> exitcode::ExitCode {
        match self {
            Error::Csv(error) => match error.kind() {
                csv::ErrorKind::Io(_) => exitcode::NOINPUT,
                _ => exitcode::DATAERR,
            },
            Error::DuplicateCandidate(_) | Error::DuplicateRegion(_) => exitcode::DATAERR,
            Error::AuditMismatch => exitcode::SOFTWARE,
        }
    }
}
