use thiserror::Error;

pub type NetFsResult<T> = Result<T, Error>;

/// Enum for driver errors. Remote-call failures are mapped at the component
/// boundary and never retried locally.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// The remote side rejected a lookup
    #[error("No such file or directory")]
    NotFound,
    /// The remote side rejected a create
    #[error("Create rejected by remote (status {0})")]
    CreateFailed(i32),
    /// The remote side rejected an unlink. Surfaced uniformly as the
    /// not-empty-style failure the host framework distinguishes
    #[error("Remove rejected by remote (status {0})")]
    RemoveFailed(i32),
    /// The remote side rejected a read or size query
    #[error("Read rejected by remote (status {0})")]
    ReadFailed(i32),
    /// The remote side rejected a write
    #[error("Write rejected by remote (status {0})")]
    WriteFailed(i32),
    /// Entry name exceeds the transport limit
    #[error("Name of {0} bytes exceeds the transport limit")]
    NameTooLong(usize),
    /// Malformed remote response: missing separator, non-numeric identifier,
    /// truncated listing
    #[error("Protocol: {0}")]
    Protocol(String),
    /// Any errors raised below the call boundary by the transport itself
    #[error("Transport: {0}")]
    Transport(String),
}
