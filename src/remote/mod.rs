mod http;

pub use http::HttpClient;

use bytes::Bytes;

use crate::{error::Error, protocol::Request};

/// Outcome of one remote call: transport-level status plus the raw response
/// body. The payload buffer is dynamically sized, so a response can never be
/// truncated on this side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: i32,
    pub payload: Bytes,
}

impl Reply {
    /// A negative status denotes remote-side failure; the payload is then
    /// meaningless.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        self.status < 0
    }
}

/// Transport abstraction issuing named operations with ordered string
/// parameters. Calls block the awaiting task until the remote answers; the
/// driver adds no timeout or cancellation of its own, so any deadline belongs
/// to the implementation of this trait.
#[async_trait]
pub trait RemoteClient: Send + Sync {
    async fn call(&self, request: Request) -> Result<Reply, Error>;
}
