use super::{NodeId, Request};

/// Parameters of the remote `read_size` operation; the response body is the
/// decimal content length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadSize {
    pub inode: NodeId,
}

impl From<ReadSize> for Request {
    fn from(read_size: ReadSize) -> Self {
        Self {
            operation: "read_size",
            params: vec![("inode", read_size.inode.to_string())],
        }
    }
}

/// Parameters of the remote `read` operation; the response body is the whole
/// file content, raw, of exactly the previously reported size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Read {
    pub inode: NodeId,
}

impl From<Read> for Request {
    fn from(read: Read) -> Self {
        Self {
            operation: "read",
            params: vec![("inode", read.inode.to_string())],
        }
    }
}
