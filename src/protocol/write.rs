use super::{NodeId, Request};
use crate::wire;

/// Parameters of the remote `write` operation. Content travels in the same
/// blind transport encoding as names; status-only response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Write {
    pub inode: NodeId,
    /// Transport-encoded file content.
    pub content: String,
}

impl Write {
    pub fn new(inode: NodeId, raw_content: &[u8]) -> Self {
        Self {
            inode,
            content: wire::encode(raw_content),
        }
    }
}

impl From<Write> for Request {
    fn from(write: Write) -> Self {
        Self {
            operation: "write",
            params: vec![
                ("inode", write.inode.to_string()),
                ("content", write.content),
            ],
        }
    }
}
