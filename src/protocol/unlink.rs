use super::{NodeId, NodeKind, Request};
use crate::wire;

/// Parameters of the remote `unlink` operation. Status-only; the response
/// body is unused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unlink {
    pub parent_inode: NodeId,
    /// Transport-encoded entry name.
    pub name: String,
    pub kind: NodeKind,
}

impl Unlink {
    pub fn new(parent_inode: NodeId, raw_name: &[u8], kind: NodeKind) -> Self {
        Self {
            parent_inode,
            name: wire::encode(raw_name),
            kind,
        }
    }
}

impl From<Unlink> for Request {
    fn from(unlink: Unlink) -> Self {
        Self {
            operation: "unlink",
            params: vec![
                ("parent_inode", unlink.parent_inode.to_string()),
                ("name", unlink.name),
                ("delete_type", unlink.kind.tag().to_owned()),
            ],
        }
    }
}
