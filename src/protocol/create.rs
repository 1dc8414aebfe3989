use super::{NodeId, NodeKind, Request};
use crate::wire;

/// Parameters of the remote `create` operation. The response body is the
/// decimal identifier minted for the new node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Create {
    pub parent_inode: NodeId,
    /// Transport-encoded entry name.
    pub name: String,
    pub kind: NodeKind,
}

impl Create {
    pub fn new(parent_inode: NodeId, raw_name: &[u8], kind: NodeKind) -> Self {
        Self {
            parent_inode,
            name: wire::encode(raw_name),
            kind,
        }
    }
}

impl From<Create> for Request {
    fn from(create: Create) -> Self {
        Self {
            operation: "create",
            params: vec![
                ("parent_inode", create.parent_inode.to_string()),
                ("name", create.name),
                ("create_type", create.kind.tag().to_owned()),
            ],
        }
    }
}
