use super::{NodeId, NodeKind, Request};
use crate::{error::Error, wire};

/// Parameters of the remote `lookup` operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookup {
    pub inode: NodeId,
    /// Transport-encoded entry name.
    pub name: String,
}

impl Lookup {
    pub fn new(inode: NodeId, raw_name: &[u8]) -> Self {
        Self {
            inode,
            name: wire::encode(raw_name),
        }
    }
}

impl From<Lookup> for Request {
    fn from(lookup: Lookup) -> Self {
        Self {
            operation: "lookup",
            params: vec![("inode", lookup.inode.to_string()), ("name", lookup.name)],
        }
    }
}

/// Transient handle for a remote node: kind plus identifier. Reconstructed on
/// every call; never cached locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeDescriptor {
    pub id: NodeId,
    pub kind: NodeKind,
}

impl TryFrom<&[u8]> for NodeDescriptor {
    type Error = Error;

    fn try_from(payload: &[u8]) -> Result<Self, Self::Error> {
        let (tag, id) = payload
            .split_first()
            .ok_or_else(|| Error::Protocol("empty lookup response".to_owned()))?;

        Ok(Self {
            id: wire::decimal(id)?,
            kind: NodeKind::from_tag(*tag),
        })
    }
}
