mod create;
mod list;
mod lookup;
mod read;
mod unlink;
mod write;

pub use self::{
    create::Create,
    list::{DirEntry, List, Listing},
    lookup::{Lookup, NodeDescriptor},
    read::{Read, ReadSize},
    unlink::Unlink,
    write::Write,
};

/// Remote-minted node identifier. Opaque to the driver apart from equality
/// and decimal transport formatting.
pub type NodeId = u64;

/// Fixed identifier of the filesystem root. The root is a directory and its
/// `..` resolves to itself.
pub const ROOT_NODE_ID: NodeId = 1000;

/// Node kind as carried by single-character type tags on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    File,
    Directory,
}

impl NodeKind {
    /// `'f'` is a file; every other tag is read as a directory.
    pub(crate) const fn from_tag(tag: u8) -> Self {
        match tag {
            b'f' => Self::File,
            _ => Self::Directory,
        }
    }

    pub(crate) const fn tag(self) -> &'static str {
        match self {
            Self::File => "f",
            Self::Directory => "d",
        }
    }
}

/// A named remote operation with its ordered string parameters, ready to be
/// handed to a [`crate::remote::RemoteClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub operation: &'static str,
    pub params: Vec<(&'static str, String)>,
}
