mod file;
mod readdir;
mod resolver;
#[cfg(test)]
mod testutil;

pub use readdir::DirPage;

use std::sync::Arc;

use crate::{
    error::NetFsResult,
    protocol::{NodeDescriptor, NodeId, NodeKind, ROOT_NODE_ID},
    remote::RemoteClient,
};
use file::DataPort;
use readdir::Enumerator;
use resolver::Resolver;

/// Stateless filesystem driver over a remote directory service. Every
/// operation performs one or two remote calls and returns; nothing is cached
/// locally, so the remote side stays the single source of truth. The value is
/// the explicit service object handed to the host's mount hook; it owns
/// nothing but the shared transport.
pub struct NetworkFs<C: RemoteClient> {
    resolver: Resolver<C>,
    dirs: Enumerator<C>,
    data: DataPort<C>,
}

fn observed<T>(operation: &str, result: NetFsResult<T>) -> NetFsResult<T> {
    if let Err(error) = &result {
        warn!("{operation}: {error}");
    }
    result
}

impl<C: RemoteClient> NetworkFs<C> {
    pub fn new(client: C) -> Self {
        let client = Arc::new(client);
        Self {
            resolver: Resolver::new(client.clone()),
            dirs: Enumerator::new(client.clone()),
            data: DataPort::new(client),
        }
    }

    /// Identifier of the filesystem root. Fixed by the protocol; the root's
    /// `..` is the root itself.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        ROOT_NODE_ID
    }

    /// Resolves a name under a directory to a fresh node descriptor.
    pub async fn lookup(&self, parent: NodeId, name: &[u8]) -> NetFsResult<NodeDescriptor> {
        debug!("lookup parent={parent} name={:?}", String::from_utf8_lossy(name));
        observed("lookup", self.resolver.lookup(parent, name).await)
    }

    /// Creates an empty regular file under the given directory.
    pub async fn create_file(&self, parent: NodeId, name: &[u8]) -> NetFsResult<NodeDescriptor> {
        self.create(parent, name, NodeKind::File).await
    }

    /// Creates an empty directory under the given directory.
    pub async fn create_dir(&self, parent: NodeId, name: &[u8]) -> NetFsResult<NodeDescriptor> {
        self.create(parent, name, NodeKind::Directory).await
    }

    async fn create(
        &self,
        parent: NodeId,
        name: &[u8],
        kind: NodeKind,
    ) -> NetFsResult<NodeDescriptor> {
        debug!("create parent={parent} name={:?} kind={kind:?}", String::from_utf8_lossy(name));
        let id = observed("create", self.resolver.create(parent, name, kind).await)?;
        Ok(NodeDescriptor { id, kind })
    }

    /// Unlinks a regular file.
    pub async fn remove_file(&self, parent: NodeId, name: &[u8]) -> NetFsResult<()> {
        debug!("remove_file parent={parent} name={:?}", String::from_utf8_lossy(name));
        observed(
            "remove_file",
            self.resolver.remove(parent, name, NodeKind::File).await,
        )
    }

    /// Removes a directory. The remote side decides emptiness; its refusal
    /// surfaces as the not-empty-style error.
    pub async fn remove_dir(&self, parent: NodeId, name: &[u8]) -> NetFsResult<()> {
        debug!("remove_dir parent={parent} name={:?}", String::from_utf8_lossy(name));
        observed(
            "remove_dir",
            self.resolver.remove(parent, name, NodeKind::Directory).await,
        )
    }

    /// Emits directory entries from `offset` onward. `parent` supplies the
    /// identifier behind the synthetic `..` entry; pass the directory's own
    /// id when enumerating the root. Offsets within one traversal must be
    /// presented non-decreasing.
    pub async fn read_dir(
        &self,
        dir: NodeId,
        parent: NodeId,
        offset: u64,
    ) -> NetFsResult<DirPage> {
        debug!("read_dir dir={dir} parent={parent} offset={offset}");
        observed("read_dir", self.dirs.read_dir(dir, parent, offset).await)
    }

    /// Current content length of a file node.
    pub async fn size(&self, node: NodeId) -> NetFsResult<u64> {
        observed("size", self.data.size(node).await)
    }

    /// Reads up to `len` bytes starting at `offset`. An offset at or past the
    /// end of the file yields an empty buffer.
    pub async fn read(&self, node: NodeId, offset: u64, len: usize) -> NetFsResult<Vec<u8>> {
        debug!("read node={node} offset={offset} len={len}");
        observed("read", self.data.read(node, offset, len).await)
    }

    /// Reads the whole file content.
    pub async fn read_to_end(&self, node: NodeId) -> NetFsResult<Vec<u8>> {
        debug!("read_to_end node={node}");
        observed("read_to_end", self.data.read_to_end(node).await)
    }

    /// Replaces the file content with `content`, all or nothing. Returns the
    /// number of raw bytes accepted.
    pub async fn write(&self, node: NodeId, content: &[u8]) -> NetFsResult<usize> {
        debug!("write node={node} len={}", content.len());
        observed("write", self.data.write(node, content).await)
    }
}
