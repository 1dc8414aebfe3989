use std::sync::Arc;

use crate::{
    error::{Error, NetFsResult},
    protocol::{DirEntry, List, Listing, NodeId, NodeKind},
    remote::RemoteClient,
};

/// One batch of directory entries starting at the caller-supplied offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirPage {
    /// Entries from the offset to the end of the snapshot, in emission order.
    pub entries: Vec<DirEntry>,
    /// Total entries the directory holds as of this snapshot, `.` and `..`
    /// included, so the caller can track progression.
    pub total: u64,
}

impl DirPage {
    /// True when the offset was at or past the end: nothing left to emit.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Exposes the one-shot remote `list` through an offset-driven enumeration
/// contract. The snapshot is re-fetched on every call, so a restarted scan
/// always sees fresh data, while two snapshots of a mutating directory are
/// not guaranteed consistent with each other.
pub(crate) struct Enumerator<C> {
    client: Arc<C>,
}

impl<C: RemoteClient> Enumerator<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// Emission order is fixed: `.` (self) at offset 0, `..` (the
    /// caller-supplied parent) at offset 1, remote entries at `2..2+N` in
    /// remote order.
    pub async fn read_dir(
        &self,
        dir: NodeId,
        parent: NodeId,
        offset: u64,
    ) -> NetFsResult<DirPage> {
        let reply = self.client.call(List { inode: dir }.into()).await?;
        if reply.is_failure() {
            return Err(Error::NotFound);
        }

        let listing = Listing::try_from(reply.payload.as_ref())?;
        let total = 2 + listing.entries.len() as u64;

        let synthetic = [
            DirEntry {
                name: b".".to_vec(),
                kind: NodeKind::Directory,
                id: dir,
            },
            DirEntry {
                name: b"..".to_vec(),
                kind: NodeKind::Directory,
                id: parent,
            },
        ];

        let entries = synthetic
            .into_iter()
            .chain(listing.entries)
            .enumerate()
            .filter(|(position, _)| *position as u64 >= offset)
            .map(|(_, entry)| entry)
            .collect();

        Ok(DirPage { entries, total })
    }
}
