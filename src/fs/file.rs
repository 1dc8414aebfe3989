use std::sync::Arc;

use crate::{
    error::{Error, NetFsResult},
    protocol::{NodeId, Read, ReadSize, Write},
    remote::RemoteClient,
};

/// Whole-buffer read and write against a node's content. The remote protocol
/// has no range pushdown; caller-visible offsets are honored by slicing the
/// one-shot transfer locally.
pub(crate) struct DataPort<C> {
    client: Arc<C>,
}

impl<C: RemoteClient> DataPort<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    pub async fn size(&self, node: NodeId) -> NetFsResult<u64> {
        let reply = self.client.call(ReadSize { inode: node }.into()).await?;
        if reply.is_failure() {
            return Err(Error::ReadFailed(reply.status));
        }

        crate::wire::decimal(&reply.payload)
    }

    /// Fetches the reported size, then the full content in one `read` call.
    pub async fn read_to_end(&self, node: NodeId) -> NetFsResult<Vec<u8>> {
        let size = usize::try_from(self.size(node).await?)
            .map_err(|_| Error::Protocol("file size exceeds address space".to_owned()))?;

        let reply = self.client.call(Read { inode: node }.into()).await?;
        if reply.is_failure() {
            return Err(Error::ReadFailed(reply.status));
        }

        // The body must hold at least the promised size; anything extra is
        // dropped, anything missing is a broken response.
        if reply.payload.len() < size {
            return Err(Error::Protocol(format!(
                "short read: promised {size} bytes, received {}",
                reply.payload.len()
            )));
        }

        Ok(reply.payload[..size].to_vec())
    }

    /// Range read over the one-shot transfer: an offset at or past the end
    /// yields an empty buffer, a length past the end is clamped.
    pub async fn read(&self, node: NodeId, offset: u64, len: usize) -> NetFsResult<Vec<u8>> {
        let content = self.read_to_end(node).await?;

        let Ok(start) = usize::try_from(offset) else {
            return Ok(Vec::new());
        };
        if start >= content.len() {
            return Ok(Vec::new());
        }

        let end = start.saturating_add(len).min(content.len());
        Ok(content[start..end].to_vec())
    }

    /// All-or-nothing write. Reports the raw byte count on success, never the
    /// encoded transport length.
    pub async fn write(&self, node: NodeId, content: &[u8]) -> NetFsResult<usize> {
        let reply = self.client.call(Write::new(node, content).into()).await?;
        if reply.is_failure() {
            return Err(Error::WriteFailed(reply.status));
        }

        Ok(content.len())
    }
}
