use std::sync::Arc;

use crate::{
    error::{Error, NetFsResult},
    protocol::{Create, Lookup, NodeDescriptor, NodeId, NodeKind, Unlink},
    remote::RemoteClient,
    wire,
};

/// Resolves (parent, name) pairs to remote node descriptors and mints or
/// unlinks nodes. Holds no state beyond the shared transport; every
/// descriptor is rebuilt from the remote answer.
pub(crate) struct Resolver<C> {
    client: Arc<C>,
}

fn check_name(name: &[u8]) -> NetFsResult<()> {
    if name.len() > wire::MAX_NAME_LEN {
        return Err(Error::NameTooLong(name.len()));
    }

    Ok(())
}

impl<C: RemoteClient> Resolver<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    pub async fn lookup(&self, parent: NodeId, name: &[u8]) -> NetFsResult<NodeDescriptor> {
        check_name(name)?;

        let reply = self.client.call(Lookup::new(parent, name).into()).await?;
        if reply.is_failure() {
            return Err(Error::NotFound);
        }

        NodeDescriptor::try_from(reply.payload.as_ref())
    }

    pub async fn create(
        &self,
        parent: NodeId,
        name: &[u8],
        kind: NodeKind,
    ) -> NetFsResult<NodeId> {
        check_name(name)?;

        let reply = self
            .client
            .call(Create::new(parent, name, kind).into())
            .await?;
        if reply.is_failure() {
            return Err(Error::CreateFailed(reply.status));
        }

        wire::decimal(&reply.payload)
    }

    pub async fn remove(&self, parent: NodeId, name: &[u8], kind: NodeKind) -> NetFsResult<()> {
        check_name(name)?;

        let reply = self
            .client
            .call(Unlink::new(parent, name, kind).into())
            .await?;
        if reply.is_failure() {
            return Err(Error::RemoveFailed(reply.status));
        }

        Ok(())
    }
}
